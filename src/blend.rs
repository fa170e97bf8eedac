//! Channel arithmetic over colors.
//!
//! Darkening, alpha blending over a background, luminance based highlight
//! colors and percentage shading. Every function clamps its inputs at use.

use log::debug;

use crate::colors::{hex_string, parse_color_string, HsvColor, RgbColor};

/// Luminance threshold applied when supplied highlight options are invalid
pub const DEFAULT_LUMINANCE_THRESHOLD: f64 = 0.8;
/// Value delta applied when supplied highlight options are invalid
pub const DEFAULT_HIGHLIGHT_DELTA: f64 = 0.2;

/// Rounds halves toward positive infinity, so `-42.5` becomes `-42`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Subtracts `floor(diff)` from every channel, stopping at 0.
/// Alpha is dropped.
pub fn darken(color: &RgbColor, diff: f64) -> RgbColor {
    let floored = diff.floor() as i32;
    RgbColor::rgb(
        color.r.saturating_sub(floored).max(0),
        color.g.saturating_sub(floored).max(0),
        color.b.saturating_sub(floored).max(0),
    )
}

/// Blends a single channel of a foreground over a background.
///
/// `opacity` is clamped to `[0, 1]` and both channels to `[0, 255]`.
pub fn channel_blend(fore_channel: f64, opacity: f64, back_channel: f64) -> i32 {
    let opacity = opacity.clamp(0.0, 1.0);
    let fore_channel = fore_channel.clamp(0.0, 255.0);
    let back_channel = back_channel.clamp(0.0, 255.0);

    round_half_up(opacity * fore_channel + (1.0 - opacity) * back_channel) as i32
}

/// Overlays `fore` with the given opacity on top of `back`.
/// Any alpha channel is ignored and absent from the result.
pub fn rgb_blend(fore: &RgbColor, opacity: f64, back: &RgbColor) -> RgbColor {
    let opacity = opacity.clamp(0.0, 1.0);

    RgbColor::rgb(
        channel_blend(f64::from(fore.r), opacity, f64::from(back.r)),
        channel_blend(f64::from(fore.g), opacity, f64::from(back.g)),
        channel_blend(f64::from(fore.b), opacity, f64::from(back.b)),
    )
}

/// String form of [`rgb_blend`]; `None` when either color fails to parse.
pub fn hex_blend(fore: &str, opacity: f64, back: &str) -> Option<String> {
    let fore = parse_color_string(fore)?;
    let back = parse_color_string(back)?;
    Some(hex_string(&rgb_blend(&fore, opacity, &back)))
}

/// Parameters for [`calculate_highlight_color_with`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightOptions {
    /// Colors darker than this value are brightened, others darkened
    pub luminance_threshold: f64,
    /// Amount added to or removed from the HSV value
    pub delta: f64,
}

impl HighlightOptions {
    pub const fn new(luminance_threshold: f64, delta: f64) -> Self {
        Self {
            luminance_threshold,
            delta,
        }
    }

    /// Both positive and summing to at most 1
    pub fn is_valid(&self) -> bool {
        self.luminance_threshold > 0.0
            && self.delta > 0.0
            && self.luminance_threshold + self.delta <= 1.0
    }

    /// Returns these options, or the defaults when they are invalid
    pub fn or_default(self) -> Self {
        if self.is_valid() {
            self
        } else {
            debug!(
                "highlight options {:?} are invalid, using threshold {} and delta {}",
                self, DEFAULT_LUMINANCE_THRESHOLD, DEFAULT_HIGHLIGHT_DELTA
            );
            Self::default()
        }
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LUMINANCE_THRESHOLD, DEFAULT_HIGHLIGHT_DELTA)
    }
}

/// Computes a highlight for `color`: brighter when its HSV value is under
/// `luminance_threshold`, darker otherwise. Invalid parameters fall back to
/// a threshold of 0.8 and a delta of 0.2.
pub fn calculate_highlight_color(color: &RgbColor, luminance_threshold: f64, delta: f64) -> String {
    calculate_highlight_color_with(color, HighlightOptions::new(luminance_threshold, delta))
}

/// [`calculate_highlight_color`] taking a [`HighlightOptions`]
pub fn calculate_highlight_color_with(color: &RgbColor, options: HighlightOptions) -> String {
    let HighlightOptions {
        luminance_threshold,
        delta,
    } = options.or_default();

    let mut hsv = HsvColor::from_rgb(color);
    let v = if hsv.v < luminance_threshold {
        hsv.v + delta
    } else {
        hsv.v - delta
    };
    hsv.v = v.clamp(0.0, 1.0);

    hex_string(&hsv.to_rgb())
}

/// Moves every channel `percent` of the way toward white, or toward black
/// when `percent` is negative. Output is lowercase `#rrggbb`.
pub fn shade_color(color: &str, percent: f64) -> Option<String> {
    let rgb = parse_color_string(color)?;

    let (target, amount) = if percent < 0.0 {
        (0.0, -percent)
    } else {
        (255.0, percent)
    };

    let shade = |channel: i32| {
        let channel = f64::from(channel.clamp(0, 255));
        (round_half_up((target - channel) * amount) + channel).clamp(0.0, 255.0) as u8
    };

    Some(format!(
        "#{:02x}{:02x}{:02x}",
        shade(rgb.r),
        shade(rgb.g),
        shade(rgb.b)
    ))
}

//! Color values and their textual forms.
//!
//! Provides:
//! - RGB(A) color representation with lazily clamped channels
//! - Parsing of `#RGB`, `#RRGGBB`, `rgb(r, g, b)` and `rgba(r, g, b, a)`
//! - Hex and functional string formatting
//! - RGB <-> HSV conversion and hue rotation
//! - Integration with owo-colors and ratatui

use log::trace;
use owo_colors::OwoColorize;
use ratatui::style::Color as RatatuiColor;
use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::{ColorError, ColorResult};

/// Represents an RGB color with an optional alpha channel.
///
/// Channels are not range checked on construction. Values outside `0..=255`
/// are carried as-is and clamped by the functions that consume them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: Option<f64>,
}

impl RgbColor {
    /// Create a new RGB color without alpha
    #[inline]
    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b, a: None }
    }

    /// Create a new RGBA color with the given alpha in `[0, 1]`
    #[inline]
    pub const fn rgba(r: i32, g: i32, b: i32, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// Get color with modified alpha
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            a: Some(alpha),
            ..*self
        }
    }

    /// Get the color with its alpha channel dropped
    pub fn without_alpha(&self) -> Self {
        Self { a: None, ..*self }
    }

    /// Get the RGB components clamped to `0..=255`
    pub fn clamped_components(&self) -> (u8, u8, u8) {
        (
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b),
        )
    }

    /// Convert to owo-colors RGB type
    pub fn to_owo_rgb(&self) -> owo_colors::Rgb {
        let (r, g, b) = self.clamped_components();
        owo_colors::Rgb(r, g, b)
    }

    /// Convert to ratatui Color
    pub fn to_ratatui(&self) -> RatatuiColor {
        let (r, g, b) = self.clamped_components();
        RatatuiColor::Rgb(r, g, b)
    }
}

impl FromStr for RgbColor {
    type Err = miette::Report;

    fn from_str(color: &str) -> ColorResult<Self> {
        parse_color(color).map_err(|msg| {
            trace!("rejected color string {:?}: {}", color, msg);
            ColorError::parse(color, (0, color.len()), msg).into()
        })
    }
}

impl From<RgbColor> for owo_colors::Rgb {
    fn from(color: RgbColor) -> Self {
        color.to_owo_rgb()
    }
}

impl From<RgbColor> for RatatuiColor {
    fn from(color: RgbColor) -> Self {
        color.to_ratatui()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            None => write!(f, "rgb({},{},{})", self.r, self.g, self.b),
            Some(a) => write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a),
        }
    }
}

/// HSV color with every component in `[0, 1]`; hue is cyclic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HsvColor {
    pub(crate) h: f64,
    pub(crate) s: f64,
    pub(crate) v: f64,
}

impl HsvColor {
    /// Gray inputs (including black) get hue and saturation of exactly 0.
    pub(crate) fn from_rgb(color: &RgbColor) -> Self {
        let r = f64::from(color.r.clamp(0, 255)) / 255.0;
        let g = f64::from(color.g.clamp(0, 255)) / 255.0;
        let b = f64::from(color.b.clamp(0, 255)) / 255.0;

        let min = r.min(g.min(b));
        let max = r.max(g.max(b));
        let delta = max - min;

        let (mut h, s) = if max == 0.0 || delta == 0.0 {
            (0.0, 0.0)
        } else {
            let h = if r == max {
                (g - b) / delta
            } else if g == max {
                2.0 + (b - r) / delta
            } else {
                4.0 + (r - g) / delta
            };
            (h, delta / max)
        };

        h /= 6.0;
        if h < 0.0 {
            h += 1.0;
        }

        Self { h, s, v: max }
    }

    /// Channels are floored, so a round trip may lose one unit per channel.
    pub(crate) fn to_rgb(self) -> RgbColor {
        let Self { h, s, v } = self;

        let (r, g, b) = if s == 0.0 {
            (v, v, v)
        } else {
            let sector_pos = h * 6.0;
            let sector = sector_pos.floor();
            let fractional = sector_pos - sector;

            let p = v * (1.0 - s);
            let q = v * (1.0 - (s * fractional));
            let t = v * (1.0 - (s * (1.0 - fractional)));

            match (sector as i64).rem_euclid(6) {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };

        RgbColor::rgb(floor_channel(r), floor_channel(g), floor_channel(b))
    }

    /// Only a hue above 1 is wrapped; negative hues are left for `to_rgb`.
    pub(crate) fn rotate(self, rotate_factor: f64) -> Self {
        let h = self.h + rotate_factor;
        Self {
            h: if h > 1.0 { h - 1.0 } else { h },
            ..self
        }
    }
}

fn floor_channel(unit: f64) -> i32 {
    (unit * 255.0).floor() as i32
}

pub(crate) fn clamp_channel(channel: i32) -> u8 {
    channel.clamp(0, 255) as u8
}

/// Parses a color string, returning `None` when it is not one of
/// `#RGB`, `#RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn parse_color_string(color: &str) -> Option<RgbColor> {
    color.parse().ok()
}

fn parse_color(color: &str) -> Result<RgbColor, &'static str> {
    if color.contains('#') {
        match color.len() {
            7 => parse_hex(color, 2),
            4 => parse_hex(color, 1),
            _ => Err("hex colors must be #RGB or #RRGGBB"),
        }
    } else if color.contains("rgb(") {
        let args = functional_args(color, "rgb(").ok_or("malformed rgb() color")?;
        match args.as_slice() {
            [r, g, b] => Ok(RgbColor::rgb(
                parse_integer(r)?,
                parse_integer(g)?,
                parse_integer(b)?,
            )),
            _ => Err("rgb() takes exactly three components"),
        }
    } else if color.contains("rgba(") {
        let args = functional_args(color, "rgba(").ok_or("malformed rgba() color")?;
        match args.as_slice() {
            [r, g, b, a] => Ok(RgbColor::rgba(
                parse_integer(r)?,
                parse_integer(g)?,
                parse_integer(b)?,
                parse_alpha(a)?,
            )),
            _ => Err("rgba() takes exactly four components"),
        }
    } else {
        Err("expected #RGB, #RRGGBB, rgb(r, g, b) or rgba(r, g, b, a)")
    }
}

fn parse_hex(color: &str, width: usize) -> Result<RgbColor, &'static str> {
    let digits = color
        .strip_prefix('#')
        .filter(|digits| digits.len() == width * 3)
        .ok_or("hex colors must start with #")?;

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16))
        .collect::<Option<Vec<u32>>>()
        .ok_or("invalid hex digit")?;

    // #RGB duplicates each digit, so 0x9 becomes 0x99
    let scale = if width == 1 { 17 } else { 1 };
    let channels: Vec<i32> = nibbles
        .chunks(width)
        .map(|chunk| (chunk.iter().fold(0, |acc, d| acc * 16 + d) * scale) as i32)
        .collect();

    match channels.as_slice() {
        [r, g, b] => Ok(RgbColor::rgb(*r, *g, *b)),
        _ => Err("invalid hex digit"),
    }
}

/// Splits `prefix(a,b,...)` into its components. Whitespace is allowed
/// after a comma and nowhere else.
fn functional_args<'a>(color: &'a str, prefix: &str) -> Option<Vec<&'a str>> {
    let body = color.strip_prefix(prefix)?.strip_suffix(')')?;
    let mut parts = body.split(',');
    let first = parts.next()?;

    Some(
        std::iter::once(first)
            .chain(parts.map(str::trim_start))
            .collect(),
    )
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_integer(text: &str) -> Result<i32, &'static str> {
    if !is_digits(text) {
        return Err("color channels must be unsigned integers");
    }

    Ok(text.bytes().fold(0i32, |acc, b| {
        acc.saturating_mul(10).saturating_add(i32::from(b - b'0'))
    }))
}

fn parse_alpha(text: &str) -> Result<f64, &'static str> {
    let well_formed = match text.split_once('.') {
        Some((whole, fraction)) => {
            (whole.is_empty() || is_digits(whole)) && is_digits(fraction)
        }
        None => is_digits(text),
    };

    if !well_formed {
        return Err("alpha must be a decimal number");
    }

    text.parse().map_err(|_| "alpha must be a decimal number")
}

/// Formats a color as `rgb(r,g,b)`, or `rgba(r,g,b,a)` when alpha is present.
pub fn rgb_string(color: &RgbColor) -> String {
    color.to_string()
}

/// Formats a color as uppercase `#RRGGBB`, clamping each channel.
pub fn hex_string(color: &RgbColor) -> String {
    let (r, g, b) = color.clamped_components();
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Parses any supported color string and re-emits it as `#RRGGBB`.
pub fn normalize_to_hex_string(color: &str) -> Option<String> {
    parse_color_string(color).map(|rgb| hex_string(&rgb))
}

/// Converts a 3- or 6-digit hex color (leading `#` optional) to
/// `rgb(r,g,b)`, or `rgba(r,g,b,t)` when a transparency is given.
/// Malformed input yields an empty string.
pub fn hex_to_rgb_string(hex: &str, transparency: Option<f64>) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return String::new();
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        _ => return String::new(),
    };

    let rgb = format!("#{}", expanded);
    let Some(color) = parse_color_string(&rgb) else {
        return String::new();
    };

    match transparency.filter(|t| !t.is_nan()) {
        Some(t) => format!("rgba({},{},{},{})", color.r, color.g, color.b, t),
        None => format!("rgb({},{},{})", color.r, color.g, color.b),
    }
}

/// Rotates the hue of a color string by `rotate_factor` turns.
///
/// A factor of exactly 0 returns the input untouched, without
/// canonicalization. Any other factor yields an uppercase hex string.
pub fn rotate(color: &str, rotate_factor: f64) -> Option<String> {
    if rotate_factor == 0.0 {
        return Some(color.to_owned());
    }

    let original = parse_color_string(color)?;
    let rotated = HsvColor::from_rgb(&original).rotate(rotate_factor).to_rgb();
    Some(hex_string(&rotated))
}

/// Extension trait for painting terminal text with an [`RgbColor`]
pub trait Swatch: OwoColorize {
    /// Paint the text in the given color
    #[inline]
    fn swatch(self, color: RgbColor) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = color.clamped_components();
        format!("{}", self.truecolor(r, g, b))
    }

    /// Paint the text background in the given color
    #[inline]
    fn swatch_on(self, color: RgbColor) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = color.clamped_components();
        format!("{}", self.on_truecolor(r, g, b))
    }
}

impl<T: OwoColorize + Display> Swatch for T {}

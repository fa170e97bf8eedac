#![forbid(unsafe_code)]

//! # Tincture
//!
//! Color parsing, blending and series color resolution for data visuals.
//!
//! ## Overview
//!
//! The crate is built around two layers:
//!
//! - **Codec & Blend Engine**: parses color strings, converts between RGB and
//!   HSV, blends, darkens, shades and derives highlight colors, and builds
//!   linear color scales
//! - **Resolution Policy**: [`ColorHelper`] picks the color a series or measure
//!   is drawn with from high-contrast theme colors, explicit fill overrides,
//!   a default color and a palette provider
//!
//! ## Core Components
//!
//! - [`RgbColor`]: RGB(A) value type with lazily clamped channels
//! - [`LinearColorScale`]: piecewise linear mapping from numbers to colors
//! - [`ColorPalette`]: palette provider capability
//! - [`ObjectBag`]: property bag reader for explicit fill overrides
//! - [`ColorHelper`]: the resolution policy
//! - [`Selector`]: category/series identity used as an allocation key
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use tincture::{ColorHelper, PropertyIdentifier, SequentialPalette};
//!
//! let palette = SequentialPalette::new(["#01B8AA", "#374649"]);
//! let helper = ColorHelper::new(&palette)
//!     .with_fill_property(PropertyIdentifier::new("dataPoint", "fill"));
//!
//! let overridden = json!({ "dataPoint": { "fill": { "solid": { "color": "#FF0000" } } } });
//!
//! assert_eq!(helper.get_color_for_measure(&(), "Sales", None).as_deref(), Some("#01B8AA"));
//! assert_eq!(helper.get_color_for_measure(&overridden, "Profit", None).as_deref(), Some("#FF0000"));
//! assert_eq!(tincture::hex_blend("#FFFF00", 0.5, "#FFFFFF").as_deref(), Some("#FFFF80"));
//! ```
//!
//! ## Module Organization
//!
//! - `blend`: Darkening, blending, highlight and shade colors
//! - `colors`: Color values, parsing, formatting and HSV conversion
//! - `error`: Error types and handling
//! - `helper`: Color resolution policy
//! - `objects`: Property bag fill overrides
//! - `palette`: Palette provider trait and theme color names
//! - `scale`: Linear color scales
//! - `selector`: Selector normalization
//!
//! ## Error Handling
//!
//! Operations on color strings signal malformed input with `None` (or an
//! empty string for [`hex_to_rgb_string`]) and never panic. Fallible
//! constructors and scale lookups return [`ColorResult`], with
//! [`ColorError`] diagnostics via `miette`.

/// Re-exports of core components
pub use blend::{
    calculate_highlight_color, calculate_highlight_color_with, channel_blend, darken, hex_blend,
    rgb_blend, shade_color, HighlightOptions,
};
pub use colors::{
    hex_string, hex_to_rgb_string, normalize_to_hex_string, parse_color_string, rgb_string,
    rotate, RgbColor, Swatch,
};
pub use error::{ColorError, ColorResult};
pub use helper::ColorHelper;
pub use objects::{ObjectBag, PropertyIdentifier};
pub use palette::{ColorPalette, SequentialPalette, ThemeColorName};
pub use scale::{create_linear_color_scale, LinearColorScale};
pub use selector::{normalize_selector, Selector};

/// Darkening, blending, highlight and shade colors
pub mod blend;
/// Color values, parsing and formatting
pub mod colors;
/// Error types and handling
pub mod error;
/// Color resolution policy
pub mod helper;
/// Property bag fill overrides
pub mod objects;
/// Palette provider trait and theme color names
pub mod palette;
/// Linear color scales
pub mod scale;
/// Selector normalization
pub mod selector;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_colors_through_codec() {
        let palette = SequentialPalette::new(["#45D0E8", "rgb(255, 255, 0)"]);
        let helper = ColorHelper::new(&palette);

        let first = helper.get_color_for_series_value(&(), "north", None).unwrap();
        let second = helper.get_color_for_series_value(&(), "south", None).unwrap();

        assert_eq!(rotate(&first, 0.25).as_deref(), Some("#AE45E8"));
        assert_eq!(normalize_to_hex_string(&second).as_deref(), Some("#FFFF00"));

        let highlight = calculate_highlight_color(&parse_color_string(&second).unwrap(), 0.8, 0.2);
        assert_eq!(highlight, "#CCCC00");
    }

    #[test]
    fn test_normalized_selectors_share_a_slot() {
        let palette = SequentialPalette::default();
        let helper = ColorHelper::new(&palette);

        let sales = ColorHelper::normalize_selector(
            &Selector::data(["Canada"]).with_metadata("Sales"),
            false,
        );
        let profit = ColorHelper::normalize_selector(
            &Selector::data(["Canada"]).with_metadata("Profit"),
            false,
        );

        assert_eq!(
            helper.get_color_for_series_value(&(), &sales, None),
            helper.get_color_for_series_value(&(), &profit, None)
        );
        assert_eq!(palette.allocated(), 1);
    }

    #[test]
    fn test_scale_feeds_blend() {
        let scale = create_linear_color_scale(&[0.0, 10.0], &["#000000", "#FFFFFF"], true).unwrap();
        let mid = scale.color_for(Some(5.0)).unwrap().unwrap();

        assert_eq!(mid, "#808080");
        assert_eq!(shade_color(&mid, -0.5).as_deref(), Some("#404040"));
        assert_eq!(hex_to_rgb_string(&mid, Some(0.5)), "rgba(128,128,128,0.5)");
    }
}

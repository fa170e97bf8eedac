//! Color resolution policy for series and measures
//!
//! [`ColorHelper`] decides which color a data series or measure is drawn
//! with. In order:
//!
//! 1. High-contrast mode returns the requested theme color, ignoring overrides
//! 2. An explicit fill set in the property bag
//! 3. The configured default color
//! 4. The palette slot for the series value or measure key

use log::debug;
use std::fmt::Display;

use crate::{
    objects::{ObjectBag, PropertyIdentifier},
    palette::{ColorPalette, ThemeColorName},
    selector::{self, Selector},
};

/// Resolves display colors against a palette, fill overrides and a default.
///
/// Built once per render pass and shared by reference; it holds no mutable
/// state of its own.
#[derive(Debug, Clone)]
pub struct ColorHelper<'a> {
    palette: Option<&'a dyn ColorPalette>,
    fill_property: Option<PropertyIdentifier>,
    default_color: Option<String>,
}

impl<'a> ColorHelper<'a> {
    /// Creates a helper backed by `palette`
    pub fn new(palette: &'a dyn ColorPalette) -> Self {
        Self {
            palette: Some(palette),
            fill_property: None,
            default_color: None,
        }
    }

    /// Creates a helper without a palette; only overrides and the default
    /// color can be resolved
    pub fn detached() -> Self {
        Self {
            palette: None,
            fill_property: None,
            default_color: None,
        }
    }

    /// Sets the property under which explicit fill overrides live
    pub fn with_fill_property(mut self, fill_property: PropertyIdentifier) -> Self {
        self.fill_property = Some(fill_property);
        self
    }

    /// Sets a static color used before falling back to the palette.
    /// An empty string leaves no default.
    pub fn with_default_color(mut self, default_color: impl Into<String>) -> Self {
        self.default_color = Some(default_color.into()).filter(|color| !color.is_empty());
        self
    }

    /// Gets the color for the given series value.
    ///
    /// The palette is only consulted when neither an explicit fill nor a
    /// default color applies.
    pub fn get_color_for_series_value<O>(
        &self,
        objects: &O,
        value: impl Display,
        theme_color_name: Option<ThemeColorName>,
    ) -> Option<String>
    where
        O: ObjectBag + ?Sized,
    {
        if self.is_high_contrast() {
            return self.high_contrast_theme_color(theme_color_name);
        }

        self.explicit_fill(objects)
            .or_else(|| self.default_color.clone())
            .or_else(|| self.palette.map(|palette| palette.get_color(&value.to_string())))
    }

    /// Gets the color for the given measure.
    ///
    /// The palette slot for `measure_key` is allocated on every call, even
    /// when an override or default wins, so the nth measure keeps the nth
    /// palette color whether or not earlier measures were overridden.
    pub fn get_color_for_measure<O>(
        &self,
        objects: &O,
        measure_key: impl Display,
        theme_color_name: Option<ThemeColorName>,
    ) -> Option<String>
    where
        O: ObjectBag + ?Sized,
    {
        if self.is_high_contrast() {
            return self.high_contrast_theme_color(theme_color_name);
        }

        let scale_color = self
            .palette
            .map(|palette| palette.get_color(&measure_key.to_string()));

        self.explicit_fill(objects)
            .or_else(|| self.default_color.clone())
            .or(scale_color)
    }

    /// True iff a palette is present and reports high contrast
    pub fn is_high_contrast(&self) -> bool {
        self.palette
            .is_some_and(|palette| palette.is_high_contrast())
    }

    /// Looks up a named theme color, `background` when no name is given
    pub fn get_theme_color(&self, theme_color_name: Option<ThemeColorName>) -> Option<String> {
        self.palette?.theme_color(theme_color_name.unwrap_or_default())
    }

    /// The theme color in high-contrast mode, otherwise `default_color`
    pub fn get_high_contrast_color(
        &self,
        theme_color_name: Option<ThemeColorName>,
        default_color: Option<&str>,
    ) -> Option<String> {
        if self.is_high_contrast() {
            self.get_theme_color(theme_color_name)
        } else {
            default_color.map(str::to_owned)
        }
    }

    /// See [`selector::normalize_selector`]
    pub fn normalize_selector(selector: &Selector, is_single_series: bool) -> Selector {
        selector::normalize_selector(selector, is_single_series)
    }

    fn explicit_fill<O: ObjectBag + ?Sized>(&self, objects: &O) -> Option<String> {
        self.fill_property
            .as_ref()
            .and_then(|property| objects.fill_color(property))
    }

    fn high_contrast_theme_color(&self, theme_color_name: Option<ThemeColorName>) -> Option<String> {
        let name = theme_color_name.unwrap_or_default();
        debug!("high contrast mode active, resolving theme color {}", name);
        self.get_theme_color(Some(name))
    }
}

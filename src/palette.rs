//! Palette provider capability and a sequential reference provider

use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
    sync::{Mutex, PoisonError},
};

/// Categorical colors handed out by [`SequentialPalette`] when none are given
pub const DEFAULT_COLORS: [&str; 10] = [
    "#01B8AA", "#374649", "#FD625E", "#F2C80F", "#5F6B6D", "#8AD4EB", "#FE9666", "#A66999",
    "#3599B8", "#DFBFBF",
];

/// A source of stable per-key colors and named theme colors.
///
/// Implementations own their allocation bookkeeping. `get_color` may record
/// a new slot for an unseen key, so providers used from several threads
/// must serialize that bookkeeping themselves.
pub trait ColorPalette: Send + Sync + Debug {
    /// Returns the color associated with `key`, allocating a slot on first use
    fn get_color(&self, key: &str) -> String;

    /// Looks up a named theme color
    fn theme_color(&self, _name: ThemeColorName) -> Option<String> {
        None
    }

    /// Whether the host is in an accessibility high-contrast mode
    fn is_high_contrast(&self) -> bool {
        false
    }
}

/// Named colors of an extended theme palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeColorName {
    #[default]
    Background,
    BackgroundLight,
    BackgroundNeutral,
    BackgroundDark,
    Foreground,
    ForegroundLight,
    ForegroundDark,
    ForegroundNeutralLight,
    ForegroundNeutralDark,
    ForegroundNeutralSecondary,
    ForegroundNeutralSecondaryAlt,
    ForegroundNeutralSecondaryAlt2,
    ForegroundNeutralTertiary,
    ForegroundNeutralTertiaryAlt,
    ForegroundSelected,
    ForegroundButton,
    Hyperlink,
    VisitedHyperlink,
    MapPushpin,
    ShapeStroke,
    Selection,
    Separator,
    Negative,
    Neutral,
    Positive,
}

impl ThemeColorName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::BackgroundLight => "backgroundLight",
            Self::BackgroundNeutral => "backgroundNeutral",
            Self::BackgroundDark => "backgroundDark",
            Self::Foreground => "foreground",
            Self::ForegroundLight => "foregroundLight",
            Self::ForegroundDark => "foregroundDark",
            Self::ForegroundNeutralLight => "foregroundNeutralLight",
            Self::ForegroundNeutralDark => "foregroundNeutralDark",
            Self::ForegroundNeutralSecondary => "foregroundNeutralSecondary",
            Self::ForegroundNeutralSecondaryAlt => "foregroundNeutralSecondaryAlt",
            Self::ForegroundNeutralSecondaryAlt2 => "foregroundNeutralSecondaryAlt2",
            Self::ForegroundNeutralTertiary => "foregroundNeutralTertiary",
            Self::ForegroundNeutralTertiaryAlt => "foregroundNeutralTertiaryAlt",
            Self::ForegroundSelected => "foregroundSelected",
            Self::ForegroundButton => "foregroundButton",
            Self::Hyperlink => "hyperlink",
            Self::VisitedHyperlink => "visitedHyperlink",
            Self::MapPushpin => "mapPushpin",
            Self::ShapeStroke => "shapeStroke",
            Self::Selection => "selection",
            Self::Separator => "separator",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        }
    }
}

impl Display for ThemeColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hands out colors in the order keys are first requested, cycling through
/// its color list. Mostly useful for tests and demos.
#[derive(Debug)]
pub struct SequentialPalette {
    colors: Vec<String>,
    theme: HashMap<ThemeColorName, String>,
    high_contrast: bool,
    slots: Mutex<HashMap<String, usize>>,
}

impl SequentialPalette {
    /// Creates a palette cycling through `colors`, or [`DEFAULT_COLORS`] if empty
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            colors = DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect();
        }

        Self {
            colors,
            theme: HashMap::new(),
            high_contrast: false,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_theme_color(mut self, name: ThemeColorName, color: impl Into<String>) -> Self {
        self.theme.insert(name, color.into());
        self
    }

    pub fn with_high_contrast(mut self, high_contrast: bool) -> Self {
        self.high_contrast = high_contrast;
        self
    }

    /// Number of keys that have been assigned a slot
    pub fn allocated(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for SequentialPalette {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl ColorPalette for SequentialPalette {
    fn get_color(&self, key: &str) -> String {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let next = slots.len();
        let slot = *slots.entry(key.to_owned()).or_insert(next);

        self.colors[slot % self.colors.len()].clone()
    }

    fn theme_color(&self, name: ThemeColorName) -> Option<String> {
        self.theme.get(&name).cloned()
    }

    fn is_high_contrast(&self) -> bool {
        self.high_contrast
    }
}

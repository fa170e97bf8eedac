//! Series and category identity keys

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Identifies a category or series for color allocation.
///
/// `data` holds the category identity; `metadata` names a measure and `id`
/// any other identity the host attaches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Selector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Selector {
    pub fn data<I, S>(data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: Some(data.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Renders the selector as compact JSON, usable as an allocation key
impl Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Keeps only the `data` part of a selector for single-series charts or
/// whenever a `data` part exists, so a category keeps its color across
/// measures. Other selectors are returned unchanged.
pub fn normalize_selector(selector: &Selector, is_single_series: bool) -> Selector {
    if is_single_series || selector.data.is_some() {
        Selector {
            data: selector.data.clone(),
            ..Selector::default()
        }
    } else {
        selector.clone()
    }
}

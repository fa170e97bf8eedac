//! Explicit color overrides stored in visual property bags.
//!
//! A property bag follows the visual-objects JSON shape:
//!
//! ```json
//! { "dataPoint": { "fill": { "solid": { "color": "#FF0000" } } } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Names the object and property holding a fill override
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyIdentifier {
    pub object_name: String,
    pub property_name: String,
}

impl PropertyIdentifier {
    pub fn new(object_name: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            property_name: property_name.into(),
        }
    }
}

/// Reads explicitly set fill colors out of a property bag
pub trait ObjectBag {
    /// Returns the fill color set under `property`, if any
    fn fill_color(&self, property: &PropertyIdentifier) -> Option<String>;
}

impl ObjectBag for Value {
    fn fill_color(&self, property: &PropertyIdentifier) -> Option<String> {
        self.get(&property.object_name)?
            .get(&property.property_name)?
            .get("solid")?
            .get("color")?
            .as_str()
            .filter(|color| !color.is_empty())
            .map(str::to_owned)
    }
}

/// No objects at all
impl ObjectBag for () {
    fn fill_color(&self, _property: &PropertyIdentifier) -> Option<String> {
        None
    }
}

impl<T: ObjectBag> ObjectBag for Option<T> {
    fn fill_color(&self, property: &PropertyIdentifier) -> Option<String> {
        self.as_ref()?.fill_color(property)
    }
}

impl<T: ObjectBag + ?Sized> ObjectBag for &T {
    fn fill_color(&self, property: &PropertyIdentifier) -> Option<String> {
        (**self).fill_color(property)
    }
}

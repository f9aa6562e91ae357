//! Display bundles: MIME type to encoded payload.
//!
//! A notebook host renders rich output from a mapping such as
//! `{"image/png": "iVBORw0KGgo..."}`. [`DisplayBundle`] is that mapping, and
//! [`MimeBundleRepr`] is implemented by anything that can produce one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// MIME type for PNG images.
pub const IMAGE_PNG: &str = "image/png";

/// Mapping from MIME type to its encoded representation.
///
/// Entries are kept ordered by MIME type so iteration and serialisation are
/// deterministic. Serialises as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayBundle {
    entries: BTreeMap<String, String>,
}

impl DisplayBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundle holding a single entry.
    pub fn with_entry(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        let mut bundle = Self::new();
        bundle.insert(mime_type, data);
        bundle
    }

    /// Insert an entry, returning the previous payload for that MIME type.
    pub fn insert(
        &mut self,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(mime_type.into(), data.into())
    }

    /// Payload for a MIME type.
    pub fn get(&self, mime_type: &str) -> Option<&str> {
        self.entries.get(mime_type).map(String::as_str)
    }

    /// Whether the bundle has an entry for `mime_type`.
    pub fn contains(&self, mime_type: &str) -> bool {
        self.entries.contains_key(mime_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(mime_type, payload)` pairs in MIME-type order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// MIME types present in the bundle.
    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }

    /// Bundle as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }

    /// Bundle as a JSON document, optionally pretty-printed.
    pub fn to_json_string(&self, pretty: bool) -> String {
        let value = self.to_json();
        // Display on a Value cannot fail; `{:#}` selects the pretty printer.
        if pretty {
            format!("{value:#}")
        } else {
            value.to_string()
        }
    }
}

impl<'a> IntoIterator for &'a DisplayBundle {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Types that a notebook host can render through a display bundle.
pub trait MimeBundleRepr {
    /// Build the display bundle for this value.
    fn mime_bundle_repr(&self) -> DisplayBundle;
}

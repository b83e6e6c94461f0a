// src/model/property.rs
use crate::types::RichTextItem;
use serde::{Deserialize, Serialize};

/// A page property value, modeled only as far as this service reads them.
///
/// `Title` feeds page titles and breadcrumbs; `Select` feeds the guardian's
/// decision gate. Everything else is carried as an opaque type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Title {
        title: Vec<RichTextItem>,
    },
    Select {
        /// `None` when the property exists but no option is chosen.
        name: Option<String>,
    },
    Other {
        property_type: String,
    },
}

impl PropertyValue {
    /// Whether this is a select property carrying exactly the given option.
    pub fn is_select_named(&self, expected: &str) -> bool {
        matches!(self, PropertyValue::Select { name: Some(n) } if n == expected)
    }
}

//! Tab data structure
//!
//! One page/section of the document being edited. Serialized field names are
//! camelCase to match the presentation layer's JSON shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Unique identifier, stable for the lifetime of the tab
    pub id: String,
    /// Display name
    pub title: String,
    /// Whether this is the single active tab
    #[serde(default)]
    pub is_active: bool,
    /// Protected tab that cannot be deleted (e.g. the initial page)
    #[serde(default)]
    pub is_default: bool,
    /// Symbolic icon reference, opaque to the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Tab {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            is_active: false,
            is_default: false,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

//! Context menu actions
//!
//! The presentation layer sends action names as strings; the closed set is
//! parsed here so the store keeps a single operation per behavior. "copy"
//! and "duplicate" are synonyms for the same operation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    /// Move the tab to the first position
    SetFirst,
    /// Open the rename modal for the tab
    Rename,
    /// Clone the tab next to itself
    Duplicate,
    /// Remove the tab
    Delete,
}

impl MenuAction {
    /// Parse an action name. Unknown names yield `None`; the dispatcher
    /// treats them as a no-op.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "setFirst" => Some(MenuAction::SetFirst),
            "rename" => Some(MenuAction::Rename),
            "copy" | "duplicate" => Some(MenuAction::Duplicate),
            "delete" => Some(MenuAction::Delete),
            _ => None,
        }
    }
}

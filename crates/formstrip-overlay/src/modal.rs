//! Rename modal controller
//!
//! Owns the editable title buffer. The buffer is seeded from the tab's
//! current title on open; commit hands the result back to the caller as a
//! [`RenameRequest`] so this crate stays independent of the store.

use serde::{Deserialize, Serialize};

/// Keys the modal reacts to without requiring the buffer to lose focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Enter,
    Escape,
}

/// A committed rename, ready to apply to the tab collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub tab_id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameModal {
    /// Tab being renamed
    tab_id: String,
    /// Editable text buffer, shown in the input field
    title: String,
    visible: bool,
}

impl RenameModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Open for a tab, seeding the buffer with its current title. The
    /// caller resolves the tab and skips this call for unknown ids.
    pub fn open(&mut self, tab_id: &str, current_title: &str) {
        self.tab_id = tab_id.to_string();
        self.title = current_title.to_string();
        self.visible = true;

        tracing::debug!(tab_id = %tab_id, "Opened rename modal");
    }

    /// Replace the buffer with the latest input text.
    pub fn set_text(&mut self, text: &str) {
        if self.visible {
            self.title = text.to_string();
        }
    }

    /// Commit the buffered title.
    ///
    /// A whitespace-only buffer is discarded silently and the modal stays
    /// open for correction. Otherwise the modal closes and the rename is
    /// returned for the store to apply.
    pub fn commit(&mut self) -> Option<RenameRequest> {
        if !self.visible || self.title.trim().is_empty() {
            return None;
        }

        self.visible = false;
        tracing::debug!(tab_id = %self.tab_id, "Committed rename");

        Some(RenameRequest {
            tab_id: self.tab_id.clone(),
            title: self.title.clone(),
        })
    }

    /// Close without committing. Idempotent; the buffer is kept.
    pub fn cancel(&mut self) {
        self.visible = false;
    }

    /// Enter commits, Escape cancels.
    pub fn handle_key(&mut self, key: ModalKey) -> Option<RenameRequest> {
        match key {
            ModalKey::Enter => self.commit(),
            ModalKey::Escape => {
                self.cancel();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_buffer() {
        let mut modal = RenameModal::new();
        modal.open("2", "Details");

        assert!(modal.visible());
        assert_eq!(modal.tab_id(), "2");
        assert_eq!(modal.title(), "Details");
    }

    #[test]
    fn test_commit_applies_and_closes() {
        let mut modal = RenameModal::new();
        modal.open("2", "Details");
        modal.set_text("Payment");

        let request = modal.commit().unwrap();
        assert_eq!(
            request,
            RenameRequest {
                tab_id: "2".to_string(),
                title: "Payment".to_string(),
            }
        );
        assert!(!modal.visible());
    }

    #[test]
    fn test_empty_commit_keeps_modal_open() {
        let mut modal = RenameModal::new();
        modal.open("2", "Details");
        modal.set_text("   ");

        assert!(modal.commit().is_none());
        assert!(modal.visible());
    }

    #[test]
    fn test_commit_while_hidden_is_quiet() {
        let mut modal = RenameModal::new();
        assert!(modal.commit().is_none());
    }

    #[test]
    fn test_cancel_discards_and_is_idempotent() {
        let mut modal = RenameModal::new();
        modal.open("2", "Details");
        modal.set_text("Payment");

        modal.cancel();
        assert!(!modal.visible());

        let after_once = modal.clone();
        modal.cancel();
        assert_eq!(modal, after_once);
    }

    #[test]
    fn test_set_text_ignored_while_hidden() {
        let mut modal = RenameModal::new();
        modal.set_text("stray input");
        assert_eq!(modal.title(), "");
    }

    #[test]
    fn test_keyboard_contract() {
        let mut modal = RenameModal::new();
        modal.open("2", "Details");
        modal.set_text("Payment");

        let request = modal.handle_key(ModalKey::Enter).unwrap();
        assert_eq!(request.title, "Payment");
        assert!(!modal.visible());

        modal.open("2", "Details");
        assert!(modal.handle_key(ModalKey::Escape).is_none());
        assert!(!modal.visible());
        // Escape never applied the buffered text
    }
}

//! Tab Collection Store
//!
//! Ordered sequence of tabs plus the id counter. Every mutating operation
//! runs to completion synchronously and preserves the single-active-tab
//! invariant; expected failure modes (unknown id, protected tab, last tab)
//! are silent no-ops rather than errors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::StripError;
use crate::tab::Tab;
use crate::Result;

/// Title given to freshly added tabs.
pub const DEFAULT_NEW_TITLE: &str = "New Tab";
/// Suffix appended to a duplicated tab's title.
pub const DEFAULT_COPY_SUFFIX: &str = " (Copy)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabStrip {
    /// Display-ordered tab records
    tabs: Vec<Tab>,
    /// Monotonic id counter, never reused after deletion
    next_id: u64,
}

impl TabStrip {
    /// Build a strip from an existing collection.
    ///
    /// Rejects an empty collection and duplicate ids. Activation is
    /// normalized: the first active tab wins, and if none is active the
    /// first tab becomes active.
    pub fn new(mut tabs: Vec<Tab>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(StripError::Empty);
        }

        let mut seen = HashSet::new();
        for tab in &tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(StripError::DuplicateId(tab.id.clone()));
            }
        }

        match tabs.iter().position(|t| t.is_active) {
            Some(first) => {
                for (i, tab) in tabs.iter_mut().enumerate() {
                    tab.is_active = i == first;
                }
            }
            None => tabs[0].is_active = true,
        }

        // Seed the counter past every numeric id already in use.
        let next_id = tabs
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        Ok(Self { tabs, next_id })
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    /// The single active tab.
    pub fn active(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.is_active)
    }

    /// Insert a new tab at `at_index` (clamped) with the default title.
    pub fn add(&mut self, at_index: usize) -> &Tab {
        self.add_titled(at_index, DEFAULT_NEW_TITLE)
    }

    /// Insert a new tab at `at_index` (clamped) with the given title.
    ///
    /// The new tab is inactive and unprotected; the currently active tab
    /// stays active.
    pub fn add_titled(&mut self, at_index: usize, title: &str) -> &Tab {
        let tab = Tab::new(self.generate_id(), title.to_string());
        let index = at_index.min(self.tabs.len());

        tracing::debug!(tab_id = %tab.id, index, "Added tab");

        self.tabs.insert(index, tab);
        &self.tabs[index]
    }

    /// Set the tab matching `tab_id` active and deactivate all others.
    ///
    /// An unknown id leaves the collection untouched; activation of a
    /// nonexistent id must never strand the strip with zero active tabs.
    /// Returns true when the active tab actually changed.
    pub fn activate(&mut self, tab_id: &str) -> bool {
        let Some(index) = self.position(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Activate ignored: tab not found");
            return false;
        };

        if self.tabs[index].is_active {
            return false;
        }

        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.is_active = i == index;
        }

        tracing::debug!(tab_id = %tab_id, "Activated tab");
        true
    }

    /// Clone the tab matching `tab_id` and insert the copy right after it.
    pub fn duplicate(&mut self, tab_id: &str) -> Option<&Tab> {
        self.duplicate_suffixed(tab_id, DEFAULT_COPY_SUFFIX)
    }

    /// Clone with a fresh id and `"<title><suffix>"`; the copy is never
    /// active even if the source was. Every other field carries over,
    /// including the protected flag.
    pub fn duplicate_suffixed(&mut self, tab_id: &str, suffix: &str) -> Option<&Tab> {
        let index = self.position(tab_id)?;

        let mut copy = self.tabs[index].clone();
        copy.id = self.generate_id();
        copy.title = format!("{}{}", copy.title, suffix);
        copy.is_active = false;

        tracing::debug!(source = %tab_id, copy_id = %copy.id, "Duplicated tab");

        self.tabs.insert(index + 1, copy);
        Some(&self.tabs[index + 1])
    }

    /// Remove the tab matching `tab_id`.
    ///
    /// Rejected (no-op) for unknown ids, protected tabs, and the sole
    /// remaining tab. When the removed tab was active, activation moves to
    /// its predecessor (or the new first tab). Returns whether a tab was
    /// removed.
    pub fn delete(&mut self, tab_id: &str) -> bool {
        let Some(index) = self.position(tab_id) else {
            return false;
        };
        if self.tabs[index].is_default || self.tabs.len() <= 1 {
            tracing::debug!(tab_id = %tab_id, "Delete rejected: protected or last tab");
            return false;
        }

        let removed = self.tabs.remove(index);
        if removed.is_active {
            let successor = index.saturating_sub(1);
            self.tabs[successor].is_active = true;
        }

        tracing::debug!(tab_id = %tab_id, "Deleted tab");
        true
    }

    /// Move the tab matching `tab_id` to index 0, keeping the relative
    /// order of everything else. Returns whether the tab was found.
    pub fn promote_to_first(&mut self, tab_id: &str) -> bool {
        let Some(index) = self.position(tab_id) else {
            return false;
        };

        if index > 0 {
            let tab = self.tabs.remove(index);
            self.tabs.insert(0, tab);
            tracing::debug!(tab_id = %tab_id, "Promoted tab to first");
        }

        true
    }

    /// Set the title, discarding the rename when the trimmed title is
    /// empty. The stored title keeps its original whitespace.
    pub fn rename(&mut self, tab_id: &str, title: &str) -> bool {
        if title.trim().is_empty() {
            tracing::debug!(tab_id = %tab_id, "Rename discarded: empty title");
            return false;
        }

        let Some(index) = self.position(tab_id) else {
            return false;
        };

        self.tabs[index].title = title.to_string();
        tracing::debug!(tab_id = %tab_id, title = %title, "Renamed tab");
        true
    }

    /// Move the tab at `from` to `to` in one pass. An out-of-range `from`
    /// is a no-op; `to` is clamped to the collection.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= self.tabs.len() {
            return;
        }

        let tab = self.tabs.remove(from);
        let insert_index = to.min(self.tabs.len());
        tracing::trace!(tab_id = %tab.id, from, to = insert_index, "Reordered tab");
        self.tabs.insert(insert_index, tab);
    }

    fn generate_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        id
    }
}

impl Default for TabStrip {
    /// The form builder's initial page set.
    fn default() -> Self {
        let mut info = Tab::new("1".to_string(), "Info".to_string()).with_icon("info.svg");
        info.is_active = true;
        info.is_default = true;

        Self::new(vec![
            info,
            Tab::new("2".to_string(), "Details".to_string()).with_icon("file.svg"),
            Tab::new("3".to_string(), "Other".to_string()).with_icon("file1.svg"),
            Tab::new("4".to_string(), "Ending".to_string()).with_icon("check.svg"),
        ])
        .expect("seed collection is valid")
    }
}

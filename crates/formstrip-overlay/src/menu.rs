//! Context menu controller
//!
//! Owns position and visibility for the floating action menu. The
//! outside-interaction rule is scoped to visibility: the host forwards
//! global pointer-downs only while `wants_pointer_events()` is true, so no
//! listener lingers when the menu is hidden.

use serde::{Deserialize, Serialize};

/// Gap between the anchor's top edge and the menu.
pub const DEFAULT_MENU_OFFSET: f32 = 8.0;

/// Screen coordinates for the menu's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuPosition {
    pub x: f32,
    pub y: f32,
}

impl MenuPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Top-left corner of the visual element a tab resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
}

/// A rendered rectangle, used to test whether a pointer-down landed
/// inside the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn contains(&self, point: MenuPosition) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMenu {
    /// Tab the menu is acting on
    tab_id: String,
    position: MenuPosition,
    visible: bool,
    /// Skipped in serialization; the presentation layer reads it via
    /// `wants_pointer_events` instead
    #[serde(skip)]
    offset: f32,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::with_offset(DEFAULT_MENU_OFFSET)
    }

    pub fn with_offset(offset: f32) -> Self {
        Self {
            tab_id: String::new(),
            position: MenuPosition::default(),
            visible: false,
            offset,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }

    pub fn position(&self) -> MenuPosition {
        self.position
    }

    /// Open the menu for a tab. When the tab's visual anchor resolved, the
    /// menu sits above-left of it with a fixed offset; otherwise it falls
    /// back to the raw pointer coordinates.
    pub fn open(&mut self, tab_id: &str, anchor: Option<AnchorRect>, pointer: MenuPosition) {
        self.position = match anchor {
            Some(rect) => MenuPosition::new(rect.left, rect.top - self.offset),
            None => pointer,
        };
        self.tab_id = tab_id.to_string();
        self.visible = true;

        tracing::debug!(tab_id = %tab_id, anchored = anchor.is_some(), "Opened context menu");
    }

    /// Hide the menu, keeping the last coordinates and tab id. Idempotent.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// True exactly while the menu is visible; the host attaches its
    /// global pointer-down listener only during this window.
    pub fn wants_pointer_events(&self) -> bool {
        self.visible
    }

    /// Global pointer-down while visible: a press outside the rendered
    /// menu region closes it. Returns whether the menu closed.
    pub fn handle_pointer_down(&mut self, point: MenuPosition, menu_region: Region) -> bool {
        if !self.visible || menu_region.contains(point) {
            return false;
        }

        self.close();
        true
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region {
            x: 10.0,
            y: 10.0,
            width: 100.0,
            height: 60.0,
        }
    }

    #[test]
    fn test_open_anchored_above_left() {
        let mut menu = ContextMenu::new();
        menu.open(
            "2",
            Some(AnchorRect {
                left: 40.0,
                top: 300.0,
            }),
            MenuPosition::new(55.0, 310.0),
        );

        assert!(menu.visible());
        assert_eq!(menu.tab_id(), "2");
        assert_eq!(menu.position(), MenuPosition::new(40.0, 292.0));
    }

    #[test]
    fn test_open_falls_back_to_pointer() {
        let mut menu = ContextMenu::new();
        menu.open("2", None, MenuPosition::new(55.0, 310.0));
        assert_eq!(menu.position(), MenuPosition::new(55.0, 310.0));
    }

    #[test]
    fn test_close_preserves_state_and_is_idempotent() {
        let mut menu = ContextMenu::new();
        menu.open("3", None, MenuPosition::new(20.0, 30.0));

        menu.close();
        assert!(!menu.visible());
        assert_eq!(menu.tab_id(), "3");
        assert_eq!(menu.position(), MenuPosition::new(20.0, 30.0));

        let after_once = menu.clone();
        menu.close();
        assert_eq!(menu, after_once);
    }

    #[test]
    fn test_outside_pointer_down_closes() {
        let mut menu = ContextMenu::new();
        menu.open("1", None, MenuPosition::new(10.0, 10.0));

        assert!(menu.handle_pointer_down(MenuPosition::new(500.0, 500.0), region()));
        assert!(!menu.visible());
    }

    #[test]
    fn test_inside_pointer_down_keeps_open() {
        let mut menu = ContextMenu::new();
        menu.open("1", None, MenuPosition::new(10.0, 10.0));

        assert!(!menu.handle_pointer_down(MenuPosition::new(50.0, 40.0), region()));
        assert!(menu.visible());
    }

    #[test]
    fn test_pointer_down_while_hidden_is_ignored() {
        let mut menu = ContextMenu::new();
        assert!(!menu.wants_pointer_events());
        assert!(!menu.handle_pointer_down(MenuPosition::new(500.0, 500.0), region()));
    }
}

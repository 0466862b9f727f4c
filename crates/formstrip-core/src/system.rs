//! Tab system facade
//!
//! Central state container wiring the tab collection store, the drag
//! engine, and the overlay controllers behind one in-process surface. All
//! inbound calls run to completion synchronously in event order; the
//! presentation layer reads back cloned snapshots after each one.

use std::sync::Arc;

use parking_lot::RwLock;

use formstrip_gesture::{DragEngine, DragSession, PointerPosition};
use formstrip_overlay::{AnchorRect, ContextMenu, MenuPosition, ModalKey, Region, RenameModal};
use formstrip_tabs::{Tab, TabStrip};

use crate::action::MenuAction;
use crate::config::StripConfig;
use crate::Result;

type ActiveTabListener = Box<dyn Fn(&str) + Send + Sync>;

pub struct TabSystem {
    config: StripConfig,
    /// Single source of truth for the ordered collection
    strip: Arc<RwLock<TabStrip>>,
    drag: Arc<RwLock<DragEngine>>,
    menu: Arc<RwLock<ContextMenu>>,
    modal: Arc<RwLock<RenameModal>>,
    /// Fired on every activation click, whether or not the tab exists
    active_listener: Arc<RwLock<Option<ActiveTabListener>>>,
}

impl TabSystem {
    /// System seeded with the form builder's initial page set.
    pub fn new() -> Self {
        Self::build(StripConfig::default(), TabStrip::default())
    }

    pub fn with_config(config: StripConfig) -> Self {
        Self::build(config, TabStrip::default())
    }

    /// System over an existing collection, e.g. a document loaded by the
    /// host application.
    pub fn with_tabs(tabs: Vec<Tab>) -> Result<Self> {
        Ok(Self::build(StripConfig::default(), TabStrip::new(tabs)?))
    }

    fn build(config: StripConfig, strip: TabStrip) -> Self {
        let drag = DragEngine::with_bias(config.horizontal_bias);
        let menu = ContextMenu::with_offset(config.menu_offset);

        Self {
            config,
            strip: Arc::new(RwLock::new(strip)),
            drag: Arc::new(RwLock::new(drag)),
            menu: Arc::new(RwLock::new(menu)),
            modal: Arc::new(RwLock::new(RenameModal::new())),
            active_listener: Arc::new(RwLock::new(None)),
        }
    }

    /// Register the parent-controller callback for active-tab changes.
    pub fn set_active_tab_listener<F>(&self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        *self.active_listener.write() = Some(Box::new(listener));
    }

    // === Click surface ===

    /// Activate a tab and notify the parent controller.
    ///
    /// The notification fires on every click, even when the id is
    /// unknown; only the collection itself is guarded, so activating a
    /// nonexistent id never strands the strip with zero active tabs.
    pub fn on_tab_activate(&self, tab_id: &str) {
        self.strip.write().activate(tab_id);
        if let Some(listener) = self.active_listener.read().as_ref() {
            listener(tab_id);
        }
    }

    /// Insert a new tab at `index` and return it.
    pub fn on_add_tab(&self, index: usize) -> Tab {
        self.strip
            .write()
            .add_titled(index, &self.config.new_tab_title)
            .clone()
    }

    // === Drag surface ===

    pub fn on_drag_start(&self, tab_id: &str, index: usize, pointer: PointerPosition) {
        self.drag.write().begin(tab_id, index, pointer);
    }

    /// Drag start with presentation-side setup (drag proxy, data
    /// transfer); a setup failure aborts the gesture without surfacing.
    pub fn on_drag_start_with<F, E>(
        &self,
        tab_id: &str,
        index: usize,
        pointer: PointerPosition,
        setup: F,
    ) where
        F: FnOnce() -> std::result::Result<(), E>,
        E: std::fmt::Display,
    {
        self.drag.write().begin_with(tab_id, index, pointer, setup);
    }

    /// Eagerly apply the reorder for a horizontal-dominant crossing; the
    /// visible order updates continuously during the gesture.
    pub fn on_drag_over(&self, candidate_index: usize, pointer: PointerPosition) {
        let reorder = self.drag.write().track(candidate_index, pointer);
        if let Some(reorder) = reorder {
            self.strip.write().reorder(reorder.from, reorder.to);
        }
    }

    pub fn on_drag_end(&self) {
        self.drag.write().end();
    }

    /// Reordering already happened during drag-over; drop only clears the
    /// session.
    pub fn on_drop(&self) {
        self.drag.write().end();
    }

    // === Context menu surface ===

    pub fn on_menu_open(&self, tab_id: &str, anchor: Option<AnchorRect>, pointer: MenuPosition) {
        self.menu.write().open(tab_id, anchor, pointer);
    }

    /// Global pointer-down forwarded while the menu is visible.
    pub fn on_menu_pointer_down(&self, point: MenuPosition, menu_region: Region) {
        self.menu.write().handle_pointer_down(point, menu_region);
    }

    /// Dispatch a menu action by wire name. Unrecognized names do
    /// nothing; the menu closes afterwards in every case.
    pub fn on_menu_action(&self, action: &str, tab_id: &str) {
        match MenuAction::parse(action) {
            Some(MenuAction::SetFirst) => {
                self.strip.write().promote_to_first(tab_id);
            }
            Some(MenuAction::Rename) => self.on_rename_open(tab_id),
            Some(MenuAction::Duplicate) => {
                self.strip
                    .write()
                    .duplicate_suffixed(tab_id, &self.config.copy_suffix);
            }
            Some(MenuAction::Delete) => {
                self.strip.write().delete(tab_id);
            }
            None => {
                tracing::debug!(action = %action, "Ignored unknown menu action");
            }
        }

        self.menu.write().close();
    }

    // === Rename modal surface ===

    /// Open the rename modal seeded with the tab's current title. Unknown
    /// ids are ignored.
    pub fn on_rename_open(&self, tab_id: &str) {
        let title = self.strip.read().get(tab_id).map(|t| t.title.clone());
        if let Some(title) = title {
            self.modal.write().open(tab_id, &title);
        }
    }

    pub fn on_rename_text_change(&self, text: &str) {
        self.modal.write().set_text(text);
    }

    pub fn on_rename_commit(&self) {
        let request = self.modal.write().commit();
        if let Some(request) = request {
            self.strip.write().rename(&request.tab_id, &request.title);
        }
    }

    pub fn on_rename_cancel(&self) {
        self.modal.write().cancel();
    }

    pub fn on_rename_key(&self, key: ModalKey) {
        let request = self.modal.write().handle_key(key);
        if let Some(request) = request {
            self.strip.write().rename(&request.tab_id, &request.title);
        }
    }

    // === Outbound snapshots ===

    pub fn tabs(&self) -> Vec<Tab> {
        self.strip.read().tabs().to_vec()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.strip.read().active().cloned()
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag.read().session().cloned()
    }

    pub fn menu(&self) -> ContextMenu {
        self.menu.read().clone()
    }

    pub fn modal(&self) -> RenameModal {
        self.modal.read().clone()
    }
}

impl Default for TabSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabSystem {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            strip: Arc::clone(&self.strip),
            drag: Arc::clone(&self.drag),
            menu: Arc::clone(&self.menu),
            modal: Arc::clone(&self.modal),
            active_listener: Arc::clone(&self.active_listener),
        }
    }
}

//! formstrip Overlay Controllers
//!
//! Transient state for the two floating surfaces anchored to the tab strip:
//! the contextual action menu and the rename modal. Both reference tabs by
//! id only and never hold a tab record across a collection mutation.

mod menu;
mod modal;

pub use menu::{AnchorRect, ContextMenu, MenuPosition, Region, DEFAULT_MENU_OFFSET};
pub use modal::{ModalKey, RenameModal, RenameRequest};

//! formstrip Core
//!
//! Coordination layer for the form-builder tab strip: wires the collection
//! store, drag-reorder engine, and overlay controllers behind the
//! [`TabSystem`] facade, and dispatches context menu actions.

mod action;
mod config;
mod error;
mod system;

pub use action::MenuAction;
pub use config::StripConfig;
pub use error::CoreError;
pub use system::TabSystem;

// Re-export core components
pub use formstrip_gesture::{DragEngine, DragSession, PointerPosition, Reorder};
pub use formstrip_overlay::{
    AnchorRect, ContextMenu, MenuPosition, ModalKey, Region, RenameModal, RenameRequest,
};
pub use formstrip_tabs::{StripError, Tab, TabStrip};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

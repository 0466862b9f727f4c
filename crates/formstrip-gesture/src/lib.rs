//! formstrip Drag-Reorder Engine
//!
//! Translates a single-pointer drag gesture into live tab reorders. The
//! engine owns only the per-gesture state; the collection itself lives in
//! `formstrip-tabs` and is mutated by the caller applying the emitted
//! [`Reorder`] commands in event order.

mod drag;

pub use drag::{DragEngine, DragSession, PointerPosition, Reorder, DEFAULT_HORIZONTAL_BIAS};

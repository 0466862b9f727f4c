//! Drag gesture state machine
//!
//! Idle -> Dragging on begin, Dragging -> Idle on end/drop. Reordering is
//! live: every horizontal-dominant crossing of a tab boundary emits a
//! [`Reorder`] immediately, so nothing is left to apply on drop.

use serde::{Deserialize, Serialize};

/// Bias of the horizontal-dominance gate. Movement counts as a reorder
/// when `dx > dy / bias`, so 1.2 accepts displacement down to roughly 83%
/// of the vertical component.
pub const DEFAULT_HORIZONTAL_BIAS: f32 = 1.2;

/// Pointer coordinates in the presentation layer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// State captured for one in-progress gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragSession {
    /// Id of the tab being dragged
    pub tab_id: String,
    /// Index the tab occupied when the gesture began
    pub origin_index: usize,
    /// Index the tab occupies now, updated on every emitted reorder
    pub current_index: usize,
    /// Pointer position at gesture start
    pub start: PointerPosition,
}

/// A single remove-and-reinsert to apply to the tab collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone)]
pub struct DragEngine {
    session: Option<DragSession>,
    horizontal_bias: f32,
}

impl DragEngine {
    pub fn new() -> Self {
        Self::with_bias(DEFAULT_HORIZONTAL_BIAS)
    }

    pub fn with_bias(horizontal_bias: f32) -> Self {
        Self {
            session: None,
            horizontal_bias,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Id of the tab currently being dragged, for visual feedback.
    pub fn dragged_tab(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.tab_id.as_str())
    }

    /// Start a gesture. A begin while already dragging replaces the stale
    /// session.
    pub fn begin(&mut self, tab_id: &str, origin_index: usize, pointer: PointerPosition) {
        tracing::trace!(tab_id = %tab_id, origin_index, "Drag started");
        self.session = Some(DragSession {
            tab_id: tab_id.to_string(),
            origin_index,
            current_index: origin_index,
            start: pointer,
        });
    }

    /// Start a gesture after running presentation-side setup (drag proxy,
    /// data transfer). A setup failure is logged and leaves the engine
    /// Idle; the gesture simply never starts.
    pub fn begin_with<F, E>(
        &mut self,
        tab_id: &str,
        origin_index: usize,
        pointer: PointerPosition,
        setup: F,
    ) where
        F: FnOnce() -> std::result::Result<(), E>,
        E: std::fmt::Display,
    {
        match setup() {
            Ok(()) => self.begin(tab_id, origin_index, pointer),
            Err(e) => {
                tracing::warn!(tab_id = %tab_id, error = %e, "Drag setup failed, gesture aborted");
                self.session = None;
            }
        }
    }

    /// Process a drag-over event at `candidate_index`.
    ///
    /// Only horizontal-dominant movement reorders; vertical jitter is
    /// ignored. Returns the reorder to apply, with the session already
    /// advanced to `candidate_index` so the next event builds on this one.
    pub fn track(&mut self, candidate_index: usize, pointer: PointerPosition) -> Option<Reorder> {
        let session = self.session.as_mut()?;

        let dx = (pointer.x - session.start.x).abs();
        let dy = (pointer.y - session.start.y).abs();
        if dx <= dy / self.horizontal_bias {
            return None;
        }

        if candidate_index == session.current_index {
            return None;
        }

        let reorder = Reorder {
            from: session.current_index,
            to: candidate_index,
        };
        session.current_index = candidate_index;

        tracing::trace!(
            tab_id = %session.tab_id,
            from = reorder.from,
            to = reorder.to,
            "Live reorder"
        );

        Some(reorder)
    }

    /// End or drop the gesture, clearing all session state. Safe to call
    /// repeatedly or without a prior begin.
    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::trace!(tab_id = %session.tab_id, "Drag ended");
        }
    }
}

impl Default for DragEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> PointerPosition {
        PointerPosition::new(100.0, 100.0)
    }

    #[test]
    fn test_begin_captures_session() {
        let mut engine = DragEngine::new();
        assert!(!engine.is_dragging());

        engine.begin("2", 1, start());
        let session = engine.session().unwrap();
        assert_eq!(session.tab_id, "2");
        assert_eq!(session.origin_index, 1);
        assert_eq!(session.current_index, 1);
        assert_eq!(engine.dragged_tab(), Some("2"));
    }

    #[test]
    fn test_horizontal_gate() {
        let mut engine = DragEngine::new();
        engine.begin("1", 0, start());

        // dx=5, dy=50: 5 <= 50/1.2, vertical jitter, no reorder
        assert!(engine
            .track(2, PointerPosition::new(105.0, 150.0))
            .is_none());
        assert_eq!(engine.session().unwrap().current_index, 0);

        // dx=60, dy=50: 60 > 50/1.2, horizontal-dominant
        let reorder = engine.track(2, PointerPosition::new(160.0, 150.0)).unwrap();
        assert_eq!(reorder, Reorder { from: 0, to: 2 });
        assert_eq!(engine.session().unwrap().current_index, 2);
    }

    #[test]
    fn test_track_same_index_is_quiet() {
        let mut engine = DragEngine::new();
        engine.begin("1", 0, start());
        assert!(engine.track(0, PointerPosition::new(200.0, 100.0)).is_none());
    }

    #[test]
    fn test_track_while_idle_is_quiet() {
        let mut engine = DragEngine::new();
        assert!(engine.track(1, PointerPosition::new(200.0, 100.0)).is_none());
    }

    #[test]
    fn test_eager_reorders_build_on_each_other() {
        let mut engine = DragEngine::new();
        engine.begin("1", 0, start());

        let first = engine.track(2, PointerPosition::new(200.0, 100.0)).unwrap();
        assert_eq!(first, Reorder { from: 0, to: 2 });

        // Dragging back re-emits from the live index, not the origin
        let second = engine.track(0, PointerPosition::new(210.0, 100.0)).unwrap();
        assert_eq!(second, Reorder { from: 2, to: 0 });

        assert_eq!(engine.session().unwrap().origin_index, 0);
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut engine = DragEngine::new();

        // Without begin
        engine.end();
        assert!(!engine.is_dragging());

        engine.begin("1", 0, start());
        engine.end();
        assert!(!engine.is_dragging());
        engine.end();
        assert!(!engine.is_dragging());
        assert!(engine.session().is_none());
    }

    #[test]
    fn test_begin_with_setup_failure_stays_idle() {
        let mut engine = DragEngine::new();
        engine.begin_with("1", 0, start(), || Err("no data transfer"));
        assert!(!engine.is_dragging());

        // And aborts a stale session if one existed
        engine.begin("1", 0, start());
        engine.begin_with("2", 1, start(), || Err("proxy construction failed"));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_begin_with_setup_success() {
        let mut engine = DragEngine::new();
        engine.begin_with("1", 0, start(), || Ok::<(), String>(()));
        assert!(engine.is_dragging());
    }

    #[test]
    fn test_custom_bias() {
        // Bias 1.0 is the strict dx > dy gate
        let mut engine = DragEngine::with_bias(1.0);
        engine.begin("1", 0, start());
        assert!(engine.track(1, PointerPosition::new(145.0, 150.0)).is_none());
        assert!(engine.track(1, PointerPosition::new(155.0, 150.0)).is_some());
    }
}

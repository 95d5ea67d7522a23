use serde::{Deserialize, Serialize};

use crate::widget::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Window drag tracking. `last_pointer` is only present while dragging and
/// is kept in global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragState {
    last_pointer: Option<Point>,
}

impl DragState {
    pub fn phase(&self) -> DragPhase {
        if self.last_pointer.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.last_pointer.is_some()
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    pub fn begin(&mut self, global: Point) {
        self.last_pointer = Some(global);
    }

    /// Returns the displacement since the previous pointer position, or
    /// `None` when no drag is in progress.
    pub fn track(&mut self, global: Point) -> Option<(f32, f32)> {
        let last = self.last_pointer.as_mut()?;
        let delta = (global.x - last.x, global.y - last.y);
        *last = global;
        Some(delta)
    }

    pub fn end(&mut self) -> bool {
        self.last_pointer.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_drag_does_not_track() {
        let mut drag = DragState::default();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.track(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn deltas_are_relative_to_previous_move() {
        let mut drag = DragState::default();
        drag.begin(Point::new(100.0, 100.0));
        assert_eq!(drag.track(Point::new(110.0, 96.0)), Some((10.0, -4.0)));
        assert_eq!(drag.track(Point::new(111.0, 96.0)), Some((1.0, 0.0)));
        assert_eq!(drag.last_pointer(), Some(Point::new(111.0, 96.0)));
    }

    #[test]
    fn end_clears_pointer() {
        let mut drag = DragState::default();
        drag.begin(Point::new(1.0, 2.0));
        assert!(drag.end());
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert_eq!(drag.last_pointer(), None);
        assert!(!drag.end());
    }
}

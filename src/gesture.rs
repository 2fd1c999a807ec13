//! Swipe gesture tracking.
//!
//! Edge-triggered: the x position is recorded on touch-start, the latest
//! position is tracked on every move, and touch-end compares the two. A net
//! leftward drag beyond the threshold reads as "next page", rightward as
//! "previous page". The tracker resets after every touch-end regardless of
//! whether the drag cleared the threshold.

use crate::pagination::Direction;

/// Minimum horizontal displacement (px) for a drag to count as a swipe.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 50.0;

#[derive(Debug)]
pub struct SwipeTracker {
    min_distance: f32,
    start_x: Option<f32>,
    last_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        SwipeTracker {
            min_distance,
            start_x: None,
            last_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = None;
    }

    pub fn touch_move(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    /// Resolve the gesture. Returns the turn direction if the drag cleared
    /// the threshold; always clears tracking state.
    pub fn touch_end(&mut self) -> Option<Direction> {
        let start = self.start_x.take();
        let end = self.last_x.take();
        let (start, end) = (start?, end?);

        let distance = start - end;
        if distance > self.min_distance {
            Some(Direction::Next)
        } else if distance < -self.min_distance {
            Some(Direction::Prev)
        } else {
            None
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        SwipeTracker::new(DEFAULT_MIN_SWIPE_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_drag_past_threshold_is_next() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(200.0);
        swipe.touch_move(160.0);
        swipe.touch_move(120.0);
        assert_eq!(swipe.touch_end(), Some(Direction::Next));
    }

    #[test]
    fn rightward_drag_past_threshold_is_prev() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(100.0);
        swipe.touch_move(180.0);
        assert_eq!(swipe.touch_end(), Some(Direction::Prev));
    }

    #[test]
    fn short_drags_are_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(100.0);
        swipe.touch_move(60.0);
        assert_eq!(swipe.touch_end(), None, "exactly 40 px is under the 50 px threshold");
    }

    #[test]
    fn tap_without_movement_is_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(), None);
    }

    #[test]
    fn state_resets_after_every_gesture() {
        let mut swipe = SwipeTracker::default();
        swipe.touch_start(300.0);
        swipe.touch_move(100.0);
        assert_eq!(swipe.touch_end(), Some(Direction::Next));

        // A stale end position must not leak into the next gesture.
        swipe.touch_start(100.0);
        assert_eq!(swipe.touch_end(), None);

        swipe.touch_move(400.0);
        assert_eq!(swipe.touch_end(), None, "moves without a start are not a gesture");
    }
}

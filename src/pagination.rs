//! Page-turn state machine.
//!
//! One linear cursor over the entry sequence is presented either as a spread
//! (both pages of a cursor position at once) or, on narrow viewports, one
//! logical page at a time. Both granularities run through the same machine:
//! a mode contributes "sub-steps per cursor position" (one for spread, two
//! for single) rather than its own transition logic. Bounds are checked
//! against the sequence length supplied at call time, never cached.

use tracing::debug;

/// How many logical pages are shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Wide viewport: left and right page together.
    Spread,
    /// Narrow viewport: one page, stepping through the spread's halves.
    Single,
}

impl PageMode {
    /// Sub-steps per cursor position in this mode.
    pub fn sub_steps(self) -> usize {
        match self {
            PageMode::Spread => 1,
            PageMode::Single => 2,
        }
    }
}

/// Which half of a spread a single-mode viewport is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Direction of a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Animation phase. While `Turning`, every other request is dropped (not
/// queued) until the host signals completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    Turning(Direction),
}

/// Cursor plus turn state over the entry sequence.
#[derive(Debug)]
pub struct PaginationEngine {
    cursor: usize,
    mode: PageMode,
    active_side: Side,
    turn: TurnState,
}

impl PaginationEngine {
    pub fn new(mode: PageMode) -> Self {
        PaginationEngine {
            cursor: 0,
            mode,
            active_side: Side::Left,
            turn: TurnState::Idle,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> PageMode {
        self.mode
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn is_turning(&self) -> bool {
        matches!(self.turn, TurnState::Turning(_))
    }

    /// 1-indexed display number of the spread's left page.
    pub fn left_page_number(&self) -> usize {
        self.cursor * 2 + 1
    }

    /// 1-indexed display number of the spread's right page.
    pub fn right_page_number(&self) -> usize {
        self.cursor * 2 + 2
    }

    /// The cursor position a finished turn would land on, while turning.
    pub fn incoming_cursor(&self) -> Option<usize> {
        match self.turn {
            TurnState::Turning(Direction::Next) => Some(self.cursor + 1),
            TurnState::Turning(Direction::Prev) => Some(self.cursor.saturating_sub(1)),
            TurnState::Idle => None,
        }
    }

    /// Advance one sub-step. In single mode the left half flips to the right
    /// half in place; everything else starts an animated turn, bounded by
    /// `len`. Returns true if state changed.
    pub fn request_next(&mut self, len: usize) -> bool {
        if self.is_turning() {
            return false;
        }
        if self.mode == PageMode::Single && self.active_side == Side::Left {
            self.active_side = Side::Right;
            debug!(cursor = self.cursor, "Flipped to right half");
            return true;
        }
        if self.cursor + 1 < len {
            self.turn = TurnState::Turning(Direction::Next);
            debug!(cursor = self.cursor, "Turning to next spread");
            true
        } else {
            false
        }
    }

    /// Step back one sub-step; mirror image of
    /// [`request_next`](PaginationEngine::request_next).
    pub fn request_prev(&mut self, _len: usize) -> bool {
        if self.is_turning() {
            return false;
        }
        if self.mode == PageMode::Single && self.active_side == Side::Right {
            self.active_side = Side::Left;
            debug!(cursor = self.cursor, "Flipped to left half");
            return true;
        }
        if self.cursor > 0 {
            self.turn = TurnState::Turning(Direction::Prev);
            debug!(cursor = self.cursor, "Turning to previous spread");
            true
        } else {
            false
        }
    }

    /// Commit a finished turn animation: the cursor moves by exactly one in
    /// the turn's direction and the machine returns to `Idle`. In single
    /// mode a forward turn lands on the left half and a backward turn on the
    /// right half, so the sub-step order stays continuous.
    pub fn finish_turn(&mut self) {
        match self.turn {
            TurnState::Turning(Direction::Next) => {
                self.cursor += 1;
                if self.mode == PageMode::Single {
                    self.active_side = Side::Left;
                }
            }
            TurnState::Turning(Direction::Prev) => {
                self.cursor = self.cursor.saturating_sub(1);
                if self.mode == PageMode::Single {
                    self.active_side = Side::Right;
                }
            }
            TurnState::Idle => {}
        }
        self.turn = TurnState::Idle;
        debug!(cursor = self.cursor, "Turn finished");
    }

    /// Jump straight to a cursor position (used after appending a page).
    /// Refused while a turn is in flight. Returns true on success.
    pub fn jump_to(&mut self, index: usize, len: usize) -> bool {
        if self.is_turning() || len == 0 {
            return false;
        }
        self.cursor = index.min(len - 1);
        self.active_side = Side::Left;
        debug!(cursor = self.cursor, "Jumped to spread");
        true
    }

    /// Viewport-driven mode switch. Any in-flight animation is abandoned so
    /// a turn never straddles two layouts.
    pub fn set_mode(&mut self, mode: PageMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.turn = TurnState::Idle;
        self.active_side = Side::Left;
        debug!(?mode, cursor = self.cursor, "Page mode changed");
    }

    /// Reset to the front of the book (closing the cover).
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.active_side = Side::Left;
        self.turn = TurnState::Idle;
    }
}

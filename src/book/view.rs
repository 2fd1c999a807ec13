//! Render projection of the session state.
//!
//! `Book::visible` flattens the cursor, turn state and access gate into the
//! exact faces a renderer draws, including the two-sided flipper sheet used
//! while a turn animates. The reducer mutates; this module only reads.

use super::state::Book;
use crate::pagination::{Direction, PageMode, Side, TurnState};

/// One drawable page: which entry it shows (if any) and its display number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlot {
    /// Index into [`Book::entries`], or `None` past the end of the book.
    pub entry_index: Option<usize>,
    /// 1-indexed number printed on the page.
    pub page_number: usize,
    /// Locked and not currently revealed: render the veil, not the content.
    pub concealed: bool,
}

/// A page bound to the side of the sheet it is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFace {
    pub slot: PageSlot,
    pub side: Side,
}

/// The animated sheet: its rotation direction plus both printed faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnFaces {
    pub direction: Direction,
    /// Face visible when the animation starts.
    pub front: PageFace,
    /// Face revealed as the sheet flips over.
    pub back: PageFace,
}

/// What the renderer should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleContent {
    /// Closed cover.
    Cover,
    /// Entries still being fetched.
    Loading,
    /// Wide layout: both static pages plus the flipper while turning.
    Spread {
        left: PageSlot,
        right: PageSlot,
        turn: Option<TurnFaces>,
    },
    /// Narrow layout: one page at a time.
    Single {
        page: PageSlot,
        side: Side,
        turn: Option<TurnFaces>,
    },
}

impl Book {
    /// Project the current state into drawable content.
    pub fn visible(&self) -> VisibleContent {
        if !self.is_open {
            return VisibleContent::Cover;
        }
        if self.loading {
            return VisibleContent::Loading;
        }
        match self.nav.mode() {
            PageMode::Spread => self.visible_spread(),
            PageMode::Single => self.visible_single(),
        }
    }

    fn visible_spread(&self) -> VisibleContent {
        let cursor = self.nav.cursor();
        match self.nav.turn() {
            TurnState::Idle => VisibleContent::Spread {
                left: self.slot(cursor, Side::Left),
                right: self.slot(cursor, Side::Right),
                turn: None,
            },
            TurnState::Turning(direction) => {
                let incoming = match self.nav.incoming_cursor() {
                    Some(incoming) => incoming,
                    None => return self.idle_spread(cursor),
                };
                // The flipper carries the outgoing right page on its front
                // face and the incoming left page on its back when turning
                // forward; mirrored when turning back.
                let (left, right, front, back) = match direction {
                    Direction::Next => (
                        self.slot(cursor, Side::Left),
                        self.slot(incoming, Side::Right),
                        self.slot(cursor, Side::Right),
                        self.slot(incoming, Side::Left),
                    ),
                    Direction::Prev => (
                        self.slot(incoming, Side::Left),
                        self.slot(cursor, Side::Right),
                        self.slot(incoming, Side::Right),
                        self.slot(cursor, Side::Left),
                    ),
                };
                VisibleContent::Spread {
                    left,
                    right,
                    turn: Some(TurnFaces {
                        direction,
                        front: PageFace { slot: front, side: Side::Right },
                        back: PageFace { slot: back, side: Side::Left },
                    }),
                }
            }
        }
    }

    fn idle_spread(&self, cursor: usize) -> VisibleContent {
        VisibleContent::Spread {
            left: self.slot(cursor, Side::Left),
            right: self.slot(cursor, Side::Right),
            turn: None,
        }
    }

    fn visible_single(&self) -> VisibleContent {
        let cursor = self.nav.cursor();
        let side = self.nav.active_side();
        let page = self.slot(cursor, side);
        let turn = match self.nav.turn() {
            TurnState::Idle => None,
            TurnState::Turning(direction) => self.nav.incoming_cursor().map(|incoming| {
                // Forward turns reveal the incoming spread's left half,
                // backward turns its right half.
                let incoming_side = match direction {
                    Direction::Next => Side::Left,
                    Direction::Prev => Side::Right,
                };
                TurnFaces {
                    direction,
                    front: PageFace { slot: page, side },
                    back: PageFace {
                        slot: self.slot(incoming, incoming_side),
                        side: incoming_side,
                    },
                }
            }),
        };
        VisibleContent::Single { page, side, turn }
    }

    fn slot(&self, index: usize, side: Side) -> PageSlot {
        let page_number = match side {
            Side::Left => index * 2 + 1,
            Side::Right => index * 2 + 2,
        };
        match self.entries.get(index) {
            Some(entry) => PageSlot {
                entry_index: Some(index),
                page_number,
                concealed: !self.gate.is_visible(entry),
            },
            None => PageSlot {
                entry_index: None,
                page_number,
                concealed: false,
            },
        }
    }
}

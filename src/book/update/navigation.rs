use tracing::info;

use super::super::state::Book;
use crate::entry::Entry;
use crate::pagination::Direction;

impl Book {
    pub(super) fn handle_open_book(&mut self) {
        self.is_open = true;
        info!("Book opened");
    }

    /// Closing the cover forgets the reading position: the next open starts
    /// from the first spread with no animation in flight.
    pub(super) fn handle_close_book(&mut self) {
        self.is_open = false;
        self.nav.reset();
        info!("Book closed");
    }

    pub(super) fn handle_next_page(&mut self) {
        if self.loading {
            return;
        }
        if self.nav.request_next(self.entries.len()) {
            info!(cursor = self.nav.cursor(), "Next page requested");
        }
    }

    pub(super) fn handle_previous_page(&mut self) {
        if self.loading {
            return;
        }
        if self.nav.request_prev(self.entries.len()) {
            info!(cursor = self.nav.cursor(), "Previous page requested");
        }
    }

    pub(super) fn handle_turn_finished(&mut self) {
        self.nav.finish_turn();
    }

    /// Append a blank page and move straight to it. Dropped while a turn is
    /// animating, like every other navigation input.
    pub(super) fn handle_add_page(&mut self) {
        if self.loading || self.nav.is_turning() {
            return;
        }
        let entry = Entry::blank();
        let id = entry.id;
        self.entries.push(entry);
        self.nav.jump_to(self.entries.len() - 1, self.entries.len());
        info!(%id, cursor = self.nav.cursor(), "Blank page appended");
    }

    pub(super) fn handle_touch_end(&mut self) {
        match self.swipe.touch_end() {
            Some(Direction::Next) => self.handle_next_page(),
            Some(Direction::Prev) => self.handle_previous_page(),
            None => {}
        }
    }

    pub(super) fn handle_viewport_resized(&mut self, width: f32) {
        let mode = self.mode_for_width(width);
        self.nav.set_mode(mode);
    }
}

use super::Effect;
use super::super::messages::Intent;
use super::super::state::Book;

impl Book {
    /// Apply one intent, mutating session state and returning the effects
    /// the host must execute.
    pub fn reduce(&mut self, intent: Intent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match intent {
            Intent::OpenBook => self.handle_open_book(),
            Intent::CloseBook => self.handle_close_book(),
            Intent::NextPage => self.handle_next_page(),
            Intent::PreviousPage => self.handle_previous_page(),
            Intent::TurnFinished => self.handle_turn_finished(),
            Intent::AddPage => self.handle_add_page(),
            Intent::TouchStart(x) => self.swipe.touch_start(x),
            Intent::TouchMove(x) => self.swipe.touch_move(x),
            Intent::TouchEnd => self.handle_touch_end(),
            Intent::ViewportResized { width } => self.handle_viewport_resized(width),
            Intent::EntryEdited { index, entry } => self.handle_entry_edited(index, entry),
            Intent::SaveRequested { index } => self.handle_save_requested(index, &mut effects),
            Intent::EntriesLoaded { entries } => self.handle_entries_loaded(entries),
            Intent::LoadFailed { error } => self.handle_load_failed(error, &mut effects),
            Intent::SaveFinished { id, result } => {
                self.handle_save_finished(id, result, &mut effects)
            }
            Intent::LockRequested { index, password } => {
                self.handle_lock_requested(index, &password, &mut effects)
            }
            Intent::UnlockAttempted { index, attempt } => {
                self.handle_unlock_attempted(index, &attempt, &mut effects)
            }
            Intent::RemoveLockRequested { index } => self.handle_remove_lock_requested(index),
            Intent::PhotoUploaded { index, url } => self.handle_photo_uploaded(index, url),
            Intent::SignatureCaptured { index, image_ref } => {
                self.handle_signature_captured(index, image_ref)
            }
        }

        effects
    }
}

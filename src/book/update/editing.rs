use tracing::{info, warn};
use uuid::Uuid;

use super::super::state::Book;
use super::{Effect, Notice};
use crate::entry::Entry;
use crate::store::StoreError;

impl Book {
    pub(super) fn handle_entry_edited(&mut self, index: usize, entry: Entry) {
        if let Some(slot) = self.entries.get_mut(index) {
            *slot = entry;
        }
    }

    pub(super) fn handle_entries_loaded(&mut self, entries: Vec<Entry>) {
        self.original_nicknames = entries
            .iter()
            .map(|entry| (entry.id, entry.nickname.clone()))
            .collect();
        info!(count = entries.len(), "Entries loaded");
        self.entries = entries;
        self.loading = false;
        self.load_error = None;
    }

    pub(super) fn handle_load_failed(&mut self, error: String, effects: &mut Vec<Effect>) {
        warn!(%error, "Failed to load entries");
        self.loading = false;
        self.load_error = Some(error);
        effects.push(Effect::Notify(Notice::Error(
            "Failed to load entries".to_string(),
        )));
    }

    /// Kick off a save. The empty-nickname check runs here as well as in the
    /// store, so an obviously invalid save never leaves the client.
    pub(super) fn handle_save_requested(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        if entry.normalized_nickname().is_empty() {
            effects.push(Effect::Notify(Notice::Error(
                "Nickname is required!".to_string(),
            )));
            return;
        }

        self.saving.insert(entry.id);
        effects.push(Effect::SaveEntry {
            index,
            entry: entry.clone(),
            previous_nickname: self.original_nicknames.get(&entry.id).cloned(),
        });
    }

    pub(super) fn handle_save_finished(
        &mut self,
        id: Uuid,
        result: Result<Entry, StoreError>,
        effects: &mut Vec<Effect>,
    ) {
        self.saving.remove(&id);
        let Some(index) = self.index_of(id) else {
            return;
        };

        match result {
            Ok(saved) => {
                // Local edits stay authoritative; only the rename baseline
                // moves to the nickname that is now persisted.
                self.original_nicknames.insert(id, saved.nickname.clone());
                info!(%id, nickname = %saved.nickname, "Entry saved");
                effects.push(Effect::Notify(Notice::Saved {
                    nickname: saved.nickname,
                }));
                self.post_save_hook(index, effects);
            }
            Err(err) => {
                warn!(%id, %err, "Save failed");
                effects.push(Effect::Notify(Notice::Error(err.to_string())));
            }
        }
    }

    /// Runs after every successful save. An already-locked page is resealed
    /// (the password must be re-entered before the next view); an unlocked
    /// page earns a one-time suggestion to add a lock.
    pub(super) fn post_save_hook(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        if entry.is_locked {
            self.gate.reseal(entry.id);
        } else {
            effects.push(Effect::PromptLock { index });
        }
    }

    pub(super) fn handle_lock_requested(
        &mut self,
        index: usize,
        password: &str,
        effects: &mut Vec<Effect>,
    ) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        if let Err(err) = self.gate.lock(entry, password) {
            effects.push(Effect::Notify(Notice::Error(err.to_string())));
        }
    }

    pub(super) fn handle_unlock_attempted(
        &mut self,
        index: usize,
        attempt: &str,
        effects: &mut Vec<Effect>,
    ) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        if !self.gate.unlock(entry, attempt) {
            effects.push(Effect::Notify(Notice::Error(
                "Wrong password".to_string(),
            )));
        }
    }

    pub(super) fn handle_remove_lock_requested(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            self.gate.remove_lock(entry);
        }
    }

    pub(super) fn handle_photo_uploaded(&mut self, index: usize, url: String) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.photo_url = Some(url);
        }
    }

    pub(super) fn handle_signature_captured(&mut self, index: usize, image_ref: String) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.signature = Some(image_ref);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Intent;
    use super::super::super::state::Book;
    use super::{Effect, Notice};
    use crate::config::AppConfig;
    use crate::entry::Entry;
    use crate::store::StoreError;

    fn named(nickname: &str) -> Entry {
        let mut entry = Entry::blank();
        entry.nickname = nickname.to_string();
        entry
    }

    fn loaded_book(entries: Vec<Entry>) -> Book {
        let (mut book, _effects) = Book::bootstrap(AppConfig::default());
        book.reduce(Intent::EntriesLoaded { entries });
        book
    }

    #[test]
    fn save_request_carries_the_original_nickname() {
        let mut book = loaded_book(vec![named("ann")]);
        let id = book.entry(0).expect("entry").id;

        // Rename locally, then save.
        let mut edited = book.entry(0).expect("entry").clone();
        edited.nickname = "annie".to_string();
        book.reduce(Intent::EntryEdited { index: 0, entry: edited });

        let effects = book.reduce(Intent::SaveRequested { index: 0 });
        match &effects[..] {
            [Effect::SaveEntry { index, entry, previous_nickname }] => {
                assert_eq!(*index, 0);
                assert_eq!(entry.nickname, "annie");
                assert_eq!(previous_nickname.as_deref(), Some("ann"));
            }
            other => panic!("expected a single SaveEntry effect, got {other:?}"),
        }
        assert!(book.is_saving(id));
    }

    #[test]
    fn fresh_page_saves_without_a_previous_nickname() {
        let mut book = loaded_book(vec![named("ann")]);
        book.reduce(Intent::OpenBook);
        book.reduce(Intent::AddPage);

        let mut edited = book.entry(1).expect("blank entry").clone();
        edited.nickname = "bob".to_string();
        book.reduce(Intent::EntryEdited { index: 1, entry: edited });

        let effects = book.reduce(Intent::SaveRequested { index: 1 });
        match &effects[..] {
            [Effect::SaveEntry { previous_nickname, .. }] => {
                assert_eq!(previous_nickname.as_deref(), None);
            }
            other => panic!("expected a single SaveEntry effect, got {other:?}"),
        }
    }

    #[test]
    fn empty_nickname_never_reaches_the_store() {
        let mut book = loaded_book(vec![named("  ")]);
        let effects = book.reduce(Intent::SaveRequested { index: 0 });
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Error("Nickname is required!".to_string()))]
        );
    }

    #[test]
    fn successful_save_of_unlocked_page_prompts_for_a_lock() {
        let mut book = loaded_book(vec![named("ann")]);
        let id = book.entry(0).expect("entry").id;
        book.reduce(Intent::SaveRequested { index: 0 });

        let saved = book.entry(0).expect("entry").clone();
        let effects = book.reduce(Intent::SaveFinished { id, result: Ok(saved) });

        assert!(!book.is_saving(id));
        assert!(effects.contains(&Effect::PromptLock { index: 0 }));
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify(Notice::Saved { nickname }) if nickname == "ann"
        )));
    }

    #[test]
    fn saving_a_locked_revealed_page_reseals_it() {
        let mut book = loaded_book(vec![named("ann")]);
        let id = book.entry(0).expect("entry").id;

        book.reduce(Intent::LockRequested { index: 0, password: "p".to_string() });
        assert!(book.reduce(Intent::UnlockAttempted { index: 0, attempt: "p".to_string() })
            .is_empty());
        let entry = book.entry(0).expect("entry");
        assert!(book.gate().is_visible(entry), "revealed before the save");

        book.reduce(Intent::SaveRequested { index: 0 });
        let saved = book.entry(0).expect("entry").clone();
        let effects = book.reduce(Intent::SaveFinished { id, result: Ok(saved) });

        let entry = book.entry(0).expect("entry");
        assert!(
            !book.gate().is_visible(entry),
            "a save must re-require the password for a locked page"
        );
        assert!(
            !effects.contains(&Effect::PromptLock { index: 0 }),
            "already-locked pages are not prompted again"
        );
    }

    #[test]
    fn conflict_keeps_local_edits_and_notifies() {
        let mut book = loaded_book(vec![named("ann")]);
        let id = book.entry(0).expect("entry").id;

        let mut edited = book.entry(0).expect("entry").clone();
        edited.nickname = "bob".to_string();
        edited.message = "kept locally".to_string();
        book.reduce(Intent::EntryEdited { index: 0, entry: edited });
        book.reduce(Intent::SaveRequested { index: 0 });

        let effects = book.reduce(Intent::SaveFinished {
            id,
            result: Err(StoreError::NicknameTaken { nickname: "bob".to_string() }),
        });

        let entry = book.entry(0).expect("entry");
        assert_eq!(entry.nickname, "bob", "the user can edit and retry");
        assert_eq!(entry.message, "kept locally");
        assert!(!book.is_saving(id));
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::Notify(Notice::Error(msg)) if msg.contains("bob")
        )));
    }

    #[test]
    fn wrong_unlock_attempt_notifies_and_stays_hidden() {
        let mut book = loaded_book(vec![named("ann")]);
        book.reduce(Intent::LockRequested { index: 0, password: "p".to_string() });

        let effects =
            book.reduce(Intent::UnlockAttempted { index: 0, attempt: "wrong".to_string() });
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::Error("Wrong password".to_string()))]
        );
        let entry = book.entry(0).expect("entry");
        assert!(!book.gate().is_visible(entry));
    }

    #[test]
    fn empty_lock_password_is_surfaced() {
        let mut book = loaded_book(vec![named("ann")]);
        let effects =
            book.reduce(Intent::LockRequested { index: 0, password: String::new() });
        assert!(matches!(&effects[..], [Effect::Notify(Notice::Error(_))]));
        assert!(!book.entry(0).expect("entry").is_locked);
    }

    #[test]
    fn remove_lock_clears_state_without_touching_reveals() {
        let mut book = loaded_book(vec![named("ann")]);
        book.reduce(Intent::LockRequested { index: 0, password: "p".to_string() });
        book.reduce(Intent::RemoveLockRequested { index: 0 });

        let entry = book.entry(0).expect("entry");
        assert!(!entry.is_locked);
        assert!(entry.password.is_empty());
        assert!(book.gate().is_visible(entry));
    }

    #[test]
    fn media_results_patch_the_entry_in_place() {
        let mut book = loaded_book(vec![named("ann")]);
        book.reduce(Intent::PhotoUploaded {
            index: 0,
            url: "https://cdn.test/a.jpg".to_string(),
        });
        book.reduce(Intent::SignatureCaptured {
            index: 0,
            image_ref: "sig-blob-1".to_string(),
        });

        let entry = book.entry(0).expect("entry");
        assert_eq!(entry.photo_url.as_deref(), Some("https://cdn.test/a.jpg"));
        assert_eq!(entry.signature.as_deref(), Some("sig-blob-1"));
    }

    #[test]
    fn load_failure_keeps_the_error_for_rendering() {
        let (mut book, _effects) = Book::bootstrap(AppConfig::default());
        let effects = book.reduce(Intent::LoadFailed { error: "connection refused".to_string() });

        assert!(!book.is_loading());
        assert_eq!(book.load_error(), Some("connection refused"));
        assert!(matches!(&effects[..], [Effect::Notify(Notice::Error(_))]));
    }
}

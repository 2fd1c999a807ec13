//! The reducer and its effects.

mod editing;
mod navigation;
mod reducer;

use crate::entry::Entry;

/// Work the host shell performs outside the pure reducer. Store and media
/// calls come back as intents (`EntriesLoaded`, `SaveFinished`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load every entry from the store.
    FetchEntries,
    /// Persist one entry, carrying the nickname it was last saved under.
    SaveEntry {
        index: usize,
        entry: Entry,
        previous_nickname: Option<String>,
    },
    /// Surface a message through the host's notification layer.
    Notify(Notice),
    /// Suggest locking a freshly saved, still-unlocked page.
    PromptLock { index: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Saved { nickname: String },
    Error(String),
}

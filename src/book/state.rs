//! Session state owned by the book controller.

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::update::Effect;
use crate::access::AccessGate;
use crate::config::AppConfig;
use crate::entry::Entry;
use crate::gesture::SwipeTracker;
use crate::pagination::{PageMode, PaginationEngine};

/// The top-level controller: the entry sequence, the pagination engine, the
/// access gate and the bookkeeping the save flow needs. All of it is
/// explicit, per-session state; nothing here survives a reload.
pub struct Book {
    pub(super) entries: Vec<Entry>,
    pub(super) nav: PaginationEngine,
    pub(super) gate: AccessGate,
    pub(super) swipe: SwipeTracker,
    /// Nickname each entry was last saved under, for rename detection.
    pub(super) original_nicknames: HashMap<Uuid, String>,
    /// Entries with a save in flight. A render hint only: a second save of
    /// the same entry is not prevented, the store resolves it last-write-wins.
    pub(super) saving: HashSet<Uuid>,
    pub(super) is_open: bool,
    pub(super) loading: bool,
    pub(super) load_error: Option<String>,
    pub(super) config: AppConfig,
}

impl Book {
    /// Construct the session and kick off the initial entry fetch.
    pub fn bootstrap(config: AppConfig) -> (Book, Vec<Effect>) {
        let book = Book {
            entries: Vec::new(),
            nav: PaginationEngine::new(PageMode::Spread),
            gate: AccessGate::new(),
            swipe: SwipeTracker::new(config.min_swipe_distance),
            original_nicknames: HashMap::new(),
            saving: HashSet::new(),
            is_open: false,
            loading: true,
            load_error: None,
            config,
        };
        (book, vec![Effect::FetchEntries])
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn nav(&self) -> &PaginationEngine {
        &self.nav
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_saving(&self, id: Uuid) -> bool {
        self.saving.contains(&id)
    }

    pub(super) fn mode_for_width(&self, width: f32) -> PageMode {
        if width < self.config.single_page_breakpoint {
            PageMode::Single
        } else {
            PageMode::Spread
        }
    }

    pub(super) fn index_of(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

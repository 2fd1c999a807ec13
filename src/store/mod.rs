//! Entry persistence.
//!
//! The store doubles as the uniqueness index: records are addressed by
//! normalized nickname, so "is this nickname taken" and "fetch this entry"
//! are the same lookup. The cost is that a rename touches two keys; see
//! [`EntryStore::save`] for the exact sequence.

mod memory;
mod remote;

pub use memory::MemoryStore;
pub use remote::RemoteStore;

use thiserror::Error;

use crate::entry::Entry;

/// Failure taxonomy for store operations. `Clone` so results can travel
/// through the controller's intent channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The nickname normalized to the empty string; nothing was persisted.
    #[error("nickname is required")]
    EmptyNickname,
    /// Another entry already owns the normalized nickname; nothing changed.
    #[error("nickname \"{nickname}\" is already taken")]
    NicknameTaken { nickname: String },
    /// The backing store could not be reached or answered with a failure.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Repository of entries keyed by normalized nickname.
///
/// Single-threaded cooperative model: implementations take `&self` and use
/// interior mutability where they need it. Operations are fallible and are
/// never retried here; the caller surfaces failures and keeps local edits so
/// the user can retry.
pub trait EntryStore {
    /// Every persisted entry, in no guaranteed order. Ordering for display
    /// is the caller's concern.
    fn list_all(&self) -> Result<Vec<Entry>, StoreError>;

    /// Persist an entry under its normalized nickname.
    ///
    /// `previous_nickname` is the nickname the entry was last saved under,
    /// absent for a first save. The sequence is:
    ///
    /// 1. reject an empty normalized nickname;
    /// 2. if the entry is new or its key changed, a record already under the
    ///    new key is a conflict and nothing is mutated;
    /// 3. on a key change, the old record is removed;
    /// 4. the entry is written under the new key (overwriting only when the
    ///    key did not change).
    ///
    /// Steps 3 and 4 are not one transaction against a remote backing store:
    /// a crash between them can strand the rename. Local implementations do
    /// both under a single lock.
    fn save(&self, entry: &Entry, previous_nickname: Option<&str>) -> Result<Entry, StoreError>;
}

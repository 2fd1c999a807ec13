//! Intents dispatched by the host UI.

use uuid::Uuid;

use crate::entry::Entry;
use crate::store::StoreError;

/// Everything the rendering shell can ask the book to do, plus the
/// completions it feeds back after executing effects (store calls, media
/// uploads, the turn animation).
#[derive(Debug, Clone)]
pub enum Intent {
    OpenBook,
    CloseBook,
    NextPage,
    PreviousPage,
    /// The host's turn animation reached its end.
    TurnFinished,
    AddPage,
    TouchStart(f32),
    TouchMove(f32),
    TouchEnd,
    ViewportResized {
        width: f32,
    },
    EntryEdited {
        index: usize,
        entry: Entry,
    },
    SaveRequested {
        index: usize,
    },
    EntriesLoaded {
        entries: Vec<Entry>,
    },
    LoadFailed {
        error: String,
    },
    SaveFinished {
        id: Uuid,
        result: Result<Entry, StoreError>,
    },
    LockRequested {
        index: usize,
        password: String,
    },
    UnlockAttempted {
        index: usize,
        attempt: String,
    },
    RemoveLockRequested {
        index: usize,
    },
    PhotoUploaded {
        index: usize,
        url: String,
    },
    SignatureCaptured {
        index: usize,
        image_ref: String,
    },
}

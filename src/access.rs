//! Per-entry lock state and the session-local reveal set.
//!
//! Locking hashes the chosen password with Argon2id (random salt, PHC string
//! format) into the entry's `password` field; plaintext is never stored.
//! Unlocking verifies through the argon2 verifier, which compares in
//! constant time. The `revealed` set lives only for the session: reloading
//! the book always re-requires passwords for locked pages.
//!
//! There is deliberately no attempt limit or backoff on `unlock`; callers
//! get unlimited retries.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::entry::Entry;

#[derive(Debug, Clone, Error)]
pub enum AccessError {
    #[error("a password is required to lock a page")]
    EmptyPassword,
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// Session-scoped visibility gate over locked entries.
#[derive(Debug, Default)]
pub struct AccessGate {
    revealed: HashSet<Uuid>,
}

impl AccessGate {
    pub fn new() -> Self {
        AccessGate::default()
    }

    /// Lock an entry behind a password. A freshly locked page is immediately
    /// hidden, so the id is dropped from the reveal set as well.
    pub fn lock(&mut self, entry: &mut Entry, password: &str) -> Result<(), AccessError> {
        if password.is_empty() {
            return Err(AccessError::EmptyPassword);
        }
        entry.password = hash_password(password)?;
        entry.is_locked = true;
        self.revealed.remove(&entry.id);
        debug!(id = %entry.id, "Page locked");
        Ok(())
    }

    /// Try a password against a locked entry. On a match the entry becomes
    /// visible for the rest of the session; on a mismatch the reveal set is
    /// untouched.
    pub fn unlock(&mut self, entry: &Entry, attempt: &str) -> bool {
        if verify_password(&entry.password, attempt) {
            self.revealed.insert(entry.id);
            debug!(id = %entry.id, "Page revealed");
            true
        } else {
            warn!(id = %entry.id, "Wrong password for locked page");
            false
        }
    }

    /// Remove the lock entirely. The reveal set is left alone; an id that
    /// stays in it is harmless once the entry is unlocked.
    pub fn remove_lock(&mut self, entry: &mut Entry) {
        entry.is_locked = false;
        entry.password.clear();
        debug!(id = %entry.id, "Lock removed");
    }

    /// Whether the entry's content may be rendered this session.
    pub fn is_visible(&self, entry: &Entry) -> bool {
        !entry.is_locked || self.revealed.contains(&entry.id)
    }

    /// Drop an id from the reveal set. The controller calls this after every
    /// successful save of an already-locked entry, so the page re-requires
    /// its password on the next view.
    pub fn reseal(&mut self, id: Uuid) {
        self.revealed.remove(&id);
    }
}

fn hash_password(password: &str) -> Result<String, AccessError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AccessError::Hash(err.to_string()))
}

fn verify_password(stored_hash: &str, attempt: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(attempt.as_bytes(), &parsed)
        .is_ok()
}

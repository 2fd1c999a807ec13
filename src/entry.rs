//! The entry data model.
//!
//! One `Entry` is one contributor's page-pair in the book. The nickname is
//! the natural key: the store addresses records by its normalized form, so
//! comparison and storage must always go through [`normalize_nickname`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stickers seeded onto a freshly added page.
pub const DEFAULT_STICKERS: [&str; 2] = ["\u{2728}", "\u{1F388}"];

/// Lower-case and trim a nickname for key comparison and storage.
pub fn normalize_nickname(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The "favorites" card on the left page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Favorites {
    pub color: String,
    pub food: String,
    pub song: String,
    pub hobby: String,
}

/// One contributor's page-pair.
///
/// All free-text fields may be empty; only the nickname must be non-empty
/// (after normalization) for the entry to persist. When `is_locked` is true,
/// `password` holds an Argon2id PHC hash and the page content is concealed
/// unless the entry id is in the session's revealed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entry {
    pub id: Uuid,
    pub nickname: String,
    pub name: String,
    pub zodiac: String,
    pub mobile_number: String,
    pub favorites: Favorites,
    pub school_memory: String,
    pub embarrassing_moment: String,
    pub future_goal: String,
    pub dream_vacation: String,
    pub best_advice: String,
    pub observation: String,
    pub secret_message: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub stickers: Vec<String>,
    pub is_locked: bool,
    pub password: String,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            id: Uuid::nil(),
            nickname: String::new(),
            name: String::new(),
            zodiac: String::new(),
            mobile_number: String::new(),
            favorites: Favorites::default(),
            school_memory: String::new(),
            embarrassing_moment: String::new(),
            future_goal: String::new(),
            dream_vacation: String::new(),
            best_advice: String::new(),
            observation: String::new(),
            secret_message: String::new(),
            message: String::new(),
            photo_url: None,
            signature: None,
            stickers: Vec::new(),
            is_locked: false,
            password: String::new(),
        }
    }
}

impl Entry {
    /// A fresh, unsaved entry with a newly generated id and default stickers.
    pub fn blank() -> Self {
        Entry {
            id: Uuid::new_v4(),
            stickers: DEFAULT_STICKERS.iter().map(|s| s.to_string()).collect(),
            ..Entry::default()
        }
    }

    /// The storage key for this entry's current nickname.
    pub fn normalized_nickname(&self) -> String {
        normalize_nickname(&self.nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lowercases_and_trims() {
        assert_eq!(normalize_nickname("  Ann "), "ann");
        assert_eq!(normalize_nickname("BOB"), "bob");
        assert_eq!(normalize_nickname("   "), "");
    }

    #[test]
    fn blank_entries_get_unique_ids() {
        let a = Entry::blank();
        let b = Entry::blank();
        assert_ne!(a.id, b.id, "each new page must get its own id");
        assert!(!a.is_locked);
        assert!(a.password.is_empty());
        assert_eq!(a.stickers.len(), DEFAULT_STICKERS.len());
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let mut entry = Entry::blank();
        entry.nickname = "ann".to_string();
        entry.photo_url = Some("https://example.test/p.jpg".to_string());
        entry.school_memory = "field trip".to_string();

        let json = serde_json::to_value(&entry).expect("entry serializes");
        assert!(json.get("photoUrl").is_some());
        assert!(json.get("schoolMemory").is_some());
        assert!(json.get("isLocked").is_some());
        assert!(json.get("photo_url").is_none());
    }

    #[test]
    fn missing_wire_fields_fall_back_to_defaults() {
        let json = r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","nickname":"ann"}"#;
        let entry: Entry = serde_json::from_str(json).expect("partial entry parses");
        assert_eq!(entry.nickname, "ann");
        assert!(entry.message.is_empty());
        assert!(!entry.is_locked);
        assert!(entry.photo_url.is_none());
    }
}

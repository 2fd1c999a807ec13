//! HTTP entry store client.
//!
//! Speaks the existing endpoint's JSON protocol: `GET {base}/entries` returns
//! `{"entries": [...]}`; `POST {base}/entries` takes `{"entry": ...,
//! "oldNickname": ...}` and distinguishes a taken nickname with HTTP 409.
//! Calls are blocking and are expected to run off the reducer; the
//! controller only ever sees the results as intents. No retries, no
//! escalation beyond surfacing the failure.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::{EntryStore, StoreError};
use crate::config::AppConfig;
use crate::entry::Entry;

#[derive(Debug, Serialize, Deserialize)]
struct EntriesPayload {
    entries: Vec<Entry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavePayload {
    entry: Entry,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_nickname: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SavedPayload {
    entry: Entry,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
}

pub struct RemoteStore {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl RemoteStore {
    pub fn new(config: &AppConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(RemoteStore {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    fn entries_url(&self) -> String {
        format!("{}/entries", self.base_url)
    }

    fn error_from_response(response: reqwest::blocking::Response) -> StoreError {
        let status = response.status();
        let message = response
            .json::<ErrorPayload>()
            .map(|payload| payload.error)
            .unwrap_or_else(|_| format!("unexpected status {status}"));
        warn!(%status, %message, "Entry endpoint returned an error");
        StoreError::Unavailable(message)
    }
}

impl EntryStore for RemoteStore {
    fn list_all(&self) -> Result<Vec<Entry>, StoreError> {
        let response = self
            .client
            .get(self.entries_url())
            .bearer_auth(&self.anon_key)
            .send()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response));
        }

        let payload: EntriesPayload = response
            .json()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        debug!(count = payload.entries.len(), "Fetched entries");
        Ok(payload.entries)
    }

    fn save(&self, entry: &Entry, previous_nickname: Option<&str>) -> Result<Entry, StoreError> {
        // Validated before any round trip; the server enforces it as well.
        if entry.normalized_nickname().is_empty() {
            return Err(StoreError::EmptyNickname);
        }

        let payload = SavePayload {
            entry: entry.clone(),
            old_nickname: previous_nickname.map(str::to_string),
        };
        let response = self
            .client
            .post(self.entries_url())
            .bearer_auth(&self.anon_key)
            .json(&payload)
            .send()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        match response.status() {
            StatusCode::CONFLICT => Err(StoreError::NicknameTaken {
                nickname: entry.nickname.clone(),
            }),
            StatusCode::BAD_REQUEST => Err(StoreError::EmptyNickname),
            status if status.is_success() => {
                let saved: SavedPayload = response
                    .json()
                    .map_err(|err| StoreError::Unavailable(err.to_string()))?;
                debug!(key = %saved.entry.normalized_nickname(), "Entry saved remotely");
                Ok(saved.entry)
            }
            _ => Err(Self::error_from_response(response)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_payload_carries_old_nickname_in_camel_case() {
        let mut entry = Entry::blank();
        entry.nickname = "annie".to_string();
        let payload = SavePayload {
            entry,
            old_nickname: Some("ann".to_string()),
        };

        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(json["oldNickname"], "ann");
        assert_eq!(json["entry"]["nickname"], "annie");
    }

    #[test]
    fn first_save_omits_old_nickname() {
        let payload = SavePayload {
            entry: Entry::blank(),
            old_nickname: None,
        };
        let json = serde_json::to_value(&payload).expect("payload serializes");
        assert!(json.get("oldNickname").is_none());
    }

    #[test]
    fn entries_payload_parses_endpoint_shape() {
        let body = r#"{"entries":[
            {"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","nickname":"ann","isLocked":false},
            {"id":"8c36f5a2-2f5f-4a37-9e08-0d1c5a3f7a11","nickname":"bob","isLocked":true,
             "password":"$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAAAAAAAAA"}
        ]}"#;
        let payload: EntriesPayload = serde_json::from_str(body).expect("endpoint shape parses");
        assert_eq!(payload.entries.len(), 2);
        assert!(payload.entries[1].is_locked);
    }

    #[test]
    fn empty_nickname_fails_before_any_request() {
        let config = AppConfig::default();
        let store = RemoteStore::new(&config).expect("client builds");
        let err = store.save(&Entry::blank(), None).expect_err("validation is client-side");
        assert_eq!(err, StoreError::EmptyNickname);
    }
}

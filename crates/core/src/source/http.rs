use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::EntrySource;
use crate::errors::CoreError;
use crate::models::entry::WeightEntry;

const GET_ENTRIES_PATH: &str = "/weight-tracker/server/get_weight_entries.php";
const ADD_ENTRY_PATH: &str = "/weight-tracker/server/add_weight_entry.php";

/// HTTP entry source speaking the weight-tracker server protocol:
///
/// - GET `get_weight_entries.php` → JSON array of `{dt, lbs, notes}` rows.
/// - POST `add_weight_entry.php` with one such object → the stored row
///   echoed back.
/// - Either endpoint reports failure in-band, as a bare JSON *string*
///   starting with `error` instead of the expected shape.
pub struct HttpEntrySource {
    client: Client,
    base_url: String,
}

impl HttpEntrySource {
    /// `base_url` is the server root, e.g. `https://example.com`; the
    /// endpoint paths are fixed by the server.
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The in-band failure shape: a JSON string `"error|<reason>"`.
    fn error_payload(body: &Value) -> Option<&str> {
        body.as_str().filter(|s| s.starts_with("error"))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EntrySource for HttpEntrySource {
    fn name(&self) -> &str {
        "WeightTracker Server"
    }

    async fn fetch_entries(&self) -> Result<Vec<WeightEntry>, CoreError> {
        let url = self.endpoint(GET_ENTRIES_PATH);

        let body: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: GET_ENTRIES_PATH.into(),
                message: format!("Failed to parse entry list: {e}"),
            })?;

        if let Some(message) = Self::error_payload(&body) {
            return Err(CoreError::Api {
                endpoint: GET_ENTRIES_PATH.into(),
                message: message.to_string(),
            });
        }

        serde_json::from_value(body).map_err(|e| {
            CoreError::Deserialization(format!("Entry list did not match the wire shape: {e}"))
        })
    }

    async fn upsert_entry(&self, entry: &WeightEntry) -> Result<WeightEntry, CoreError> {
        let url = self.endpoint(ADD_ENTRY_PATH);

        let body: Value = self
            .client
            .post(&url)
            .json(entry)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                endpoint: ADD_ENTRY_PATH.into(),
                message: format!("Failed to parse upsert response: {e}"),
            })?;

        if let Some(message) = Self::error_payload(&body) {
            return Err(CoreError::Api {
                endpoint: ADD_ENTRY_PATH.into(),
                message: message.to_string(),
            });
        }

        serde_json::from_value(body).map_err(|e| {
            CoreError::Deserialization(format!("Upsert echo did not match the wire shape: {e}"))
        })
    }
}

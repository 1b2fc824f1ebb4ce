//! HTTP client for the remote settings record

use reqwest::{Client, StatusCode};
use serde::Serialize;
use shared::models::settings::SETTINGS_RECORD_ID;
use shared::models::{SettingsRecord, SettingsUpdate};
use shared::{AppError, AppResult};

use super::SettingsGateway;
use async_trait::async_trait;

/// Gateway backed by a plain JSON REST API
///
/// `GET {base}/settings/1` reads the record, `PUT` insert-or-replaces it.
pub struct HttpSettingsGateway {
    client: Client,
    base_url: String,
}

/// Upsert body: the fixed record id plus whichever fields are being set
#[derive(Serialize)]
struct UpsertBody<'a> {
    id: &'a str,
    #[serde(flatten)]
    update: &'a SettingsUpdate,
}

impl HttpSettingsGateway {
    /// Create a gateway against `base_url` (no trailing slash)
    pub fn new(base_url: String) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    fn record_url(&self) -> String {
        format!("{}/settings/{SETTINGS_RECORD_ID}", self.base_url)
    }
}

#[async_trait]
impl SettingsGateway for HttpSettingsGateway {
    async fn fetch(&self) -> AppResult<Option<SettingsRecord>> {
        let response = self
            .client
            .get(self.record_url())
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Settings fetch failed: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::remote(format!(
                "Settings fetch failed with status {status}: {body}"
            )));
        }

        let record: SettingsRecord = response
            .json()
            .await
            .map_err(|e| AppError::remote(format!("Failed to parse settings record: {e}")))?;

        Ok(Some(record))
    }

    async fn upsert(&self, update: &SettingsUpdate) -> AppResult<()> {
        let body = UpsertBody {
            id: SETTINGS_RECORD_ID,
            update,
        };

        let response = self
            .client
            .put(self.record_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::remote(format!("Settings upsert failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::remote(format!(
                "Settings upsert failed with status {status}: {body}"
            )));
        }

        Ok(())
    }
}

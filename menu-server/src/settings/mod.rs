//! Remote settings synchronization
//!
//! The settings record is a fail-soft dependency: reads and writes are
//! attempted exactly once, failures are logged and never surfaced to the
//! mutation path. Writes are two-phase: the store commits locally first,
//! then [`SettingsSync::push`] fires a detached upsert.
//!
//! Overlapping fetches carry a monotonic request id; a response whose id
//! is no longer the newest is discarded instead of clobbering fresher
//! data.

mod client;

pub use client::HttpSettingsGateway;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::AppResult;
use shared::models::{SettingsRecord, SettingsUpdate, StoreSettings};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::MenuStore;

/// Access to the remote settings record (point read + partial upsert)
#[async_trait]
pub trait SettingsGateway: Send + Sync {
    /// Read the record by its fixed key, `None` when it does not exist yet
    async fn fetch(&self) -> AppResult<Option<SettingsRecord>>;

    /// Insert-or-replace the record fields present in `update`
    async fn upsert(&self, update: &SettingsUpdate) -> AppResult<()>;
}

/// Reconciles the store's settings with the remote record
pub struct SettingsSync {
    gateway: Arc<dyn SettingsGateway>,
    refresh_seq: AtomicU64,
}

impl SettingsSync {
    pub fn new(gateway: Arc<dyn SettingsGateway>) -> Self {
        Self {
            gateway,
            refresh_seq: AtomicU64::new(0),
        }
    }

    /// Fetch the remote record and apply it to the store
    ///
    /// Missing fields substitute the documented defaults; a fetch failure
    /// or an absent record leaves local state untouched. Returns the
    /// settings in effect afterwards.
    pub async fn refresh(&self, store: &Arc<RwLock<MenuStore>>) -> StoreSettings {
        let seq = self.begin_refresh();
        let result = self.gateway.fetch().await;
        self.complete_refresh(seq, result, store);
        store.read().settings().clone()
    }

    /// Commit `update` locally and fire a detached remote upsert
    ///
    /// The remote write is best-effort: one attempt, failure logged, local
    /// state never rolled back.
    pub fn push(&self, store: &Arc<RwLock<MenuStore>>, update: SettingsUpdate) {
        if update.is_empty() {
            return;
        }

        {
            let mut store = store.write();
            if let Some(number) = update.whatsapp_number.clone() {
                store.set_whatsapp_number(number);
            }
            if let Some(open) = update.is_menu_open {
                store.set_is_menu_open(open);
            }
        }

        let gateway = Arc::clone(&self.gateway);
        tokio::spawn(async move {
            if let Err(e) = gateway.upsert(&update).await {
                tracing::warn!(error = %e, "Settings upsert failed, keeping local state");
            }
        });
    }

    /// Allocate the request id for a refresh
    fn begin_refresh(&self) -> u64 {
        self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a fetch result, discarding it when a newer refresh started
    fn complete_refresh(
        &self,
        seq: u64,
        result: AppResult<Option<SettingsRecord>>,
        store: &Arc<RwLock<MenuStore>>,
    ) {
        match result {
            Ok(Some(record)) => {
                // The seq check happens under the store lock so a refresh
                // starting in between cannot be overwritten by this one
                let mut store = store.write();
                if self.refresh_seq.load(Ordering::SeqCst) != seq {
                    tracing::debug!(seq, "Discarded stale settings fetch");
                    return;
                }
                store.apply_settings(record.into_settings());
                tracing::debug!(seq, "Settings refreshed from remote");
            }
            Ok(None) => {
                tracing::debug!(seq, "No remote settings record yet, keeping local state");
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "Settings fetch failed, keeping local state");
            }
        }
    }
}

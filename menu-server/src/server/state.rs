//! Shared application state

use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

use crate::catalog;
use crate::config::Config;
use crate::settings::{HttpSettingsGateway, SettingsGateway, SettingsSync};
use crate::store::{MenuStore, SessionStorage};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<RwLock<MenuStore>>,
    pub settings_sync: Arc<SettingsSync>,
    pub config: Arc<Config>,
}

impl ServerState {
    /// Open storage, load the persisted session and wire the settings sync
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let storage = SessionStorage::open(Path::new(&config.work_dir).join("menu.redb"))?;
        let store = Arc::new(RwLock::new(MenuStore::open(storage, catalog::menu_items())));

        let gateway = HttpSettingsGateway::new(config.settings_api_url.clone())?;
        let settings_sync = Arc::new(SettingsSync::new(Arc::new(gateway)));

        tracing::info!(
            items = store.read().menu_items().len(),
            cart = store.read().cart().len(),
            "Store initialized"
        );

        Ok(Self {
            store,
            settings_sync,
            config: Arc::new(config.clone()),
        })
    }

    /// Assemble state from pre-built parts (tests use a mock gateway)
    pub fn with_parts(
        store: MenuStore,
        gateway: Arc<dyn SettingsGateway>,
        config: Config,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            settings_sync: Arc::new(SettingsSync::new(gateway)),
            config: Arc::new(config),
        }
    }

    /// Kick off the startup settings refresh
    pub fn start_background_tasks(&self) {
        let sync = Arc::clone(&self.settings_sync);
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            sync.refresh(&store).await;
        });
    }
}

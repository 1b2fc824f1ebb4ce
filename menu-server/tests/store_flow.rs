//! End-to-end store flow: seed, cart, order link, restart, settings sync

use async_trait::async_trait;
use menu_server::catalog;
use menu_server::order::build_order;
use menu_server::settings::{SettingsGateway, SettingsSync};
use menu_server::store::{MenuFilter, MenuStore, SessionStorage, filter_items};
use parking_lot::RwLock;
use shared::AppResult;
use shared::models::settings::SETTINGS_RECORD_ID;
use shared::models::{Language, SettingsRecord, SettingsUpdate};
use std::sync::{Arc, Mutex};

/// Gateway double: one canned fetch result, upserts recorded
struct RecordingGateway {
    fetch_result: Mutex<Option<SettingsRecord>>,
    upserts: Mutex<Vec<SettingsUpdate>>,
}

impl RecordingGateway {
    fn with_record(record: Option<SettingsRecord>) -> Arc<Self> {
        Arc::new(Self {
            fetch_result: Mutex::new(record),
            upserts: Mutex::new(vec![]),
        })
    }
}

#[async_trait]
impl SettingsGateway for RecordingGateway {
    async fn fetch(&self) -> AppResult<Option<SettingsRecord>> {
        Ok(self.fetch_result.lock().unwrap().clone())
    }

    async fn upsert(&self, update: &SettingsUpdate) -> AppResult<()> {
        self.upserts.lock().unwrap().push(update.clone());
        Ok(())
    }
}

#[tokio::test]
async fn customer_order_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.redb");

    let gateway = RecordingGateway::with_record(Some(SettingsRecord {
        id: SETTINGS_RECORD_ID.into(),
        whatsapp_number: Some("03123456".into()),
        is_menu_open: Some(true),
    }));
    let sync = SettingsSync::new(gateway.clone());

    // First session: browse, fill the cart, build the order link
    {
        let storage = SessionStorage::open(&path).unwrap();
        let store = Arc::new(RwLock::new(MenuStore::open(storage, catalog::menu_items())));

        sync.refresh(&store).await;
        assert_eq!(store.read().settings().whatsapp_number, "03123456");

        {
            let mut store = store.write();
            store.set_language(Language::En);

            let saj_chicken = store.find_menu_item("saj-chicken").cloned().unwrap();
            let ayran = store.find_menu_item("drink-ayran").cloned().unwrap();
            store.add_to_cart(saj_chicken.clone());
            store.add_to_cart(saj_chicken);
            store.add_to_cart(ayran);
        }

        let store = store.read();
        assert_eq!(store.cart().len(), 2);
        assert_eq!(store.cart()[0].quantity, 2);

        let link = build_order(
            store.cart(),
            store.language(),
            Some("7"),
            &store.settings().whatsapp_number,
        );
        assert_eq!(link.total, 235_000);
        assert!(link.message.contains("2x Saj Chicken"));
        assert!(link.message.contains("1x Ayran"));
        assert!(link.message.contains("Table: 7"));
        assert!(link.message.contains("235,000 LBP"));
        assert!(
            link.url
                .starts_with("https://api.whatsapp.com/send?phone=9613123456&text=")
        );
    }

    // Second session: language and cart survive, the rest resets
    let storage = SessionStorage::open(&path).unwrap();
    let store = MenuStore::open(storage, catalog::menu_items());

    assert_eq!(store.language(), Language::En);
    assert_eq!(store.cart().len(), 2);
    assert_eq!(store.cart()[0].item.id, "saj-chicken");
    assert_eq!(store.cart()[0].quantity, 2);
    assert!(store.active_category().is_none());
    assert_eq!(store.search_query(), "");
    // Settings are not durable, they come back from the remote record
    assert_eq!(store.settings().whatsapp_number, "961XXXXXXXXX");
}

#[tokio::test]
async fn settings_push_reaches_gateway() {
    let gateway = RecordingGateway::with_record(None);
    let sync = SettingsSync::new(gateway.clone());

    let storage = SessionStorage::open_in_memory().unwrap();
    let store = Arc::new(RwLock::new(MenuStore::open(storage, vec![])));

    sync.push(
        &store,
        SettingsUpdate {
            whatsapp_number: Some("96170123456".into()),
            is_menu_open: None,
        },
    );

    assert_eq!(store.read().settings().whatsapp_number, "96170123456");
    // The default survives a partial update
    assert!(store.read().settings().is_menu_open);

    for _ in 0..50 {
        if !gateway.upserts.lock().unwrap().is_empty() {
            break;
        }
        tokio::task::yield_now().await;
    }
    let upserts = gateway.upserts.lock().unwrap();
    assert_eq!(upserts.len(), 1);
    assert_eq!(upserts[0].whatsapp_number.as_deref(), Some("96170123456"));
    assert!(upserts[0].is_menu_open.is_none());
}

#[test]
fn seeded_menu_filters_by_category_and_query() {
    let storage = SessionStorage::open_in_memory().unwrap();
    let store = MenuStore::open(storage, catalog::menu_items());

    let filter = MenuFilter {
        language: Language::En,
        category: Some("saj"),
        query: "chick",
        match_description: false,
    };
    let hits = filter_items(store.menu_items(), &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "saj-chicken");

    let arabic = MenuFilter {
        language: Language::Ar,
        category: None,
        query: "زعتر",
        match_description: false,
    };
    let hits = filter_items(store.menu_items(), &arabic);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "saj-zaatar");
}

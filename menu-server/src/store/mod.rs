//! Application state store
//!
//! [`MenuStore`] is the single authoritative holder of UI, cart, menu and
//! settings state, mutated only through named operations. Every operation
//! applies atomically and returns synchronously; operations that target an
//! absent id are silent no-ops, never errors.
//!
//! Exactly two fields survive restarts, `language` and `cart`, saved to
//! [`SessionStorage`] on every mutation that touches them. Persistence
//! failures are logged and swallowed: losing a saved cart must never break
//! a running session.
//!
//! Remote settings reconciliation lives in [`crate::settings`]; the store
//! only ever commits locally.

pub mod filter;
pub mod persistence;

pub use filter::{MenuFilter, filter_items};
pub use persistence::{SessionStorage, StorageError, StorageResult};

use serde::Serialize;
use shared::models::{
    CartItem, Language, MenuItem, PersistedSession, StoreSettings,
};

/// The application state store
pub struct MenuStore {
    language: Language,
    active_category: Option<String>,
    search_query: String,
    cart: Vec<CartItem>,
    menu_items: Vec<MenuItem>,
    settings: StoreSettings,
    storage: SessionStorage,
}

/// An owned, serializable copy of the full store state
#[derive(Debug, Clone, Serialize)]
pub struct StoreSnapshot {
    pub language: Language,
    pub active_category: Option<String>,
    pub search_query: String,
    pub cart: Vec<CartItem>,
    pub menu_items: Vec<MenuItem>,
    pub settings: StoreSettings,
}

impl MenuStore {
    /// Build the store from the seed catalog and the persisted session
    ///
    /// A missing or unreadable session yields defaults; everything outside
    /// `{language, cart}` always starts from defaults.
    pub fn open(storage: SessionStorage, seed_items: Vec<MenuItem>) -> Self {
        let session = match storage.load() {
            Ok(session) => session.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load persisted session, starting fresh");
                PersistedSession::default()
            }
        };

        Self {
            language: session.language,
            active_category: None,
            search_query: String::new(),
            cart: session.cart,
            menu_items: seed_items,
            settings: StoreSettings::default(),
            storage,
        }
    }

    // ========== Accessors ==========

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            language: self.language,
            active_category: self.active_category.clone(),
            search_query: self.search_query.clone(),
            cart: self.cart.clone(),
            menu_items: self.menu_items.clone(),
            settings: self.settings.clone(),
        }
    }

    // ========== Language ==========

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.persist_session();
    }

    // ========== Cart ==========

    /// Add an item to the cart
    ///
    /// An existing entry keeps its position and gains one to its quantity;
    /// otherwise a fresh entry with quantity 1 is appended.
    pub fn add_to_cart(&mut self, item: MenuItem) {
        match self.cart.iter_mut().find(|entry| entry.item.id == item.id) {
            Some(entry) => entry.quantity += 1,
            None => self.cart.push(CartItem::new(item)),
        }
        self.persist_session();
    }

    /// Remove the entry with this id, no-op when absent
    pub fn remove_from_cart(&mut self, item_id: &str) {
        let before = self.cart.len();
        self.cart.retain(|entry| entry.item.id != item_id);
        if self.cart.len() != before {
            self.persist_session();
        }
    }

    /// Set an entry's quantity; `quantity <= 0` removes the entry
    ///
    /// This is the canonical decrement path. An absent id is a no-op;
    /// the operation never inserts. Quantities beyond `u32::MAX` saturate
    /// so a positive request can never truncate to zero.
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(item_id);
            return;
        }
        if let Some(entry) = self.cart.iter_mut().find(|entry| entry.item.id == item_id) {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.persist_session();
        }
    }

    /// Empty the cart unconditionally
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_session();
    }

    // ========== Filters ==========

    /// Set or clear the single active category filter, last write wins
    pub fn set_active_category(&mut self, category_id: Option<String>) {
        self.active_category = category_id;
    }

    /// Replace the free-text filter verbatim, no trimming
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    // ========== Settings (local commit only) ==========

    pub fn set_whatsapp_number(&mut self, number: String) {
        self.settings.whatsapp_number = number;
    }

    pub fn set_is_menu_open(&mut self, open: bool) {
        self.settings.is_menu_open = open;
    }

    /// Overwrite settings with the result of a remote fetch
    pub fn apply_settings(&mut self, settings: StoreSettings) {
        self.settings = settings;
    }

    // ========== Menu administration ==========

    /// Prepend an item, newest first
    pub fn add_menu_item(&mut self, item: MenuItem) {
        self.menu_items.insert(0, item);
    }

    /// Replace the item with a matching id, no-op (and `false`) when absent
    pub fn update_menu_item(&mut self, item: MenuItem) -> bool {
        match self.menu_items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove the item with this id, no-op (and `false`) when absent
    pub fn delete_menu_item(&mut self, item_id: &str) -> bool {
        let before = self.menu_items.len();
        self.menu_items.retain(|item| item.id != item_id);
        self.menu_items.len() != before
    }

    /// Look up a menu item by id
    pub fn find_menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|item| item.id == item_id)
    }

    // ========== Persistence ==========

    fn persist_session(&self) {
        let session = PersistedSession {
            language: self.language,
            cart: self.cart.clone(),
        };
        if let Err(e) = self.storage.save(&session) {
            tracing::warn!(error = %e, "Failed to persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::settings::DEFAULT_WHATSAPP_NUMBER;

    fn item(id: &str, name_en: &str, price: i64) -> MenuItem {
        MenuItem {
            id: id.into(),
            category_id: "saj".into(),
            name_ar: name_en.to_string(),
            name_en: name_en.into(),
            description_ar: String::new(),
            description_en: String::new(),
            price,
            image_url: String::new(),
            is_popular: false,
            is_veg: false,
            spice_level: 0,
            is_available: true,
        }
    }

    fn store_with(items: Vec<MenuItem>) -> MenuStore {
        MenuStore::open(SessionStorage::open_in_memory().unwrap(), items)
    }

    #[test]
    fn repeated_adds_increment_a_single_entry() {
        let mut store = store_with(vec![]);
        let chicken = item("a", "Saj Chicken", 100_000);

        for _ in 0..5 {
            store.add_to_cart(chicken.clone());
        }

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].quantity, 5);
    }

    #[test]
    fn add_preserves_existing_position() {
        let mut store = store_with(vec![]);
        store.add_to_cart(item("a", "Saj Chicken", 100_000));
        store.add_to_cart(item("b", "Ayran", 35_000));
        store.add_to_cart(item("a", "Saj Chicken", 100_000));

        let ids: Vec<&str> = store.cart().iter().map(|e| e.item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.cart()[0].quantity, 2);
    }

    #[test]
    fn update_quantity_sets_positive_values() {
        let mut store = store_with(vec![]);
        store.add_to_cart(item("a", "Saj Chicken", 100_000));

        store.update_quantity("a", 4);
        assert_eq!(store.cart()[0].quantity, 4);
    }

    #[test]
    fn update_quantity_zero_or_negative_removes() {
        for quantity in [0, -1, -7] {
            let mut store = store_with(vec![]);
            store.add_to_cart(item("a", "Saj Chicken", 100_000));
            store.update_quantity("a", quantity);
            assert!(store.cart().is_empty());
        }
    }

    #[test]
    fn update_quantity_saturates_beyond_u32() {
        // 2^32 must not truncate to 0 and 2^32 + 5 must not wrap to 5;
        // a positive request always leaves a positive quantity
        for quantity in [1_i64 << 32, (1_i64 << 32) + 5, i64::MAX] {
            let mut store = store_with(vec![]);
            store.add_to_cart(item("a", "Saj Chicken", 100_000));
            store.update_quantity("a", quantity);

            assert_eq!(store.cart().len(), 1);
            assert_eq!(store.cart()[0].quantity, u32::MAX);
        }
    }

    #[test]
    fn update_quantity_never_inserts() {
        let mut store = store_with(vec![]);
        store.update_quantity("ghost", 3);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn absent_id_operations_leave_snapshot_unchanged() {
        let mut store = store_with(vec![item("a", "Saj Chicken", 100_000)]);
        store.add_to_cart(item("a", "Saj Chicken", 100_000));

        let before = serde_json::to_value(store.snapshot()).unwrap();

        store.remove_from_cart("ghost");
        store.update_quantity("ghost", 2);
        assert!(!store.update_menu_item(item("ghost", "Ghost", 1)));
        assert!(!store.delete_menu_item("ghost"));

        let after = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn clear_cart_empties_unconditionally() {
        let mut store = store_with(vec![]);
        store.add_to_cart(item("a", "Saj Chicken", 100_000));
        store.add_to_cart(item("b", "Ayran", 35_000));

        store.clear_cart();
        assert!(store.cart().is_empty());

        // Clearing an empty cart is fine too
        store.clear_cart();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn new_menu_items_appear_first() {
        let mut store = store_with(vec![item("a", "Saj Chicken", 100_000)]);
        store.add_menu_item(item("b", "Halloumi", 90_000));

        let ids: Vec<&str> = store.menu_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn update_menu_item_replaces_in_place() {
        let mut store = store_with(vec![
            item("a", "Saj Chicken", 100_000),
            item("b", "Ayran", 35_000),
        ]);

        let mut updated = item("b", "Ayran", 40_000);
        updated.is_popular = true;
        assert!(store.update_menu_item(updated));

        let ids: Vec<&str> = store.menu_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.menu_items()[1].price, 40_000);
        assert!(store.menu_items()[1].is_popular);
    }

    #[test]
    fn delete_menu_item_removes_by_id() {
        let mut store = store_with(vec![
            item("a", "Saj Chicken", 100_000),
            item("b", "Ayran", 35_000),
        ]);

        assert!(store.delete_menu_item("a"));
        assert_eq!(store.menu_items().len(), 1);
        assert_eq!(store.menu_items()[0].id, "b");
    }

    #[test]
    fn language_and_cart_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.redb");

        {
            let storage = SessionStorage::open(&path).unwrap();
            let mut store = MenuStore::open(storage, vec![]);
            store.set_language(Language::En);
            store.add_to_cart(item("a", "Saj Chicken", 100_000));
            store.add_to_cart(item("a", "Saj Chicken", 100_000));
            store.set_active_category(Some("saj".into()));
            store.set_search_query("chick".into());
            store.set_whatsapp_number("70123456".into());
        }

        let storage = SessionStorage::open(&path).unwrap();
        let store = MenuStore::open(storage, vec![]);

        // The durable pair round-trips
        assert_eq!(store.language(), Language::En);
        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.cart()[0].quantity, 2);

        // Everything else resets to documented defaults
        assert_eq!(store.active_category(), None);
        assert_eq!(store.search_query(), "");
        assert_eq!(store.settings().whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert!(store.settings().is_menu_open);
    }

    #[test]
    fn settings_setters_commit_locally() {
        let mut store = store_with(vec![]);
        store.set_whatsapp_number("0096170123456".into());
        store.set_is_menu_open(false);

        assert_eq!(store.settings().whatsapp_number, "0096170123456");
        assert!(!store.settings().is_menu_open);
    }

    #[test]
    fn apply_settings_overwrites_both_fields() {
        let mut store = store_with(vec![]);
        store.apply_settings(StoreSettings {
            whatsapp_number: "96170123456".into(),
            is_menu_open: false,
        });
        assert_eq!(store.settings().whatsapp_number, "96170123456");
        assert!(!store.settings().is_menu_open);
    }
}

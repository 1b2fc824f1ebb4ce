//! Domain models
//!
//! # Structure
//!
//! - [`language`] - UI language selection
//! - [`category`] - static menu categories
//! - [`menu_item`] - menu item entity and admin payload
//! - [`cart`] - cart entries
//! - [`settings`] - store settings and the remote settings record
//! - [`session`] - the durable subset of the store state

pub mod cart;
pub mod category;
pub mod language;
pub mod menu_item;
pub mod session;
pub mod settings;

pub use cart::CartItem;
pub use category::Category;
pub use language::Language;
pub use menu_item::{MenuItem, MenuItemPayload};
pub use session::PersistedSession;
pub use settings::{SettingsRecord, SettingsUpdate, StoreSettings};

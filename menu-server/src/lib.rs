//! Menu Server - bilingual QR menu backend
//!
//! A single-store restaurant menu service: customers scan a table QR
//! code, browse the bilingual menu, build a cart and hand the order off
//! to the restaurant over a WhatsApp deep link. No accounts, no payment,
//! no order pipeline.
//!
//! # Module structure
//!
//! ```text
//! menu-server/src/
//! ├── store/      # application state store + redb persistence + filtering
//! ├── order/      # phone normalization, order message, deep link
//! ├── settings/   # remote settings gateway and sync
//! ├── catalog.rs  # static seed categories and menu items
//! ├── api/        # HTTP routes and handlers
//! ├── server/     # state wiring, middleware, lifecycle
//! ├── common/     # logging setup
//! └── config.rs   # environment configuration
//! ```

pub mod api;
pub mod catalog;
pub mod common;
pub mod config;
pub mod order;
pub mod server;
pub mod settings;
pub mod store;

pub use config::Config;
pub use server::{Server, ServerState};
pub use store::{MenuStore, SessionStorage};

pub use common::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let level = if config.is_production() { "info" } else { "debug" };
    let log_dir = format!("{}/logs", config.work_dir);

    init_logger_with_file(level, config.is_production(), Some(&log_dir))?;
    Ok(())
}

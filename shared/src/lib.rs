//! Shared types for the saj-menu service
//!
//! Domain models and the unified error/response types used by the
//! menu server.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{
    CartItem, Category, Language, MenuItem, PersistedSession, SettingsRecord, SettingsUpdate,
    StoreSettings,
};

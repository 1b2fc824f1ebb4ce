//! Store Settings Model

use serde::{Deserialize, Serialize};

/// Fixed id of the singleton remote settings record
pub const SETTINGS_RECORD_ID: &str = "1";

/// Placeholder WhatsApp number used until an admin configures a real one
pub const DEFAULT_WHATSAPP_NUMBER: &str = "961XXXXXXXXX";

/// In-memory store settings (singleton)
///
/// Mirrored to the remote settings record; the local copy is updated
/// optimistically and never rolled back on remote failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub whatsapp_number: String,
    pub is_menu_open: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            is_menu_open: true,
        }
    }
}

/// The remote settings record as returned by the collaborator
///
/// Both fields are optional: a partially-written record substitutes the
/// documented defaults on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRecord {
    pub id: String,
    pub whatsapp_number: Option<String>,
    pub is_menu_open: Option<bool>,
}

impl SettingsRecord {
    /// Fold the record into concrete settings, defaulting missing fields
    pub fn into_settings(self) -> StoreSettings {
        let defaults = StoreSettings::default();
        StoreSettings {
            whatsapp_number: self.whatsapp_number.unwrap_or(defaults.whatsapp_number),
            is_menu_open: self.is_menu_open.unwrap_or(defaults.is_menu_open),
        }
    }
}

/// Partial settings update (upsert payload)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_menu_open: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.whatsapp_number.is_none() && self.is_menu_open.is_none()
    }
}

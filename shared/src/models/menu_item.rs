//! Menu Item Model

use super::language::Language;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    /// Category reference (String ID, not validated against the catalog)
    pub category_id: String,
    pub name_ar: String,
    pub name_en: String,
    pub description_ar: String,
    pub description_en: String,
    /// Price in the smallest LBP unit
    pub price: i64,
    pub image_url: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_veg: bool,
    /// 0 = none, 1 = mild, 2 = hot (by convention, not enforced)
    #[serde(default)]
    pub spice_level: i32,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Localized display name
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.name_ar,
            Language::En => &self.name_en,
        }
    }

    /// Localized description
    pub fn description(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.description_ar,
            Language::En => &self.description_en,
        }
    }
}

/// Admin create/update payload (everything except the id)
///
/// Required-field checks live here, at the presentation boundary; the store
/// itself accepts whatever it is handed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemPayload {
    pub category_id: String,
    #[validate(length(min = 1))]
    pub name_ar: String,
    #[validate(length(min = 1))]
    pub name_en: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub description_en: String,
    #[validate(range(min = 0))]
    pub price: i64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub spice_level: i32,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl MenuItemPayload {
    /// Materialize a full entity with the given id
    pub fn into_item(self, id: impl Into<String>) -> MenuItem {
        MenuItem {
            id: id.into(),
            category_id: self.category_id,
            name_ar: self.name_ar,
            name_en: self.name_en,
            description_ar: self.description_ar,
            description_en: self.description_en,
            price: self.price,
            image_url: self.image_url,
            is_popular: self.is_popular,
            is_veg: self.is_veg,
            spice_level: self.spice_level,
            is_available: self.is_available,
        }
    }
}

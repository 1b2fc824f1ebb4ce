//! Category Model

use super::language::Language;
use serde::{Deserialize, Serialize};

/// Menu category
///
/// Categories come from the static seed catalog and are immutable for the
/// lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name_ar: String,
    pub name_en: String,
    /// Display icon (emoji)
    pub icon: String,
}

impl Category {
    /// Localized display name
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.name_ar,
            Language::En => &self.name_en,
        }
    }
}

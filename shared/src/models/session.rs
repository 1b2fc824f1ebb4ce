//! Durable session subset
//!
//! Exactly two fields of the store survive process restarts: the chosen
//! language and the cart. Everything else is rebuilt from defaults (and an
//! optional settings fetch) on each load.

use super::cart::CartItem;
use super::language::Language;
use serde::{Deserialize, Serialize};

/// The serializable subset of the store state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub cart: Vec<CartItem>,
}

//! Unified error handling
//!
//! Error codes, the application error type and the API response envelope
//! shared between the server and its clients.

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult};

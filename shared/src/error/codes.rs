//! Error codes for the saj-menu service
//!
//! Codes are organized by range:
//! - 0xxx: general errors
//! - 4xxx: cart and order errors
//! - 6xxx: menu errors
//! - 9xxx: system errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values for efficient serialization and
/// cross-language compatibility with the web frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Cart / Order ====================
    /// Cart is empty, no order can be built
    CartEmpty = 4001,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Category not found
    CategoryNotFound = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Local storage error
    StorageError = 9002,
    /// Remote settings record unreachable
    RemoteUnavailable = 9003,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::CartEmpty => "Cart is empty",
            Self::MenuItemNotFound => "Menu item not found",
            Self::CategoryNotFound => "Category not found",
            Self::InternalError => "Internal server error",
            Self::StorageError => "Local storage error",
            Self::RemoteUnavailable => "Remote settings unavailable",
        }
    }

    /// HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationFailed | Self::InvalidRequest | Self::CartEmpty => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound | Self::MenuItemNotFound | Self::CategoryNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::RemoteUnavailable => StatusCode::BAD_GATEWAY,
            Self::Unknown | Self::InternalError | Self::StorageError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this code indicates a system-level failure worth an error log
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            Self::Unknown | Self::InternalError | Self::StorageError | Self::RemoteUnavailable
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            5 => Ok(Self::InvalidRequest),
            4001 => Ok(Self::CartEmpty),
            6001 => Ok(Self::MenuItemNotFound),
            6002 => Ok(Self::CategoryNotFound),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::StorageError),
            9003 => Ok(Self::RemoteUnavailable),
            other => Err(format!("unknown error code: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::CartEmpty,
            ErrorCode::MenuItemNotFound,
            ErrorCode::StorageError,
            ErrorCode::RemoteUnavailable,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
        assert!(ErrorCode::try_from(1234).is_err());
    }

    #[test]
    fn http_status_mapping() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::MenuItemNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::CartEmpty.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::RemoteUnavailable.http_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::MenuItemNotFound).unwrap();
        assert_eq!(json, "6001");
    }
}

//! Error codes for the ranking API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in Problem Details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// Required field absent or blank
    MissingField,
    /// Stars outside 1..=3
    InvalidStars,
    /// Player name too long
    InvalidName,
    /// Level label too long
    InvalidLevel,
    /// Malformed request (unparseable body, wrong types)
    BadRequest,

    // Resource Not Found
    /// Ranking entry not found
    EntryNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Unique constraint violation on the ranking name
    DuplicateName,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidStars => "INVALID_STARS",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidLevel => "INVALID_LEVEL",
            Self::BadRequest => "BAD_REQUEST",

            Self::EntryNotFound => "ENTRY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicateName => "DUPLICATE_NAME",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Validation of a player's result before it reaches storage.
//!
//! Pure: no HTTP, no database.

use quiz_core::Stars;
use unicode_normalization::UnicodeNormalization;

use crate::errors::domain::{DomainError, ValidationKind};

pub const MAX_NAME_CHARS: usize = 64;
pub const MAX_LEVEL_CHARS: usize = 32;

pub const INCOMPLETE_DETAIL: &str = "Dados incompletos (nome, estrelas ou nível ausentes).";

/// A submission as received; any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: Option<String>,
    pub stars: Option<i64>,
    pub level: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub stars: Stars,
    pub level: String,
}

/// Trim and NFC-normalize so visually identical names map to one entry.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfc().collect()
}

impl Submission {
    pub fn validate(self) -> Result<ValidSubmission, DomainError> {
        let name = self.name.as_deref().map(normalize_name).unwrap_or_default();
        let level = self
            .level
            .as_deref()
            .map(|l| l.trim().to_string())
            .unwrap_or_default();

        let stars = match self.stars {
            Some(stars) if !name.is_empty() && !level.is_empty() => stars,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::MissingField,
                    INCOMPLETE_DETAIL,
                ))
            }
        };

        let stars = u8::try_from(stars)
            .map_err(|_| format!("stars must be between 1 and 3, got {stars}"))
            .and_then(Stars::try_from)
            .map_err(|detail| DomainError::validation(ValidationKind::Stars, detail))?;

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::validation(
                ValidationKind::Name,
                format!("name must be at most {MAX_NAME_CHARS} characters"),
            ));
        }

        if level.chars().count() > MAX_LEVEL_CHARS {
            return Err(DomainError::validation(
                ValidationKind::Level,
                format!("level must be at most {MAX_LEVEL_CHARS} characters"),
            ));
        }

        Ok(ValidSubmission { name, stars, level })
    }
}

//! Scoring thresholds: difficulty level and star rating.

use serde::{Deserialize, Serialize};

/// Questions per game.
pub const TOTAL_QUESTIONS: u32 = 10;

/// Difficulty tier. Drives operand ranges and operator choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// Level earned by a cumulative score.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=3 => Level::Easy,
            4..=7 => Level::Medium,
            _ => Level::Hard,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Level::Easy),
            2 => Some(Level::Medium),
            3 => Some(Level::Hard),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Hard => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Easy => "Fácil",
            Level::Medium => "Médio",
            Level::Hard => "Difícil",
        }
    }

    /// Upper bound for add/subtract operands.
    pub fn operand_max(self) -> u32 {
        match self {
            Level::Easy => 20,
            Level::Medium => 50,
            Level::Hard => 100,
        }
    }

    /// Upper bound for multiply/divide factors.
    pub fn factor_max(self) -> u32 {
        match self {
            Level::Easy => 5,
            Level::Medium | Level::Hard => 10,
        }
    }
}

/// Display label for a numeric level; out-of-range numbers render as `Nível N`.
pub fn level_label(n: u8) -> String {
    match Level::from_number(n) {
        Some(level) => level.label().to_string(),
        None => format!("Nível {n}"),
    }
}

/// Star rating awarded at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Stars {
    One,
    Two,
    Three,
}

impl Stars {
    pub fn from_score(score: u32) -> Self {
        if score >= 8 {
            Stars::Three
        } else if score >= 5 {
            Stars::Two
        } else {
            Stars::One
        }
    }

    pub fn count(self) -> u8 {
        match self {
            Stars::One => 1,
            Stars::Two => 2,
            Stars::Three => 3,
        }
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> u8 {
        stars.count()
    }
}

impl TryFrom<u8> for Stars {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Stars::One),
            2 => Ok(Stars::Two),
            3 => Ok(Stars::Three),
            other => Err(format!("stars must be between 1 and 3, got {other}")),
        }
    }
}

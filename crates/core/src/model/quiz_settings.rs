use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuizSettingsError {
    #[error("slot count must be > 0")]
    InvalidSlotCount,

    #[error("max attempts per slot must be > 0")]
    InvalidMaxAttempts,

    #[error("advanced chance must be in [0, 1], got {provided}")]
    InvalidAdvancedChance { provided: f64 },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Tunables for a quiz session.
///
/// Defaults: 20 slots, 3 attempts per slot, 70% chance of the advanced variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizSettings {
    slot_count: usize,
    max_attempts: u8,
    advanced_chance: f64,
}

impl QuizSettings {
    pub const DEFAULT_SLOT_COUNT: usize = 20;
    pub const DEFAULT_MAX_ATTEMPTS: u8 = 3;
    pub const DEFAULT_ADVANCED_CHANCE: f64 = 0.7;

    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns error if a count is zero or the chance is not a probability.
    pub fn new(
        slot_count: usize,
        max_attempts: u8,
        advanced_chance: f64,
    ) -> Result<Self, QuizSettingsError> {
        if slot_count == 0 {
            return Err(QuizSettingsError::InvalidSlotCount);
        }
        if max_attempts == 0 {
            return Err(QuizSettingsError::InvalidMaxAttempts);
        }
        if !advanced_chance.is_finite() || !(0.0..=1.0).contains(&advanced_chance) {
            return Err(QuizSettingsError::InvalidAdvancedChance {
                provided: advanced_chance,
            });
        }

        Ok(Self {
            slot_count,
            max_attempts,
            advanced_chance,
        })
    }

    /// Number of slots a session must resolve before it finishes.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Attempts allowed per slot, counting the first one.
    #[must_use]
    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Highest `retry_count` a slot can reach before it is exhausted.
    #[must_use]
    pub fn max_retries(&self) -> u8 {
        self.max_attempts - 1
    }

    #[must_use]
    pub fn advanced_chance(&self) -> f64 {
        self.advanced_chance
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            slot_count: Self::DEFAULT_SLOT_COUNT,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            advanced_chance: Self::DEFAULT_ADVANCED_CHANCE,
        }
    }
}

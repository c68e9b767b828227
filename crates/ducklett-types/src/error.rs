use std::fmt;

use crate::copy;

/// Reasons a (date, time) pair is rejected by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Date or time was absent or blank
    MissingField,

    /// Inputs do not name a real calendar instant
    InvalidFormat,

    /// Instant is not strictly after the moment of validation
    PastOrPresent,
}

impl ValidationError {
    /// Short text shown inline next to the form
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField => copy::MISSING_FIELD,
            ValidationError::InvalidFormat => copy::INVALID_FORMAT,
            ValidationError::PastOrPresent => copy::PAST_OR_PRESENT,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField => write!(f, "Missing date or time"),
            ValidationError::InvalidFormat => {
                write!(f, "Date and time do not form a real calendar instant")
            }
            ValidationError::PastOrPresent => write!(f, "Appointment must be in the future"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reasons a persisted appointment record cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    Date(String),
    Time(String),
    Iso(String),

    /// `iso` names a different wall-clock moment than `date` + `time`
    Mismatch { wall_clock: String, iso: String },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Date(value) => write!(f, "invalid date: {:?}", value),
            RecordError::Time(value) => write!(f, "invalid time: {:?}", value),
            RecordError::Iso(value) => write!(f, "invalid iso instant: {:?}", value),
            RecordError::Mismatch { wall_clock, iso } => {
                write!(f, "iso {} does not match {}", iso, wall_clock)
            }
        }
    }
}

impl std::error::Error for RecordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_message_prompts_for_future() {
        assert!(
            ValidationError::PastOrPresent
                .user_message()
                .starts_with("Elige un momento futuro")
        );
    }

    #[test]
    fn test_each_kind_has_distinct_message() {
        let messages = [
            ValidationError::MissingField.user_message(),
            ValidationError::InvalidFormat.user_message(),
            ValidationError::PastOrPresent.user_message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }
}

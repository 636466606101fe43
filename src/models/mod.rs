// src/models/mod.rs

pub mod answer;
pub mod question;
pub mod quiz;
pub mod submission;

/// Rejects strings made only of whitespace.
/// Emptiness itself is covered by the `length` validators on each field.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("must_not_be_blank"));
    }
    Ok(())
}

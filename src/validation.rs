//! Payload checks that run after JSON decoding and before any query.

use crate::error::AppError;

/// Width of every text column (`VARCHAR(250)`).
pub const MAX_TEXT_LEN: usize = 250;

/// Implemented by every create/update payload. Decoding already enforces types and enum values;
/// this covers what the column definitions add on top.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub fn max_length(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Same as [`max_length`] for optional (patch) fields; absent passes.
pub fn max_length_opt(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(v) => max_length(field, v, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_limit_counts_characters() {
        assert!(max_length("name", &"a".repeat(MAX_TEXT_LEN), MAX_TEXT_LEN).is_ok());
        // multi-byte characters count once
        assert!(max_length("name", &"ö".repeat(MAX_TEXT_LEN), MAX_TEXT_LEN).is_ok());
        let err = max_length("name", &"a".repeat(MAX_TEXT_LEN + 1), MAX_TEXT_LEN).unwrap_err();
        assert_eq!(err.to_string(), "validation: name must be at most 250 characters");
    }

    #[test]
    fn absent_optional_passes() {
        assert!(max_length_opt("address", None, 3).is_ok());
        assert!(max_length_opt("address", Some("abcd"), 3).is_err());
    }
}

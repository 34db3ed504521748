use super::error::DomainError;

/// Width of every `VARCHAR` column in the schema.
pub(crate) const MAX_STRING_LEN: usize = 255;

pub(crate) fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

/// Checks `value` fits a `VARCHAR(255)` column as submitted. The value itself is stored verbatim.
pub(crate) fn validate_column_width(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.chars().count() > MAX_STRING_LEN {
        return Err(DomainError::Validation {
            field,
            message: "must be at most 255 chars",
        });
    }
    Ok(())
}

use super::error::AppError;

/// Post-deserialization checks applied to every API response before it
/// reaches the cache.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// Rejects NaN and infinite values.
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::DataError(format!("{field} is not a finite number")))
    }
}

/// Rejects empty or whitespace-only strings.
pub(crate) fn ensure_present(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::DataError(format!("{field} is empty")))
    } else {
        Ok(())
    }
}

use crate::server::error::AppError;

/// Parses a record identifier taken from the request path.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `label` - Human readable entity name used in error messages, e.g. "User"
///
/// # Returns
/// - `Ok(i32)` - Parsed identifier
/// - `Err(AppError::Validation)` - Identifier missing or not a positive integer
pub fn parse_id(value: &str, label: &str) -> Result<i32, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} ID is required", label)));
    }

    match trimmed.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation(format!(
            "Invalid {} ID '{}'",
            label, trimmed
        ))),
    }
}

use crate::server::error::AppError;

/// Rejects blank required text fields.
pub fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }

    Ok(())
}

/// Minimal shape check for email addresses: `local@domain` with both parts present.
pub fn require_email(value: &str) -> Result<(), AppError> {
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::Validation(format!(
            "'{}' is not a valid email address",
            value
        ))),
    }
}

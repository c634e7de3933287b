use crate::error::ApiError;
use rust_decimal::Decimal;

// Field checks shared by the CRUD routes. Messages name the wire field.

/// Trimmed value of a required string field.
pub fn required_string(value: &str, field: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!(
            "{field} is required and cannot be empty or whitespace"
        )));
    }
    Ok(trimmed.to_owned())
}

pub fn non_negative(value: Decimal, field: &str) -> Result<(), ApiError> {
    if value < Decimal::ZERO {
        return Err(ApiError::validation(format!(
            "{field} must be greater than or equal to 0"
        )));
    }
    Ok(())
}

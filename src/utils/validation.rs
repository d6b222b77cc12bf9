use crate::models::AppError;

pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::Validation("Name cannot be empty.".to_string()));
    }
    Ok(())
}

/// Mobile number rules: only digits, starts with '3', exactly 10 digits
/// (e.g., 3001234567).
pub fn validate_mobile(mobile: &str) -> Result<(), AppError> {
    let valid = mobile.len() == 10
        && mobile.starts_with('3')
        && mobile.chars().all(|c| c.is_ascii_digit());

    if !valid {
        return Err(AppError::Validation(
            "Mobile must be 10 digits, start with 3 and contain only digits (e.g., 3001234567)."
                .to_string(),
        ));
    }
    Ok(())
}

pub fn validate_address(address: &str) -> Result<(), AppError> {
    if address.len() < 3 {
        return Err(AppError::Validation(
            "Address cannot be empty or too short.".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::Validation(
            "Price must be a non-negative number.".to_string(),
        ));
    }
    Ok(())
}

//! Common validation utilities.

use validator::ValidationError;

/// Minimum number of characters in a mobile number.
pub const MIN_MOBILE_LENGTH: usize = 10;

/// Maximum number of characters in a mobile number.
pub const MAX_MOBILE_LENGTH: usize = 20;

/// Validates that a text field has at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates a mobile number.
///
/// Only the length is checked: at least 10 and at most 20 characters once
/// surrounding whitespace is removed. Formatting characters such as `+` or
/// spaces are allowed because numbers are matched exactly as entered.
pub fn validate_mobile(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < MIN_MOBILE_LENGTH {
        let mut err = ValidationError::new("mobile_length");
        err.message = Some("Mobile number must be at least 10 characters".into());
        return Err(err);
    }
    if len > MAX_MOBILE_LENGTH {
        let mut err = ValidationError::new("mobile_length");
        err.message = Some("Mobile number must be at most 20 characters".into());
        return Err(err);
    }
    Ok(())
}

/// Validates an image reference: either an inline `data:image/...` URL or an
/// `http(s)` link.
pub fn validate_image_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.starts_with("data:image/")
        || value.starts_with("https://")
        || value.starts_with("http://")
    {
        Ok(())
    } else {
        let mut err = ValidationError::new("image_url");
        err.message = Some("Image must be a data:image URL or an http(s) link".into());
        Err(err)
    }
}

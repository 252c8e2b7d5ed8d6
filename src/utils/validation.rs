use crate::domain::model::FormState;
use crate::utils::error::{Result, SignUpError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// All four inputs hold at least one character.
pub fn all_fields_filled(state: &FormState) -> bool {
    !state.username.is_empty()
        && !state.email.is_empty()
        && !state.password.is_empty()
        && !state.password_confirmation.is_empty()
}

/// Exact string comparison, no trimming or case leniency.
pub fn passwords_match(state: &FormState) -> bool {
    state.password == state.password_confirmation
}

/// Gate for the submit control.
pub fn submit_enabled(state: &FormState) -> bool {
    all_fields_filled(state) && passwords_match(state)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SignUpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SignUpError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SignUpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SignUpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

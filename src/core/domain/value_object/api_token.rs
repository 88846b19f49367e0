use crate::core::domain::error::ValidationError;
use std::fmt;

/// An opaque credential sent as the `Authorization` header.
///
/// The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_token(&value)?;
        Ok(Self(value))
    }

    /// Creates a new token without validation.
    #[allow(unused)]
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Validates a token value.
pub(crate) fn validate_token(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::field("api_token", "API token cannot be empty"));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(ValidationError::Format(
            "API token cannot contain control characters".to_string(),
        ));
    }
    Ok(())
}

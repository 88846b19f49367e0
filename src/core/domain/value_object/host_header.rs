use crate::core::domain::error::ValidationError;
use std::net::IpAddr;

/// Maximum total length of an origin host header.
pub const MAX_HOST_HEADER_LENGTH: usize = 128;

/// Maximum length of a single dot-separated label.
pub const MAX_LABEL_LENGTH: usize = 62;

/// A validated origin host header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostHeader(String);

impl HostHeader {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        validate_host_header(&value)?;
        Ok(Self(value))
    }

    /// Creates a new host header without validation.
    #[allow(unused)]
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates an origin host header: an IP address or a domain name.
pub(crate) fn validate_host_header(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::field(
            "default_origin_host_header",
            "Host header cannot be empty",
        ));
    }
    if value.parse::<IpAddr>().is_ok() {
        return Ok(());
    }
    validate_hostname(value)
}

/// Validates a domain name against the platform's length rules.
pub(crate) fn validate_hostname(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_HOST_HEADER_LENGTH {
        return Err(ValidationError::ConstraintViolation(format!(
            "Host length exceeds maximum of {} characters",
            MAX_HOST_HEADER_LENGTH
        )));
    }
    for label in value.split('.') {
        validate_label(label)?;
    }
    Ok(())
}

fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
        return Err(ValidationError::Format(format!(
            "Label must be between 1 and {} characters",
            MAX_LABEL_LENGTH
        )));
    }

    // wildcard domains are accepted by the platform
    if label == "*" {
        return Ok(());
    }

    if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ValidationError::Format(
            "Label can only contain alphanumeric characters and hyphens".to_string(),
        ));
    }

    if label.starts_with('-') || label.ends_with('-') {
        return Err(ValidationError::Format(
            "Label cannot start or end with hyphen".to_string(),
        ));
    }

    Ok(())
}

use crate::core::domain::error::ValidationError;
use url::Url;

/// Schemes accepted for the API base URL.
const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];

/// Upper bound on URL length (RFC 7230 practical limit).
const MAX_URL_LENGTH: usize = 2083;

/// A validated CDNetworks API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Parses and validates a base URL such as `https://api.cdnetworks.com`.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_endpoint(value)?;
        let url = Url::parse(value)
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self(url))
    }

    /// Returns the base URL.
    pub fn url(&self) -> &Url {
        &self.0
    }

    /// Joins an API path onto the base URL.
    pub fn join(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Validates an API base URL.
pub(crate) fn validate_endpoint(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::field("endpoint", "Endpoint cannot be empty"));
    }
    if value.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }
    let url = Url::parse(value)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme. Must be one of: {}",
            ALLOWED_SCHEMES.join(", ")
        )));
    }
    if url.host_str().is_none() {
        return Err(ValidationError::field("endpoint", "Endpoint must have a host"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_endpoints() {
        assert!(ApiEndpoint::new("https://api.cdnetworks.com").is_ok());
        assert!(ApiEndpoint::new("http://127.0.0.1:8080/").is_ok());
    }

    #[test]
    fn test_invalid_endpoints() {
        let test_cases = vec![
            ("", "empty"),
            ("api.cdnetworks.com", "missing scheme"),
            ("ftp://api.cdnetworks.com", "wrong scheme"),
        ];
        for (value, case) in test_cases {
            assert!(
                ApiEndpoint::new(value).is_err(),
                "Case '{}' should fail validation: {}",
                case,
                value
            );
        }
    }

    #[test]
    fn test_join_normalizes_slashes() {
        let endpoint = ApiEndpoint::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            endpoint.join("/api/domain"),
            "http://127.0.0.1:8080/api/domain"
        );
        let endpoint = ApiEndpoint::new("https://api.cdnetworks.com").unwrap();
        assert_eq!(
            endpoint.join("api/domain/1"),
            "https://api.cdnetworks.com/api/domain/1"
        );
    }
}

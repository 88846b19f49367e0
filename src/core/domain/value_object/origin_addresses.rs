use crate::core::domain::{
    error::ValidationError,
    model::{
        cdn_domain::{ORIGIN_IPS_SEPARATOR, join_origin_ips},
        domain_record::MAX_ORIGIN_IPS,
    },
    value_object::host_header::validate_hostname,
};
use std::net::IpAddr;

/// Maximum length of the joined origin address string.
pub const MAX_ORIGIN_IPS_LENGTH: usize = 500;

/// A validated list of origin addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginAddresses(Vec<String>);

impl OriginAddresses {
    pub fn new(addresses: Vec<String>) -> Result<Self, ValidationError> {
        validate_origin_ips(&addresses)?;
        Ok(Self(addresses))
    }

    /// Creates a new list without validation.
    #[allow(unused)]
    pub(crate) fn new_unchecked(addresses: Vec<String>) -> Self {
        Self(addresses)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The list as sent on the wire.
    #[must_use]
    pub fn joined(&self) -> String {
        join_origin_ips(&self.0)
    }

    /// True when the origin is a domain name rather than IP addresses.
    #[must_use]
    pub fn is_domain(&self) -> bool {
        self.0.iter().any(|a| a.parse::<IpAddr>().is_err())
    }
}

/// Validates an origin address list.
///
/// The list holds either IP addresses or exactly one domain name, never both.
pub(crate) fn validate_origin_ips(ips: &[String]) -> Result<(), ValidationError> {
    if ips.is_empty() {
        return Err(ValidationError::field(
            "origin_ips",
            "At least one origin address is required",
        ));
    }
    if ips.len() > MAX_ORIGIN_IPS {
        return Err(ValidationError::TooManyOriginIps {
            count: ips.len(),
            max: MAX_ORIGIN_IPS,
        });
    }

    let mut domains = 0;
    let mut addresses = 0;
    for ip in ips {
        if ip.is_empty() {
            return Err(ValidationError::field(
                "origin_ips",
                "Origin address cannot be empty",
            ));
        }
        if ip.contains(ORIGIN_IPS_SEPARATOR) {
            return Err(ValidationError::Format(format!(
                "Origin address '{}' cannot contain '{}'",
                ip, ORIGIN_IPS_SEPARATOR
            )));
        }
        if ip.parse::<IpAddr>().is_ok() {
            addresses += 1;
        } else {
            validate_hostname(ip)?;
            domains += 1;
        }
    }

    if domains > 1 {
        return Err(ValidationError::ConstraintViolation(
            "Only one domain name can be used as origin".to_string(),
        ));
    }
    if domains > 0 && addresses > 0 {
        return Err(ValidationError::ConstraintViolation(
            "IP addresses and a domain name cannot be mixed as origin".to_string(),
        ));
    }

    let joined_length: usize =
        ips.iter().map(String::len).sum::<usize>() + ips.len().saturating_sub(1);
    if joined_length > MAX_ORIGIN_IPS_LENGTH {
        return Err(ValidationError::ConstraintViolation(format!(
            "Origin addresses exceed {} characters",
            MAX_ORIGIN_IPS_LENGTH
        )));
    }
    Ok(())
}

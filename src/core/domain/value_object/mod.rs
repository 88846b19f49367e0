mod api_endpoint;
mod api_token;
mod client_ip_header;
mod domain_comment;
mod host_header;
mod origin_addresses;

pub use api_endpoint::ApiEndpoint;
pub use api_token::ApiToken;
pub use client_ip_header::ClientIpHeader;
pub use domain_comment::{DomainComment, MAX_COMMENT_LENGTH};
pub use host_header::{HostHeader, MAX_HOST_HEADER_LENGTH, MAX_LABEL_LENGTH};
pub use origin_addresses::{MAX_ORIGIN_IPS_LENGTH, OriginAddresses};

use crate::core::domain::{error::ValidationError, model::domain_record::DomainRecord};

/// Checks every known attribute of a declared record against the platform's
/// format rules. Pending values are skipped.
pub(crate) fn validate_config(record: &DomainRecord) -> Result<(), ValidationError> {
    match record.domain.as_str() {
        Some(domain) => host_header::validate_hostname(domain).map_err(|e| {
            ValidationError::field("domain", format!("Invalid domain name: {}", e))
        })?,
        None if record.domain.is_null() => {
            return Err(ValidationError::field("domain", "Domain is required"));
        }
        None => {}
    }

    if let Some(comment) = record.comment.as_str() {
        DomainComment::new(comment)?;
    }

    if let Some(header) = record.header_of_clientip.as_str() {
        header.parse::<ClientIpHeader>()?;
    }

    if let Some(origin) = record.origin_config.as_known() {
        if let Some(ips) = origin.origin_ips.as_known() {
            OriginAddresses::new(ips.clone())?;
        }
        if let Some(header) = origin.default_origin_host_header.as_str() {
            HostHeader::new(header)?;
        }
    }
    Ok(())
}

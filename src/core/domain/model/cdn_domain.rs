//! Wire types for the CDNetworks domain API.
//!
//! Requests skip absent fields entirely so that `None` means "leave unchanged"
//! on the remote side. Responses accept any field being absent.

use serde::{Deserialize, Serialize};

/// Version tag sent with every domain request.
pub const API_VERSION: &str = "1.0.0";

/// Separator used by the API to pack the origin address list into one string.
///
/// A single address or hostname never contains a comma, so join and split are
/// lossless as long as no entry carries the separator itself.
pub const ORIGIN_IPS_SEPARATOR: &str = ",";

/// Back-to-origin section of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginConfigPayload {
    /// Separator-joined origin addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_ips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_origin_host_header: Option<String>,
}

/// Body of `POST /api/domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCdnDomainRequest {
    pub version: String,
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_of_client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_config: Option<OriginConfigPayload>,
}

/// Body of `PUT /api/domain/{domain-id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCdnDomainRequest {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_of_client_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_config: Option<OriginConfigPayload>,
}

/// Back-to-origin section of a query response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginConfigResponse {
    #[serde(default)]
    pub origin_ips: Option<String>,
    #[serde(default)]
    pub default_origin_host_header: Option<String>,
}

/// Body of `GET /api/domain/{domain-id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCdnDomainResponse {
    #[serde(default)]
    pub domain_id: Option<String>,
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub cname: Option<String>,
    /// `Deployed` or `InProgress`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub cdn_service_status: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub header_of_client_ip: Option<String>,
    #[serde(default)]
    pub origin_config: Option<OriginConfigResponse>,
}

/// Body returned by `POST /api/domain`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCdnDomainResponse {
    #[serde(default)]
    pub domain_id: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Error envelope returned with non-success status codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Joins origin addresses into the API's single-string form.
pub fn join_origin_ips(ips: &[String]) -> String {
    ips.join(ORIGIN_IPS_SEPARATOR)
}

/// Splits the API's single-string form back into origin addresses.
///
/// An empty string is an empty list, so an empty list survives a round trip.
pub fn split_origin_ips(joined: &str) -> Vec<String> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined
        .split(ORIGIN_IPS_SEPARATOR)
        .map(str::to_string)
        .collect()
}

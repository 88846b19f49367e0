//! Attribute model of an acceleration domain and its mapping to the API types.

use crate::core::domain::{
    error::ValidationError,
    model::{
        attr_value::{AttrValue, BoolValue, StringValue},
        cdn_domain::{
            API_VERSION, AddCdnDomainRequest, EditCdnDomainRequest, OriginConfigPayload,
            QueryCdnDomainResponse, join_origin_ips, split_origin_ips,
        },
    },
};

/// Maximum number of origin addresses per domain.
pub const MAX_ORIGIN_IPS: usize = 15;

/// Back-to-origin settings of a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginConfig {
    /// Origin addresses: IPs, or a single domain name.
    pub origin_ips: AttrValue<Vec<String>>,
    /// Host header sent to the origin. Mirrors `domain` unless set.
    pub default_origin_host_header: StringValue,
}

impl OriginConfig {
    pub fn new(origin_ips: Vec<String>) -> Self {
        Self {
            origin_ips: AttrValue::Known(origin_ips),
            default_origin_host_header: AttrValue::Null,
        }
    }

    pub fn with_host_header(mut self, host_header: impl Into<String>) -> Self {
        self.default_origin_host_header = AttrValue::Known(host_header.into());
        self
    }
}

/// One acceleration domain as seen by the resource layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainRecord {
    pub domain_id: StringValue,
    pub domain: StringValue,
    pub cname: StringValue,
    pub comment: StringValue,
    pub status: StringValue,
    pub contract_id: StringValue,
    pub item_id: StringValue,
    pub enabled: BoolValue,
    pub header_of_clientip: StringValue,
    pub cdn_service_status: StringValue,
    pub service_type: StringValue,
    pub origin_config: AttrValue<OriginConfig>,
}

impl DomainRecord {
    /// A record as a caller would declare it: `domain` and `origin_config`
    /// set, everything left out is `Null`.
    pub fn declared(domain: impl Into<String>, origin_config: OriginConfig) -> Self {
        Self {
            domain: AttrValue::Known(domain.into()),
            origin_config: AttrValue::Known(origin_config),
            ..Default::default()
        }
    }

    /// Builds the back-to-origin section of an outbound request.
    ///
    /// Addresses are joined with the API separator; the host header is only
    /// sent when it is known.
    pub fn build_origin_config_payload(&self) -> OriginConfigPayload {
        let Some(origin) = self.origin_config.as_known() else {
            return OriginConfigPayload::default();
        };
        OriginConfigPayload {
            origin_ips: origin.origin_ips.as_known().map(|ips| join_origin_ips(ips)),
            default_origin_host_header: origin.default_origin_host_header.as_known().cloned(),
        }
    }

    pub fn build_add_request(&self) -> Result<AddCdnDomainRequest, ValidationError> {
        let domain_name = self
            .domain
            .as_known()
            .cloned()
            .ok_or_else(|| ValidationError::field("domain", "Domain is required"))?;
        Ok(AddCdnDomainRequest {
            version: API_VERSION.to_string(),
            domain_name,
            comment: self.comment.as_known().cloned(),
            header_of_client_ip: self.header_of_clientip.as_known().cloned(),
            origin_config: self
                .origin_config
                .is_known()
                .then(|| self.build_origin_config_payload()),
        })
    }

    pub fn build_edit_request(&self) -> EditCdnDomainRequest {
        EditCdnDomainRequest {
            version: API_VERSION.to_string(),
            comment: self.comment.as_known().cloned(),
            header_of_client_ip: self.header_of_clientip.as_known().cloned(),
            origin_config: self
                .origin_config
                .is_known()
                .then(|| self.build_origin_config_payload()),
        }
    }

    /// Overwrites the record with a full server view of the domain.
    ///
    /// Absent response fields become `Null`. When the response has no origin
    /// section the current `origin_config` is kept; otherwise it is rebuilt,
    /// with the host header falling back to `domain`.
    pub fn populate_from_response(&mut self, response: &QueryCdnDomainResponse) {
        self.domain_id = AttrValue::from_option(response.domain_id.clone());
        self.domain = AttrValue::from_option(response.domain_name.clone());
        self.comment = AttrValue::from_option(response.comment.clone());
        self.cname = AttrValue::from_option(response.cname.clone());
        self.status = AttrValue::from_option(response.status.clone());
        self.service_type = AttrValue::from_option(response.service_type.clone());
        self.contract_id = AttrValue::from_option(response.contract_id.clone());
        self.item_id = AttrValue::from_option(response.item_id.clone());
        self.cdn_service_status = AttrValue::from_option(response.cdn_service_status.clone());
        self.header_of_clientip = AttrValue::from_option(response.header_of_client_ip.clone());
        self.enabled = AttrValue::from_option(response.enabled);

        if let Some(origin) = &response.origin_config {
            let default_origin_host_header = match &origin.default_origin_host_header {
                Some(header) => AttrValue::Known(header.clone()),
                None => self.domain.clone(),
            };
            let origin_ips = origin
                .origin_ips
                .as_deref()
                .map(split_origin_ips)
                .map_or(AttrValue::Null, AttrValue::Known);
            self.origin_config = AttrValue::Known(OriginConfig {
                origin_ips,
                default_origin_host_header,
            });
        }
    }

    /// Copies only the server-computed attributes, leaving caller-controlled
    /// ones as they are. Does nothing without a response.
    pub fn copy_computed_fields(&mut self, response: Option<&QueryCdnDomainResponse>) {
        let Some(response) = response else {
            return;
        };
        self.cname = AttrValue::from_option(response.cname.clone());
        self.contract_id = AttrValue::from_option(response.contract_id.clone());
        self.item_id = AttrValue::from_option(response.item_id.clone());
        self.status = AttrValue::from_option(response.status.clone());
        self.service_type = AttrValue::from_option(response.service_type.clone());
        self.cdn_service_status = AttrValue::from_option(response.cdn_service_status.clone());
    }

    /// Pre-flight check run before any remote call.
    ///
    /// An origin list that is still unknown passes; it is checked again once
    /// it resolves.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let origin = match &self.origin_config {
            AttrValue::Known(origin) => origin,
            AttrValue::Unknown => return Ok(()),
            AttrValue::Null => {
                return Err(ValidationError::field(
                    "origin_config",
                    "Origin config is required",
                ));
            }
        };
        if let Some(ips) = origin.origin_ips.as_known()
            && ips.len() > MAX_ORIGIN_IPS
        {
            return Err(ValidationError::TooManyOriginIps {
                count: ips.len(),
                max: MAX_ORIGIN_IPS,
            });
        }
        Ok(())
    }

    /// Resolves a pending host header to the domain name.
    pub fn apply_defaults(&mut self) {
        if let AttrValue::Known(origin) = &mut self.origin_config {
            let header = std::mem::take(&mut origin.default_origin_host_header);
            origin.default_origin_host_header = header.or_if_unknown(self.domain.clone());
        }
    }
}

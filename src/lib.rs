mod core;
mod resource;

#[cfg(test)]
mod tests;

pub use crate::core::domain::{
    domain_api::DomainApi,
    error::{CdnError, CdnResult, ValidationError},
    model::{
        attr_value::{AttrValue, BoolValue, StringValue},
        cdn_domain::{
            API_VERSION, AddCdnDomainRequest, AddCdnDomainResponse, ApiErrorBody,
            EditCdnDomainRequest, ORIGIN_IPS_SEPARATOR, OriginConfigPayload,
            OriginConfigResponse, QueryCdnDomainResponse, join_origin_ips, split_origin_ips,
        },
        client_config::{ClientConfig, RateLimitConfig},
        domain_record::{DomainRecord, MAX_ORIGIN_IPS, OriginConfig},
    },
    schema::{Attribute, AttributeType, DefaultValue, Schema, domain_schema},
    value_object::{
        ApiEndpoint, ApiToken, ClientIpHeader, DomainComment, HostHeader, MAX_COMMENT_LENGTH,
        MAX_HOST_HEADER_LENGTH, MAX_LABEL_LENGTH, MAX_ORIGIN_IPS_LENGTH, OriginAddresses,
    },
};
pub use crate::core::infrastructure::api_client::ApiClient;
pub use crate::resource::application::service::domain_service::DomainService;

use std::env;
use std::time::Duration;

/// Environment variable holding the API base URL.
pub const ENDPOINT_ENV: &str = "CDNETWORKS_ENDPOINT";

/// Environment variable holding the `Authorization` header value.
pub const API_TOKEN_ENV: &str = "CDNETWORKS_API_TOKEN";

/// A client for managing CDNetworks acceleration domains
///
/// This client provides:
/// - The resource schema of an acceleration domain
/// - Planning: defaults and validation of a declared configuration
/// - Create, read, update and delete against the CDNetworks API
///
/// # Examples
///
/// ```no_run
/// use cdnetworks_domain::{CdnClient, CdnResult, DomainRecord, OriginConfig};
///
/// #[tokio::main]
/// async fn main() -> CdnResult<()> {
///     let client = CdnClient::builder()
///         .endpoint("https://api.cdnetworks.com")?
///         .api_token("Basic dXNlcjpzZWNyZXQ=")?
///         .build()?;
///
///     let config = DomainRecord::declared(
///         "cdn.example.com",
///         OriginConfig::new(vec!["1.1.1.1".to_string()]),
///     );
///     let planned = client.plan_domain(&config, None)?;
///     let state = client.create_domain(&planned).await?;
///     println!("cname: {:?}", state.cname.as_str());
///     Ok(())
/// }
/// ```
pub struct CdnClient {
    service: DomainService<ApiClient>,
}

/// Builder for CdnClient configuration
#[derive(Debug, Default)]
pub struct CdnClientBuilder {
    endpoint: Option<ApiEndpoint>,
    api_token: Option<ApiToken>,
    config: ClientConfig,
}

impl CdnClientBuilder {
    /// Starts from `CDNETWORKS_ENDPOINT` and `CDNETWORKS_API_TOKEN`.
    ///
    /// Variables that are set are validated here; unset ones are reported
    /// by [`build`](Self::build).
    pub fn from_env() -> CdnResult<Self> {
        let mut builder = Self::default();
        if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
            builder = builder.endpoint(endpoint)?;
        }
        if let Ok(api_token) = env::var(API_TOKEN_ENV) {
            builder = builder.api_token(api_token)?;
        }
        Ok(builder)
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> CdnResult<Self> {
        self.endpoint = Some(ApiEndpoint::new(&endpoint.into())?);
        Ok(self)
    }

    pub fn api_token(mut self, api_token: impl Into<String>) -> CdnResult<Self> {
        self.api_token = Some(ApiToken::new(api_token)?);
        Ok(self)
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rate_limit(mut self, requests_per_second: u32, burst_size: u32) -> Self {
        self.config.rate_limit = Some(RateLimitConfig {
            requests_per_second,
            burst_size,
        });
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn build(self) -> CdnResult<CdnClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ValidationError::field("endpoint", "Endpoint is required"))?;
        let token = self
            .api_token
            .ok_or_else(|| ValidationError::field("api_token", "API token is required"))?;

        let api_client = ApiClient::new(endpoint, token, &self.config)?;
        Ok(CdnClient {
            service: DomainService::new(api_client),
        })
    }
}

impl CdnClient {
    /// Creates a new builder for CdnClient configuration
    pub fn builder() -> CdnClientBuilder {
        CdnClientBuilder::default()
    }

    /// Returns the resource schema of an acceleration domain
    pub fn schema(&self) -> &Schema {
        self.service.schema()
    }

    /// Returns the API base URL
    pub fn endpoint(&self) -> &ApiEndpoint {
        self.service.api().endpoint()
    }

    /// Resolves defaults and validates a declared configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The configuration as declared by the caller
    /// * `prior` - The stored state, when the domain already exists
    pub fn plan_domain(
        &self,
        config: &DomainRecord,
        prior: Option<&DomainRecord>,
    ) -> CdnResult<DomainRecord> {
        self.service.plan(config, prior)
    }

    /// Creates a domain from a planned record
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The record fails validation (nothing is sent in that case)
    /// - The server is unreachable
    /// - The API rejects the request
    ///
    /// When the domain was created but a later step failed, the error is
    /// [`CdnError::PartiallyCreated`]; keep [`CdnError::partial_state`] as state.
    pub async fn create_domain(&self, plan: &DomainRecord) -> CdnResult<DomainRecord> {
        self.service.create(plan).await
    }

    /// Refreshes a stored state; `None` means the domain is gone
    pub async fn read_domain(&self, state: &DomainRecord) -> CdnResult<Option<DomainRecord>> {
        self.service.read(state).await
    }

    /// Applies a planned change to an existing domain
    pub async fn update_domain(
        &self,
        plan: &DomainRecord,
        state: &DomainRecord,
    ) -> CdnResult<DomainRecord> {
        self.service.update(plan, state).await
    }

    /// Deletes a domain
    pub async fn delete_domain(&self, state: &DomainRecord) -> CdnResult<()> {
        self.service.delete(state).await
    }
}

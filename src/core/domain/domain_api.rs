use crate::core::domain::{
    error::CdnResult,
    model::cdn_domain::{AddCdnDomainRequest, EditCdnDomainRequest, QueryCdnDomainResponse},
};
use async_trait::async_trait;

/// Remote operations on acceleration domains.
///
/// Implemented over HTTP by [`ApiClient`](crate::core::infrastructure::api_client::ApiClient);
/// the resource service only depends on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainApi: Send + Sync {
    /// Creates a domain and returns the id assigned by the platform.
    async fn add_domain(&self, request: &AddCdnDomainRequest) -> CdnResult<String>;

    /// Fetches the full server view of a domain.
    ///
    /// # Errors
    /// `CdnError::NotFound` when the domain does not exist.
    async fn query_domain(&self, domain_id: &str) -> CdnResult<QueryCdnDomainResponse>;

    async fn edit_domain(&self, domain_id: &str, request: &EditCdnDomainRequest)
    -> CdnResult<()>;

    async fn enable_domain(&self, domain_id: &str) -> CdnResult<()>;

    async fn disable_domain(&self, domain_id: &str) -> CdnResult<()>;

    async fn delete_domain(&self, domain_id: &str) -> CdnResult<()>;
}

//! HTTP client for the CDNetworks domain API.

use crate::core::domain::{
    domain_api::DomainApi,
    error::{CdnError, CdnResult, ValidationError},
    model::{
        cdn_domain::{
            AddCdnDomainRequest, AddCdnDomainResponse, ApiErrorBody, EditCdnDomainRequest,
            QueryCdnDomainResponse,
        },
        client_config::ClientConfig,
    },
    value_object::{ApiEndpoint, ApiToken},
};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, LOCATION},
};
use std::num::NonZeroU32;
use std::sync::Arc;

/// HTTP client that calls the CDNetworks domain API.
///
/// Every request carries the configured token in the `Authorization` header.
/// When a rate limit is configured, requests wait for capacity before being
/// sent. Failed requests are not retried.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    endpoint: ApiEndpoint,
    token: ApiToken,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `CdnError::Validation` for a zero rate limit and
    /// `CdnError::Connection` if the HTTP client cannot be built.
    pub fn new(endpoint: ApiEndpoint, token: ApiToken, config: &ClientConfig) -> CdnResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CdnError::Connection(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| {
                    ValidationError::field("requests_per_second", "Rate limit must be positive")
                })?;
                let burst = NonZeroU32::new(rl.burst_size).ok_or_else(|| {
                    ValidationError::field("burst_size", "Burst size must be positive")
                })?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            endpoint,
            token,
            rate_limiter,
        })
    }

    /// Returns the API base URL.
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Sends one request and returns the response if its status is a success.
    async fn execute_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> CdnResult<reqwest::Response>
    where
        B: serde::Serialize,
    {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.endpoint.join(path);
        log::debug!("{method} {url}");

        let mut req_builder = self
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, self.token.as_str())
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| CdnError::Connection(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if status == StatusCode::NOT_FOUND {
            return Err(CdnError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            log::error!("API error ({status}): {error_text}");
            let body: ApiErrorBody = serde_json::from_str(&error_text).unwrap_or_default();
            return Err(CdnError::Api {
                status: status.as_u16(),
                code: body.code,
                message: body.message.unwrap_or(error_text),
            });
        }

        Ok(response)
    }

    async fn parse_json<T>(response: reqwest::Response) -> CdnResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let text = response
            .text()
            .await
            .map_err(|e| CdnError::Connection(format!("Failed to read response: {}", e)))?;
        log::debug!("Response Body: {text}");
        serde_json::from_str(&text)
            .map_err(|e| CdnError::Connection(format!("Failed to parse response: {}", e)))
    }
}

fn domain_path(domain_id: &str) -> String {
    format!("api/domain/{}", domain_id)
}

/// Takes the domain id from the last path segment of a `Location` header.
fn domain_id_from_location(location: &str) -> Option<String> {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl DomainApi for ApiClient {
    async fn add_domain(&self, request: &AddCdnDomainRequest) -> CdnResult<String> {
        let response = self
            .execute_request(Method::POST, "api/domain", Some(request))
            .await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .and_then(domain_id_from_location);

        let text = response
            .text()
            .await
            .map_err(|e| CdnError::Connection(format!("Failed to read response: {}", e)))?;
        log::debug!("Response Body: {text}");

        let body: AddCdnDomainResponse = if text.trim().is_empty() {
            AddCdnDomainResponse::default()
        } else {
            serde_json::from_str(&text)
                .map_err(|e| CdnError::Connection(format!("Failed to parse response: {}", e)))?
        };

        body.domain_id.or(location).ok_or_else(|| {
            CdnError::Connection("Create response did not contain a domain id".to_string())
        })
    }

    async fn query_domain(&self, domain_id: &str) -> CdnResult<QueryCdnDomainResponse> {
        let response = self
            .execute_request(Method::GET, &domain_path(domain_id), None::<&()>)
            .await?;
        Self::parse_json(response).await
    }

    async fn edit_domain(
        &self,
        domain_id: &str,
        request: &EditCdnDomainRequest,
    ) -> CdnResult<()> {
        self.execute_request(Method::PUT, &domain_path(domain_id), Some(request))
            .await?;
        Ok(())
    }

    async fn enable_domain(&self, domain_id: &str) -> CdnResult<()> {
        let path = format!("{}/enable", domain_path(domain_id));
        self.execute_request(Method::PUT, &path, None::<&()>).await?;
        Ok(())
    }

    async fn disable_domain(&self, domain_id: &str) -> CdnResult<()> {
        let path = format!("{}/disable", domain_path(domain_id));
        self.execute_request(Method::PUT, &path, None::<&()>).await?;
        Ok(())
    }

    async fn delete_domain(&self, domain_id: &str) -> CdnResult<()> {
        self.execute_request(Method::DELETE, &domain_path(domain_id), None::<&()>)
            .await?;
        Ok(())
    }
}

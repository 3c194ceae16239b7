//! MBTA v3 HTTP client.
//!
//! Provides async methods for the two queries the router needs: rail
//! routes filtered by type, and the stops served by a single route.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Route, RouteType, Stop};
use crate::network::{RouteProvider, StopProvider};

use super::convert::{convert_routes, convert_stops};
use super::error::MbtaError;
use super::types::{RoutesDocument, StopsDocument};

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest body excerpt kept in a decode error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// API key sent as `x-api-key`. Anonymous access works but is
    /// heavily rate limited.
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MbtaConfig {
    /// Create a new config, optionally with an API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// MBTA v3 API client.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
}

impl MbtaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, MbtaError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| MbtaError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert("x-api-key", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get routes of the given types, e.g. [`RouteType::RAIL`].
    ///
    /// Filtering happens server-side so only the requested routes are
    /// transferred.
    pub async fn get_routes(&self, types: &[RouteType]) -> Result<Vec<Route>, MbtaError> {
        let doc: RoutesDocument = self
            .get_json("routes", &[("filter[type]", type_filter(types))])
            .await?;

        convert_routes(&doc).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Get the stops served by a route.
    ///
    /// The API only returns per-route stop lists when filtering on exactly
    /// one route, so this is one request per route.
    pub async fn get_stops(&self, route: &Route) -> Result<Vec<Stop>, MbtaError> {
        let doc: StopsDocument = self
            .get_json("stops", &[("filter[route]", route.id.clone())])
            .await?;

        convert_stops(&doc).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, MbtaError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, ?query, "MBTA request");

        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MbtaError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MbtaError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MbtaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MbtaError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

impl RouteProvider for MbtaClient {
    async fn get_routes(&self, types: &[RouteType]) -> Result<Vec<Route>, MbtaError> {
        MbtaClient::get_routes(self, types).await
    }
}

impl StopProvider for MbtaClient {
    async fn get_stops(&self, route: &Route) -> Result<Vec<Stop>, MbtaError> {
        MbtaClient::get_stops(self, route).await
    }
}

/// Format route types as the comma-separated `filter[type]` value.
fn type_filter(types: &[RouteType]) -> String {
    types
        .iter()
        .map(|t| t.code().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

//! Blocking HTTP client for the WooCommerce v3 REST API (feature `remote`).
//!
//! [`Api`] issues read-only GET requests authenticated with consumer
//! key/secret query parameters and pairs every response with the route
//! resolved from the request URL, so the body can be decoded without
//! guessing its schema.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::decoder::{decode_str, Payload};
use crate::error::{ClientError, DecodeError};
use crate::resolver::Resolver;
use crate::types::ResolvedRoute;

const API_NAMESPACE: &str = "wp-json/wc/v3";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A configured API connection.
#[derive(Debug, Clone)]
pub struct Api {
    base_url: String,
    consumer_key: String,
    consumer_secret: String,
    resolver: Resolver,
    http: Client,
}

impl Api {
    /// Creates a connection to the store at `base_url`.
    ///
    /// `base_url` is the site root (e.g. `https://shop.example.com`); the
    /// `wp-json/wc/v3` namespace is appended per request.
    pub fn new(
        base_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let base_url: String = base_url.into();
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|source| ClientError::Network {
                url: base_url.clone(),
                source,
            })?;
        Ok(Api {
            base_url,
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            resolver: Resolver::new(),
            http,
        })
    }

    /// Issues a GET request for `endpoint`, an API path relative to the
    /// namespace (e.g. `orders/727`).
    ///
    /// The endpoint is resolved against the route table before the request
    /// is sent; unknown endpoints fail without touching the network.
    pub fn get(&self, endpoint: &str) -> Result<ApiResponse, ClientError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            API_NAMESPACE,
            endpoint.trim_matches('/')
        );
        let route = self.resolver.resolve(&url)?;

        let response = self
            .http
            .get(&url)
            .query(&[
                ("consumer_key", self.consumer_key.as_str()),
                ("consumer_secret", self.consumer_secret.as_str()),
            ])
            .send()
            .map_err(|source| ClientError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().map_err(|source| ClientError::Network {
            url: url.clone(),
            source,
        })?;

        Ok(ApiResponse {
            route,
            status,
            url: final_url,
            body,
        })
    }
}

/// A fetched response, paired with the route resolved from its request URL.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    route: ResolvedRoute,
    status: u16,
    url: String,
    body: String,
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The final request URL, query parameters included.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn route(&self) -> ResolvedRoute {
        self.route
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON without decoding it against the schema.
    pub fn json(&self) -> Result<serde_json::Value, ClientError> {
        let value = serde_json::from_str(&self.body).map_err(|source| {
            ClientError::Decode(DecodeError::InvalidJson { source })
        })?;
        Ok(value)
    }

    /// Decodes the body against the resolved route.
    ///
    /// Non-2xx responses are refused outright: error bodies do not follow
    /// the endpoint's schema.
    pub fn data(&self) -> Result<Payload, ClientError> {
        if !self.is_success() {
            return Err(ClientError::Status {
                url: self.url.clone(),
                status: self.status,
            });
        }
        Ok(decode_str(self.route, &self.body)?)
    }
}

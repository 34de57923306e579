//! HTTP client for the DLS backend's management endpoints.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::errors::ConsoleError;
use crate::models::{Lease, Origin};

/// Client for the `/-/...` resource endpoints of a DLS backend.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ResourceClient {
    /// Create a client from the console configuration.
    pub fn new(config: &Config) -> Result<Self, ConsoleError> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Self::with_http(&config.backend_url, http)
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http(base_url: &str, http: reqwest::Client) -> Result<Self, ConsoleError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConsoleError::Config(format!("Invalid backend URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConsoleError::Config(format!(
                "Backend URL {} cannot carry a path",
                base_url
            )));
        }

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /-/config - Raw configuration dump.
    pub async fn fetch_config(&self) -> Result<serde_json::Value, ConsoleError> {
        self.get_json(self.endpoint(&["-", "config"])).await
    }

    /// GET /-/origins - All origins, optionally with their leases embedded.
    pub async fn fetch_origins(&self, with_leases: bool) -> Result<Vec<Origin>, ConsoleError> {
        let mut url = self.endpoint(&["-", "origins"]);
        url.query_pairs_mut()
            .append_pair("leases", flag(with_leases));
        self.get_json(url).await
    }

    /// GET /-/leases - All leases, optionally with their origin embedded.
    pub async fn fetch_leases(&self, with_origin: bool) -> Result<Vec<Lease>, ConsoleError> {
        let mut url = self.endpoint(&["-", "leases"]);
        url.query_pairs_mut().append_pair("origin", flag(with_origin));
        self.get_json(url).await
    }

    /// GET /-/health - Backend liveness.
    pub async fn health(&self) -> Result<(), ConsoleError> {
        let url = self.endpoint(&["-", "health"]);
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        expect_status(resp, |status| status == StatusCode::OK).await
    }

    /// DELETE /-/origins - Remove every origin.
    pub async fn delete_origins(&self) -> Result<(), ConsoleError> {
        self.delete(self.endpoint(&["-", "origins"])).await
    }

    /// DELETE /-/origins/{origin_ref}
    pub async fn delete_origin(&self, origin_ref: &str) -> Result<(), ConsoleError> {
        let origin_ref = reference("origin_ref", origin_ref)?;
        self.delete(self.endpoint(&["-", "origins", origin_ref])).await
    }

    /// DELETE /-/lease/{lease_ref}
    pub async fn delete_lease(&self, lease_ref: &str) -> Result<(), ConsoleError> {
        let lease_ref = reference("lease_ref", lease_ref)?;
        self.delete(self.endpoint(&["-", "lease", lease_ref])).await
    }

    /// DELETE /-/leases/expired
    pub async fn delete_expired_leases(&self) -> Result<(), ConsoleError> {
        self.delete(self.endpoint(&["-", "leases", "expired"])).await
    }

    /// Build an endpoint URL below the base URL; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ConsoleError> {
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;

        // 200 is the only answer we render.
        if resp.status() != StatusCode::OK {
            return Err(status_error(resp).await);
        }

        let body = resp.text().await?;
        tracing::debug!(payload = %body, "received");
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete(&self, url: Url) -> Result<(), ConsoleError> {
        tracing::debug!(%url, "DELETE");
        let resp = self.http.delete(url).send().await?;
        expect_status(resp, |status| status.is_success()).await
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Reject empty references before anything goes over the wire.
fn reference<'a>(name: &str, value: &'a str) -> Result<&'a str, ConsoleError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConsoleError::InvalidReference(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(value)
}

async fn expect_status(
    resp: reqwest::Response,
    accept: impl Fn(StatusCode) -> bool,
) -> Result<(), ConsoleError> {
    if accept(resp.status()) {
        Ok(())
    } else {
        Err(status_error(resp).await)
    }
}

async fn status_error(resp: reqwest::Response) -> ConsoleError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status, body = %body, "unexpected status");
    ConsoleError::Status { status, body }
}

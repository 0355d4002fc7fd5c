//! Supabase REST (PostgREST) client
//!
//! Every call is an independent HTTP request authenticated with the service
//! role key in both the `apikey` and `Authorization` headers.

use crate::config::{RestSettings, SecretString};
use crate::domain::{IngestError, PlaceUpdate, PriorPlace, Result, StoreError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Outcome of probing one table name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableProbe {
    Found,
    Missing,
}

/// HTTP client bound to one Supabase project
pub struct RestClient {
    client: Client,

    /// Project URL without a trailing slash
    base_url: String,
}

impl RestClient {
    /// Create a new REST client
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(settings: RestSettings) -> Result<Self> {
        let headers = default_headers(&settings.api_key)?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .connect_timeout(Duration::from_secs(settings.timeout_seconds))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                IngestError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Check whether `table` is exposed by the API
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unauthorized` on 401/403 and
    /// `StoreError::ConnectionFailed` if the request cannot be sent.
    pub async fn probe_table(&self, table: &str) -> Result<TableProbe> {
        let url = self.table_url(table);
        let resp = self
            .client
            .get(&url)
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        match resp.status() {
            StatusCode::OK | StatusCode::PARTIAL_CONTENT => Ok(TableProbe::Found),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                Err(StoreError::Unauthorized(format!(
                    "Probe of {table} returned {status}: {body}"
                ))
                .into())
            }
            status => {
                tracing::debug!(table, status = status.as_u16(), "Table not available");
                Ok(TableProbe::Missing)
            }
        }
    }

    /// PATCH the place with `id` and return the prior state of each touched row
    ///
    /// # Errors
    ///
    /// Returns `StoreError::RequestFailed` for any status other than
    /// 200, 201 or 204, and `StoreError::InvalidResponse` for a body that is
    /// not a JSON array of places.
    pub async fn patch_place(
        &self,
        table: &str,
        id: &str,
        update: &PlaceUpdate,
    ) -> Result<Vec<PriorPlace>> {
        let url = self.table_url(table);
        let resp = self
            .client
            .patch(&url)
            .query(&[
                ("id", format!("eq.{id}")),
                ("select", "name,halal_status".to_string()),
            ])
            .header("Prefer", "return=representation")
            .json(update)
            .send()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let body = resp
                    .text()
                    .await
                    .map_err(|e| StoreError::InvalidResponse(e.to_string()))?;
                parse_prior_places(&body)
            }
            StatusCode::NO_CONTENT => Ok(Vec::new()),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(StoreError::RequestFailed {
                    status: status.as_u16(),
                    body,
                }
                .into())
            }
        }
    }
}

fn default_headers(api_key: &SecretString) -> Result<HeaderMap> {
    let key: &str = api_key.expose_secret().as_ref();
    let invalid =
        |_| IngestError::Configuration("Supabase key is not a valid header value".to_string());

    let mut apikey = HeaderValue::from_str(key).map_err(invalid)?;
    apikey.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {key}")).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", apikey);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn parse_prior_places(body: &str) -> Result<Vec<PriorPlace>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| {
        StoreError::InvalidResponse(format!("Expected a JSON array of places: {}", e)).into()
    })
}

//! [`ResourceLookup`] over the commerce platform's HTTP API.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `{auth_url}/oauth/token` | Client-credentials token |
//! | GET    | `{api_url}/{project_key}/products/{id}` | Product by ID |
//! | GET    | `{api_url}/{project_key}/inventory?where=sku="<sku>"&limit=1` | Inventory entry by SKU |
//!
//! The access token is fetched lazily and reused until shortly before it
//! expires. Requests are not retried; a failed call surfaces as
//! [`LookupError::Transport`] and the caller decides what to do with it.

use super::{LookupError, ResourceLookup};
use crate::model::{InventoryEntry, Product};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

/// Tokens are refreshed this long before the platform says they expire.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Connection settings for [`PlatformLookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    pub project_key: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: Option<String>,
    pub api_url: String,
    pub auth_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductResponse {
    id: String,
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    master_data: Option<MasterData>,
}

#[derive(Debug, Deserialize)]
struct MasterData {
    current: ProductProjection,
}

#[derive(Debug, Deserialize)]
struct ProductProjection {
    #[serde(default)]
    name: BTreeMap<String, String>,
}

impl From<ProductResponse> for Product {
    fn from(resp: ProductResponse) -> Self {
        let name = resp.master_data.and_then(|data| {
            let mut names = data.current.name;
            names
                .remove("en")
                .or_else(|| names.into_values().next())
        });
        Product {
            id: resp.id,
            key: resp.key,
            name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct InventoryPage {
    #[serde(default)]
    results: Vec<InventoryEntry>,
}

/// Lookup backed by the platform's product and inventory endpoints.
pub struct PlatformLookup {
    http: reqwest::Client,
    config: PlatformConfig,
    token: Mutex<Option<CachedToken>>,
}

impl PlatformLookup {
    pub fn new(mut config: PlatformConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::transport("client_init", e))?;

        config.api_url = config.api_url.trim_end_matches('/').to_string();
        config.auth_url = config.auth_url.trim_end_matches('/').to_string();

        Ok(Self {
            http,
            config,
            token: Mutex::new(None),
        })
    }

    /// Returns a valid access token, fetching a new one when the cached
    /// token is missing or about to expire.
    async fn access_token(&self) -> Result<String, LookupError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let endpoint = "POST /oauth/token";
        let url = format!("{}/oauth/token", self.config.auth_url);
        let mut form = vec![("grant_type", "client_credentials".to_string())];
        if let Some(scope) = &self.config.scope {
            form.push(("scope", scope.clone()));
        }

        debug!("Requesting access token");
        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&form)
            .send()
            .await
            .map_err(|e| LookupError::transport(endpoint, e))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            warn!(status, "Token request rejected");
            return Err(LookupError::transport(endpoint, format!("status {status}")));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| LookupError::decode(endpoint, e))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        let value = token.access_token;
        *cached = Some(CachedToken {
            value: value.clone(),
            expires_at: Instant::now() + lifetime,
        });
        Ok(value)
    }

    fn project_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.config.api_url, self.config.project_key, path)
    }
}

#[async_trait]
impl ResourceLookup for PlatformLookup {
    #[instrument(skip(self))]
    async fn get_product(&self, id: &str) -> Result<Option<Product>, LookupError> {
        let endpoint = format!("GET /products/{id}");
        let token = self.access_token().await?;

        let resp = self
            .http
            .get(self.project_url(&format!("products/{id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| LookupError::transport(endpoint.clone(), e))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("Product not found");
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::transport(
                endpoint,
                format!("status {status}: {body}"),
            ));
        }

        let product: ProductResponse = resp
            .json()
            .await
            .map_err(|e| LookupError::decode(endpoint, e))?;
        Ok(Some(product.into()))
    }

    #[instrument(skip(self))]
    async fn get_inventory_entry(&self, sku: &str) -> Result<Option<InventoryEntry>, LookupError> {
        let endpoint = "GET /inventory";
        let token = self.access_token().await?;

        let resp = self
            .http
            .get(self.project_url("inventory"))
            .bearer_auth(token)
            .query(&[("where", format!("sku=\"{sku}\"")), ("limit", "1".to_string())])
            .send()
            .await
            .map_err(|e| LookupError::transport(endpoint, e))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(LookupError::transport(
                endpoint,
                format!("status {status}: {body}"),
            ));
        }

        let page: InventoryPage = resp
            .json()
            .await
            .map_err(|e| LookupError::decode(endpoint, e))?;
        Ok(page.results.into_iter().next())
    }
}

use crate::config::Config;
use crate::models::{
    error::AppError,
    product::{Product, ProductCreate, ProductId},
    snapshot::{DateRange, Snapshot},
};
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

// CONSTANTS
const DATE_FORMAT: &str = "%Y-%m-%d";

// API CONFIGURATION
/// Endpoint layout of the product backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// `GET` and `POST` target for the product collection.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{id}", self.base_url)
    }

    pub fn latest_url(&self, id: ProductId) -> String {
        format!("{}/latest", self.product_url(id))
    }

    pub fn history_url(&self, id: ProductId, days: u32) -> String {
        format!("{}/history?days={days}", self.product_url(id))
    }

    /// Best-price lookup. Missing bounds are left out of the query string entirely.
    pub fn best_price_url(
        &self,
        id: ProductId,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> String {
        let base = format!("{}/best", self.product_url(id));
        let params: Vec<String> = [("start", start), ("end", end)]
            .into_iter()
            .filter_map(|(name, date)| date.map(|d| format!("{name}={}", d.format(DATE_FORMAT))))
            .collect();

        if params.is_empty() {
            base
        } else {
            format!("{base}?{}", params.join("&"))
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::api_base_url().to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// SHOP CLIENT
/// HTTP client for the product backend.
pub struct ShopClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ShopClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.get_json(&self.config.products_url()).await
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Product, AppError> {
        self.get_json(&self.config.product_url(id)).await
    }

    /// Creates a product. A rejected request carries the response body as its message.
    pub async fn create_product(&self, payload: &ProductCreate) -> Result<Product, AppError> {
        let response = self
            .http
            .post(self.config.products_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(creation_error(status, &body));
        }

        decode(response).await
    }

    /// Snapshots from the most recent capture.
    pub async fn get_latest_snapshots(&self, id: ProductId) -> Result<Vec<Snapshot>, AppError> {
        self.get_json(&self.config.latest_url(id)).await
    }

    /// Snapshots captured within the trailing `days` window.
    pub async fn get_history(&self, id: ProductId, days: u32) -> Result<Vec<Snapshot>, AppError> {
        self.get_json(&self.config.history_url(id, days)).await
    }

    /// Lowest-price snapshot within `range`, with its URLs wrapped into priced entries.
    pub async fn get_best_price(
        &self,
        id: ProductId,
        range: DateRange,
    ) -> Result<Snapshot, AppError> {
        let url = self.config.best_price_url(id, range.start, range.end);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::BestPriceError(status_text(status).to_string()));
        }

        let snapshot: Snapshot = decode(response).await?;
        Ok(snapshot.with_wrapped_prices())
    }

    /// Executes a GET and decodes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status));
        }

        decode(response).await
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
    let body = response
        .text()
        .await
        .map_err(|e| AppError::DecodeError(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| AppError::DecodeError(e.to_string()))
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown status")
}

/// Creates an error for a failed GET based on its status code.
pub fn error_for_status(status: StatusCode) -> AppError {
    let message = format!("Error {}: {}", status.as_u16(), status_text(status));
    match status.as_u16() {
        404 => AppError::NotFound(message),
        _ => AppError::ApiError(message),
    }
}

/// Error for a rejected `POST /products`: the body, or a generic message when it is empty.
pub fn creation_error(status: StatusCode, body: &str) -> AppError {
    if body.trim().is_empty() {
        AppError::CreationError(format!("Error creating product ({})", status.as_u16()))
    } else {
        AppError::CreationError(body.to_string())
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches all products using default configuration.
pub async fn list_products() -> Result<Vec<Product>, AppError> {
    ShopClient::new()?.list_products().await
}

/// Fetches one product with its snapshots.
pub async fn get_product(id: ProductId) -> Result<Product, AppError> {
    ShopClient::new()?.get_product(id).await
}

/// Creates a product from a name and a shopping prompt.
pub async fn create_product(payload: ProductCreate) -> Result<Product, AppError> {
    ShopClient::new()?.create_product(&payload).await
}

pub async fn get_latest_snapshots(id: ProductId) -> Result<Vec<Snapshot>, AppError> {
    ShopClient::new()?.get_latest_snapshots(id).await
}

pub async fn get_history(id: ProductId, days: u32) -> Result<Vec<Snapshot>, AppError> {
    ShopClient::new()?.get_history(id, days).await
}

pub async fn get_best_price(id: ProductId, range: DateRange) -> Result<Snapshot, AppError> {
    ShopClient::new()?.get_best_price(id, range).await
}

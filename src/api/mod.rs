//! Typed client for the remote HTTP collection store.
//!
//! One REST resource holds the whole inventory: `GET {base}` lists, `POST
//! {base}` creates, and `GET`/`PUT`/`DELETE {base}/{id}` operate on a single
//! record. No retries are performed here; retry policy belongs to the caller.

mod error;

pub use error::{ApiError, WriteOp};

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use crate::cache::{FetchFuture, Fetcher};
use crate::model::{Book, BookFields};

/// HTTP client for the book collection endpoint.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: &str, connect_timeout: Duration, request_timeout: Duration) -> Self {
        let http = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .expect("Failed to build store client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Cache key for the whole collection.
    pub fn collection_key(&self) -> String {
        self.base_url.clone()
    }

    /// Cache key for a single record.
    pub fn item_key(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch the full collection.
    pub async fn list(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.collection_key();
        let value = self.read_json(&url).await?;
        decode(&url, value)
    }

    /// Fetch one record by identifier. A missing record is [`ApiError::NotFound`].
    pub async fn get(&self, id: &str) -> Result<Book, ApiError> {
        let url = self.item_key(id);
        let value = self.read_json(&url).await?;
        decode(&url, value)
    }

    /// Create a new record; returns the stored entity including its assigned id.
    pub async fn create(&self, fields: &BookFields) -> Result<Book, ApiError> {
        let url = self.collection_key();
        let resp = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(fields)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.clone(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(ApiError::Write {
                op: WriteOp::Create,
                status: resp.status().as_u16(),
            });
        }

        let body = resp.text().await.map_err(|source| ApiError::Network {
            url: url.clone(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// Replace an existing record's fields.
    pub async fn update(&self, id: &str, fields: &BookFields) -> Result<(), ApiError> {
        let url = self.item_key(id);
        let resp = self
            .http
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(fields)
            .send()
            .await
            .map_err(|source| ApiError::Network { url, source })?;

        if !resp.status().is_success() {
            return Err(ApiError::Write {
                op: WriteOp::Update,
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }

    /// Remove a record.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_key(id);
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|source| ApiError::Network { url, source })?;

        if !resp.status().is_success() {
            return Err(ApiError::Write {
                op: WriteOp::Delete,
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }

    /// GET a resource URL and parse the body as JSON.
    async fn read_json(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!(url, "fetching resource");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl Fetcher for StoreClient {
    fn fetch(&self, key: &str) -> FetchFuture {
        let client = self.clone();
        let url = key.to_string();
        Box::pin(async move { client.read_json(&url).await })
    }
}

fn decode<T: serde::de::DeserializeOwned>(url: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

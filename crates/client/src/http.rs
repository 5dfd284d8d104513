//! Thin HTTP wrapper over the gcrental API.
//!
//! Every request carries `Content-Type: application/json`. When the
//! caller opts into [`Auth::Bearer`] and the token store holds a session,
//! an `Authorization: Bearer` header is attached; with no stored session
//! the request simply goes out unauthenticated and the server answers 401.
//!
//! Any non-success status becomes [`ClientError::Api`] carrying the raw
//! response body as the message. No retries, no caching, no in-flight
//! deduplication.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::store::TokenStore;

/// Whether a request should attach the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No Authorization header.
    Public,
    /// Attach `Authorization: Bearer <access token>` when one is stored.
    Bearer,
}

/// The data-access wrapper used by everything that talks to the API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            store,
        }
    }

    /// The token store this client reads bearer tokens from.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub async fn get(&self, path: &str, auth: Auth) -> Result<Value, ClientError> {
        self.send(Method::GET, path, None::<&()>, auth).await
    }

    pub async fn post<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Value, ClientError> {
        self.send(Method::POST, path, body, auth).await
    }

    pub async fn put<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Value, ClientError> {
        self.send(Method::PUT, path, body, auth).await
    }

    pub async fn patch<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Value, ClientError> {
        self.send(Method::PATCH, path, body, auth).await
    }

    pub async fn delete(&self, path: &str, auth: Auth) -> Result<Value, ClientError> {
        self.send(Method::DELETE, path, None::<&()>, auth).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if auth == Auth::Bearer {
            if let Some(stored) = self.store.load()? {
                request = request.bearer_auth(stored.access_token);
            }
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // 204 and other empty bodies decode as null.
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:3000/api/", Arc::new(MemoryTokenStore::new()));
        assert_eq!(client.base_url, "http://localhost:3000/api");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is about as unreachable as it gets.
        let client = ApiClient::new("http://127.0.0.1:9/api", Arc::new(MemoryTokenStore::new()));
        let err = client.get("/cars", Auth::Public).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
    }
}

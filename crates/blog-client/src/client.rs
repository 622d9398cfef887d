//! HTTP client over `reqwest`.

use std::env;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use blog_core::domain::Post;
use blog_shared::ApiResponse;
use blog_shared::dto::{HealthResponse, PostRequest};

use crate::error::ClientError;

/// Base URL used when `BLOG_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Length of the content preview on post listings.
pub const LISTING_EXCERPT_CHARS: usize = 200;

/// Client for the blog API.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url: url,
            http: reqwest::Client::new(),
        })
    }

    /// Build a client from `BLOG_API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var("BLOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET /api/posts
    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.send(self.http.get(self.endpoint(&["api", "posts"])))
            .await
    }

    /// GET /api/posts/{id}
    pub async fn get_post(&self, id: &str) -> Result<Post, ClientError> {
        self.send(self.http.get(self.endpoint(&["api", "posts", id])))
            .await
    }

    /// POST /api/posts
    pub async fn create_post(&self, request: &PostRequest) -> Result<Post, ClientError> {
        self.send(
            self.http
                .post(self.endpoint(&["api", "posts"]))
                .json(request),
        )
        .await
    }

    /// PUT /api/posts/{id}
    pub async fn update_post(&self, id: &str, request: &PostRequest) -> Result<Post, ClientError> {
        self.send(
            self.http
                .put(self.endpoint(&["api", "posts", id]))
                .json(request),
        )
        .await
    }

    /// DELETE /api/posts/{id}
    pub async fn delete_post(&self, id: &str) -> Result<Post, ClientError> {
        self.send(self.http.delete(self.endpoint(&["api", "posts", id])))
            .await
    }

    /// GET /api/health
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&["api", "health"]))
            .send()
            .await
            .map_err(ClientError::Connection)?;
        let status = response.status().as_u16();

        response.json().await.map_err(|e| ClientError::Decode {
            status,
            reason: e.to_string(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Blog API unreachable");
            ClientError::Connection(e)
        })?;
        let status = response.status().as_u16();

        let envelope: ApiResponse<T> = response.json().await.map_err(|e| ClientError::Decode {
            status,
            reason: e.to_string(),
        })?;

        envelope
            .into_result()
            .map_err(|message| ClientError::Api { status, message })
    }
}

// web_app/api/client.rs - reqwest implementation of RecommendationApi

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::web_app::api::RecommendationApi;
use crate::web_app::config::AppConfig;
use crate::web_app::error::FetchError;
use crate::web_app::model::*;

#[derive(Debug, Clone)]
pub struct HttpRecommendationClient {
    client: Client,
    config: AppConfig,
}

impl HttpRecommendationClient {
    pub fn new(config: AppConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resp: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = resp.status();
        if !status.is_success() {
            tracing::error!("{} returned {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("{} sent an unreadable body: {}", url, e);
            FetchError::from(e)
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);
        let resp = self.client.post(&url).json(body).send().await?;
        self.read_json(&url, resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.config.endpoint(path);
        tracing::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;
        self.read_json(&url, resp).await
    }
}

#[async_trait]
impl RecommendationApi for HttpRecommendationClient {
    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse, FetchError> {
        self.post_json("/recommend", request).await
    }

    async fn similar(&self, request: &SimilarRequest) -> Result<SimilarResponse, FetchError> {
        self.post_json("/similar", request).await
    }

    async fn trending(&self) -> Result<TrendingResponse, FetchError> {
        self.get_json("/trending").await
    }
}

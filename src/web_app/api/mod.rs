// web_app/api/mod.rs - Access to the remote recommendation service
//
// The server functions never talk HTTP themselves; they go through the
// `RecommendationApi` handle installed here at startup. Tests swap in a fake
// with `set_test_client`.

pub mod client;

use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;

use crate::web_app::error::FetchError;
use crate::web_app::model::*;

pub use client::HttpRecommendationClient;

/// Operations offered by the recommendation service
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    /// `POST /recommend`
    async fn recommend(&self, request: &RecommendRequest) -> Result<RecommendResponse, FetchError>;

    /// `POST /similar`; an error flag in the body is passed through untouched
    async fn similar(&self, request: &SimilarRequest) -> Result<SimilarResponse, FetchError>;

    /// `GET /trending`
    async fn trending(&self) -> Result<TrendingResponse, FetchError>;
}

pub type SharedApi = Arc<dyn RecommendationApi>;

static CLIENT: OnceLock<SharedApi> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<SharedApi>> = Mutex::new(None);

/// Install the process-wide client
pub fn init_client(client: SharedApi) {
    if CLIENT.set(client).is_err() {
        tracing::warn!("Recommendation client already initialized");
    } else {
        tracing::info!("Recommendation client initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: SharedApi) {
    let mut guard = TEST_CLIENT_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(client);
}

/// Get the active client, preferring a test override
pub fn get_client() -> Option<SharedApi> {
    {
        let guard = TEST_CLIENT_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Recommendation client is not initialized");
    }
    client
}

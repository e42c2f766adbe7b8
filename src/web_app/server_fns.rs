// web_app/server_fns.rs - Leptos server function declarations
//
// Each server function forwards one call to the recommendation service.
// The #[server] macro generates:
// - On server: the actual function body
// - On client: a stub that POSTs to /api
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::SharedApi, ServerFnError> {
    use crate::web_app::api;

    // Context first (set manually in tests or by the app)
    if let Some(client) = use_context::<api::SharedApi>() {
        return Ok(client);
    }

    api::get_client().ok_or_else(|| ServerFnError::new("Recommendation client not available"))
}

/// Recommend movies for a free-text description
#[server(Recommend, "/api")]
pub async fn recommend(query: String, limit: u32) -> Result<RecommendResponse, ServerFnError> {
    tracing::info!("Recommend request: query='{}', limit={}", query, limit);

    let request = RecommendRequest { query, limit };
    let result = client()?.recommend(&request).await;

    match &result {
        Ok(res) => tracing::info!("Recommend successful: {} results", res.results.len()),
        Err(e) => tracing::error!("Recommend failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Recommend failed: {}", e)))
}

/// Movies similar to a known title
#[server(Similar, "/api")]
pub async fn similar(title: String) -> Result<SimilarResponse, ServerFnError> {
    tracing::info!("Similar request: title='{}'", title);

    let request = SimilarRequest { title };
    let result = client()?.similar(&request).await;

    match &result {
        Ok(res) if res.has_error() => tracing::warn!("Similar: backend flagged '{}'", request.title),
        Ok(res) => tracing::info!("Similar successful: {} results", res.results.len()),
        Err(e) => tracing::error!("Similar failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Similar failed: {}", e)))
}

/// This week's trending movies
#[server(Trending, "/api")]
pub async fn trending() -> Result<TrendingResponse, ServerFnError> {
    let result = client()?.trending().await;

    match &result {
        Ok(res) => tracing::info!("Trending successful: {} results", res.results.len()),
        Err(e) => tracing::error!("Trending failed: {}", e),
    }

    result.map_err(|e| ServerFnError::new(format!("Trending failed: {}", e)))
}

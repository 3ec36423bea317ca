//! Sync Actions
//!
//! REST wrappers around the remote location store, one async function per
//! operation. The client keeps no authoritative copy; callers follow every
//! successful write with a reload.

use gloo_net::http::{Request, Response};

use crate::config;
use crate::error::ApiError;
use crate::models::{FeatureCollection, FeatureId, LocationFeature};

/// Fetch every stored location.
pub async fn fetch_locations() -> Result<FeatureCollection, ApiError> {
    let response = Request::get(&config::api_url())
        .send()
        .await
        .map_err(ApiError::transport)?;
    if !response.ok() {
        return Err(rejection(response).await);
    }
    response
        .json::<FeatureCollection>()
        .await
        .map_err(ApiError::transport)
}

/// Create a new record.
pub async fn create_location(feature: &LocationFeature) -> Result<(), ApiError> {
    let response = Request::post(&config::api_url())
        .json(feature)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    ensure_success(response).await
}

/// Overwrite the record `id`.
pub async fn update_location(id: &FeatureId, feature: &LocationFeature) -> Result<(), ApiError> {
    let url = config::record_url(&config::api_url(), id);
    let response = Request::put(&url)
        .json(feature)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    ensure_success(response).await
}

/// Delete the record `id`.
pub async fn delete_location(id: &FeatureId) -> Result<(), ApiError> {
    let url = config::record_url(&config::api_url(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(ApiError::transport)?;
    ensure_success(response).await
}

async fn ensure_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(rejection(response).await)
    }
}

async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::rejected(status, &body)
}

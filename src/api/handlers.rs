//! Route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::services::{BlockedLinks, ResolutionService};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub titles: Vec<String>,
    pub blocked_categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    /// `null` means not in any blocked category.
    pub blocked_links: BlockedLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub mapped_classes: usize,
}

/// Body errors are reported in the same `[CODE] message` shape as
/// classification errors.
pub async fn check_article_categories(
    State(ctx): State<Context>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<CheckResponse>, AppError> {
    let Json(request) = payload?;
    let service = ResolutionService::from_ref(&ctx);
    let blocked_links = service
        .classify(&request.titles, &request.blocked_categories)
        .await?;
    Ok(Json(CheckResponse { blocked_links }))
}

pub async fn health(State(ctx): State<Context>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        mapped_classes: ctx.class_map.len(),
    })
}

//! Live Handlers - 宿主桥接入口
//!
//! 请求体按任意 JSON 解析，字段级容错交给领域层的宽松解析

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{
    EndLiveActivityCommand, GetLiveStatus, PlaybackIntentCommand, StartLiveActivityCommand,
    UpdateLiveActivityCommand,
};
use crate::domain::live_activity::{fields_from_value, RawFields};
use crate::infrastructure::http::dto::{
    ApiResponse, IntentRequest, IntentResponseDto, StartResponseDto, StatusResponseDto,
};
use crate::infrastructure::http::error::{parse_json_body, ApiError};
use crate::infrastructure::http::state::AppState;

/// 解析请求体，空体或非法 JSON 视为空字段集合
fn raw_fields(body: &Bytes) -> RawFields {
    if body.is_empty() {
        return RawFields::new();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(value) => fields_from_value(value),
        Err(e) => {
            tracing::debug!(error = %e, "Unparseable bridge payload, using empty fields");
            RawFields::new()
        }
    }
}

// ============================================================================
// Start
// ============================================================================

pub async fn start_live(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<StartResponseDto>>, ApiError> {
    let cmd = StartLiveActivityCommand::from_combined(raw_fields(&body));

    let result = state.start_handler.handle(cmd).await?;
    let status = state.status_handler.handle(GetLiveStatus).await?;

    Ok(Json(ApiResponse::success(StartResponseDto::new(result, status))))
}

// ============================================================================
// Update
// ============================================================================

pub async fn update_live(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<StatusResponseDto>>, ApiError> {
    let cmd = UpdateLiveActivityCommand {
        snapshot_fields: raw_fields(&body),
    };

    let status = state.update_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(StatusResponseDto { status })))
}

// ============================================================================
// End
// ============================================================================

pub async fn end_live(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StatusResponseDto>>, ApiError> {
    let status = state.end_handler.handle(EndLiveActivityCommand).await?;

    Ok(Json(ApiResponse::success(StatusResponseDto { status })))
}

// ============================================================================
// Status
// ============================================================================

pub async fn live_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<StatusResponseDto>>, ApiError> {
    let status = state.status_handler.handle(GetLiveStatus).await?;

    Ok(Json(ApiResponse::success(StatusResponseDto { status })))
}

// ============================================================================
// Intent
// ============================================================================

pub async fn send_intent(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<IntentResponseDto>>, ApiError> {
    let req: IntentRequest = parse_json_body(&body)?;
    let result = state
        .intent_handler
        .handle(PlaybackIntentCommand { intent: req.intent })
        .await?;

    Ok(Json(ApiResponse::success(IntentResponseDto {
        intent: result.intent.as_str().to_string(),
        applied: result.applied,
        status: result.status,
    })))
}

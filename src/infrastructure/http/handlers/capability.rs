//! Capability Handlers - 宿主能力开关

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{ApiResponse, CapabilityResponseDto, SetCapabilityRequest};
use crate::infrastructure::http::error::{parse_json_body, ApiError};
use crate::infrastructure::http::state::AppState;

pub async fn get_capability(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<CapabilityResponseDto>> {
    Json(ApiResponse::success(CapabilityResponseDto {
        enabled: state.capability_gate.is_enabled(),
    }))
}

/// 切换开关只影响之后的 start，不会结束已有会话
pub async fn set_capability(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse<CapabilityResponseDto>>, ApiError> {
    let req: SetCapabilityRequest = parse_json_body(&body)?;
    state.capability_gate.set_enabled(req.enabled);
    Ok(Json(ApiResponse::success(CapabilityResponseDto {
        enabled: state.capability_gate.is_enabled(),
    })))
}

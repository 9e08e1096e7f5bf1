//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{LiveStatus, StartLiveActivityResponse};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Live DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StartResponseDto {
    pub started: bool,
    pub status: LiveStatus,
}

impl StartResponseDto {
    pub fn new(response: StartLiveActivityResponse, status: LiveStatus) -> Self {
        Self {
            started: response.started,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponseDto {
    pub status: LiveStatus,
}

#[derive(Debug, Deserialize)]
pub struct IntentRequest {
    pub intent: String,
}

#[derive(Debug, Serialize)]
pub struct IntentResponseDto {
    pub intent: String,
    pub applied: bool,
    pub status: LiveStatus,
}

// ============================================================================
// Capability DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SetCapabilityRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct CapabilityResponseDto {
    pub enabled: bool,
}

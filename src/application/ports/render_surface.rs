//! Render Surface Port - 外部渲染端抽象
//!
//! 渲染端负责把会话展示到系统常驻界面上（锁屏 / 灵动岛等），
//! 具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::live_activity::{LiveSessionId, PlaybackSnapshot, SessionIdentity};

/// 渲染端错误
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Surface rejected request: {0}")]
    Rejected(String),

    #[error("Stale session: {0}")]
    StaleSession(LiveSessionId),
}

/// 发往渲染端的请求
///
/// 由 SessionManager 按操作顺序入队，SurfaceWorker 顺序消费
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceRequest {
    Create {
        session_id: LiveSessionId,
        identity: SessionIdentity,
        snapshot: PlaybackSnapshot,
    },
    Refresh {
        session_id: LiveSessionId,
        snapshot: PlaybackSnapshot,
    },
    Teardown {
        session_id: LiveSessionId,
    },
}

impl SurfaceRequest {
    pub fn session_id(&self) -> LiveSessionId {
        match self {
            Self::Create { session_id, .. }
            | Self::Refresh { session_id, .. }
            | Self::Teardown { session_id } => *session_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Refresh { .. } => "refresh",
            Self::Teardown { .. } => "teardown",
        }
    }
}

/// Render Surface Port
#[async_trait]
pub trait RenderSurfacePort: Send + Sync {
    /// 创建渲染面
    async fn create_surface(
        &self,
        session_id: LiveSessionId,
        identity: &SessionIdentity,
        snapshot: &PlaybackSnapshot,
    ) -> Result<(), SurfaceError>;

    /// 用新快照刷新渲染面
    async fn refresh_surface(
        &self,
        session_id: LiveSessionId,
        snapshot: &PlaybackSnapshot,
    ) -> Result<(), SurfaceError>;

    /// 立即移除渲染面
    async fn teardown_surface(&self, session_id: LiveSessionId) -> Result<(), SurfaceError>;
}

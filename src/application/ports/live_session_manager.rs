//! Live Session Manager Port - 直播会话生命周期管理
//!
//! 定义会话管理的抽象接口，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::live_activity::{
    LiveSession, LiveSessionId, LiveState, PlaybackIntent, PlaybackSnapshot, RawFields,
    SessionIdentity,
};

/// 会话的只读投影
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveSessionView {
    pub session_id: LiveSessionId,
    pub identity: SessionIdentity,
    pub snapshot: PlaybackSnapshot,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&LiveSession> for LiveSessionView {
    fn from(session: &LiveSession) -> Self {
        Self {
            session_id: session.id(),
            identity: session.identity().clone(),
            snapshot: session.snapshot().clone(),
            started_at: session.started_at(),
            updated_at: session.updated_at(),
        }
    }
}

/// 某一时刻的管理器状态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveStatus {
    pub state: LiveState,
    pub session: Option<LiveSessionView>,
}

impl LiveStatus {
    pub fn idle() -> Self {
        Self {
            state: LiveState::None,
            session: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == LiveState::Active
    }
}

/// Live Session Manager Port
///
/// 持有至多一个活动会话；start / update / end 均不等待渲染端完成
pub trait LiveSessionManagerPort: Send + Sync {
    /// 开始会话，能力检查不通过时返回 false 且不做任何修改
    ///
    /// 已有活动会话时整体替换：先拆除旧渲染面，再创建新渲染面
    fn start(&self, identity_fields: &RawFields, snapshot_fields: &RawFields) -> bool;

    /// 替换快照并请求刷新，无活动会话时忽略
    fn update(&self, snapshot_fields: &RawFields);

    /// 结束会话并请求拆除，无活动会话时忽略
    fn end(&self);

    /// 以用户意图派生新快照，走与 update 相同的路径
    ///
    /// 返回是否有会话被更新
    fn apply_intent(&self, intent: PlaybackIntent) -> bool;

    /// 当前状态投影
    fn status(&self) -> LiveStatus;
}

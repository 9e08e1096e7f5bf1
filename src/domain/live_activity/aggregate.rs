//! Live Activity Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LiveActivityError, LiveSessionId, PlaybackSnapshot, SessionIdentity};

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveState {
    /// 槽位为空
    None,
    Active,
    /// 仅在 end 过程中短暂存在，之后会话被丢弃
    Ended,
}

impl LiveState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Active => "active",
            Self::Ended => "ended",
        }
    }
}

/// LiveSession 聚合根
///
/// 不变量:
/// - identity 创建后不可修改
/// - snapshot 只能整体替换
/// - Ended 之后不接受任何修改
#[derive(Debug, Clone)]
pub struct LiveSession {
    id: LiveSessionId,
    identity: SessionIdentity,
    snapshot: PlaybackSnapshot,
    state: LiveState,
    started_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LiveSession {
    /// 创建新会话（直接进入 Active）
    pub fn start(identity: SessionIdentity, snapshot: PlaybackSnapshot) -> Self {
        let now = Utc::now();
        Self {
            id: LiveSessionId::new(),
            identity,
            snapshot,
            state: LiveState::Active,
            started_at: now,
            updated_at: now,
        }
    }

    /// 整体替换播放快照
    pub fn replace_snapshot(&mut self, snapshot: PlaybackSnapshot) -> Result<(), LiveActivityError> {
        if self.state != LiveState::Active {
            return Err(LiveActivityError::AlreadyEnded(self.id));
        }
        self.snapshot = snapshot;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 结束会话
    pub fn end(&mut self) {
        self.state = LiveState::Ended;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> LiveSessionId {
        self.id
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn snapshot(&self) -> &PlaybackSnapshot {
        &self.snapshot
    }

    pub fn state(&self) -> LiveState {
        self.state
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

//! Live Commands - 直播会话相关命令

use crate::application::ports::{LiveSessionView, LiveStatus};
use crate::domain::live_activity::{PlaybackIntent, RawFields};

/// 开始会话命令
#[derive(Debug, Clone, Default)]
pub struct StartLiveActivityCommand {
    pub identity_fields: RawFields,
    pub snapshot_fields: RawFields,
}

impl StartLiveActivityCommand {
    /// 身份与快照字段位于同一个映射中（宿主桥接层的传参方式）
    pub fn from_combined(fields: RawFields) -> Self {
        Self {
            identity_fields: fields.clone(),
            snapshot_fields: fields,
        }
    }
}

/// 开始会话响应
#[derive(Debug, Clone)]
pub struct StartLiveActivityResponse {
    /// 能力检查被拒绝时为 false
    pub started: bool,
    pub session: Option<LiveSessionView>,
}

/// 更新快照命令
#[derive(Debug, Clone, Default)]
pub struct UpdateLiveActivityCommand {
    pub snapshot_fields: RawFields,
}

/// 结束会话命令
#[derive(Debug, Clone, Default)]
pub struct EndLiveActivityCommand;

/// 用户意图命令
#[derive(Debug, Clone)]
pub struct PlaybackIntentCommand {
    /// 原始意图名，由处理器解析
    pub intent: String,
}

/// 用户意图响应
#[derive(Debug, Clone)]
pub struct PlaybackIntentResponse {
    pub intent: PlaybackIntent,
    pub applied: bool,
    pub status: LiveStatus,
}

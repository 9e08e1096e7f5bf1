//! Live Queries - 直播会话状态查询

/// 获取当前会话状态
#[derive(Debug, Clone, Default)]
pub struct GetLiveStatus;

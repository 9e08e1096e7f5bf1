//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Live Activity Context: 直播会话（身份、播放快照、生命周期）

pub mod live_activity;

//! Live Activity Context - 直播会话限界上下文
//!
//! 职责:
//! - 会话身份与播放快照值对象
//! - LiveSession 聚合（生命周期 None → Active → Ended）
//! - 弱类型输入的宽松解析

mod aggregate;
pub mod coercion;
mod errors;
mod value_objects;

pub use aggregate::{LiveSession, LiveState};
pub use coercion::{fields_from_value, identity_from_fields, snapshot_from_fields, RawFields};
pub use errors::LiveActivityError;
pub use value_objects::{
    LiveSessionId, PlaybackIntent, PlaybackSnapshot, Progress, SessionIdentity, ZERO_DURATION_TEXT,
};

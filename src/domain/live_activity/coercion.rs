//! Live Activity Context - 宽松输入解析
//!
//! 宿主桥接层传入的是弱类型的键值对，这里统一转换为强类型模型：
//! - 缺失或类型不符的字段使用默认值
//! - 单个字段异常不会导致整体构造失败
//! - 未识别的键直接忽略

use serde_json::{Map, Value};

use super::{PlaybackSnapshot, SessionIdentity, ZERO_DURATION_TEXT};

/// 弱类型输入
pub type RawFields = Map<String, Value>;

/// 输入字段名
pub mod keys {
    pub const TASK_TITLE: &str = "taskTitle";
    pub const ALBUM_NAME: &str = "albumName";
    pub const CURRENT_TIME: &str = "currentTime";
    pub const TOTAL_TIME: &str = "totalTime";
    pub const PROGRESS: &str = "progress";
    pub const IS_PLAYING: &str = "isPlaying";
    pub const IS_AUTO_PLAY: &str = "isAutoPlay";
}

/// 将任意 JSON 值视为字段集合，非对象按空集合处理
pub fn fields_from_value(value: Value) -> RawFields {
    match value {
        Value::Object(map) => map,
        Value::Null => RawFields::new(),
        other => {
            tracing::debug!(kind = json_kind(&other), "Non-object input, using empty fields");
            RawFields::new()
        }
    }
}

/// 解析会话身份
pub fn identity_from_fields(fields: &RawFields) -> SessionIdentity {
    SessionIdentity::new(
        string_field(fields, keys::TASK_TITLE, ""),
        string_field(fields, keys::ALBUM_NAME, ""),
    )
}

/// 解析播放快照（progress 在构造时截断到 [0, 1]）
pub fn snapshot_from_fields(fields: &RawFields) -> PlaybackSnapshot {
    PlaybackSnapshot::new(
        string_field(fields, keys::CURRENT_TIME, ZERO_DURATION_TEXT),
        string_field(fields, keys::TOTAL_TIME, ZERO_DURATION_TEXT),
        number_field(fields, keys::PROGRESS).unwrap_or(0.0),
        bool_field(fields, keys::IS_PLAYING),
        bool_field(fields, keys::IS_AUTO_PLAY),
    )
}

fn string_field(fields: &RawFields, key: &str, default: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        None => default.to_string(),
        Some(other) => {
            log_malformed(key, other);
            default.to_string()
        }
    }
}

fn number_field(fields: &RawFields, key: &str) -> Option<f64> {
    match fields.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        None => None,
        Some(other) => {
            log_malformed(key, other);
            None
        }
    }
}

/// 布尔字段：接受 JSON bool 以及数字 0 / 1
fn bool_field(fields: &RawFields, key: &str) -> bool {
    match fields.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) if n.as_u64() == Some(1) => true,
        Some(Value::Number(n)) if n.as_u64() == Some(0) => false,
        None => false,
        Some(other) => {
            log_malformed(key, other);
            false
        }
    }
}

fn log_malformed(key: &str, value: &Value) {
    tracing::debug!(field = key, kind = json_kind(value), "Malformed field, using default");
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

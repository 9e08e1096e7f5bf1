//! Live Activity Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 时间文本的零时长占位符
pub const ZERO_DURATION_TEXT: &str = "00:00";

/// 直播会话唯一标识
///
/// 每次 start 都会生成新的 ID，渲染端据此拒绝过期请求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiveSessionId(Uuid);

impl LiveSessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LiveSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LiveSessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 会话身份 - 会话生命周期内不可变
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[serde(rename = "taskTitle")]
    title: String,
    #[serde(rename = "albumName")]
    group_label: String,
}

impl SessionIdentity {
    pub fn new(title: impl Into<String>, group_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            group_label: group_label.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn group_label(&self) -> &str {
        &self.group_label
    }
}

/// 归一化进度
///
/// 不变量: 0.0 <= value <= 1.0
///
/// 越界值截断到最近的边界，NaN 视为 0.0
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::clamped(value)
    }
}

impl From<Progress> for f64 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl Progress {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// 播放快照 - 每次 update 整体替换，不做字段级修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    current_time: String,
    total_time: String,
    progress: Progress,
    is_playing: bool,
    is_auto_play: bool,
}

impl PlaybackSnapshot {
    pub fn new(
        current_time: impl Into<String>,
        total_time: impl Into<String>,
        progress: f64,
        is_playing: bool,
        is_auto_play: bool,
    ) -> Self {
        Self {
            current_time: current_time.into(),
            total_time: total_time.into(),
            progress: Progress::clamped(progress),
            is_playing,
            is_auto_play,
        }
    }

    /// 派生一个仅播放状态不同的新快照
    pub fn with_playing(&self, is_playing: bool) -> Self {
        Self {
            is_playing,
            ..self.clone()
        }
    }

    pub fn current_time(&self) -> &str {
        &self.current_time
    }

    pub fn total_time(&self) -> &str {
        &self.total_time
    }

    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_auto_play(&self) -> bool {
        self.is_auto_play
    }
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self::new(ZERO_DURATION_TEXT, ZERO_DURATION_TEXT, 0.0, false, false)
    }
}

/// 渲染端转发回来的用户意图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackIntent {
    TogglePlayPause,
    Play,
    Pause,
}

impl PlaybackIntent {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "toggle_play_pause" | "toggle" => Some(Self::TogglePlayPause),
            "play" => Some(Self::Play),
            "pause" => Some(Self::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TogglePlayPause => "toggle_play_pause",
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }

    /// 根据当前快照计算替换后的完整快照
    pub fn apply(&self, snapshot: &PlaybackSnapshot) -> PlaybackSnapshot {
        match self {
            Self::TogglePlayPause => snapshot.with_playing(!snapshot.is_playing()),
            Self::Play => snapshot.with_playing(true),
            Self::Pause => snapshot.with_playing(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_out_of_range() {
        assert_eq!(Progress::clamped(1.5).value(), 1.0);
        assert_eq!(Progress::clamped(-0.3).value(), 0.0);
        assert_eq!(Progress::clamped(0.42).value(), 0.42);
    }

    #[test]
    fn test_progress_is_total_over_non_finite_input() {
        assert_eq!(Progress::clamped(f64::NAN).value(), 0.0);
        assert_eq!(Progress::clamped(f64::INFINITY).value(), 1.0);
        assert_eq!(Progress::clamped(f64::NEG_INFINITY).value(), 0.0);
    }

    #[test]
    fn test_default_snapshot() {
        let snapshot = PlaybackSnapshot::default();
        assert_eq!(snapshot.current_time(), ZERO_DURATION_TEXT);
        assert_eq!(snapshot.total_time(), ZERO_DURATION_TEXT);
        assert_eq!(snapshot.progress(), 0.0);
        assert!(!snapshot.is_playing());
        assert!(!snapshot.is_auto_play());
    }

    #[test]
    fn test_snapshot_serializes_with_wire_keys() {
        let snapshot = PlaybackSnapshot::new("01:05", "03:30", 0.3, true, false);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["currentTime"], "01:05");
        assert_eq!(json["totalTime"], "03:30");
        assert_eq!(json["progress"], 0.3);
        assert_eq!(json["isPlaying"], true);
        assert_eq!(json["isAutoPlay"], false);

        let identity = SessionIdentity::new("Focus", "Lo-fi");
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["taskTitle"], "Focus");
        assert_eq!(json["albumName"], "Lo-fi");
    }

    #[test]
    fn test_intent_apply() {
        let paused = PlaybackSnapshot::new("00:10", "01:00", 0.16, false, true);

        let toggled = PlaybackIntent::TogglePlayPause.apply(&paused);
        assert!(toggled.is_playing());
        assert_eq!(toggled.current_time(), "00:10");
        assert!(toggled.is_auto_play());

        assert!(!PlaybackIntent::TogglePlayPause.apply(&toggled).is_playing());
        assert!(PlaybackIntent::Play.apply(&paused).is_playing());
        assert!(!PlaybackIntent::Pause.apply(&toggled).is_playing());
    }

    #[test]
    fn test_intent_parse() {
        assert_eq!(
            PlaybackIntent::parse("toggle_play_pause"),
            Some(PlaybackIntent::TogglePlayPause)
        );
        assert_eq!(PlaybackIntent::parse(" Pause "), Some(PlaybackIntent::Pause));
        assert_eq!(PlaybackIntent::parse("rewind"), None);
    }
}

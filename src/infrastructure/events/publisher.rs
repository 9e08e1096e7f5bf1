//! Event Publisher Implementation
//!
//! 渲染事件广播，WebSocket 渲染客户端订阅

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::domain::live_activity::{LiveSessionId, PlaybackSnapshot, SessionIdentity};

/// 默认广播容量
pub const DEFAULT_EVENT_BUFFER: usize = 100;

/// 渲染事件类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum SurfaceEvent {
    /// 渲染面创建
    SurfaceCreated {
        session_id: LiveSessionId,
        identity: SessionIdentity,
        snapshot: PlaybackSnapshot,
    },
    /// 渲染面刷新
    SurfaceRefreshed {
        session_id: LiveSessionId,
        snapshot: PlaybackSnapshot,
    },
    /// 渲染面移除
    SurfaceTornDown { session_id: LiveSessionId },
}

impl SurfaceEvent {
    pub fn session_id(&self) -> LiveSessionId {
        match self {
            Self::SurfaceCreated { session_id, .. }
            | Self::SurfaceRefreshed { session_id, .. }
            | Self::SurfaceTornDown { session_id } => *session_id,
        }
    }
}

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<SurfaceEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_BUFFER)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { channel: tx }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅渲染事件
    pub fn subscribe(&self) -> broadcast::Receiver<SurfaceEvent> {
        self.channel.subscribe()
    }

    /// 当前订阅者数量
    pub fn receiver_count(&self) -> usize {
        self.channel.receiver_count()
    }

    /// 发布渲染事件
    pub fn publish(&self, event: SurfaceEvent) {
        let session_id = event.session_id();
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(
                session_id = %session_id,
                error = %e,
                "Failed to publish surface event (no receivers)"
            );
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_to_subscriber() {
        let publisher = EventPublisher::new();
        let mut rx = publisher.subscribe();
        let session_id = LiveSessionId::new();

        publisher.publish(SurfaceEvent::SurfaceTornDown { session_id });

        let event = rx.recv().await.unwrap();
        assert_eq!(event, SurfaceEvent::SurfaceTornDown { session_id });
    }

    #[test]
    fn test_publish_without_receivers_is_silent() {
        let publisher = EventPublisher::new();
        assert_eq!(publisher.receiver_count(), 0);
        publisher.publish(SurfaceEvent::SurfaceTornDown {
            session_id: LiveSessionId::new(),
        });
    }

    #[test]
    fn test_event_wire_format() {
        let session_id = LiveSessionId::new();
        let event = SurfaceEvent::SurfaceRefreshed {
            session_id,
            snapshot: PlaybackSnapshot::new("00:05", "00:50", 0.1, true, false),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "surface_refreshed");
        assert_eq!(json["data"]["session_id"], session_id.to_string());
        assert_eq!(json["data"]["snapshot"]["currentTime"], "00:05");
    }
}

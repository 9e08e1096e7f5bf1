//! Broadcast Surface - 通过事件广播驱动的渲染端
//!
//! 记录当前展示的会话 ID，非当前会话的刷新 / 拆除请求视为过期并拒绝；
//! 保留最近一帧，供新连接的渲染客户端先行展示

use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::ports::{RenderSurfacePort, SurfaceError};
use crate::domain::live_activity::{LiveSessionId, PlaybackSnapshot, SessionIdentity};
use crate::infrastructure::events::{EventPublisher, SurfaceEvent};

/// 当前渲染帧
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceFrame {
    pub session_id: LiveSessionId,
    pub identity: SessionIdentity,
    pub snapshot: PlaybackSnapshot,
}

impl SurfaceFrame {
    /// 作为首帧发送给新连接的事件
    pub fn to_event(&self) -> SurfaceEvent {
        SurfaceEvent::SurfaceCreated {
            session_id: self.session_id,
            identity: self.identity.clone(),
            snapshot: self.snapshot.clone(),
        }
    }
}

pub struct BroadcastSurface {
    event_publisher: Arc<EventPublisher>,
    current: Mutex<Option<SurfaceFrame>>,
}

impl BroadcastSurface {
    pub fn new(event_publisher: Arc<EventPublisher>) -> Self {
        Self {
            event_publisher,
            current: Mutex::new(None),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 当前展示的帧
    pub fn current_frame(&self) -> Option<SurfaceFrame> {
        self.lock_current().clone()
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<SurfaceFrame>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl RenderSurfacePort for BroadcastSurface {
    async fn create_surface(
        &self,
        session_id: LiveSessionId,
        identity: &SessionIdentity,
        snapshot: &PlaybackSnapshot,
    ) -> Result<(), SurfaceError> {
        let mut current = self.lock_current();
        if let Some(previous) = current.as_ref() {
            tracing::debug!(
                previous = %previous.session_id,
                session_id = %session_id,
                "Surface replaced without teardown"
            );
        }

        *current = Some(SurfaceFrame {
            session_id,
            identity: identity.clone(),
            snapshot: snapshot.clone(),
        });
        self.event_publisher.publish(SurfaceEvent::SurfaceCreated {
            session_id,
            identity: identity.clone(),
            snapshot: snapshot.clone(),
        });
        Ok(())
    }

    async fn refresh_surface(
        &self,
        session_id: LiveSessionId,
        snapshot: &PlaybackSnapshot,
    ) -> Result<(), SurfaceError> {
        let mut current = self.lock_current();
        let frame = match current.as_mut() {
            Some(frame) if frame.session_id == session_id => frame,
            _ => return Err(SurfaceError::StaleSession(session_id)),
        };

        frame.snapshot = snapshot.clone();
        self.event_publisher.publish(SurfaceEvent::SurfaceRefreshed {
            session_id,
            snapshot: snapshot.clone(),
        });
        Ok(())
    }

    async fn teardown_surface(&self, session_id: LiveSessionId) -> Result<(), SurfaceError> {
        let mut current = self.lock_current();
        match current.as_ref() {
            Some(frame) if frame.session_id == session_id => {}
            _ => return Err(SurfaceError::StaleSession(session_id)),
        }

        *current = None;
        self.event_publisher
            .publish(SurfaceEvent::SurfaceTornDown { session_id });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> (BroadcastSurface, tokio::sync::broadcast::Receiver<SurfaceEvent>) {
        let publisher = EventPublisher::new().arc();
        let rx = publisher.subscribe();
        (BroadcastSurface::new(publisher), rx)
    }

    #[tokio::test]
    async fn test_lifecycle_publishes_events() {
        let (surface, mut rx) = surface();
        let id = LiveSessionId::new();
        let identity = SessionIdentity::new("Study", "Piano");
        let snapshot = PlaybackSnapshot::default();

        surface.create_surface(id, &identity, &snapshot).await.unwrap();
        let playing = snapshot.with_playing(true);
        surface.refresh_surface(id, &playing).await.unwrap();
        assert_eq!(surface.current_frame().unwrap().snapshot, playing);
        surface.teardown_surface(id).await.unwrap();

        assert!(matches!(rx.recv().await.unwrap(), SurfaceEvent::SurfaceCreated { .. }));
        assert!(matches!(rx.recv().await.unwrap(), SurfaceEvent::SurfaceRefreshed { .. }));
        assert_eq!(rx.recv().await.unwrap(), SurfaceEvent::SurfaceTornDown { session_id: id });
        assert!(surface.current_frame().is_none());
    }

    #[tokio::test]
    async fn test_stale_requests_are_rejected() {
        let (surface, _rx) = surface();
        let old = LiveSessionId::new();
        let new = LiveSessionId::new();

        surface
            .create_surface(new, &SessionIdentity::default(), &PlaybackSnapshot::default())
            .await
            .unwrap();

        let refresh = surface.refresh_surface(old, &PlaybackSnapshot::default()).await;
        assert!(matches!(refresh, Err(SurfaceError::StaleSession(id)) if id == old));

        let teardown = surface.teardown_surface(old).await;
        assert!(matches!(teardown, Err(SurfaceError::StaleSession(_))));
        assert_eq!(surface.current_frame().unwrap().session_id, new);
    }

    #[tokio::test]
    async fn test_refresh_after_teardown_is_stale() {
        let (surface, _rx) = surface();
        let id = LiveSessionId::new();

        surface
            .create_surface(id, &SessionIdentity::default(), &PlaybackSnapshot::default())
            .await
            .unwrap();
        surface.teardown_surface(id).await.unwrap();

        let result = surface.refresh_surface(id, &PlaybackSnapshot::default()).await;
        assert!(matches!(result, Err(SurfaceError::StaleSession(_))));
    }
}

//! Recording Surface - 用于测试的渲染端
//!
//! 按到达顺序记录所有请求，可注入延迟与失败

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::application::ports::{RenderSurfacePort, SurfaceError, SurfaceRequest};
use crate::domain::live_activity::{LiveSessionId, PlaybackSnapshot, SessionIdentity};

#[derive(Default)]
pub struct RecordingSurface {
    requests: Mutex<Vec<SurfaceRequest>>,
    /// 每个请求处理前的模拟延迟
    latency: Option<Duration>,
    /// 记录后是否返回错误
    fail_all: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 已记录的请求
    pub fn requests(&self) -> Vec<SurfaceRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    async fn record(&self, request: SurfaceRequest) -> Result<(), SurfaceError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let kind = request.kind();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        if self.fail_all {
            return Err(SurfaceError::Rejected(format!("{} refused", kind)));
        }
        Ok(())
    }
}

#[async_trait]
impl RenderSurfacePort for RecordingSurface {
    async fn create_surface(
        &self,
        session_id: LiveSessionId,
        identity: &SessionIdentity,
        snapshot: &PlaybackSnapshot,
    ) -> Result<(), SurfaceError> {
        self.record(SurfaceRequest::Create {
            session_id,
            identity: identity.clone(),
            snapshot: snapshot.clone(),
        })
        .await
    }

    async fn refresh_surface(
        &self,
        session_id: LiveSessionId,
        snapshot: &PlaybackSnapshot,
    ) -> Result<(), SurfaceError> {
        self.record(SurfaceRequest::Refresh {
            session_id,
            snapshot: snapshot.clone(),
        })
        .await
    }

    async fn teardown_surface(&self, session_id: LiveSessionId) -> Result<(), SurfaceError> {
        self.record(SurfaceRequest::Teardown { session_id }).await
    }
}

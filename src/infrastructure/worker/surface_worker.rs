//! Surface Worker - Background Render Request Processor

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::ports::{RenderSurfacePort, SurfaceError, SurfaceRequest};

/// Worker 退出时的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceWorkerStats {
    pub delivered: usize,
    pub stale: usize,
    pub failed: usize,
}

/// 渲染请求 Worker
///
/// 严格按入队顺序逐个处理，前一个请求完成后才处理下一个；
/// 渲染端失败只记录日志，不重试，也不影响会话状态
pub struct SurfaceWorker {
    queue_receiver: mpsc::UnboundedReceiver<SurfaceRequest>,
    surface: Arc<dyn RenderSurfacePort>,
}

impl SurfaceWorker {
    pub fn new(
        queue_receiver: mpsc::UnboundedReceiver<SurfaceRequest>,
        surface: Arc<dyn RenderSurfacePort>,
    ) -> Self {
        Self {
            queue_receiver,
            surface,
        }
    }

    /// 启动 Worker，所有发送端关闭后退出
    pub async fn run(mut self) -> SurfaceWorkerStats {
        tracing::info!("SurfaceWorker started");

        let mut stats = SurfaceWorkerStats::default();
        while let Some(request) = self.queue_receiver.recv().await {
            let kind = request.kind();
            let session_id = request.session_id();

            match Self::process_request(self.surface.as_ref(), request).await {
                Ok(()) => {
                    stats.delivered += 1;
                    tracing::debug!(session_id = %session_id, request = kind, "Surface request delivered");
                }
                Err(SurfaceError::StaleSession(_)) => {
                    stats.stale += 1;
                    tracing::debug!(session_id = %session_id, request = kind, "Stale surface request dropped by surface");
                }
                Err(e) => {
                    stats.failed += 1;
                    tracing::warn!(session_id = %session_id, request = kind, error = %e, "Surface request failed");
                }
            }
        }

        tracing::info!(
            delivered = stats.delivered,
            stale = stats.stale,
            failed = stats.failed,
            "SurfaceWorker stopped"
        );
        stats
    }

    /// 处理单个请求
    async fn process_request(
        surface: &dyn RenderSurfacePort,
        request: SurfaceRequest,
    ) -> Result<(), SurfaceError> {
        match request {
            SurfaceRequest::Create {
                session_id,
                identity,
                snapshot,
            } => surface.create_surface(session_id, &identity, &snapshot).await,
            SurfaceRequest::Refresh {
                session_id,
                snapshot,
            } => surface.refresh_surface(session_id, &snapshot).await,
            SurfaceRequest::Teardown { session_id } => surface.teardown_surface(session_id).await,
        }
    }
}

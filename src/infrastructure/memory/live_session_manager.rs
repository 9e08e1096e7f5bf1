//! In-Memory Live Session Manager Implementation

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

use crate::application::ports::{
    CapabilityGatePort, LiveSessionManagerPort, LiveSessionView, LiveStatus, SurfaceRequest,
};
use crate::domain::live_activity::{
    identity_from_fields, snapshot_from_fields, LiveSession, LiveState, PlaybackIntent,
    PlaybackSnapshot, RawFields,
};

/// 内存直播会话管理器
///
/// 槽位的每次状态转换与对应渲染请求的入队在同一把锁内完成，
/// 因此渲染请求顺序与操作调用顺序一致
pub struct InMemoryLiveSessionManager {
    slot: Mutex<Option<LiveSession>>,
    capability_gate: Arc<dyn CapabilityGatePort>,
    /// 渲染请求队列发送端（SurfaceWorker 消费）
    surface_sender: mpsc::UnboundedSender<SurfaceRequest>,
}

impl InMemoryLiveSessionManager {
    pub fn new(
        capability_gate: Arc<dyn CapabilityGatePort>,
        surface_sender: mpsc::UnboundedSender<SurfaceRequest>,
    ) -> Self {
        Self {
            slot: Mutex::new(None),
            capability_gate,
            surface_sender,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<LiveSession>> {
        // 持锁期间不会 panic，中毒时直接沿用内部数据
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dispatch(&self, request: SurfaceRequest) {
        let kind = request.kind();
        let session_id = request.session_id();
        if let Err(e) = self.surface_sender.send(request) {
            tracing::warn!(
                session_id = %session_id,
                request = kind,
                error = %e,
                "Failed to enqueue surface request (worker stopped)"
            );
        }
    }

    /// 替换快照并入队刷新请求，调用方需持有槽位锁
    fn replace_snapshot(&self, session: &mut LiveSession, snapshot: PlaybackSnapshot) -> bool {
        if let Err(e) = session.replace_snapshot(snapshot.clone()) {
            tracing::warn!(error = %e, "Snapshot replacement refused");
            return false;
        }
        self.dispatch(SurfaceRequest::Refresh {
            session_id: session.id(),
            snapshot,
        });
        true
    }
}

impl LiveSessionManagerPort for InMemoryLiveSessionManager {
    fn start(&self, identity_fields: &RawFields, snapshot_fields: &RawFields) -> bool {
        let identity = identity_from_fields(identity_fields);
        let snapshot = snapshot_from_fields(snapshot_fields);

        if !self.capability_gate.is_live_display_permitted() {
            tracing::info!("Live display not permitted, start rejected");
            return false;
        }

        let mut slot = self.lock_slot();

        if let Some(mut previous) = slot.take() {
            previous.end();
            tracing::info!(
                session_id = %previous.id(),
                "Replacing active live session"
            );
            self.dispatch(SurfaceRequest::Teardown {
                session_id: previous.id(),
            });
        }

        let session = LiveSession::start(identity.clone(), snapshot.clone());
        let session_id = session.id();
        *slot = Some(session);

        self.dispatch(SurfaceRequest::Create {
            session_id,
            identity: identity.clone(),
            snapshot,
        });

        tracing::info!(
            session_id = %session_id,
            title = %identity.title(),
            "Live session started"
        );
        true
    }

    fn update(&self, snapshot_fields: &RawFields) {
        let mut slot = self.lock_slot();
        let Some(session) = slot.as_mut() else {
            tracing::debug!("No active live session, update ignored");
            return;
        };

        let snapshot = snapshot_from_fields(snapshot_fields);
        let progress = snapshot.progress();
        if self.replace_snapshot(session, snapshot) {
            tracing::debug!(
                session_id = %session.id(),
                progress = progress,
                "Live session updated"
            );
        }
    }

    fn end(&self) {
        let mut slot = self.lock_slot();
        let Some(mut session) = slot.take() else {
            tracing::debug!("No active live session, end ignored");
            return;
        };

        session.end();
        self.dispatch(SurfaceRequest::Teardown {
            session_id: session.id(),
        });

        tracing::info!(session_id = %session.id(), "Live session ended");
    }

    fn apply_intent(&self, intent: PlaybackIntent) -> bool {
        let mut slot = self.lock_slot();
        let Some(session) = slot.as_mut() else {
            tracing::debug!(intent = intent.as_str(), "No active live session, intent ignored");
            return false;
        };

        let snapshot = intent.apply(session.snapshot());
        let applied = self.replace_snapshot(session, snapshot);
        if applied {
            tracing::info!(
                session_id = %session.id(),
                intent = intent.as_str(),
                is_playing = session.snapshot().is_playing(),
                "Playback intent applied"
            );
        }
        applied
    }

    fn status(&self) -> LiveStatus {
        match self.lock_slot().as_ref() {
            Some(session) => LiveStatus {
                state: LiveState::Active,
                session: Some(LiveSessionView::from(session)),
            },
            None => LiveStatus::idle(),
        }
    }
}

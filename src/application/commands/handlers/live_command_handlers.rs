//! Live Command Handlers

use std::sync::Arc;

use crate::application::commands::live_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{LiveSessionManagerPort, LiveStatus};
use crate::domain::live_activity::PlaybackIntent;

/// Start Handler - 开始直播会话
pub struct StartLiveActivityHandler {
    session_manager: Arc<dyn LiveSessionManagerPort>,
}

impl StartLiveActivityHandler {
    pub fn new(session_manager: Arc<dyn LiveSessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        cmd: StartLiveActivityCommand,
    ) -> Result<StartLiveActivityResponse, ApplicationError> {
        let started = self
            .session_manager
            .start(&cmd.identity_fields, &cmd.snapshot_fields);

        // 能力被拒绝是预期结果，不作为错误返回
        let session = if started {
            self.session_manager.status().session
        } else {
            None
        };

        Ok(StartLiveActivityResponse { started, session })
    }
}

/// Update Handler - 更新播放快照
pub struct UpdateLiveActivityHandler {
    session_manager: Arc<dyn LiveSessionManagerPort>,
}

impl UpdateLiveActivityHandler {
    pub fn new(session_manager: Arc<dyn LiveSessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, cmd: UpdateLiveActivityCommand) -> Result<LiveStatus, ApplicationError> {
        self.session_manager.update(&cmd.snapshot_fields);
        Ok(self.session_manager.status())
    }
}

/// End Handler - 结束直播会话
pub struct EndLiveActivityHandler {
    session_manager: Arc<dyn LiveSessionManagerPort>,
}

impl EndLiveActivityHandler {
    pub fn new(session_manager: Arc<dyn LiveSessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, _cmd: EndLiveActivityCommand) -> Result<LiveStatus, ApplicationError> {
        self.session_manager.end();
        Ok(self.session_manager.status())
    }
}

/// Intent Handler - 转发渲染端的用户意图
pub struct PlaybackIntentHandler {
    session_manager: Arc<dyn LiveSessionManagerPort>,
}

impl PlaybackIntentHandler {
    pub fn new(session_manager: Arc<dyn LiveSessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        cmd: PlaybackIntentCommand,
    ) -> Result<PlaybackIntentResponse, ApplicationError> {
        let intent = PlaybackIntent::parse(&cmd.intent)
            .ok_or_else(|| ApplicationError::validation(format!("Unknown intent: {}", cmd.intent)))?;

        let applied = self.session_manager.apply_intent(intent);

        Ok(PlaybackIntentResponse {
            intent,
            applied,
            status: self.session_manager.status(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::live_activity::{fields_from_value, LiveState};
    use crate::infrastructure::adapters::SwitchCapabilityGate;
    use crate::infrastructure::memory::InMemoryLiveSessionManager;
    use serde_json::json;
    use tokio::sync::mpsc;

    fn manager(enabled: bool) -> Arc<dyn LiveSessionManagerPort> {
        let (tx, _rx) = mpsc::unbounded_channel();
        Arc::new(InMemoryLiveSessionManager::new(
            Arc::new(SwitchCapabilityGate::new(enabled)),
            tx,
        ))
    }

    #[tokio::test]
    async fn test_start_from_combined_fields() {
        let manager = manager(true);
        let handler = StartLiveActivityHandler::new(manager.clone());

        let cmd = StartLiveActivityCommand::from_combined(fields_from_value(json!({
            "taskTitle": "Dishes",
            "albumName": "Chores",
            "totalTime": "15:00",
            "isPlaying": true,
        })));
        let response = handler.handle(cmd).await.unwrap();

        assert!(response.started);
        let session = response.session.unwrap();
        assert_eq!(session.identity.title(), "Dishes");
        assert_eq!(session.snapshot.total_time(), "15:00");
        assert!(session.snapshot.is_playing());
    }

    #[tokio::test]
    async fn test_start_denied_is_not_an_error() {
        let handler = StartLiveActivityHandler::new(manager(false));

        let response = handler.handle(StartLiveActivityCommand::default()).await.unwrap();

        assert!(!response.started);
        assert!(response.session.is_none());
    }

    #[tokio::test]
    async fn test_update_and_end_report_status() {
        let manager = manager(true);
        StartLiveActivityHandler::new(manager.clone())
            .handle(StartLiveActivityCommand::default())
            .await
            .unwrap();

        let status = UpdateLiveActivityHandler::new(manager.clone())
            .handle(UpdateLiveActivityCommand {
                snapshot_fields: fields_from_value(json!({ "progress": 0.75 })),
            })
            .await
            .unwrap();
        assert_eq!(status.session.unwrap().snapshot.progress(), 0.75);

        let status = EndLiveActivityHandler::new(manager)
            .handle(EndLiveActivityCommand)
            .await
            .unwrap();
        assert_eq!(status.state, LiveState::None);
    }

    #[tokio::test]
    async fn test_unknown_intent_is_validation_error() {
        let handler = PlaybackIntentHandler::new(manager(true));

        let result = handler
            .handle(PlaybackIntentCommand {
                intent: "shuffle".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_intent_without_session_not_applied() {
        let handler = PlaybackIntentHandler::new(manager(true));

        let response = handler
            .handle(PlaybackIntentCommand {
                intent: "play".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.intent, PlaybackIntent::Play);
        assert!(!response.applied);
        assert!(!response.status.is_active());
    }
}

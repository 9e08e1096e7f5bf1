//! Application State
//!
//! 宿主桥接层共享的端口与 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    EndLiveActivityHandler, PlaybackIntentHandler, StartLiveActivityHandler,
    UpdateLiveActivityHandler,
    // Query handlers
    GetLiveStatusHandler,
    // Ports
    LiveSessionManagerPort,
};
use crate::infrastructure::adapters::{BroadcastSurface, SwitchCapabilityGate};
use crate::infrastructure::events::EventPublisher;

/// 应用状态
pub struct AppState {
    // ========== Ports / Adapters ==========
    pub session_manager: Arc<dyn LiveSessionManagerPort>,
    pub capability_gate: Arc<SwitchCapabilityGate>,
    pub surface: Arc<BroadcastSurface>,
    pub event_publisher: Arc<EventPublisher>,

    // ========== Command Handlers ==========
    pub start_handler: StartLiveActivityHandler,
    pub update_handler: UpdateLiveActivityHandler,
    pub end_handler: EndLiveActivityHandler,
    pub intent_handler: PlaybackIntentHandler,

    // ========== Query Handlers ==========
    pub status_handler: GetLiveStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_manager: Arc<dyn LiveSessionManagerPort>,
        capability_gate: Arc<SwitchCapabilityGate>,
        surface: Arc<BroadcastSurface>,
        event_publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            session_manager: session_manager.clone(),
            capability_gate,
            surface,
            event_publisher,

            start_handler: StartLiveActivityHandler::new(session_manager.clone()),
            update_handler: UpdateLiveActivityHandler::new(session_manager.clone()),
            end_handler: EndLiveActivityHandler::new(session_manager.clone()),
            intent_handler: PlaybackIntentHandler::new(session_manager.clone()),

            status_handler: GetLiveStatusHandler::new(session_manager),
        }
    }
}

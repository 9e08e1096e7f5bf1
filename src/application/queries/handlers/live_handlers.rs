//! Live Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{LiveSessionManagerPort, LiveStatus};
use crate::application::queries::GetLiveStatus;

/// GetLiveStatus Handler
pub struct GetLiveStatusHandler {
    session_manager: Arc<dyn LiveSessionManagerPort>,
}

impl GetLiveStatusHandler {
    pub fn new(session_manager: Arc<dyn LiveSessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, _query: GetLiveStatus) -> Result<LiveStatus, ApplicationError> {
        Ok(self.session_manager.status())
    }
}

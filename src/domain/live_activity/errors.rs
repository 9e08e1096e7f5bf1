//! Live Activity Context - Errors

use thiserror::Error;

use super::LiveSessionId;

#[derive(Debug, Error)]
pub enum LiveActivityError {
    #[error("Live session already ended: {0}")]
    AlreadyEnded(LiveSessionId),
}

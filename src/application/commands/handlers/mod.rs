//! Command Handlers 实现

mod live_command_handlers;

pub use live_command_handlers::*;

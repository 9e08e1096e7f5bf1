//! Query Handlers 实现

mod live_handlers;

pub use live_handlers::*;

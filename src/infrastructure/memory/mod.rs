//! Memory Layer - In-Memory State Management
//!
//! 实现 LiveSessionManager，管理唯一直播会话的内存状态

mod live_session_manager;

pub use live_session_manager::InMemoryLiveSessionManager;

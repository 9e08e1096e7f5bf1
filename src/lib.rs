//! Tasklive - 任务播放实时活动服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Live Activity Context: 会话身份、播放快照、宽松输入解析
//!
//! 应用层 (application/):
//! - Ports: LiveSessionManager, RenderSurface, CapabilityGate
//! - Commands: start / update / end / intent
//! - Queries: 会话状态投影
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 唯一会话槽位的内存实现
//! - Worker: SurfaceWorker 顺序投递渲染请求
//! - Adapters: BroadcastSurface, RecordingSurface, SwitchCapabilityGate
//! - Events: 渲染事件广播
//! - HTTP: 宿主桥接 API + 渲染端 WebSocket

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

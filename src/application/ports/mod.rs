//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod capability_gate;
mod live_session_manager;
mod render_surface;

pub use capability_gate::CapabilityGatePort;
pub use live_session_manager::{LiveSessionManagerPort, LiveSessionView, LiveStatus};
pub use render_surface::{RenderSurfacePort, SurfaceError, SurfaceRequest};

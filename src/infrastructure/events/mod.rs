//! Events - 渲染事件推送

mod publisher;

pub use publisher::{EventPublisher, SurfaceEvent};

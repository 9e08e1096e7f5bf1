//! Surface Adapter - 渲染端实现

mod broadcast_surface;
mod recording_surface;

pub use broadcast_surface::{BroadcastSurface, SurfaceFrame};
pub use recording_surface::RecordingSurface;

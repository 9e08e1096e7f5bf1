//! Worker Layer - 后台任务
//!
//! SurfaceWorker 顺序消费渲染请求队列

mod surface_worker;

pub use surface_worker::{SurfaceWorker, SurfaceWorkerStats};

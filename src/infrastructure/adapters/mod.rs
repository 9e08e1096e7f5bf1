//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod capability;
pub mod surface;

pub use capability::*;
pub use surface::*;

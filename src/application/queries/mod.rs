//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：只读投影

mod live_queries;

pub mod handlers;

pub use live_queries::*;

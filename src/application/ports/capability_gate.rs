//! Capability Gate Port - 宿主平台能力检查

/// 宿主平台当前是否允许展示直播会话
///
/// 仅在 start 时查询，同步返回
pub trait CapabilityGatePort: Send + Sync {
    fn is_live_display_permitted(&self) -> bool;
}

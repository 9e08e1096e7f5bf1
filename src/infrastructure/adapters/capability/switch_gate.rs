//! Switch Capability Gate
//!
//! 模拟宿主的“允许实时活动”系统开关，可在运行时切换

use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::ports::CapabilityGatePort;

pub struct SwitchCapabilityGate {
    enabled: AtomicBool,
}

impl SwitchCapabilityGate {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::SeqCst);
        if previous != enabled {
            tracing::info!(enabled = enabled, "Live display capability changed");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl Default for SwitchCapabilityGate {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CapabilityGatePort for SwitchCapabilityGate {
    fn is_live_display_permitted(&self) -> bool {
        self.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let gate = SwitchCapabilityGate::default();
        assert!(gate.is_live_display_permitted());

        gate.set_enabled(false);
        assert!(!gate.is_live_display_permitted());

        gate.set_enabled(true);
        assert!(gate.is_live_display_permitted());
    }
}

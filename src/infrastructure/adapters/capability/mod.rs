//! Capability Adapter - 宿主平台能力开关

mod switch_gate;

pub use switch_gate::SwitchCapabilityGate;

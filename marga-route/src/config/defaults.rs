//! Default value functions for serde deserialization.

pub fn emergency_radius() -> f64 {
    700.0
}

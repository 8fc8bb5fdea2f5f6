//! Shake detection logic, independent of the browser.
//!
//! Motion samples go through a [`ShakeGate`]; accepted shakes become
//! transitions on [`ShakeState`]. The browser side lives in `sensor.rs`.

mod gate;
mod motion;
mod permission;
mod state;
mod subscription;

pub use gate::ShakeGate;
pub use motion::MotionSample;
pub use permission::{PermissionState, SensorError};
pub use state::ShakeState;
pub use subscription::{SubscriptionSlot, Ticket};

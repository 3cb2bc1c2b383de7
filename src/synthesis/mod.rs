//! Trajectory synthesis: the geometric core that deforms a recorded sample
//! onto exact endpoints, the temporal core that assigns per-step delays,
//! and the playback driver that sequences points through a pointer device.

pub mod easing;
pub mod playback;
pub mod reconstruction;
pub mod timing;

pub use easing::Easing;
pub use playback::{PlaybackDriver, PointerDevice, TracePointer};
pub use reconstruction::{reconstruct, Point};
pub use timing::{DelayPlanner, SpeedCategory, SpeedRange, TimingConfig};

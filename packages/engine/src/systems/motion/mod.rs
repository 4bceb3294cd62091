//! Body - a circle with a position, a per-tick velocity and an optional color
//!
//! Bodies are owned by `SimulationCore`; outside the crate they are only
//! ever seen through shared references.

mod vec2;
mod body;

pub use vec2::{Arena, Vec2};
pub use body::Body;

//! MotionSystem - wall-bounded straight-line motion
//!
//! Each tick, per body and in order:
//! 1. test the four walls at the current position,
//! 2. negate the velocity component of every axis that hit (one event per axis),
//! 3. translate by the (possibly reflected) velocity.
//!
//! There is no body-body collision and no damping.

mod collision;
mod system;

pub use system::{Axis, MotionSystem, ReflectionEvent};

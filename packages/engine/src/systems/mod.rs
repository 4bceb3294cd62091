pub mod motion;
pub mod motion_system;

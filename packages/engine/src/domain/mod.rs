//! Value types shared by the engine: colors, scene configuration, errors.

pub mod error;
pub mod palette;
pub mod scene;

use crate::domain::palette::Color;

use super::vec2::Vec2;

/// A simulated circle
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Center of the circle
    pub(crate) pos: Vec2,
    /// Displacement applied each tick
    pub(crate) velocity: Vec2,
    /// Fixed at creation
    radius: f64,
    /// `None` until the input surface picks one
    pub(crate) color: Option<Color>,
}

impl Body {
    pub fn new(pos: Vec2, velocity: Vec2, radius: f64) -> Self {
        Self {
            pos,
            velocity,
            radius,
            color: None,
        }
    }

    /// Body that is already colored when the scene is built.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn is_colored(&self) -> bool {
        self.color.is_some()
    }
}

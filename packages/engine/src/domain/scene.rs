//! Scene configuration loaded from JSON.
//!
//! ```json
//! {
//!   "arena": { "width": 800, "height": 600 },
//!   "bodies": [ { "x": 150, "y": 150, "dx": 4, "dy": 4, "radius": 50 } ],
//!   "style": { "strokeColor": "#00FF00", "strokeWidth": 2 }
//! }
//! ```
//!
//! `style` is optional, and so is a per-body `color`.

use serde::Deserialize;

use crate::motion::{Arena, Body, Vec2};

use super::error::SimError;
use super::palette::{Color, PaletteColor};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub arena: ArenaConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BodyConfig {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_stroke_color() -> String {
    PaletteColor::Green.color().to_hex()
}

fn default_stroke_width() -> f64 {
    2.0
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
        }
    }
}

/// Outline drawn around every colored circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_color: PaletteColor::Green.color(),
            stroke_width: 2.0,
        }
    }
}

/// Validated scene, ready to build a simulation from.
pub struct Scene {
    pub arena: Arena,
    pub bodies: Vec<Body>,
    pub style: RenderStyle,
}

impl Default for SceneConfig {
    /// Single radius-50 circle at (150, 150) moving (4, 4) in an 800x600 arena.
    fn default() -> Self {
        Self {
            arena: ArenaConfig { width: 800.0, height: 600.0 },
            bodies: vec![BodyConfig {
                x: 150.0,
                y: 150.0,
                dx: 4.0,
                dy: 4.0,
                radius: 50.0,
                color: None,
            }],
            style: StyleConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|e| SimError::Scene(e.to_string()))
    }

    /// Check every field and convert to runtime types.
    pub fn build(&self) -> Result<Scene, SimError> {
        let arena = Arena::new(self.arena.width, self.arena.height);
        validate_arena(&arena)?;

        let mut bodies = Vec::with_capacity(self.bodies.len());
        for (i, b) in self.bodies.iter().enumerate() {
            let mut body = Body::new(Vec2::new(b.x, b.y), Vec2::new(b.dx, b.dy), b.radius);
            validate_body(i, &body)?;
            if let Some(c) = b.color.as_deref() {
                let color = Color::parse(c)
                    .map_err(|_| SimError::Scene(format!("body {} has invalid color {:?}", i, c)))?;
                body = body.with_color(color);
            }
            bodies.push(body);
        }

        let stroke_color = Color::parse(&self.style.stroke_color).map_err(|_| {
            SimError::Scene(format!("invalid stroke color {:?}", self.style.stroke_color))
        })?;
        let stroke_width = self.style.stroke_width;
        if !(stroke_width.is_finite() && stroke_width >= 0.0) {
            return Err(SimError::Scene(format!(
                "stroke width must be non-negative, got {}",
                stroke_width
            )));
        }

        Ok(Scene {
            arena,
            bodies,
            style: RenderStyle { stroke_color, stroke_width },
        })
    }
}

/// Arena sides must be finite and positive.
pub(crate) fn validate_arena(arena: &Arena) -> Result<(), SimError> {
    let (w, h) = (arena.width, arena.height);
    if !(w.is_finite() && w > 0.0) {
        return Err(SimError::Scene(format!("arena width must be positive, got {}", w)));
    }
    if !(h.is_finite() && h > 0.0) {
        return Err(SimError::Scene(format!("arena height must be positive, got {}", h)));
    }
    Ok(())
}

/// Position and velocity must be finite, radius finite and positive.
pub(crate) fn validate_body(index: usize, body: &Body) -> Result<(), SimError> {
    if !body.pos().is_finite() {
        return Err(SimError::Scene(format!("body {} has a non-finite position", index)));
    }
    if !body.velocity().is_finite() {
        return Err(SimError::Scene(format!("body {} has a non-finite velocity", index)));
    }
    let r = body.radius();
    if !(r.is_finite() && r > 0.0) {
        return Err(SimError::Scene(format!("body {} radius must be positive, got {}", index, r)));
    }
    Ok(())
}

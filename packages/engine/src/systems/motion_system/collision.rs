use crate::motion::{Arena, Body};

/// Which walls the body overlaps at its current position: `(horizontal, vertical)`.
///
/// Strict comparisons: a circle exactly touching a wall is not a hit.
pub(super) fn wall_hits(body: &Body, arena: &Arena) -> (bool, bool) {
    let pos = body.pos();
    let r = body.radius();

    let horizontal = pos.x + r > arena.width || pos.x - r < 0.0;
    let vertical = pos.y + r > arena.height || pos.y - r < 0.0;

    (horizontal, vertical)
}

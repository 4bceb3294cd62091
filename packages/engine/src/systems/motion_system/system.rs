use crate::motion::{Arena, Body};

use super::collision::wall_hits;

/// Axis on which a wall reflection happened
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Emitted once per axis per body whenever velocity is reflected.
/// The host plays the bounce cue once per event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReflectionEvent {
    pub body: usize,
    pub axis: Axis,
}

/// Owns the bodies and advances them under wall reflection
pub struct MotionSystem {
    bodies: Vec<Body>,
    events: Vec<ReflectionEvent>,
}

impl MotionSystem {
    pub fn new(bodies: Vec<Body>) -> Self {
        let events = Vec::with_capacity(bodies.len() * 2);
        Self { bodies, events }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub(crate) fn body_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    /// Events produced by the most recent `update`.
    pub fn events(&self) -> &[ReflectionEvent] {
        &self.events
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Advance every body by one tick, in order.
    ///
    /// The wall test uses the position at tick entry. A reflected velocity is
    /// applied in the same tick, before translation. A corner hit reflects both
    /// axes and emits two events, horizontal first.
    pub fn update(&mut self, arena: &Arena) {
        self.events.clear();

        for (i, body) in self.bodies.iter_mut().enumerate() {
            let (hit_x, hit_y) = wall_hits(body, arena);

            if hit_x {
                body.velocity.x = -body.velocity.x;
                self.events.push(ReflectionEvent { body: i, axis: Axis::Horizontal });
                log::trace!("body {} reflected on horizontal axis", i);
            }
            if hit_y {
                body.velocity.y = -body.velocity.y;
                self.events.push(ReflectionEvent { body: i, axis: Axis::Vertical });
                log::trace!("body {} reflected on vertical axis", i);
            }

            body.pos += body.velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Vec2;

    #[test]
    fn translation_uses_reflected_velocity() {
        let arena = Arena::new(100.0, 100.0);
        let mut system = MotionSystem::new(vec![Body::new(Vec2::new(95.0, 50.0), Vec2::new(3.0, 0.0), 10.0)]);

        system.update(&arena);

        let b = &system.bodies()[0];
        assert_eq!(b.velocity(), Vec2::new(-3.0, 0.0));
        assert_eq!(b.pos(), Vec2::new(92.0, 50.0));
        assert_eq!(system.events(), &[ReflectionEvent { body: 0, axis: Axis::Horizontal }]);
    }

    #[test]
    fn corner_hit_emits_two_events_horizontal_first() {
        let arena = Arena::new(100.0, 100.0);
        let mut system = MotionSystem::new(vec![Body::new(Vec2::new(5.0, 5.0), Vec2::new(-2.0, -2.0), 10.0)]);

        system.update(&arena);

        assert_eq!(
            system.events(),
            &[
                ReflectionEvent { body: 0, axis: Axis::Horizontal },
                ReflectionEvent { body: 0, axis: Axis::Vertical },
            ]
        );
        assert_eq!(system.bodies()[0].pos(), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn events_are_in_body_order_and_reset_each_update() {
        let arena = Arena::new(100.0, 100.0);
        let mut system = MotionSystem::new(vec![
            Body::new(Vec2::new(50.0, 95.0), Vec2::new(0.0, 1.0), 10.0),
            Body::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0), 10.0),
            Body::new(Vec2::new(95.0, 50.0), Vec2::new(1.0, 0.0), 10.0),
        ]);

        system.update(&arena);
        assert_eq!(
            system.events(),
            &[
                ReflectionEvent { body: 0, axis: Axis::Vertical },
                ReflectionEvent { body: 2, axis: Axis::Horizontal },
            ]
        );

        // Both still overlap their wall (94 + 10 > 100), so they reflect again.
        system.update(&arena);
        assert_eq!(system.events().len(), 2);

        let mut calm = MotionSystem::new(vec![Body::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0), 10.0)]);
        calm.update(&arena);
        assert!(calm.events().is_empty());
    }
}

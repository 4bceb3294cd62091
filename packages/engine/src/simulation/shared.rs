//! Shared simulations for hosts that serve one session to several viewers.
//!
//! `assign_color` and `tick` both read-modify-write the same state, so each
//! runs under a single lock acquisition. Callers get owned snapshots back and
//! never hold the lock while rendering.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::error::SimError;
use crate::domain::palette::Color;
use crate::domain::scene::SceneConfig;
use crate::motion::Body;
use crate::motion_system::ReflectionEvent;

use super::SimulationCore;

/// Owned copy of a simulation's state after a tick
#[derive(Clone, Debug, PartialEq)]
pub struct TickSnapshot {
    pub frame: u64,
    pub started: bool,
    pub bodies: Vec<Body>,
    pub events: Vec<ReflectionEvent>,
}

impl TickSnapshot {
    fn capture(sim: &SimulationCore) -> Self {
        Self {
            frame: sim.frame(),
            started: sim.started(),
            bodies: sim.bodies().to_vec(),
            events: sim.last_events().to_vec(),
        }
    }
}

/// Cloneable, lock-guarded handle to one simulation
#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<Mutex<SimulationCore>>,
}

impl SharedSimulation {
    pub fn new(sim: SimulationCore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sim)),
        }
    }

    pub fn assign_color(&self, index: usize, color: Color) -> Result<usize, SimError> {
        self.inner.lock().assign_color(index, color)
    }

    pub fn assign_color_str(&self, index: usize, color: &str) -> Result<usize, SimError> {
        self.inner.lock().assign_color_str(index, color)
    }

    pub fn tick(&self) -> TickSnapshot {
        let mut sim = self.inner.lock();
        sim.tick();
        TickSnapshot::capture(&*sim)
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> TickSnapshot {
        let sim = self.inner.lock();
        TickSnapshot::capture(&*sim)
    }

    pub fn started(&self) -> bool {
        self.inner.lock().started()
    }

    /// Run `f` against the simulation while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&SimulationCore) -> R) -> R {
        let sim = self.inner.lock();
        f(&*sim)
    }
}

pub type SessionId = u32;

/// Live sessions keyed by id; each one is an independent simulation
pub struct SessionPool {
    sessions: BTreeMap<SessionId, SharedSimulation>,
    next_id: SessionId,
}

impl SessionPool {
    pub fn new() -> Self {
        Self {
            sessions: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register a simulation under a fresh id. Ids wrap back to 1 after
    /// `SessionId::MAX` and skip any id that is still live.
    pub fn open(&mut self, sim: SimulationCore) -> Result<SessionId, SimError> {
        let id = self.allocate_id()?;
        self.sessions.insert(id, SharedSimulation::new(sim));
        log::debug!("session {} opened ({} live)", id, self.sessions.len());
        Ok(id)
    }

    pub fn open_scene(&mut self, config: &SceneConfig) -> Result<SessionId, SimError> {
        let sim = SimulationCore::from_scene(config)?;
        self.open(sim)
    }

    fn allocate_id(&mut self) -> Result<SessionId, SimError> {
        // Ids run 1..=MAX, so MAX live sessions leave nothing free.
        if self.sessions.len() >= SessionId::MAX as usize {
            return Err(SimError::PoolFull);
        }
        let mut id = self.next_id;
        while self.sessions.contains_key(&id) {
            id = following_id(id);
        }
        self.next_id = following_id(id);
        Ok(id)
    }

    pub fn get(&self, id: SessionId) -> Option<SharedSimulation> {
        self.sessions.get(&id).cloned()
    }

    /// Drop a session. Handles already handed out stay usable.
    pub fn close(&mut self, id: SessionId) -> bool {
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            log::debug!("session {} closed ({} live)", id, self.sessions.len());
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Advance every session once. Results are in ascending id order.
    #[cfg(feature = "parallel")]
    pub fn tick_all(&self) -> Vec<(SessionId, TickSnapshot)> {
        use rayon::prelude::*;

        let handles: Vec<(SessionId, &SharedSimulation)> =
            self.sessions.iter().map(|(id, s)| (*id, s)).collect();
        handles
            .par_iter()
            .map(|(id, s)| (*id, s.tick()))
            .collect()
    }

    /// Advance every session once. Results are in ascending id order.
    #[cfg(not(feature = "parallel"))]
    pub fn tick_all(&self) -> Vec<(SessionId, TickSnapshot)> {
        self.sessions
            .iter()
            .map(|(id, s)| (*id, s.tick()))
            .collect()
    }
}

impl Default for SessionPool {
    fn default() -> Self {
        Self::new()
    }
}

fn following_id(id: SessionId) -> SessionId {
    id.checked_add(1).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Arena, Body, Vec2};

    fn sim() -> SimulationCore {
        SimulationCore::new(
            Arena::new(100.0, 100.0),
            vec![Body::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 1.0), 5.0)],
        )
        .unwrap()
    }

    #[test]
    fn ids_wrap_past_max_without_replacing_live_sessions() {
        let mut pool = SessionPool::new();
        let first = pool.open(sim()).unwrap();
        let second = pool.open(sim()).unwrap();
        assert_eq!((first, second), (1, 2));

        pool.next_id = SessionId::MAX;
        assert_eq!(pool.open(sim()), Ok(SessionId::MAX));
        // 1 and 2 are live, so the wrapped counter moves on to 3.
        assert_eq!(pool.open(sim()), Ok(3));
        assert_eq!(pool.len(), 4);

        pool.get(first).unwrap().assign_color_str(0, "Red").unwrap();
        assert!(pool.get(first).unwrap().started());
        assert!(!pool.get(SessionId::MAX).unwrap().started());
    }

    #[test]
    fn closed_ids_are_reused_after_wrapping() {
        let mut pool = SessionPool::new();
        pool.open(sim()).unwrap();
        pool.open(sim()).unwrap();
        assert!(pool.close(1));

        pool.next_id = SessionId::MAX;
        assert_eq!(pool.open(sim()), Ok(SessionId::MAX));
        assert_eq!(pool.open(sim()), Ok(1));
        assert_eq!(pool.open(sim()), Ok(3));
    }
}

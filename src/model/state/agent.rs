//! Road-laying walkers and the fixed-capacity pool that holds them.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The four axis-aligned unit directions agents travel in.
pub const AXIS_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Pick one of the four axis directions uniformly.
pub fn random_axis_dir<R: Rng>(rng: &mut R) -> (i8, i8) {
    AXIS_DIRS[rng.gen_range(0..4)]
}

/// An autonomous walker. A `life` of 0 means the agent is dormant: it keeps
/// its pool slot and waits to be revived in place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Agent {
    pub x: i16,
    pub y: i16,
    pub dx: i8,
    pub dy: i8,
    pub life: u8,
}

impl Agent {
    pub fn is_active(&self) -> bool {
        self.life > 0
    }

    /// Rotate the direction vector 90 degrees left.
    pub fn turn_left(&mut self) {
        let (dx, dy) = (-self.dy, self.dx);
        self.dx = dx;
        self.dy = dy;
    }

    /// Rotate the direction vector 90 degrees right.
    pub fn turn_right(&mut self) {
        let (dx, dy) = (self.dy, -self.dx);
        self.dx = dx;
        self.dy = dy;
    }

    pub fn reverse(&mut self) {
        self.dx = -self.dx;
        self.dy = -self.dy;
    }
}

/// Fixed-capacity arena of agents.
///
/// Slots are appended until `capacity` is reached and never deallocated;
/// afterwards agents are only reused in place. Spawning at capacity is a
/// silent no-op — capacity pressure is how growth self-limits, not an error.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AgentPool {
    agents: Vec<Agent>,
    capacity: usize,
}

impl AgentPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            agents: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupied slot count.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn has_capacity(&self) -> bool {
        self.agents.len() < self.capacity
    }

    /// Append a new agent if a slot is free; drop it silently otherwise.
    pub fn spawn(&mut self, x: i16, y: i16, dx: i8, dy: i8, life: u8) {
        if self.agents.len() >= self.capacity {
            return;
        }
        self.agents.push(Agent { x, y, dx, dy, life });
    }

    /// Copy an agent out of its slot. Slot updates go back through `set`.
    pub fn get(&self, idx: usize) -> Agent {
        self.agents[idx]
    }

    pub fn set(&mut self, idx: usize, agent: Agent) {
        self.agents[idx] = agent;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn active_count(&self) -> usize {
        self.agents.iter().filter(|a| a.is_active()).count()
    }

    /// Drop every slot. Only used by reset; capacity is retained.
    pub fn clear(&mut self) {
        self.agents.clear();
    }
}

//! The growth engine: owns the light grid, the agent pool, the simulation
//! clock, and the random source, and is the only thing that mutates them.

pub mod events;
pub mod init;
pub mod update;

use crate::model::config::AppConfig;
use crate::model::state::{AgentPool, LightGrid};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CityError {
    #[error("grid of {0}x{1} leaves no room to grow; both dimensions must be at least 8")]
    GridTooSmall(u16, u16),
}

/// A city light map under construction.
///
/// Callers drive it with `step()` and read cells back with `get()`; nothing
/// here renders, blocks, or schedules its own cadence. `step()` must not be
/// interleaved with reads on the same instance — one loop owns the engine.
pub struct City {
    width: u16,
    height: u16,
    pub tick: u64,
    pub grid: LightGrid,
    pub agents: AgentPool,
    pub config: AppConfig,
    pub rng: ChaCha8Rng,
    seed_x: i16,
    seed_y: i16,
    next_node_tick: u64,
}

impl City {
    /// Read-only cell query.
    pub fn get(&self, x: u16, y: u16) -> u8 {
        self.grid.get(x, y)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn active_count(&self) -> usize {
        self.agents.active_count()
    }

    /// The fixed seed point all biased sampling falls back to.
    pub fn seed_point(&self) -> (i16, i16) {
        (self.seed_x, self.seed_y)
    }

    /// Tick at which the next bright-node event is scheduled.
    pub fn next_bright_node(&self) -> u64 {
        self.next_node_tick
    }

    /// Largest x coordinate inside the playable interior.
    pub(crate) fn interior_max_x(&self) -> i16 {
        self.width as i16 - 2
    }

    /// Largest y coordinate inside the playable interior.
    pub(crate) fn interior_max_y(&self) -> i16 {
        self.height as i16 - 2
    }
}

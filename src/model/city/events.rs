//! Spatial growth events: circular intensity stamps, the periodic
//! bright-node district event, and biased agent revival.

use crate::model::city::City;
use crate::model::state::{random_axis_dir, Agent};
use rand::Rng;
use tracing::debug;

pub(crate) const SEED_BLOOM_RADIUS: i16 = 6;
pub(crate) const SEED_BLOOM_STRENGTH: u8 = 120;

const NODE_CORE_RADIUS: i16 = 10;
const NODE_CORE_STRENGTH: u8 = 220;
const NODE_HALO_RADIUS: i16 = 18;
const NODE_HALO_STRENGTH: u8 = 90;
const NODE_SPAWN_COUNT: usize = 5;
const NODE_SPAWN_SPREAD: i16 = 10;
const NODE_SAMPLES: usize = 20;

const RESPAWN_SAMPLES: usize = 15;
/// Cells at or above this are considered saturated downtown and skipped
/// when biasing revival toward the fringe of lit regions.
const SATURATION_CUTOFF: u8 = 200;
const RESPAWN_LIFE_MIN: u8 = 200;
const RESPAWN_LIFE_MAX: u8 = 255;

impl City {
    /// Circular distance-weighted intensity stamp.
    ///
    /// The center cell receives the full `strength`; falloff is quadratic
    /// in distance (3 per squared cell), clamped so nothing negative is
    /// ever added. Cells on the outer one-cell border are never touched.
    pub fn bloom(&mut self, cx: i16, cy: i16, radius: i16, strength: u8) {
        let r2 = i32::from(radius) * i32::from(radius);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let px = cx + dx;
                let py = cy + dy;
                if px < 1 || px > self.interior_max_x() || py < 1 || py > self.interior_max_y() {
                    continue;
                }
                let d2 = i32::from(dx) * i32::from(dx) + i32::from(dy) * i32::from(dy);
                if d2 > r2 {
                    continue;
                }
                // stronger in center
                let add = (i32::from(strength) - (d2 * 3).min(i32::from(strength))) as u8;
                self.grid.add(px as u16, py as u16, add);
            }
        }
    }

    /// Stamp a dense district at the most-lit of a handful of sampled spots
    /// and spawn extra agents around it. Falls back to the seed point when
    /// the whole map is dark.
    pub fn place_bright_node(&mut self) {
        let (mut best_x, mut best_y) = (self.seed_x, self.seed_y);
        let mut best = 0u8;
        for _ in 0..NODE_SAMPLES {
            let (x, y) = self.sample_candidate();
            let v = self.grid.get(x as u16, y as u16);
            if v > best {
                best = v;
                best_x = x;
                best_y = y;
            }
        }

        debug!(tick = self.tick, x = best_x, y = best_y, "bright node");

        // dense core + halo
        self.bloom(best_x, best_y, NODE_CORE_RADIUS, NODE_CORE_STRENGTH);
        self.bloom(best_x, best_y, NODE_HALO_RADIUS, NODE_HALO_STRENGTH);

        // district growth: extra walkers scattered around the node
        for _ in 0..NODE_SPAWN_COUNT {
            if !self.agents.has_capacity() {
                break;
            }
            let rx = (best_x + self.rng.gen_range(-NODE_SPAWN_SPREAD..=NODE_SPAWN_SPREAD))
                .clamp(2, self.width() as i16 - 3);
            let ry = (best_y + self.rng.gen_range(-NODE_SPAWN_SPREAD..=NODE_SPAWN_SPREAD))
                .clamp(2, self.height() as i16 - 3);
            let (dx, dy) = random_axis_dir(&mut self.rng);
            let life = self.rng.gen_range(RESPAWN_LIFE_MIN..RESPAWN_LIFE_MAX);
            self.agents.spawn(rx, ry, dx, dy, life);
        }
    }

    /// Revive the agent in slot `idx` at a spot biased toward the edge of
    /// existing lit regions: the brightest sampled cell that is lit but not
    /// yet saturated. Falls back to the seed point when nothing qualifies.
    pub fn respawn_slot(&mut self, idx: usize) {
        let (mut best_x, mut best_y) = (self.seed_x, self.seed_y);
        let mut best_val = 0u8;
        for _ in 0..RESPAWN_SAMPLES {
            let (x, y) = self.sample_candidate();
            let v = self.grid.get(x as u16, y as u16);
            if v > best_val && v < SATURATION_CUTOFF {
                best_val = v;
                best_x = x;
                best_y = y;
            }
        }

        let (dx, dy) = random_axis_dir(&mut self.rng);
        let life = self.rng.gen_range(RESPAWN_LIFE_MIN..RESPAWN_LIFE_MAX);
        self.agents.set(
            idx,
            Agent {
                x: best_x,
                y: best_y,
                dx,
                dy,
                life,
            },
        );
    }

    /// Uniform sample from the two-cell inset region used for candidate
    /// points, a strict subset of the playable interior.
    fn sample_candidate(&mut self) -> (i16, i16) {
        let x = self.rng.gen_range(2..self.width() as i16 - 2);
        let y = self.rng.gen_range(2..self.height() as i16 - 2);
        (x, y)
    }
}

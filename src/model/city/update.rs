//! The per-tick simulation pass: agent movement and road laying, the slow
//! global fade, and the population safety net.

use crate::model::city::City;
use rand::Rng;

const ROAD_MARK: u8 = 35;
const LIGHT_MARK: u8 = 45;
/// Percent chance per tick of extra lights along a fresh road cell.
const LIGHT_CHANCE: u32 = 25;

/// Turning bias, per mille: 4% left, 4% right, 92% straight.
const TURN_LEFT_CUT: u32 = 40;
const TURN_RIGHT_CUT: u32 = 80;

/// Per-mille chance of branching a new walker off the current road.
const BRANCH_CHANCE: u32 = 30;
const BRANCH_LIFE_MIN: u8 = 140;
const BRANCH_LIFE_MAX: u8 = 240;

/// Life lost when bouncing off the map edge.
const EDGE_LIFE_COST: u8 = 30;
/// Percent chance a just-died agent is revived immediately instead of
/// waiting for the maintenance pass.
const DEATH_RESPAWN_CHANCE: u32 = 15;

impl City {
    /// Advance the simulation by exactly one discrete tick.
    ///
    /// Runs to completion with no suspension points; the caller serializes
    /// access and decides how many ticks to run per rendered frame.
    pub fn step(&mut self) {
        self.tick += 1;

        // Occasionally drop a bright node (stadium / dense district).
        if self.tick >= self.next_node_tick {
            self.place_bright_node();
            let min = self.config.events.node_delay_min;
            let max = self.config.events.node_delay_max;
            let delay = if min < max {
                self.rng.gen_range(min..max)
            } else {
                min
            };
            self.next_node_tick = self.tick + delay;
        }

        for idx in 0..self.agents.len() {
            self.update_agent(idx);
        }

        // Very slow fade, applied on exact multiples of the interval only.
        let interval = self.config.events.decay_interval;
        if interval > 0 && self.tick % interval == 0 {
            self.grid.decay(1);
        }

        self.maintain_population();
    }

    fn update_agent(&mut self, idx: usize) {
        let mut a = self.agents.get(idx);
        if !a.is_active() {
            return;
        }

        // road mark
        self.grid.add(a.x as u16, a.y as u16, ROAD_MARK);

        // chance to add lights along roads
        if self.rng.gen_range(0..100) < LIGHT_CHANCE {
            self.grid.add(a.x as u16, a.y as u16, LIGHT_MARK);
        }

        // random turn
        let roll = self.rng.gen_range(0..1000);
        if roll < TURN_LEFT_CUT {
            a.turn_left();
        } else if roll < TURN_RIGHT_CUT {
            a.turn_right();
        }

        // branch sometimes to thicken the road network
        if self.agents.has_capacity() && self.rng.gen_range(0..1000) < BRANCH_CHANCE {
            let mut branch = a;
            if self.rng.gen_range(0..2) == 0 {
                branch.turn_left();
            } else {
                branch.turn_right();
            }
            let life = self.rng.gen_range(BRANCH_LIFE_MIN..BRANCH_LIFE_MAX);
            self.agents.spawn(a.x, a.y, branch.dx, branch.dy, life);
        }

        // move
        a.x += a.dx as i16;
        a.y += a.dy as i16;

        // bounce off edges; staying inside just ages the walker
        let (max_x, max_y) = (self.interior_max_x(), self.interior_max_y());
        if a.x < 1 || a.x > max_x || a.y < 1 || a.y > max_y {
            a.x = a.x.clamp(1, max_x);
            a.y = a.y.clamp(1, max_y);
            a.reverse();
            a.life = a.life.saturating_sub(EDGE_LIFE_COST);
        } else if a.life > 0 {
            a.life -= 1;
        }

        self.agents.set(idx, a);

        // If dead, sometimes respawn right away to keep growth going.
        if a.life == 0 && self.rng.gen_range(0..100) < DEATH_RESPAWN_CHANCE {
            self.respawn_slot(idx);
        }
    }

    /// Safety net: when too few walkers are active, revive dormant slots
    /// until the pool is warm again or every slot has been scanned.
    fn maintain_population(&mut self) {
        let mut active = self.agents.active_count();
        if active >= self.config.agents.min_active {
            return;
        }
        for idx in 0..self.agents.len() {
            if active >= self.config.agents.respawn_target {
                break;
            }
            if !self.agents.get(idx).is_active() {
                self.respawn_slot(idx);
                active += 1;
            }
        }
    }
}

use crate::model::city::events::{SEED_BLOOM_RADIUS, SEED_BLOOM_STRENGTH};
use crate::model::city::{City, CityError};
use crate::model::config::AppConfig;
use crate::model::state::{AgentPool, LightGrid, AXIS_DIRS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

impl City {
    /// Allocate the grid and pool for fixed dimensions and bring the engine
    /// to its seeded start state. Construction is the only fallible
    /// operation; everything after it is total.
    pub fn new(config: AppConfig) -> Result<Self, CityError> {
        let width = config.world.width;
        let height = config.world.height;
        if width < 8 || height < 8 {
            return Err(CityError::GridTooSmall(width, height));
        }

        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut city = Self {
            width,
            height,
            tick: 0,
            grid: LightGrid::new(width, height),
            agents: AgentPool::new(config.agents.max_agents),
            seed_x: 0,
            seed_y: 0,
            next_node_tick: 0,
            config,
            rng,
        };
        city.reset();
        info!(width, height, "city constructed");
        Ok(city)
    }

    /// Reinitialize to the seeded start state. Idempotent and callable at
    /// any time between steps.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.agents.clear();

        // seed at center
        self.seed_x = (self.width / 2) as i16;
        self.seed_y = (self.height / 2) as i16;
        for (dx, dy) in AXIS_DIRS {
            self.agents.spawn(self.seed_x, self.seed_y, dx, dy, 255);
        }

        // initial lit downtown
        self.bloom(self.seed_x, self.seed_y, SEED_BLOOM_RADIUS, SEED_BLOOM_STRENGTH);

        self.tick = 0;
        let min = self.config.events.first_node_min;
        let max = self.config.events.first_node_max;
        self.next_node_tick = if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        };
        debug!(next_node = self.next_node_tick, "city reset");
    }
}

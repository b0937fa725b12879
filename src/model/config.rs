use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AgentConfig {
    pub max_agents: usize,
    /// Below this many active agents the safety-net respawn pass kicks in.
    pub min_active: usize,
    /// The safety net revives dormant agents until this many are active.
    pub respawn_target: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EventConfig {
    /// Global decay of 1 is applied every this many ticks.
    pub decay_interval: u64,
    /// The first bright node lands uniformly inside this tick window.
    pub first_node_min: u64,
    pub first_node_max: u64,
    /// Each later bright node follows the previous by a draw from this window.
    pub node_delay_min: u64,
    pub node_delay_max: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub agents: AgentConfig,
    pub events: EventConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                width: 240,
                height: 135,
                seed: None,
            },
            agents: AgentConfig {
                max_agents: 60,
                min_active: 8,
                respawn_target: 12,
            },
            events: EventConfig {
                decay_interval: 500,
                first_node_min: 400,
                first_node_max: 1000,
                node_delay_min: 600,
                node_delay_max: 1800,
            },
        }
    }
}

impl AppConfig {
    pub fn load_from(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        let default = Self::default();
        // Create default config file if missing
        if let Ok(serialized) = toml::to_string(&default) {
            let _ = fs::write(path, serialized);
        }
        default
    }

    pub fn load() -> Self {
        Self::load_from("config.toml")
    }
}

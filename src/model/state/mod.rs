pub mod agent;
pub mod light_grid;

pub use agent::{random_axis_dir, Agent, AgentPool, AXIS_DIRS};
pub use light_grid::LightGrid;

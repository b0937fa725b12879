pub mod model;
pub mod ui;

pub use crate::model::city::{City, CityError};
pub use crate::model::config::AppConfig;

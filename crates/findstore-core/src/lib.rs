mod app_config;
pub mod config;
pub mod error;
pub mod geo;
pub mod render;
pub mod search;
pub mod store;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, DatasetError};
pub use geo::{haversine, Coordinate, DistanceUnit, EARTH_RADIUS_KM, EARTH_RADIUS_MI};
pub use render::{render_json, render_text};
pub use search::{nearest_store, SearchResult};
pub use store::{load_stores, parse_stores, StoreRecord};

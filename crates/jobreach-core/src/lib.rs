//! Core domain logic for the jobreach distance pipeline.
//!
//! Everything here is synchronous and network-free: the static coordinate
//! reference tables, the Haversine distance function, the priority-ordered
//! location resolver, distance formatting, the per-session participant
//! state, and the comparators used to sort result sets by distance. The
//! network-facing halves live in `jobreach-geocode` (address geocoding)
//! and `jobreach-api` (job search).

pub mod app_config;
pub mod config;
pub mod coords;
pub mod distance;
pub mod format;
pub mod resolve;
pub mod session;
pub mod sort;
pub mod tables;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use coords::{distance_miles, Coordinate};
pub use distance::job_distance;
pub use format::format_distance;
pub use resolve::{resolve, LocationHint};
pub use session::ParticipantLocation;
pub use sort::{cmp_distance, cmp_distance_desc};
pub use tables::{lookup_city, lookup_zip};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

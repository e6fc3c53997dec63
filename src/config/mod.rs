//! Configuration module - load and validate census client configuration.
pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{CensusConfig, ConfigError};

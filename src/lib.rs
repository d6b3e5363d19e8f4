pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{pipeline::RecommendationPipeline, runner::RecommendationRunner};
pub use crate::domain::model::{AvoidedVenue, ParticipantPreferences, Report, VenueMenu};
pub use crate::utils::error::{RecommendError, Result};

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::OutputFormat;
pub use config::{cli::LocalStorage, RunSettings};
pub use core::{assigner::Assigner, engine::SantaEngine};
pub use domain::model::{Assignment, Exclusions, Pairing, Participants};
pub use utils::error::{Result, SantaError};

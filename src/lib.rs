pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::StdoutSink, settings::Settings, toml_config::TomlConfig};
pub use core::{
    engine::{GenerationEngine, GenerationSummary},
    generator::{generate_cards, CardGenerator},
    pipeline::CardPipeline,
    registry::NetworkRegistry,
};
pub use domain::model::{
    CardRecord, GenerationOptions, NetworkProfile, NetworkSelector, OutputFormat,
};
pub use utils::error::{CardGenError, Result};

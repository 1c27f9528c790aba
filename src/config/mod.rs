pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::GenerationSection;
#[cfg(feature = "cli")]
use crate::core::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fauxcard")]
#[command(about = "Generate clearly-fake payment card records for UI testing")]
pub struct CliConfig {
    /// Path to a TOML preset file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Card network name, or "any" to pick one per record
    #[arg(short = 'N', long)]
    pub network: Option<String>,

    /// Number of records to generate (1-100)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Include CVV, expiry and holder name
    #[arg(long)]
    pub details: Option<bool>,

    /// Make numbers pass the Luhn check
    #[arg(long)]
    pub luhn: Option<bool>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the network table and exit
    #[arg(long)]
    pub list_networks: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> GenerationSection {
        GenerationSection {
            network: self.network.clone(),
            count: self.count,
            include_details: self.details,
            luhn_valid: self.luhn,
            format: self.format,
            seed: self.seed,
        }
    }
}

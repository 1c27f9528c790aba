use crate::config::toml_config::{GenerationSection, TomlConfig, MAX_COUNT};
use crate::core::{ConfigProvider, GenerationOptions, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

/// Options after merging CLI flags over a TOML preset over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: GenerationOptions,
    pub format: OutputFormat,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn resolve(overrides: &GenerationSection, preset: Option<&TomlConfig>) -> Self {
        let base = preset.cloned().unwrap_or_default();
        let base_options = base.generation_options();

        let options = GenerationOptions {
            network: overrides
                .network
                .as_deref()
                .map(|n| n.parse().unwrap_or_default())
                .unwrap_or(base_options.network),
            count: overrides.count.unwrap_or(base_options.count),
            include_details: overrides
                .include_details
                .unwrap_or(base_options.include_details),
            luhn_valid: overrides.luhn_valid.unwrap_or(base_options.luhn_valid),
        };

        Self {
            options,
            format: overrides.format.unwrap_or_else(|| base.output_format()),
            seed: overrides.seed.or_else(|| base.seed()),
        }
    }
}

impl ConfigProvider for Settings {
    fn generation_options(&self) -> GenerationOptions {
        self.options.clone()
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("count", self.options.count, 1, MAX_COUNT)
    }
}

use crate::core::registry::NetworkRegistry;
use crate::core::{ConfigProvider, GenerationOptions, NetworkProfile, OutputFormat};
use crate::utils::error::{CardGenError, Result};
use crate::utils::validation::{validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_COUNT: usize = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub generation: Option<GenerationSection>,
    pub networks: Option<Vec<NetworkEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSection {
    pub network: Option<String>,
    pub count: Option<usize>,
    pub include_details: Option<bool>,
    pub luhn_valid: Option<bool>,
    pub format: Option<OutputFormat>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEntry {
    pub name: String,
    pub prefixes: Vec<String>,
    pub length: usize,
    pub cvv_length: usize,
}

impl From<&NetworkEntry> for NetworkProfile {
    fn from(entry: &NetworkEntry) -> Self {
        NetworkProfile {
            name: entry.name.trim().to_string(),
            prefixes: entry.prefixes.clone(),
            length: entry.length,
            cvv_length: entry.cvv_length,
        }
    }
}

impl TomlConfig {
    /// Loads a preset from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CardGenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CardGenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CardGenError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn generation(&self) -> GenerationSection {
        self.generation.clone().unwrap_or_default()
    }

    pub fn custom_profiles(&self) -> Vec<NetworkProfile> {
        self.networks
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(NetworkProfile::from)
            .collect()
    }

    /// Built-in table plus the `[[networks]]` entries.
    pub fn build_registry(&self) -> Result<NetworkRegistry> {
        NetworkRegistry::builtin().with_profiles(self.custom_profiles())
    }
}

impl ConfigProvider for TomlConfig {
    fn generation_options(&self) -> GenerationOptions {
        let section = self.generation();
        let defaults = GenerationOptions::default();

        GenerationOptions {
            network: section
                .network
                .as_deref()
                .map(|n| n.parse().unwrap_or_default())
                .unwrap_or(defaults.network),
            count: section.count.unwrap_or(defaults.count),
            include_details: section.include_details.unwrap_or(defaults.include_details),
            luhn_valid: section.luhn_valid.unwrap_or(defaults.luhn_valid),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.generation().format.unwrap_or_default()
    }

    fn seed(&self) -> Option<u64> {
        self.generation().seed
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(count) = self.generation().count {
            validate_range("generation.count", count, 1, MAX_COUNT)?;
        }

        self.build_registry()?;
        Ok(())
    }
}

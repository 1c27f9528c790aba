use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Holder name used when a record is generated without details.
pub const PLACEHOLDER_HOLDER: &str = "Card Holder";

/// Prefix / length / CVV-length template of a card network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub name: String,
    pub prefixes: Vec<String>,
    pub length: usize,
    pub cvv_length: usize,
}

impl NetworkProfile {
    pub fn new(name: &str, prefixes: &[&str], length: usize, cvv_length: usize) -> Self {
        Self {
            name: name.to_string(),
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            length,
            cvv_length,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// Which network a batch draws from. `Any` picks uniformly per record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NetworkSelector {
    #[default]
    Any,
    Named(String),
}

impl FromStr for NetworkSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("any") || trimmed.eq_ignore_ascii_case("random") {
            Ok(NetworkSelector::Any)
        } else {
            Ok(NetworkSelector::Named(trimmed.to_string()))
        }
    }
}

impl fmt::Display for NetworkSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkSelector::Any => write!(f, "Any"),
            NetworkSelector::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub network: NetworkSelector,
    pub count: usize,
    pub include_details: bool,
    pub luhn_valid: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            network: NetworkSelector::Any,
            count: 2,
            include_details: true,
            luhn_valid: true,
        }
    }
}

/// One synthetic card. Serialized keys are `type, number, cvv, expiry, name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(rename = "type")]
    pub network: String,
    pub number: String,
    pub cvv: String,
    pub expiry: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Txt,
    Plain,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
            OutputFormat::Txt => "TXT",
            OutputFormat::Plain => "Plain Text",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!("any".parse::<NetworkSelector>().unwrap(), NetworkSelector::Any);
        assert_eq!(" ANY ".parse::<NetworkSelector>().unwrap(), NetworkSelector::Any);
        assert_eq!(
            "American Express".parse::<NetworkSelector>().unwrap(),
            NetworkSelector::Named("American Express".to_string())
        );
    }

    #[test]
    fn test_record_serializes_network_as_type() {
        let record = CardRecord {
            network: "Visa".to_string(),
            number: "4539148803436467".to_string(),
            cvv: "123".to_string(),
            expiry: "04/29".to_string(),
            name: "Jane Doe".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Visa");
        assert!(value.get("network").is_none());
    }

    #[test]
    fn test_profile_matches_case_insensitively() {
        let profile = NetworkProfile::new("Visa Debit", &["4"], 16, 3);
        assert!(profile.matches("visa debit"));
        assert!(profile.matches("  VISA DEBIT "));
        assert!(!profile.matches("Visa"));
    }
}

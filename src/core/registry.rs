use crate::domain::model::NetworkProfile;
use crate::utils::error::{CardGenError, Result};
use crate::utils::validation::{validate_digit_string, validate_non_empty_string};

pub const MIN_CARD_LENGTH: usize = 12;
pub const MAX_CARD_LENGTH: usize = 19;

const BUILTIN_PROFILES: &[(&str, &[&str], usize, usize)] = &[
    ("Visa", &["4"], 16, 3),
    ("Mastercard", &["51", "52", "53", "54", "55"], 16, 3),
    ("American Express", &["34", "37"], 15, 4),
    ("Discover", &["6011", "65"], 16, 3),
    ("Visa Debit", &["4"], 16, 3),
    ("Mastercard Debit", &["51", "52", "53", "54", "55"], 16, 3),
];

/// Ordered table of network profiles, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    profiles: Vec<NetworkProfile>,
}

impl NetworkRegistry {
    pub fn builtin() -> Self {
        let profiles = BUILTIN_PROFILES
            .iter()
            .map(|(name, prefixes, length, cvv_length)| {
                NetworkProfile::new(name, prefixes, *length, *cvv_length)
            })
            .collect();
        Self { profiles }
    }

    pub fn empty() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        self.profiles.iter().find(|p| p.matches(name))
    }

    pub fn profiles(&self) -> &[NetworkProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Adds a profile, replacing any existing one with the same name.
    pub fn register(&mut self, profile: NetworkProfile) -> Result<()> {
        validate_profile(&profile)?;

        if let Some(existing) = self.profiles.iter_mut().find(|p| p.matches(&profile.name)) {
            tracing::debug!("Replacing network profile '{}'", existing.name);
            *existing = profile;
        } else {
            tracing::debug!("Registering network profile '{}'", profile.name);
            self.profiles.push(profile);
        }
        Ok(())
    }

    pub fn with_profiles<I>(mut self, profiles: I) -> Result<Self>
    where
        I: IntoIterator<Item = NetworkProfile>,
    {
        for profile in profiles {
            self.register(profile)?;
        }
        Ok(self)
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn validate_profile(profile: &NetworkProfile) -> Result<()> {
    let invalid = |reason: String| CardGenError::ProfileError {
        network: profile.name.clone(),
        reason,
    };

    validate_non_empty_string("networks.name", &profile.name)?;

    if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&profile.length) {
        return Err(invalid(format!(
            "length {} is outside {}..={}",
            profile.length, MIN_CARD_LENGTH, MAX_CARD_LENGTH
        )));
    }

    if !(3..=4).contains(&profile.cvv_length) {
        return Err(invalid(format!(
            "cvv_length {} must be 3 or 4",
            profile.cvv_length
        )));
    }

    if profile.prefixes.is_empty() {
        return Err(invalid("prefix list is empty".to_string()));
    }

    for prefix in &profile.prefixes {
        validate_digit_string("networks.prefixes", prefix)?;
        if prefix.len() >= profile.length {
            return Err(invalid(format!(
                "prefix '{}' leaves no room in a {}-digit number",
                prefix, profile.length
            )));
        }
    }

    Ok(())
}

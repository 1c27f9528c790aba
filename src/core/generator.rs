use crate::core::luhn;
use crate::core::registry::NetworkRegistry;
use crate::domain::model::{
    CardRecord, GenerationOptions, NetworkProfile, NetworkSelector, PLACEHOLDER_HOLDER,
};
use chrono::Datelike;
use rand::seq::IndexedRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Peter", "Susan", "Michael", "Emily", "Chris", "Jessica", "David", "Sarah",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Doe", "Jones", "Williams", "Brown", "Davis", "Miller", "Wilson", "Moore", "Taylor",
];

/// Expiry years are drawn from `reference_year + 1 ..= reference_year + EXPIRY_YEARS_AHEAD`.
pub const EXPIRY_YEARS_AHEAD: i32 = 6;

pub struct CardGenerator<'a> {
    registry: &'a NetworkRegistry,
    reference_year: i32,
}

impl<'a> CardGenerator<'a> {
    pub fn new(registry: &'a NetworkRegistry) -> Self {
        Self {
            registry,
            reference_year: chrono::Local::now().year(),
        }
    }

    /// Pins the year expiry dates are computed from.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    /// Generates up to `options.count` records. Entries whose network cannot be
    /// resolved are skipped with a warning, so the result may be shorter.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Vec<CardRecord> {
        let mut cards = Vec::with_capacity(options.count);

        for _ in 0..options.count {
            let Some(profile) = self.resolve(&options.network, rng) else {
                tracing::warn!(
                    "Configuration for card type \"{}\" not found. Skipping.",
                    options.network
                );
                continue;
            };

            cards.push(self.generate_record(profile, options, rng));
        }

        tracing::debug!(
            "Generated {} of {} requested {} records",
            cards.len(),
            options.count,
            options.network
        );
        cards
    }

    fn resolve<R: Rng + ?Sized>(
        &self,
        selector: &NetworkSelector,
        rng: &mut R,
    ) -> Option<&'a NetworkProfile> {
        let registry: &'a NetworkRegistry = self.registry;
        match selector {
            NetworkSelector::Any => registry.profiles().choose(rng),
            NetworkSelector::Named(name) => registry.get(name),
        }
    }

    fn generate_record<R: Rng + ?Sized>(
        &self,
        profile: &NetworkProfile,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> CardRecord {
        let number = generate_number(profile, options.luhn_valid, rng);

        let (cvv, expiry, name) = if options.include_details {
            (
                generate_cvv(profile.cvv_length, rng),
                generate_expiry(self.reference_year, rng),
                generate_name(rng),
            )
        } else {
            (String::new(), String::new(), PLACEHOLDER_HOLDER.to_string())
        };

        CardRecord {
            network: profile.name.clone(),
            number,
            cvv,
            expiry,
            name,
        }
    }
}

/// Generates a batch with the thread-local RNG and the current year.
pub fn generate_cards(options: &GenerationOptions, registry: &NetworkRegistry) -> Vec<CardRecord> {
    CardGenerator::new(registry).generate(options, &mut rand::rng())
}

/// Builds a digit string of exactly `profile.length` digits starting with one of
/// the profile's prefixes. With `luhn_valid` the last digit is the Luhn check digit.
pub fn generate_number<R: Rng + ?Sized>(
    profile: &NetworkProfile,
    luhn_valid: bool,
    rng: &mut R,
) -> String {
    let prefix = profile
        .prefixes
        .choose(rng)
        .map(String::as_str)
        .unwrap_or_default();

    // Prefixes are ASCII digits once the profile has passed registry validation.
    let mut number = prefix.to_string();
    let remaining = profile.length.saturating_sub(prefix.chars().count());

    if remaining > 0 {
        if luhn_valid {
            number.extend((0..remaining - 1).map(|_| char::from(b'0' + random_digit(rng))));
            let check = luhn::check_digit_str(&number).unwrap_or(0);
            number.push(char::from(b'0' + check));
        } else {
            number.extend((0..remaining).map(|_| char::from(b'0' + random_digit(rng))));
        }
    }

    debug_assert!(!luhn_valid || remaining == 0 || luhn::is_valid(&number));
    number
}

pub fn generate_cvv<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(b'0' + random_digit(rng)))
        .collect()
}

/// Random future expiry in `MM/YY` form.
pub fn generate_expiry<R: Rng + ?Sized>(reference_year: i32, rng: &mut R) -> String {
    let year = rng.random_range(reference_year + 1..=reference_year + EXPIRY_YEARS_AHEAD);
    let month = rng.random_range(1..=12u32);
    format!("{:02}/{:02}", month, year.rem_euclid(100))
}

pub fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("John");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Doe");
    format!("{} {}", first, last)
}

fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.random_range(0..10u8)
}

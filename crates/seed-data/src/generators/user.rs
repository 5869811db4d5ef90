//! User record generation.

use fake::{Fake, faker::name::en::FirstName};
use rand::Rng;

use crate::models::{CountryCode, SubscriptionTier};

/// Generated user data ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUser {
    pub name: String,
    pub email: String,
    pub country_code: CountryCode,
    pub subscription_tier: SubscriptionTier,
    pub lifetime_value: f64,
}

/// How user names are produced.
#[derive(Debug, Clone)]
pub enum NameStyle {
    /// Fixed-length string of random ASCII letters.
    RandomLetters { length: usize },
    /// A first name with a numeric suffix, e.g. `Alice042`.
    Realistic,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// How names are generated.
    pub name_style: NameStyle,
    /// Domain appended to the name to form the email address.
    pub email_domain: String,
    /// Country codes to draw from.
    pub country_codes: Vec<CountryCode>,
    /// Subscription tiers to draw from.
    pub tiers: Vec<SubscriptionTier>,
    /// Inclusive range for lifetime value, rounded to cents.
    pub value_range: (f64, f64),
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            name_style: NameStyle::RandomLetters { length: 10 },
            email_domain: "example.com".to_string(),
            country_codes: CountryCode::ALL.to_vec(),
            tiers: SubscriptionTier::ALL.to_vec(),
            value_range: (0.0, 1000.0),
        }
    }
}

/// Generates randomized user records.
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single user.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedUser {
        let name = self.generate_name(rng);
        // Email is always derived from the name with the configured domain
        let email = format!("{name}@{}", self.config.email_domain);

        let country_code = self.config.country_codes
            [rng.gen_range(0..self.config.country_codes.len())];
        let subscription_tier = self.config.tiers[rng.gen_range(0..self.config.tiers.len())];
        let lifetime_value = self.generate_lifetime_value(rng);

        GeneratedUser {
            name,
            email,
            country_code,
            subscription_tier,
            lifetime_value,
        }
    }

    /// Generates multiple users.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedUser> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Generates a name according to the configured style.
    fn generate_name(&self, rng: &mut impl Rng) -> String {
        const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

        match &self.config.name_style {
            NameStyle::RandomLetters { length } => (0..*length)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect(),
            NameStyle::Realistic => {
                let first: String = FirstName().fake_with_rng(rng);
                let suffix: u32 = rng.gen_range(0..1000);
                format!("{first}{suffix}")
            }
        }
    }

    /// Generates a lifetime value within the configured range, rounded to cents.
    fn generate_lifetime_value(&self, rng: &mut impl Rng) -> f64 {
        let (min, max) = self.config.value_range;
        let value: f64 = rng.gen_range(min..=max);
        (value * 100.0).round() / 100.0
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_email_derived_from_name() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let user = user_gen.generate(&mut rng);
            assert_eq!(user.email, format!("{}@example.com", user.name));
        }
    }

    #[test]
    fn test_default_names_are_ten_letters() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let user = user_gen.generate(&mut rng);
            assert_eq!(user.name.len(), 10);
            assert!(user.name.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_fields_within_fixed_sets() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let user = user_gen.generate(&mut rng);
            assert!(CountryCode::ALL.contains(&user.country_code));
            assert!(SubscriptionTier::ALL.contains(&user.subscription_tier));
        }
    }

    #[test]
    fn test_lifetime_value_range_and_rounding() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();

        for _ in 0..1000 {
            let value = user_gen.generate(&mut rng).lifetime_value;
            assert!((0.0..=1000.0).contains(&value));
            assert_eq!((value * 100.0).round() / 100.0, value);
        }
    }

    #[test]
    fn test_realistic_names_keep_email_invariant() {
        let user_gen = UserGenerator::with_config(UserGenConfig {
            name_style: NameStyle::Realistic,
            ..UserGenConfig::default()
        });
        let mut rng = rand::thread_rng();

        for _ in 0..20 {
            let user = user_gen.generate(&mut rng);
            assert!(!user.name.is_empty());
            assert_eq!(user.email, format!("{}@example.com", user.name));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let user_gen = UserGenerator::new();
        let a = user_gen.generate_batch(5, &mut StdRng::seed_from_u64(42));
        let b = user_gen.generate_batch(5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_batch_count() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let users = user_gen.generate_batch(10, &mut rng);
        assert_eq!(users.len(), 10);
    }
}

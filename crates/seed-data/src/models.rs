//! Domain enums matching the `users` table columns.

use serde::{Deserialize, Serialize};

/// Country codes the seeder draws from, matching the `country_code` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountryCode {
    Us,
    Ca,
    Gb,
    Au,
}

impl CountryCode {
    /// All country codes, in selection order.
    pub const ALL: [CountryCode; 4] = [
        CountryCode::Us,
        CountryCode::Ca,
        CountryCode::Gb,
        CountryCode::Au,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Ca => "CA",
            CountryCode::Gb => "GB",
            CountryCode::Au => "AU",
        }
    }
}

/// Subscription tiers, matching the `subscription_tier` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionTier {
    Free,
    Premium,
    Enterprise,
}

impl SubscriptionTier {
    /// All subscription tiers, in selection order.
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Premium,
        SubscriptionTier::Enterprise,
    ];

    /// Returns the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Premium => "premium",
            SubscriptionTier::Enterprise => "enterprise",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_strings() {
        let strs: Vec<&str> = CountryCode::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(strs, vec!["US", "CA", "GB", "AU"]);
    }

    #[test]
    fn test_tier_strings() {
        let strs: Vec<&str> = SubscriptionTier::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(strs, vec!["free", "premium", "enterprise"]);
    }
}

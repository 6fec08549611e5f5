use serde::{Deserialize, Serialize};

/// Feature flags handed to the product surface by the embedding host.
///
/// Every field defaults to `false`, so a host that supplies no flags at all
/// gets the plain surface. New toggles are added as fields here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Show the per-product rating on each card
    pub show_ratings: bool,
}

impl FeatureFlags {
    pub fn with_ratings(mut self, show: bool) -> Self {
        self.show_ratings = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_flags_default_to_off() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
        assert!(!flags.show_ratings);
    }

    #[test]
    fn test_with_ratings() {
        let flags = FeatureFlags::default().with_ratings(true);
        assert!(flags.show_ratings);
    }
}

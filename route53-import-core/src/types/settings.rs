//! Runtime knobs of the import pipeline

use std::time::Duration;

/// Default pause after each successful commit.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);
/// Default number of hosted zones requested per lookup.
pub const DEFAULT_ZONE_LOOKUP_LIMIT: u32 = 2;

/// Import pipeline settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    /// Pause after each successful commit. No status polling happens during it.
    pub settle_delay: Duration,
    /// `maxitems` of the hosted zone lookup.
    pub zone_lookup_limit: u32,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            zone_lookup_limit: DEFAULT_ZONE_LOOKUP_LIMIT,
        }
    }
}

//! Endpoint, currency and timing settings for the board.

use std::time::Duration;

use crate::asset::Asset;
use crate::error::BoardError;
use crate::result::Result;

/// Price API queried when no endpoint is given.
pub const DEFAULT_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";
/// Quote currency requested from the API.
pub const DEFAULT_CURRENCY: &str = "usd";
/// Seconds between timer-driven refreshes.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Remote identifiers of the two assets.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetIds {
    /// Identifier used for gold.
    pub gold: String,
    /// Identifier used for silver.
    pub silver: String,
}

impl AssetIds {
    /// Identifier for `asset`.
    pub fn id(&self, asset: Asset) -> &str {
        match asset {
            Asset::Gold => &self.gold,
            Asset::Silver => &self.silver,
        }
    }
}

impl Default for AssetIds {
    fn default() -> Self {
        Self {
            gold: Asset::Gold.default_id().to_string(),
            silver: Asset::Silver.default_id().to_string(),
        }
    }
}

/// Settings used to build the price source and the refresh timer.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Base URL of the price endpoint, without query string.
    pub endpoint: String,
    /// Currency key looked up inside each asset object.
    pub currency: String,
    /// Asset identifiers sent in the `ids` query parameter.
    pub ids: AssetIds,
    /// Period of the refresh timer.
    pub interval: Duration,
    /// Optional HTTP timeout. `None` lets a hung request block its own cycle.
    pub timeout: Option<Duration>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            ids: AssetIds::default(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            timeout: None,
        }
    }
}

impl BoardConfig {
    /// Rejects settings that can never produce a working board.
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(BoardError::Config(format!(
                "endpoint must start with http:// or https://, got: '{}'",
                endpoint
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(BoardError::Config("currency must not be empty".to_string()));
        }
        if self.ids.gold.trim().is_empty() || self.ids.silver.trim().is_empty() {
            return Err(BoardError::Config("asset ids must not be empty".to_string()));
        }
        if self.ids.gold.trim() == self.ids.silver.trim() {
            return Err(BoardError::Config(format!(
                "gold and silver ids must differ, both are '{}'",
                self.ids.gold
            )));
        }
        if self.interval.is_zero() {
            return Err(BoardError::Config("refresh interval must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interval, Duration::from_secs(60));
        assert_eq!(config.ids.id(Asset::Gold), "pax-gold");
        assert_eq!(config.ids.id(Asset::Silver), "kinesis-silver");
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = BoardConfig {
            endpoint: "ftp://prices.example".to_string(),
            ..BoardConfig::default()
        };
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }

    #[test]
    fn rejects_zero_interval() {
        let config = BoardConfig {
            interval: Duration::ZERO,
            ..BoardConfig::default()
        };
        assert!(matches!(config.validate(), Err(BoardError::Config(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let config = BoardConfig {
            ids: AssetIds {
                gold: "pax-gold".to_string(),
                silver: "pax-gold".to_string(),
            },
            ..BoardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

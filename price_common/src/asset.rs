//! The two tracked assets and the per-asset status flag.

use strum_macros::{Display, EnumIter};

/// Asset shown on the board.
///
/// Each asset is priced through a spot-proxy token whose remote identifier is
/// configured in [`crate::config::AssetIds`].
#[derive(Debug, Clone, Copy, Display, EnumIter, Hash, Eq, PartialEq)]
pub enum Asset {
    /// Gold, priced via a gold-backed token.
    #[strum(serialize = "GOLD")]
    Gold,
    /// Silver, priced via a silver-backed token.
    #[strum(serialize = "SILVER")]
    Silver,
}

impl Asset {
    /// Remote identifier used when no override is configured.
    pub fn default_id(&self) -> &'static str {
        match self {
            Asset::Gold => "pax-gold",
            Asset::Silver => "kinesis-silver",
        }
    }
}

/// Outcome of the latest refresh attempt as shown next to each price.
#[derive(Debug, Clone, Copy, Display, Hash, Eq, PartialEq)]
pub enum Status {
    /// The last attempt completed with a decodable response.
    #[strum(serialize = "OK")]
    Ok,
    /// The last attempt failed; the price text is from an earlier cycle.
    #[strum(serialize = "Error")]
    Error,
}

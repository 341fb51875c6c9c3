//! Price readings and the typed view of the API response.
//!
//! The API answers with a JSON object keyed by asset id, each holding an object
//! keyed by currency:
//!
//! ```json
//! {"pax-gold": {"usd": 2345.6}, "kinesis-silver": {"usd": 29.1}}
//! ```
//!
//! A missing asset, a missing currency key or a value that is not a
//! non-negative number all decode to "no data" for that asset. Only a body that
//! is not a JSON object fails the whole response.
use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Local};
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Number, Value};
use strum::IntoEnumIterator;

use crate::asset::Asset;
use crate::config::AssetIds;
use crate::format::format_price;
use crate::result::Result;

/// Body of the price endpoint: asset id to per-currency quotes.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct SimplePriceBody(HashMap<String, AssetQuotes>);

/// Quotes of one asset. Anything other than an object is kept for logging.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AssetQuotes {
    Currencies(HashMap<String, QuoteValue>),
    Unusable(Value),
}

/// A single currency quote.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuoteValue {
    Number(Number),
    Unusable(Value),
}

/// One asset's price as observed by a completed fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceReading {
    /// Asset the reading belongs to.
    pub asset: Asset,
    /// Non-negative price, or `None` when the response had no data for the asset.
    pub value: Option<Decimal>,
    /// Wall-clock time at which the response was processed.
    pub observed_at: DateTime<Local>,
}

impl PriceReading {
    /// Text for the price slot.
    pub fn formatted(&self) -> String {
        format_price(self.value)
    }
}

/// Per-asset values decoded from one API response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceResponse {
    /// Gold price, if present.
    pub gold: Option<Decimal>,
    /// Silver price, if present.
    pub silver: Option<Decimal>,
}

impl PriceResponse {
    /// Value for `asset`.
    pub fn value(&self, asset: Asset) -> Option<Decimal> {
        match asset {
            Asset::Gold => self.gold,
            Asset::Silver => self.silver,
        }
    }

    /// Decodes a response body, looking up `currency` under each configured id.
    pub fn from_json(body: &str, ids: &AssetIds, currency: &str) -> Result<Self> {
        let body: SimplePriceBody = serde_json::from_str(body)?;
        let lookup = |asset: Asset| -> Option<Decimal> {
            let id = ids.id(asset);
            let quote = match body.0.get(id)? {
                AssetQuotes::Currencies(quotes) => quotes.get(currency)?,
                AssetQuotes::Unusable(value) => {
                    warn!("Ignoring unusable entry for '{}': {}", id, value);
                    return None;
                }
            };
            match quote {
                QuoteValue::Number(number) => {
                    let amount = decimal_from_number(number);
                    if amount.is_none() {
                        warn!("Ignoring {} value for '{}': {}", currency, id, number);
                    }
                    amount
                }
                QuoteValue::Unusable(value) => {
                    warn!("Ignoring non-numeric {} value for '{}': {}", currency, id, value);
                    None
                }
            }
        };
        Ok(Self {
            gold: lookup(Asset::Gold),
            silver: lookup(Asset::Silver),
        })
    }

    /// Builds both readings stamped with the same `observed_at`.
    pub fn readings(&self, observed_at: DateTime<Local>) -> Vec<PriceReading> {
        Asset::iter()
            .map(|asset| PriceReading {
                asset,
                value: self.value(asset),
                observed_at,
            })
            .collect()
    }
}

fn decimal_from_number(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    let amount = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()?;
    (!amount.is_sign_negative()).then_some(amount)
}

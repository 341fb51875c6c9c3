//! One refresh cycle: fetch, format, publish.
//!
//! `PriceRefresher::refresh` never fails. On a decodable response both assets
//! are published together with a shared timestamp and an `OK` status; on any
//! transport or decode failure only the status slots change to `Error`, and the
//! prices and timestamps already on display are left untouched.
//!
//! Cycles may overlap. Each cycle hands its writes to the sink as one batch,
//! and change detection plus the batch run under a publish lock, so a
//! gold/silver pair is never interleaved with another cycle's pair; between
//! cycles the last one to finish wins.
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use log::{debug, info, warn};

use crate::asset::{Asset, Status};
use crate::display::{DisplaySink, SlotUpdate};
use crate::format::format_updated;
use crate::reading::PriceReading;
use crate::source::PriceSource;

/// Completion signal of a refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Readings for both assets were published.
    Published,
    /// The fetch failed and only the status slots were updated.
    Failed,
}

/// Fetches prices from a `PriceSource` and publishes them to a `DisplaySink`.
pub struct PriceRefresher {
    source: Arc<dyn PriceSource>,
    sink: Arc<dyn DisplaySink>,
    publish_lock: Mutex<()>,
}

impl PriceRefresher {
    /// Create a new refresher over `source` and `sink`.
    pub fn new(source: Arc<dyn PriceSource>, sink: Arc<dyn DisplaySink>) -> Self {
        Self {
            source,
            sink,
            publish_lock: Mutex::new(()),
        }
    }

    /// Runs one cycle on the calling thread.
    pub fn refresh(&self) -> RefreshOutcome {
        match self.source.fetch() {
            Ok(response) => {
                let readings = response.readings(Local::now());
                self.publish(&readings);
                RefreshOutcome::Published
            }
            Err(e) => {
                warn!("Price refresh failed: {}", e);
                self.publish_failure();
                RefreshOutcome::Failed
            }
        }
    }

    fn publish(&self, readings: &[PriceReading]) {
        let _guard = self.publish_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut updates = Vec::with_capacity(readings.len() * 4);
        for reading in readings {
            let text = reading.formatted();
            let changed = self.sink.rendered_price(reading.asset).as_deref() != Some(text.as_str());

            updates.push(SlotUpdate::Price(reading.asset, text.clone()));
            updates.push(SlotUpdate::Updated(
                reading.asset,
                format_updated(&reading.observed_at),
            ));
            updates.push(SlotUpdate::Status(reading.asset, Status::Ok));
            if changed {
                debug!("{} changed to {}", reading.asset, text);
                updates.push(SlotUpdate::Pulse(reading.asset));
            }
        }
        self.sink.apply(&updates);
        info!(
            "Published prices: {}",
            readings
                .iter()
                .map(|r| format!("{}={}", r.asset, r.formatted()))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    fn publish_failure(&self) {
        let _guard = self.publish_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.sink.apply(&[
            SlotUpdate::Status(Asset::Gold, Status::Error),
            SlotUpdate::Status(Asset::Silver, Status::Error),
        ]);
    }
}

//! The display surface the refresher writes into.
//!
//! A `DisplaySink` exposes one slot per field (price text, "last updated" text
//! and status for each asset), a pulse trigger, and a single read used for
//! change detection: the price text currently rendered for an asset.
//!
//! A refresh cycle hands all of its writes to [`DisplaySink::apply`] in one
//! call. Implementations apply the batch under their own lock, so an observer
//! reading the sink sees either the previous gold/silver pair or the new one,
//! never a mix. The per-slot setters are single-update batches.
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::asset::{Asset, Status};

/// One write to a display slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotUpdate {
    /// Price text for an asset.
    Price(Asset, String),
    /// "Last updated" text for an asset.
    Updated(Asset, String),
    /// Status flag for an asset.
    Status(Asset, Status),
    /// Transient highlight on an asset's container.
    Pulse(Asset),
}

/// Named display slots written by the refresher.
pub trait DisplaySink: Send + Sync {
    /// Applies `updates` as one indivisible render.
    fn apply(&self, updates: &[SlotUpdate]);

    /// Price text currently rendered for `asset`, if any was set.
    fn rendered_price(&self, asset: Asset) -> Option<String>;

    /// Sets the price text for `asset`.
    fn set_price_text(&self, asset: Asset, text: &str) {
        self.apply(&[SlotUpdate::Price(asset, text.to_string())]);
    }

    /// Sets the "last updated" text for `asset`.
    fn set_updated_text(&self, asset: Asset, text: &str) {
        self.apply(&[SlotUpdate::Updated(asset, text.to_string())]);
    }

    /// Sets the status flag for `asset`.
    fn set_status(&self, asset: Asset, status: Status) {
        self.apply(&[SlotUpdate::Status(asset, status)]);
    }

    /// Triggers a transient highlight on the container of `asset`.
    fn pulse(&self, asset: Asset) {
        self.apply(&[SlotUpdate::Pulse(asset)]);
    }
}

/// Rendered content of one asset's slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    /// Price text, `None` until the first successful cycle.
    pub price_text: Option<String>,
    /// "Last updated" text.
    pub updated_text: Option<String>,
    /// Status flag of the latest attempt.
    pub status: Option<Status>,
}

/// Rendered content of the whole board.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    /// Gold slots.
    pub gold: SlotState,
    /// Silver slots.
    pub silver: SlotState,
}

impl DisplayState {
    /// Slots of `asset`.
    pub fn slot(&self, asset: Asset) -> &SlotState {
        match asset {
            Asset::Gold => &self.gold,
            Asset::Silver => &self.silver,
        }
    }

    /// Mutable slots of `asset`.
    pub fn slot_mut(&mut self, asset: Asset) -> &mut SlotState {
        match asset {
            Asset::Gold => &mut self.gold,
            Asset::Silver => &mut self.silver,
        }
    }

    /// Writes one update into the slots. Pulses carry no state and are ignored.
    pub fn apply(&mut self, update: &SlotUpdate) {
        match update {
            SlotUpdate::Price(asset, text) => self.slot_mut(*asset).price_text = Some(text.clone()),
            SlotUpdate::Updated(asset, text) => {
                self.slot_mut(*asset).updated_text = Some(text.clone())
            }
            SlotUpdate::Status(asset, status) => self.slot_mut(*asset).status = Some(*status),
            SlotUpdate::Pulse(_) => {}
        }
    }
}

#[derive(Default)]
struct Recording {
    state: DisplayState,
    batches: Vec<Vec<SlotUpdate>>,
}

/// In-memory sink that renders into a `DisplayState` and records every batch.
#[derive(Default)]
pub struct RecordingSink {
    inner: Mutex<Recording>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink whose price slots already show the given texts.
    pub fn with_prices(gold: &str, silver: &str) -> Self {
        let sink = Self::new();
        {
            let mut inner = sink.lock();
            inner.state.gold.price_text = Some(gold.to_string());
            inner.state.silver.price_text = Some(silver.to_string());
        }
        sink
    }

    /// Snapshot of the rendered state.
    pub fn state(&self) -> DisplayState {
        self.lock().state.clone()
    }

    /// Every batch applied so far, in order.
    pub fn batches(&self) -> Vec<Vec<SlotUpdate>> {
        self.lock().batches.clone()
    }

    /// Every update applied so far, flattened across batches.
    pub fn updates(&self) -> Vec<SlotUpdate> {
        self.lock().batches.iter().flatten().cloned().collect()
    }

    /// Number of pulses triggered for `asset`.
    pub fn pulses(&self, asset: Asset) -> usize {
        self.lock()
            .batches
            .iter()
            .flatten()
            .filter(|update| **update == SlotUpdate::Pulse(asset))
            .count()
    }

    /// Forgets recorded batches, keeping the rendered state.
    pub fn clear_batches(&self) {
        self.lock().batches.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisplaySink for RecordingSink {
    fn apply(&self, updates: &[SlotUpdate]) {
        let mut inner = self.lock();
        for update in updates {
            inner.state.apply(update);
        }
        inner.batches.push(updates.to_vec());
    }

    fn rendered_price(&self, asset: Asset) -> Option<String> {
        self.lock().state.slot(asset).price_text.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_and_renders_state() {
        let sink = RecordingSink::new();
        sink.set_price_text(Asset::Gold, "1,234.56");
        sink.set_status(Asset::Silver, Status::Error);
        sink.pulse(Asset::Gold);

        assert_eq!(sink.rendered_price(Asset::Gold).as_deref(), Some("1,234.56"));
        assert_eq!(sink.rendered_price(Asset::Silver), None);
        assert_eq!(sink.state().silver.status, Some(Status::Error));
        assert_eq!(sink.pulses(Asset::Gold), 1);
        assert_eq!(sink.pulses(Asset::Silver), 0);
        assert_eq!(sink.batches().len(), 3);
    }

    #[test]
    fn batch_is_recorded_as_one_render() {
        let sink = RecordingSink::new();
        sink.apply(&[
            SlotUpdate::Price(Asset::Gold, "1.00".to_string()),
            SlotUpdate::Price(Asset::Silver, "2.00".to_string()),
            SlotUpdate::Pulse(Asset::Silver),
        ]);

        assert_eq!(sink.batches().len(), 1);
        assert_eq!(sink.updates().len(), 3);
        let state = sink.state();
        assert_eq!(state.gold.price_text.as_deref(), Some("1.00"));
        assert_eq!(state.silver.price_text.as_deref(), Some("2.00"));
    }

    #[test]
    fn preset_prices_are_rendered_without_batches() {
        let sink = RecordingSink::with_prices("2,000.00", "25.00");
        assert_eq!(sink.rendered_price(Asset::Silver).as_deref(), Some("25.00"));
        assert!(sink.batches().is_empty());
    }
}

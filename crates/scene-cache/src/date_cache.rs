//! Fixed-size cache of the date last viewed in each grid cell.
//!
//! Returning to a cell restores the scene the user was looking at, as long
//! as that date is still among the cell's scenes.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use geo_common::GridAddress;
use tracing::debug;

use crate::config::CacheConfig;
use crate::error::{Result, SceneCacheError};
use crate::scene::GridCell;
use crate::stats::CacheStats;

/// Ages above this trigger a rebase.
const AGE_HIGH_WATER: i64 = 1 << 40;

/// Amount subtracted from every age on a rebase.
const AGE_REBASE: i64 = 1 << 39;

#[derive(Debug, Clone, Copy)]
struct Entry {
    address: GridAddress,
    date: NaiveDate,
    age: i64,
}

/// Least-recently-touched cache from grid cell to scene date.
///
/// The slot array never grows or shrinks. Every insert or refresh stamps
/// the slot with a rising clock; a full cache replaces the slot with the
/// lowest stamp.
#[derive(Debug)]
pub struct DateCache {
    slots: Vec<Option<Entry>>,
    clock: i64,
    high_water: i64,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl DateCache {
    /// Create a cache with room for `capacity` cells (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            clock: 0,
            high_water: AGE_HIGH_WATER,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Create a cache sized by `config`, rejecting unusable settings.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate().map_err(SceneCacheError::InvalidConfig)?;
        Ok(Self::new(config.date_cache_capacity))
    }

    /// Remember `date` as the date viewed in `address`.
    pub fn add(&mut self, address: GridAddress, date: NaiveDate) {
        let age = self.tick();

        if let Some(entry) = self.slots.iter_mut().flatten().find(|e| e.address == address) {
            entry.date = date;
            entry.age = age;
            return;
        }

        let victim = self.victim_slot();
        if let Some(old) = self.slots[victim] {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(
                column = old.address.column,
                row = old.address.row,
                age = old.age,
                "Evicting date cache entry"
            );
        }
        self.slots[victim] = Some(Entry { address, date, age });
    }

    /// Index of the cached date among the cell's scenes.
    ///
    /// `None` if the cell is not cached or its cached date is no longer in
    /// the cell's scene list.
    pub fn lookup_date(&self, cell: &GridCell) -> Option<usize> {
        let found = self
            .find(cell.address)
            .and_then(|entry| cell.index_of_date(entry.date));

        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Cached date of a cell, without checking any scene list.
    pub fn cached_date(&self, address: GridAddress) -> Option<NaiveDate> {
        self.find(address).map(|entry| entry.date)
    }

    /// Forget one cell. Returns whether it was cached.
    pub fn remove(&mut self, address: GridAddress) -> bool {
        match self
            .slots
            .iter_mut()
            .find(|slot| slot.is_some_and(|e| e.address == address))
        {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Forget every cell, keeping the capacity.
    pub fn flush(&mut self) {
        debug!(entries = self.len(), "Flushing date cache");
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    fn find(&self, address: GridAddress) -> Option<&Entry> {
        self.slots.iter().flatten().find(|e| e.address == address)
    }

    /// Advance the clock, rebasing every age once it passes the high-water
    /// mark. Subtracting the same amount from every age keeps their order.
    fn tick(&mut self) -> i64 {
        self.clock += 1;
        if self.clock > self.high_water {
            let shift = self.high_water.min(AGE_REBASE).max(1);
            for entry in self.slots.iter_mut().flatten() {
                entry.age -= shift;
            }
            self.clock -= shift;
            debug!(shift, clock = self.clock, "Rebased date cache ages");
        }
        self.clock
    }

    /// An empty slot if there is one, otherwise the oldest.
    fn victim_slot(&self) -> usize {
        if let Some(empty) = self.slots.iter().position(Option::is_none) {
            return empty;
        }
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|e| (i, e.age)))
            .min_by_key(|&(_, age)| age)
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

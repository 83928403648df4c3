//! Generation-aged cache of map overlay files.
//!
//! Each redraw ages every entry, then re-adds the files the new view needs,
//! which puts them back at age 0. Age-0 entries make up the current
//! generation: they are what [`MapLayerFileCache::files_to_load`] and
//! [`MapLayerFileCache::cached_data`] report and are never purged.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::config::CacheConfig;
use crate::error::{Result, SceneCacheError};
use crate::stats::CacheStats;

#[derive(Debug)]
struct FileEntry<T> {
    payload: Option<T>,
    age: u32,
}

impl<T> FileEntry<T> {
    fn is_loaded(&self) -> bool {
        self.payload.is_some()
    }
}

/// Overlay payloads keyed by file name.
///
/// Names are kept sorted so reads come back in a stable order.
#[derive(Debug)]
pub struct MapLayerFileCache<T> {
    entries: BTreeMap<String, FileEntry<T>>,
    retain: usize,
    max_age: u32,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<T> MapLayerFileCache<T> {
    /// Keep at least `retain` files once they fall out of use; ages stop
    /// at `max_age`.
    pub fn new(retain: usize, max_age: u32) -> Self {
        Self {
            entries: BTreeMap::new(),
            retain,
            max_age: max_age.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate().map_err(SceneCacheError::InvalidConfig)?;
        Ok(Self::new(config.file_cache_retain, config.file_cache_max_age))
    }

    /// Start a new generation: every entry gets one step older.
    pub fn age(&mut self) {
        for entry in self.entries.values_mut() {
            entry.age = (entry.age + 1).min(self.max_age);
        }
    }

    /// Mark a file as needed by the current generation.
    ///
    /// Returns true if the file still has to be loaded.
    pub fn add_file(&mut self, name: &str) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.age = 0;
                let loaded = entry.is_loaded();
                let counter = if loaded { &self.hits } else { &self.misses };
                counter.fetch_add(1, Ordering::Relaxed);
                !loaded
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                self.entries.insert(
                    name.to_string(),
                    FileEntry {
                        payload: None,
                        age: 0,
                    },
                );
                true
            }
        }
    }

    /// Attach a loaded payload. Returns false if the file is no longer
    /// cached, in which case the payload is dropped.
    pub fn store(&mut self, name: &str, payload: T) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) => {
                entry.payload = Some(payload);
                true
            }
            None => {
                debug!(file = name, "Dropping payload for a purged map layer file");
                false
            }
        }
    }

    /// Forget a file whose load failed, so the next generation asks for it
    /// again.
    pub fn mark_failed(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Drop the oldest files until at most `retain` remain, never touching
    /// the current generation. Returns the number of files dropped.
    pub fn purge(&mut self) -> usize {
        let mut purged = 0;
        while self.entries.len() > self.retain {
            let oldest = self
                .entries
                .iter()
                .filter(|(_, entry)| entry.age > 0)
                .fold(None::<(&String, u32)>, |best, (name, entry)| match best {
                    Some((_, age)) if age >= entry.age => best,
                    _ => Some((name, entry.age)),
                })
                .map(|(name, _)| name.clone());

            let Some(name) = oldest else {
                break;
            };
            self.entries.remove(&name);
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(file = %name, remaining = self.entries.len(), "Purged map layer file");
            purged += 1;
        }
        purged
    }

    /// Files in the current generation that have not been loaded, sorted.
    pub fn files_to_load(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.age == 0 && !entry.is_loaded())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Payloads of the loaded files in the current generation, sorted by
    /// file name.
    pub fn cached_data(&self) -> Vec<&T> {
        self.entries
            .values()
            .filter(|entry| entry.age == 0)
            .filter_map(|entry| entry.payload.as_ref())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries from the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

impl<T> Default for MapLayerFileCache<T> {
    fn default() -> Self {
        let defaults = CacheConfig::default();
        Self::new(defaults.file_cache_retain, defaults.file_cache_max_age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_rejects_zero_max_age() {
        let config = CacheConfig {
            file_cache_max_age: 0,
            ..Default::default()
        };
        assert!(matches!(
            MapLayerFileCache::<String>::from_config(&config),
            Err(SceneCacheError::InvalidConfig(_))
        ));
        assert!(MapLayerFileCache::<String>::from_config(&CacheConfig::default()).is_ok());
    }

    #[test]
    fn test_add_file_reports_needs_load() {
        let mut cache: MapLayerFileCache<String> = MapLayerFileCache::default();
        assert!(cache.add_file("roads.shp"));
        assert!(cache.add_file("roads.shp"));
        assert!(cache.store("roads.shp", "data".to_string()));
        assert!(!cache.add_file("roads.shp"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn test_files_to_load_and_cached_data() {
        let mut cache = MapLayerFileCache::new(4, 100);
        cache.add_file("b");
        cache.add_file("a");
        cache.add_file("c");
        cache.store("c", 3);
        cache.store("a", 1);

        assert_eq!(cache.files_to_load(), vec!["b".to_string()]);
        assert_eq!(cache.cached_data(), vec![&1, &3]);

        // After ageing, nothing belongs to the current generation
        cache.age();
        assert!(cache.files_to_load().is_empty());
        assert!(cache.cached_data().is_empty());

        cache.add_file("c");
        assert_eq!(cache.cached_data(), vec![&3]);
    }

    #[test]
    fn test_age_is_capped() {
        let mut cache: MapLayerFileCache<()> = MapLayerFileCache::new(4, 3);
        cache.add_file("x");
        for _ in 0..10 {
            cache.age();
        }
        assert_eq!(cache.entries["x"].age, 3);
    }

    #[test]
    fn test_purge_removes_oldest_first() {
        let mut cache: MapLayerFileCache<()> = MapLayerFileCache::new(2, 100);
        cache.add_file("old");
        cache.age();
        cache.add_file("middle");
        cache.age();
        cache.add_file("new");
        cache.age();

        assert_eq!(cache.purge(), 1);
        assert!(!cache.contains("old"));
        assert!(cache.contains("middle"));
        assert!(cache.contains("new"));
    }

    #[test]
    fn test_purge_ties_break_in_name_order() {
        let mut cache: MapLayerFileCache<()> = MapLayerFileCache::new(1, 100);
        cache.add_file("b");
        cache.add_file("a");
        cache.age();
        assert_eq!(cache.purge(), 1);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
    }

    #[test]
    fn test_purge_never_drops_current_generation() {
        let mut cache: MapLayerFileCache<()> = MapLayerFileCache::new(2, 100);
        for name in ["a", "b", "c", "d", "e"] {
            cache.add_file(name);
        }
        assert_eq!(cache.purge(), 0);
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn test_mark_failed_requests_again() {
        let mut cache: MapLayerFileCache<()> = MapLayerFileCache::default();
        cache.add_file("rivers");
        assert!(cache.mark_failed("rivers"));
        assert!(!cache.store("rivers", ()));
        assert!(cache.add_file("rivers"));
    }
}

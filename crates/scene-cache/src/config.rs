//! Configuration for the caches.

use serde::{Deserialize, Serialize};

/// Sizes and ageing limits of the caches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Grid cells whose last viewed date is remembered.
    pub date_cache_capacity: usize,

    /// Files the map layer cache keeps once they fall out of use.
    pub file_cache_retain: usize,

    /// Age at which map layer files stop getting older.
    pub file_cache_max_age: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            date_cache_capacity: 10,
            file_cache_retain: 4,
            file_cache_max_age: 100,
        }
    }
}

impl CacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("DATE_CACHE_CAPACITY") {
            if let Ok(capacity) = val.parse() {
                config.date_cache_capacity = capacity;
            }
        }

        if let Ok(val) = std::env::var("FILE_CACHE_RETAIN") {
            if let Ok(retain) = val.parse() {
                config.file_cache_retain = retain;
            }
        }

        if let Ok(val) = std::env::var("FILE_CACHE_MAX_AGE") {
            if let Ok(age) = val.parse() {
                config.file_cache_max_age = age;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.date_cache_capacity == 0 {
            return Err("date_cache_capacity must be > 0".to_string());
        }

        if self.file_cache_max_age == 0 {
            return Err("file_cache_max_age must be > 0".to_string());
        }

        Ok(())
    }
}

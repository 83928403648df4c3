//! Caches and scene lists keyed by grid address.
//!
//! - [`DateCache`]: remembers the date last viewed in each grid cell
//! - [`MapLayerFileCache`]: generation-aged overlay payloads keyed by file name
//! - [`CompositeSceneList`]: keeps a merged scene list in step with its
//!   component lists
//!
//! Nothing here locks internally. Wrap an instance in a `Mutex` to share it
//! between threads.

pub mod combined;
pub mod config;
pub mod date_cache;
pub mod error;
pub mod file_cache;
pub mod scene;
pub mod scene_list;
pub mod stats;

pub use combined::{CombinedEntry, CombinedSceneList, CompositeSceneList};
pub use config::CacheConfig;
pub use date_cache::DateCache;
pub use error::{Result, SceneCacheError};
pub use file_cache::MapLayerFileCache;
pub use scene::{GridCell, Scene};
pub use scene_list::{ListEvent, SceneList};
pub use stats::CacheStats;

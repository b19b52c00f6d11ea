// SPDX-License-Identifier: MPL-2.0
//! Decoding gallery images and keeping recently used ones in memory.
//!
//! Decoding runs on tokio's blocking pool so the UI thread never waits on
//! disk or codec work. Decoded images are kept in an LRU cache keyed by
//! source, so an image preloaded at startup opens in the lightbox at once.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use lru::LruCache;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Reads and decodes the image at `path` into RGBA pixels.
pub fn decode(path: &Path) -> Result<LoadedImage> {
    let bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(LoadedImage {
        handle: image::Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}

/// Decodes `source` on the blocking pool.
pub async fn load(source: String) -> Result<LoadedImage> {
    tokio::task::spawn_blocking(move || decode(Path::new(&source)))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Hit/miss counters of a [`PreloadCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
}

/// LRU cache of decoded images keyed by source.
pub struct PreloadCache {
    cache: LruCache<String, LoadedImage>,
    enabled: bool,
    stats: CacheStats,
}

impl std::fmt::Debug for PreloadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreloadCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("enabled", &self.enabled)
            .field("stats", &self.stats)
            .finish()
    }
}

impl PreloadCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize, enabled: bool) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            enabled,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Stores a decoded image, evicting the least recently used one when full.
    pub fn insert(&mut self, source: String, image: LoadedImage) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some((evicted, _)) = self.cache.push(source, image) {
            tracing::trace!(source = %evicted, "evicted from preload cache");
        }
        self.stats.insertions += 1;
        true
    }

    /// Looks up `source`, marking it as recently used.
    pub fn get(&mut self, source: &str) -> Option<LoadedImage> {
        if !self.enabled {
            return None;
        }
        match self.cache.get(source) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.enabled && self.cache.contains(source)
    }

    /// Sources of `wanted` that are not cached yet, in order, capped at the cache capacity.
    #[must_use]
    pub fn pending(&self, wanted: &[String]) -> Vec<String> {
        if !self.enabled {
            return Vec::new();
        }
        wanted
            .iter()
            .filter(|source| !self.cache.contains(source.as_str()))
            .take(self.cache.cap().get())
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn pixel() -> LoadedImage {
        LoadedImage {
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
        }
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn decode_reads_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        write_png(&path, 3, 2);

        let loaded = decode(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
    }

    #[test]
    fn decode_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            decode(&dir.path().join("missing.png")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn decode_garbage_is_image_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"not an image").unwrap();
        assert!(matches!(decode(&path), Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn load_decodes_off_thread() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("async.png");
        write_png(&path, 4, 4);

        let loaded = load(path.to_string_lossy().into_owned()).await.unwrap();
        assert_eq!(loaded.width, 4);
    }

    #[test]
    fn cache_evicts_least_recently_used() {
        let mut cache = PreloadCache::new(2, true);
        cache.insert("a".into(), pixel());
        cache.insert("b".into(), pixel());
        let _ = cache.get("a");
        cache.insert("c".into(), pixel());

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn cache_counts_hits_and_misses() {
        let mut cache = PreloadCache::new(4, true);
        cache.insert("a".into(), pixel());
        assert!(cache.get("a").is_some());
        assert!(cache.get("z").is_none());
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                insertions: 1
            }
        );
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let mut cache = PreloadCache::new(4, false);
        assert!(!cache.insert("a".into(), pixel()));
        assert!(cache.get("a").is_none());
        assert!(cache.pending(&["a".to_string()]).is_empty());
    }

    #[test]
    fn pending_skips_cached_and_respects_capacity() {
        let mut cache = PreloadCache::new(2, true);
        cache.insert("a".into(), pixel());
        let wanted: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(cache.pending(&wanted), ["b", "c"]);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of downloaded photo bytes.
//!
//! Photos arrive as raw bytes from the service and are handed to the
//! image widget as [`iced::widget::image::Handle`]s. The cache bounds
//! memory with an LRU policy and tracks which downloads are in flight
//! or have failed, so the update loop schedules each URL at most once.

use crate::catalog::model::PhotoId;
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Decoded-photo slots kept alive; enough for the gallery grid plus
/// the lightbox and Home surfaces without rebuilding on every filter
/// change.
const CACHE_CAPACITY: usize = 96;

pub struct PhotoCache {
    handles: LruCache<PhotoId, image::Handle>,
    pending: HashSet<PhotoId>,
    failed: HashSet<PhotoId>,
}

impl Default for PhotoCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoCache {
    pub fn new() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least one");
        Self {
            handles: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// The cached handle for a photo, if its bytes have arrived.
    pub fn handle(&self, id: &PhotoId) -> Option<image::Handle> {
        self.handles.peek(id).cloned()
    }

    pub fn is_pending(&self, id: &PhotoId) -> bool {
        self.pending.contains(id)
    }

    pub fn has_failed(&self, id: &PhotoId) -> bool {
        self.failed.contains(id)
    }

    /// True when a download should be scheduled for this photo: not
    /// cached, not in flight, and not already failed this session.
    pub fn needs_fetch(&self, id: &PhotoId) -> bool {
        !self.pending.contains(id)
            && !self.failed.contains(id)
            && !self.handles.contains(id)
    }

    /// Marks a download as scheduled.
    pub fn mark_pending(&mut self, id: PhotoId) {
        self.pending.insert(id);
    }

    /// Stores downloaded bytes as an image handle.
    pub fn insert(&mut self, id: PhotoId, bytes: Vec<u8>) {
        self.pending.remove(&id);
        self.failed.remove(&id);
        self.handles.put(id, image::Handle::from_bytes(bytes));
    }

    /// Records a failed download so it is not retried this session.
    pub fn mark_failed(&mut self, id: PhotoId) {
        self.pending.remove(&id);
        self.failed.insert(id);
    }

    /// Drops everything; used when the catalog is replaced, since photo
    /// ids are only unique within one catalog.
    pub fn clear(&mut self) {
        self.handles.clear();
        self.pending.clear();
        self.failed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> PhotoId {
        PhotoId::new(name)
    }

    #[test]
    fn fresh_photo_needs_fetch_until_resolved() {
        let mut cache = PhotoCache::new();
        assert!(cache.needs_fetch(&id("a")));

        cache.mark_pending(id("a"));
        assert!(!cache.needs_fetch(&id("a")));
        assert!(cache.is_pending(&id("a")));

        cache.insert(id("a"), vec![0xFF, 0xD8]);
        assert!(!cache.needs_fetch(&id("a")));
        assert!(!cache.is_pending(&id("a")));
        assert!(cache.handle(&id("a")).is_some());
    }

    #[test]
    fn failed_downloads_are_not_retried() {
        let mut cache = PhotoCache::new();
        cache.mark_pending(id("a"));
        cache.mark_failed(id("a"));

        assert!(!cache.needs_fetch(&id("a")));
        assert!(cache.has_failed(&id("a")));
        assert!(cache.handle(&id("a")).is_none());
    }

    #[test]
    fn insert_clears_a_previous_failure() {
        let mut cache = PhotoCache::new();
        cache.mark_failed(id("a"));

        cache.insert(id("a"), vec![1, 2, 3]);

        assert!(!cache.has_failed(&id("a")));
        assert!(cache.handle(&id("a")).is_some());
    }

    #[test]
    fn capacity_evicts_least_recently_used() {
        let mut cache = PhotoCache::with_capacity(2);
        cache.insert(id("a"), vec![1]);
        cache.insert(id("b"), vec![2]);
        cache.insert(id("c"), vec![3]);

        assert!(cache.handle(&id("a")).is_none());
        assert!(cache.handle(&id("b")).is_some());
        assert!(cache.handle(&id("c")).is_some());
        // The evicted photo becomes fetchable again.
        assert!(cache.needs_fetch(&id("a")));
    }

    #[test]
    fn clear_resets_all_bookkeeping() {
        let mut cache = PhotoCache::new();
        cache.insert(id("a"), vec![1]);
        cache.mark_pending(id("b"));
        cache.mark_failed(id("c"));

        cache.clear();

        assert!(cache.needs_fetch(&id("a")));
        assert!(cache.needs_fetch(&id("b")));
        assert!(cache.needs_fetch(&id("c")));
    }
}

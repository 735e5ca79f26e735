// SPDX-License-Identifier: MPL-2.0
//! Read-only selection queries over a catalog snapshot.
//!
//! Everything here is a pure read: nothing mutates the photo list, and
//! the randomized family goes through an injectable RNG so tests can
//! pin exact selections. The aspect-ratio thresholds implement the
//! landscape bias for large-format placements (heroes tolerate
//! moderately wide photos, backgrounds want decidedly wide ones), and
//! every randomized query degrades to a plain uniform pick (or `None`)
//! rather than failing when the biased subset is empty.

use crate::catalog::model::{Photo, PhotoId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Minimum aspect ratio for a photo to qualify as hero material.
pub const HERO_LANDSCAPE_THRESHOLD: f64 = 1.3;
/// Minimum aspect ratio for a photo to qualify as background material.
pub const BACKGROUND_LANDSCAPE_THRESHOLD: f64 = 1.5;

/// Photos whose category equals `category`, in catalog order, truncated
/// to `limit` when given and positive.
pub fn photos_by_category<'a>(
    photos: &'a [Photo],
    category: &str,
    limit: Option<usize>,
) -> Vec<&'a Photo> {
    let mut matching: Vec<&Photo> = photos.iter().filter(|p| p.category == category).collect();
    if let Some(limit) = limit {
        if limit > 0 {
            matching.truncate(limit);
        }
    }
    matching
}

/// Exact id lookup.
pub fn photo_by_id<'a>(photos: &'a [Photo], id: &PhotoId) -> Option<&'a Photo> {
    photos.iter().find(|p| &p.id == id)
}

fn category_pool<'a>(photos: &'a [Photo], category: Option<&str>) -> Vec<&'a Photo> {
    match category {
        Some(category) => photos.iter().filter(|p| p.category == category).collect(),
        None => photos.iter().collect(),
    }
}

/// The randomized selection queries, parameterized over the RNG so
/// callers (and tests) decide where entropy comes from.
#[derive(Debug)]
pub struct SelectionEngine<R: Rng = StdRng> {
    rng: R,
}

impl SelectionEngine<StdRng> {
    /// Engine backed by the operating system's entropy source.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SelectionEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SelectionEngine<R> {
    /// Engine backed by a caller-provided RNG (seeded in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn pick<'a>(&mut self, pool: &[&'a Photo]) -> Option<&'a Photo> {
        if pool.is_empty() {
            return None;
        }
        Some(pool[self.rng.random_range(0..pool.len())])
    }

    /// Uniform pick from the category pool, or the whole catalog when
    /// no category is given. `None` when the pool is empty.
    pub fn random_photo<'a>(
        &mut self,
        photos: &'a [Photo],
        category: Option<&str>,
    ) -> Option<&'a Photo> {
        let pool = category_pool(photos, category);
        self.pick(&pool)
    }

    /// Banner pick: prefers photos wider than the hero threshold, falls
    /// back to the whole pool when none qualify. `None` only when the
    /// pool itself is empty.
    pub fn hero_photo<'a>(
        &mut self,
        photos: &'a [Photo],
        category: Option<&str>,
    ) -> Option<&'a Photo> {
        let pool = category_pool(photos, category);
        let landscape: Vec<&Photo> = pool
            .iter()
            .copied()
            .filter(|p| p.aspect_ratio > HERO_LANDSCAPE_THRESHOLD)
            .collect();

        if landscape.is_empty() {
            self.pick(&pool)
        } else {
            self.pick(&landscape)
        }
    }

    /// Backdrop pick: with `prefer_landscape`, restricts to photos wider
    /// than the background threshold when that subset is non-empty;
    /// otherwise (or when the preference is off) picks from the pool.
    pub fn background_photo<'a>(
        &mut self,
        photos: &'a [Photo],
        category: Option<&str>,
        prefer_landscape: bool,
    ) -> Option<&'a Photo> {
        let pool = category_pool(photos, category);

        if prefer_landscape {
            let wide: Vec<&Photo> = pool
                .iter()
                .copied()
                .filter(|p| p.aspect_ratio > BACKGROUND_LANDSCAPE_THRESHOLD)
                .collect();
            if !wide.is_empty() {
                return self.pick(&wide);
            }
        }

        self.pick(&pool)
    }

    /// A random permutation of the category pool truncated to `count`,
    /// sampled without replacement. Asking for more photos than the
    /// pool holds returns the whole pool, shuffled.
    pub fn card_photos<'a>(
        &mut self,
        photos: &'a [Photo],
        category: &str,
        count: usize,
    ) -> Vec<&'a Photo> {
        let mut pool = category_pool(photos, Some(category));
        pool.shuffle(&mut self.rng);
        pool.truncate(count);
        pool
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Canonical photo model and catalog normalization.
//!
//! The photo service reports photos with service-relative URLs and raw
//! pixel dimensions. Normalization resolves every URL against the
//! service base, computes the aspect ratio once, and validates each
//! entry against the category list the service declares. Consumers only
//! ever see the normalized [`Photo`]; the wire types stay private to
//! the catalog layer.

use serde::Deserialize;

/// Opaque photo identifier, unique within one fetched catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A photo entry as received from the service, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPhoto {
    pub id: String,
    pub url: String,
    pub category: String,
    pub description: String,
    pub width: u32,
    pub height: u32,
}

/// The catalog response body: photos plus the category list exactly as
/// the service declares it (never inferred from the photos).
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalog {
    pub photos: Vec<RawPhoto>,
    pub categories: Vec<String>,
}

/// A normalized photo. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    /// The URL exactly as the service sent it.
    pub relative_url: String,
    /// Absolute URL resolved against the service base.
    pub full_url: String,
    pub category: String,
    /// Free text used as alt text and lightbox caption.
    pub description: String,
    pub width: u32,
    pub height: u32,
    /// `width / height`, computed once here and never recomputed.
    pub aspect_ratio: f64,
}

/// A complete normalized catalog. Replaced wholesale in the store so
/// photos and categories are never observed out of sync.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub photos: Vec<Photo>,
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Resolves a service URL against the base URL.
///
/// URLs that already carry a scheme are returned unchanged, so
/// resolution is idempotent. Relative paths are joined with exactly one
/// slash regardless of how the base and path are written.
pub fn resolve_url(base_url: &str, relative: &str) -> String {
    if relative.starts_with("http://") || relative.starts_with("https://") {
        return relative.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if relative.starts_with('/') {
        format!("{base}{relative}")
    } else {
        format!("{base}/{relative}")
    }
}

/// Normalizes a raw catalog into the canonical model.
///
/// Entries that would violate the model's invariants are dropped rather
/// than failing the whole catalog: a photo with a non-positive
/// dimension has no meaningful aspect ratio, and a photo referencing a
/// category the service did not declare would break the
/// category-membership invariant.
pub fn normalize(raw: RawCatalog, base_url: &str) -> Catalog {
    let categories = raw.categories;
    let photos = raw
        .photos
        .into_iter()
        .filter_map(|photo| {
            if photo.width == 0 || photo.height == 0 {
                eprintln!(
                    "Dropping photo '{}': invalid dimensions {}x{}",
                    photo.id, photo.width, photo.height
                );
                return None;
            }
            if !categories.iter().any(|c| c == &photo.category) {
                eprintln!(
                    "Dropping photo '{}': undeclared category '{}'",
                    photo.id, photo.category
                );
                return None;
            }
            let full_url = resolve_url(base_url, &photo.url);
            Some(Photo {
                id: PhotoId::new(photo.id),
                full_url,
                relative_url: photo.url,
                category: photo.category,
                description: photo.description,
                width: photo.width,
                height: photo.height,
                aspect_ratio: f64::from(photo.width) / f64::from(photo.height),
            })
        })
        .collect();

    Catalog { photos, categories }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_photo(id: &str, url: &str, category: &str, width: u32, height: u32) -> RawPhoto {
        RawPhoto {
            id: id.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            description: format!("photo {id}"),
            width,
            height,
        }
    }

    #[test]
    fn resolve_url_keeps_absolute_urls_unchanged() {
        let absolute = "https://cdn.example/photos/a.jpg";
        assert_eq!(resolve_url("https://img.example", absolute), absolute);
        assert_eq!(
            resolve_url("https://img.example", "http://other.example/b.jpg"),
            "http://other.example/b.jpg"
        );
    }

    #[test]
    fn resolve_url_joins_with_exactly_one_slash() {
        assert_eq!(
            resolve_url("https://img.example", "/x.jpg"),
            "https://img.example/x.jpg"
        );
        assert_eq!(
            resolve_url("https://img.example", "x.jpg"),
            "https://img.example/x.jpg"
        );
        assert_eq!(
            resolve_url("https://img.example/", "/x.jpg"),
            "https://img.example/x.jpg"
        );
    }

    #[test]
    fn resolve_url_is_idempotent() {
        let once = resolve_url("https://img.example", "photos/a.jpg");
        let twice = resolve_url("https://img.example", &once);
        assert_eq!(once, twice);
        assert_eq!(once, resolve_url("https://img.example", "photos/a.jpg"));
    }

    #[test]
    fn normalize_resolves_urls_and_computes_aspect_ratio() {
        let raw = RawCatalog {
            photos: vec![raw_photo("a", "/x.jpg", "events", 800, 400)],
            categories: vec!["events".to_string()],
        };

        let catalog = normalize(raw, "https://img.example");

        assert_eq!(catalog.photos.len(), 1);
        let photo = &catalog.photos[0];
        assert_eq!(photo.full_url, "https://img.example/x.jpg");
        assert_eq!(photo.relative_url, "/x.jpg");
        assert!((photo.aspect_ratio - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_drops_photos_with_invalid_dimensions() {
        let raw = RawCatalog {
            photos: vec![
                raw_photo("good", "/a.jpg", "events", 640, 480),
                raw_photo("bad", "/b.jpg", "events", 0, 480),
            ],
            categories: vec!["events".to_string()],
        };

        let catalog = normalize(raw, "https://img.example");

        assert_eq!(catalog.photos.len(), 1);
        assert_eq!(catalog.photos[0].id, PhotoId::new("good"));
    }

    #[test]
    fn normalize_drops_photos_with_undeclared_category() {
        let raw = RawCatalog {
            photos: vec![
                raw_photo("a", "/a.jpg", "events", 640, 480),
                raw_photo("b", "/b.jpg", "unknown", 640, 480),
            ],
            categories: vec!["events".to_string(), "campus".to_string()],
        };

        let catalog = normalize(raw, "https://img.example");

        assert_eq!(catalog.photos.len(), 1);
        // Category list stays exactly as declared, including unused ones.
        assert_eq!(catalog.categories, vec!["events", "campus"]);
    }

    #[test]
    fn normalize_preserves_service_order() {
        let raw = RawCatalog {
            photos: vec![
                raw_photo("c", "/c.jpg", "events", 100, 100),
                raw_photo("a", "/a.jpg", "events", 100, 100),
                raw_photo("b", "/b.jpg", "events", 100, 100),
            ],
            categories: vec!["events".to_string()],
        };

        let catalog = normalize(raw, "https://img.example");

        let ids: Vec<&str> = catalog.photos.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn aspect_ratio_matches_dimensions_for_all_photos() {
        let raw = RawCatalog {
            photos: vec![
                raw_photo("a", "/a.jpg", "events", 1920, 1080),
                raw_photo("b", "/b.jpg", "events", 1080, 1920),
                raw_photo("c", "/c.jpg", "events", 500, 500),
            ],
            categories: vec!["events".to_string()],
        };

        let catalog = normalize(raw, "https://img.example");

        for photo in &catalog.photos {
            let expected = f64::from(photo.width) / f64::from(photo.height);
            assert!((photo.aspect_ratio - expected).abs() < 1e-12);
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: the state machine behind the gallery surface.
//!
//! The controller owns two pieces of state, the active category filter
//! and the lightbox position, and derives everything else from the
//! store's current photo snapshot each time it is asked. It is in one
//! of two states: *browsing* (lightbox closed) or *viewing* (lightbox
//! open at an index into the currently filtered list). Navigation wraps
//! at both ends, so any non-empty filtered list always yields a valid
//! index.

use crate::catalog::model::{Photo, PhotoId};
use crate::catalog::selection;

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// The active category filter for the gallery surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filter; every photo in the catalog is shown.
    All,
    /// Only photos whose category equals the given name.
    Only(String),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// Parses a service category string, treating the `"all"` sentinel
    /// and the empty string as "no filter".
    pub fn parse(category: &str) -> Self {
        if category.is_empty() || category == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(category.to_string())
        }
    }

    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &photo.category == category,
        }
    }

    /// The category name to scope queries with, `None` when unfiltered.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }
}

/// Formats a service category slug for display: `"marine-life"`
/// becomes `"Marine Life"`.
pub fn display_category_name(category: &str) -> String {
    category
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Direction of lightbox navigation; keyboard arrows and the on-screen
/// controls both map onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Previous,
    Next,
}

/// Everything the lightbox caption needs: the photo under the cursor
/// and its position within the filtered list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxContext<'a> {
    pub photo: &'a Photo,
    /// Zero-based index within the filtered list.
    pub index: usize,
    pub total: usize,
}

/// Category filter plus lightbox position over the store's snapshot.
#[derive(Debug, Default)]
pub struct GalleryController {
    filter: CategoryFilter,
    lightbox: Option<usize>,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// True while the lightbox is open. Keyboard subscriptions are only
    /// active in this state.
    pub fn is_viewing(&self) -> bool {
        self.lightbox.is_some()
    }

    /// The photo list the gallery surface renders: the catalog filtered
    /// by the active category, in catalog order.
    pub fn filtered_photos<'a>(&self, photos: &'a [Photo]) -> Vec<&'a Photo> {
        match &self.filter {
            CategoryFilter::All => photos.iter().collect(),
            CategoryFilter::Only(category) => {
                selection::photos_by_category(photos, category, None)
            }
        }
    }

    /// Activates a category filter.
    ///
    /// If the lightbox is open, its position is re-resolved by photo
    /// identity against the new filtered list; when the displayed photo
    /// does not survive the filter, the lightbox closes.
    pub fn set_filter(&mut self, filter: CategoryFilter, photos: &[Photo]) {
        if filter == self.filter {
            return;
        }

        let open_photo_id: Option<PhotoId> = self
            .lightbox
            .and_then(|index| self.filtered_photos(photos).get(index).map(|p| p.id.clone()));

        self.filter = filter;

        self.lightbox = open_photo_id.and_then(|id| {
            self.filtered_photos(photos)
                .iter()
                .position(|photo| photo.id == id)
        });
    }

    /// Opens the lightbox at the given photo, recording its index
    /// within the filtered list at the moment of opening.
    ///
    /// Returns `false` (and stays in browsing) when the photo is not in
    /// the filtered list.
    pub fn open_at(&mut self, photos: &[Photo], id: &PhotoId) -> bool {
        match self
            .filtered_photos(photos)
            .iter()
            .position(|photo| &photo.id == id)
        {
            Some(index) => {
                self.lightbox = Some(index);
                true
            }
            None => false,
        }
    }

    /// Moves the lightbox one step, wrapping at both ends.
    ///
    /// Returns the new index, or `None` when the lightbox is closed or
    /// the filtered list is empty (in which case it closes).
    pub fn navigate(&mut self, direction: NavigationDirection, photos: &[Photo]) -> Option<usize> {
        let index = self.lightbox?;
        let total = self.filtered_photos(photos).len();
        if total == 0 {
            self.lightbox = None;
            return None;
        }

        // The list may have shrunk under an open lightbox.
        let index = index.min(total - 1);
        let next = match direction {
            NavigationDirection::Previous => {
                if index == 0 {
                    total - 1
                } else {
                    index - 1
                }
            }
            NavigationDirection::Next => {
                if index + 1 >= total {
                    0
                } else {
                    index + 1
                }
            }
        };

        self.lightbox = Some(next);
        Some(next)
    }

    /// Closes the lightbox (explicit control, backdrop click, Escape).
    pub fn close(&mut self) {
        self.lightbox = None;
    }

    /// The caption tuple for the open lightbox, or `None` while
    /// browsing.
    pub fn lightbox_context<'a>(&self, photos: &'a [Photo]) -> Option<LightboxContext<'a>> {
        let index = self.lightbox?;
        let filtered = self.filtered_photos(photos);
        let photo = filtered.get(index)?;
        Some(LightboxContext {
            photo,
            index,
            total: filtered.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{normalize, RawCatalog, RawPhoto};

    fn photos() -> Vec<Photo> {
        let entries = [
            ("a", "events"),
            ("b", "campus"),
            ("c", "events"),
            ("d", "events"),
        ];
        let raw = RawCatalog {
            photos: entries
                .iter()
                .map(|(id, category)| RawPhoto {
                    id: (*id).to_string(),
                    url: format!("/{id}.jpg"),
                    category: (*category).to_string(),
                    description: String::new(),
                    width: 800,
                    height: 600,
                })
                .collect(),
            categories: vec!["events".to_string(), "campus".to_string()],
        };
        normalize(raw, "https://img.example").photos
    }

    #[test]
    fn parse_treats_sentinel_and_empty_as_all() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("events"),
            CategoryFilter::Only("events".to_string())
        );
    }

    #[test]
    fn filter_matches_and_scopes_queries() {
        let photos = photos();
        let all = CategoryFilter::All;
        let events = CategoryFilter::parse("events");

        assert!(all.matches(&photos[1]));
        assert!(events.matches(&photos[0]));
        assert!(!events.matches(&photos[1]));

        assert_eq!(all.as_category(), None);
        assert_eq!(events.as_category(), Some("events"));
    }

    #[test]
    fn display_category_name_title_cases_slugs() {
        assert_eq!(display_category_name("marine-life"), "Marine Life");
        assert_eq!(display_category_name("events"), "Events");
        assert_eq!(display_category_name(""), "");
    }

    #[test]
    fn new_controller_is_browsing_with_no_filter() {
        let controller = GalleryController::new();
        assert_eq!(controller.filter(), &CategoryFilter::All);
        assert!(!controller.is_viewing());
        assert_eq!(controller.filtered_photos(&photos()).len(), 4);
    }

    #[test]
    fn filtered_photos_respects_category() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.set_filter(CategoryFilter::parse("events"), &photos);

        let ids: Vec<&str> = controller
            .filtered_photos(&photos)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c", "d"]);
    }

    #[test]
    fn open_at_records_index_in_filtered_list() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.set_filter(CategoryFilter::parse("events"), &photos);

        assert!(controller.open_at(&photos, &PhotoId::new("c")));
        let context = controller.lightbox_context(&photos).unwrap();
        assert_eq!(context.index, 1);
        assert_eq!(context.total, 3);
        assert_eq!(context.photo.id.as_str(), "c");
    }

    #[test]
    fn open_at_refuses_photo_outside_filter() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.set_filter(CategoryFilter::parse("events"), &photos);

        assert!(!controller.open_at(&photos, &PhotoId::new("b")));
        assert!(!controller.is_viewing());
    }

    #[test]
    fn navigate_previous_wraps_to_last() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.set_filter(CategoryFilter::parse("events"), &photos);
        controller.open_at(&photos, &PhotoId::new("a"));

        let index = controller.navigate(NavigationDirection::Previous, &photos);
        assert_eq!(index, Some(2));
    }

    #[test]
    fn navigate_next_wraps_to_first() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.set_filter(CategoryFilter::parse("events"), &photos);
        controller.open_at(&photos, &PhotoId::new("d"));

        let index = controller.navigate(NavigationDirection::Next, &photos);
        assert_eq!(index, Some(0));
    }

    #[test]
    fn navigating_next_full_cycle_returns_to_start() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.open_at(&photos, &PhotoId::new("b"));
        let start = controller.lightbox_context(&photos).unwrap().index;

        let total = controller.filtered_photos(&photos).len();
        for _ in 0..total {
            controller.navigate(NavigationDirection::Next, &photos);
        }

        assert_eq!(controller.lightbox_context(&photos).unwrap().index, start);
    }

    #[test]
    fn navigate_while_browsing_does_nothing() {
        let photos = photos();
        let mut controller = GalleryController::new();
        assert_eq!(
            controller.navigate(NavigationDirection::Next, &photos),
            None
        );
        assert!(!controller.is_viewing());
    }

    #[test]
    fn filter_change_re_resolves_open_photo_by_identity() {
        let photos = photos();
        let mut controller = GalleryController::new();
        // Open "c" with no filter active; it sits at index 2 of [a b c d].
        controller.open_at(&photos, &PhotoId::new("c"));

        controller.set_filter(CategoryFilter::parse("events"), &photos);

        // "c" survives the filter and is re-resolved to index 1 of [a c d].
        let context = controller.lightbox_context(&photos).unwrap();
        assert_eq!(context.photo.id.as_str(), "c");
        assert_eq!(context.index, 1);
    }

    #[test]
    fn filter_change_closes_lightbox_when_photo_filtered_out() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.open_at(&photos, &PhotoId::new("b"));

        controller.set_filter(CategoryFilter::parse("events"), &photos);

        assert!(!controller.is_viewing());
        assert!(controller.lightbox_context(&photos).is_none());
    }

    #[test]
    fn navigate_over_emptied_list_closes_lightbox() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.open_at(&photos, &PhotoId::new("a"));

        // The catalog was replaced by an empty one while viewing.
        assert_eq!(controller.navigate(NavigationDirection::Next, &[]), None);
        assert!(!controller.is_viewing());
    }

    #[test]
    fn close_returns_to_browsing() {
        let photos = photos();
        let mut controller = GalleryController::new();
        controller.open_at(&photos, &PhotoId::new("a"));
        assert!(controller.is_viewing());

        controller.close();
        assert!(!controller.is_viewing());
        // The filter is unaffected by closing.
        assert_eq!(controller.filter(), &CategoryFilter::All);
    }
}

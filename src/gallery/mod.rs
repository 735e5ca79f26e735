// SPDX-License-Identifier: MPL-2.0
//! Gallery state: category filtering and the lightbox state machine.

mod controller;

pub use controller::{
    display_category_name, CategoryFilter, GalleryController, LightboxContext,
    NavigationDirection, ALL_CATEGORIES,
};

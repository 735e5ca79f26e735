// SPDX-License-Identifier: MPL-2.0
//! Top-level screens of the application.

/// Which screen is active. The lightbox is not a screen of its own; it
/// is gallery state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Gallery,
}

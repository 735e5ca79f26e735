// SPDX-License-Identifier: MPL-2.0
//! `coast_gallery` is a photo-gallery client for the Coastline
//! Education Foundation's hosted photo service, built with the Iced GUI
//! framework.
//!
//! The catalog is fetched exactly once per session, normalized into an
//! in-memory model, and queried by the presentation surfaces through a
//! family of deterministic and randomized selection operations. A small
//! state machine drives category filtering and the keyboard-navigable
//! lightbox.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;

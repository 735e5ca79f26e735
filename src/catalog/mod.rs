// SPDX-License-Identifier: MPL-2.0
//! The photo catalog: fetch, normalization, storage, and selection.
//!
//! The data flows one way: [`fetcher::CatalogFetcher`] performs the
//! single network read and hands a normalized [`model::Catalog`] to the
//! [`store::PhotoStore`], which owns the fetch lifecycle and exposes
//! the snapshot that [`selection`] queries and the gallery read.

pub mod fetcher;
pub mod model;
pub mod selection;
pub mod store;

pub use fetcher::CatalogFetcher;
pub use model::{Catalog, Photo, PhotoId};
pub use store::{FetchOutcome, FetchTicket, PhotoStore};

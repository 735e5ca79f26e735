// SPDX-License-Identifier: MPL-2.0
//! The photo store: single source of truth for the fetched catalog.
//!
//! The store is a plain state machine owned by the application root and
//! mutated only from the update loop, so no locking is involved. Fetch
//! lifecycle is serialized through tickets: [`PhotoStore::begin_fetch`]
//! refuses to start while a fetch is in flight, and a completion is
//! only applied if it carries the ticket of the current fetch. This
//! closes the race where a slow early response could overwrite a newer
//! catalog.

use crate::catalog::model::{Catalog, Photo};
use crate::error::{Error, Result};

/// Proof that a fetch was started; must be handed back with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What applying a fetch result did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A non-empty catalog replaced the previous one.
    Applied,
    /// The fetch succeeded but the catalog contained zero photos.
    AppliedEmpty,
    /// The fetch failed; the previous catalog (if any) was retained.
    Failed,
    /// The result belonged to a superseded fetch and was discarded.
    Stale,
}

/// Holds the normalized catalog and the fetch lifecycle flags.
#[derive(Debug, Default)]
pub struct PhotoStore {
    catalog: Catalog,
    is_loading: bool,
    last_error: Option<Error>,
    generation: u64,
}

impl PhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photos in service order.
    pub fn photos(&self) -> &[Photo] {
        &self.catalog.photos
    }

    /// Categories exactly as declared by the service, in service order.
    pub fn categories(&self) -> &[String] {
        &self.catalog.categories
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// True iff no fetch is in flight, the last fetch did not fail, and
    /// at least one photo is present.
    pub fn is_ready(&self) -> bool {
        !self.is_loading && self.last_error.is_none() && !self.catalog.photos.is_empty()
    }

    /// Starts a fetch, returning the ticket the completion must carry.
    ///
    /// Returns `None` while a fetch is already in flight; callers treat
    /// that as "a refresh is already happening" and do nothing.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.is_loading {
            return None;
        }
        self.generation += 1;
        self.is_loading = true;
        Some(FetchTicket(self.generation))
    }

    /// Applies a fetch completion.
    ///
    /// On success the catalog is replaced wholesale: photos and
    /// categories move in as one value, so readers can never observe
    /// one without the other. On failure the previous catalog is kept
    /// and the error retained for display. Completions from superseded
    /// fetches are discarded.
    pub fn apply_result(&mut self, ticket: FetchTicket, result: Result<Catalog>) -> FetchOutcome {
        if ticket.0 != self.generation || !self.is_loading {
            return FetchOutcome::Stale;
        }
        self.is_loading = false;

        match result {
            Ok(catalog) => {
                let empty = catalog.is_empty();
                self.catalog = catalog;
                self.last_error = None;
                if empty {
                    FetchOutcome::AppliedEmpty
                } else {
                    FetchOutcome::Applied
                }
            }
            Err(error) => {
                self.last_error = Some(error);
                FetchOutcome::Failed
            }
        }
    }
}

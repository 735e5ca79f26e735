// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::model::Catalog;
use crate::catalog::{FetchTicket, PhotoId};
use crate::error::Error;
use crate::ui::gallery_grid;
use crate::ui::home;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update
/// entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The catalog fetch completed (successfully or not).
    CatalogFetched {
        ticket: FetchTicket,
        result: Result<Catalog, Error>,
    },
    /// A single photo download completed.
    PhotoFetched {
        id: PhotoId,
        result: Result<Vec<u8>, Error>,
    },
    Navbar(navbar::Message),
    Home(home::Message),
    Gallery(gallery_grid::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::Message),
    /// Periodic tick driving notification expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo service base URL override (for staging setups).
    pub base_url: Option<String>,
}

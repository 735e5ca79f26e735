// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Contains the main `update` function plus the fetch orchestration:
//! starting the (single, serialized) catalog fetch, applying its
//! outcome, redrawing the Home picks, and scheduling photo downloads
//! for whatever is currently visible.

use super::{App, Message, Screen};
use crate::catalog::selection;
use crate::catalog::store::{FetchOutcome, FetchTicket};
use crate::catalog::{Catalog, PhotoId};
use crate::error::{Error, Result};
use crate::gallery::CategoryFilter;
use crate::ui::notifications::Notification;
use crate::ui::{gallery_grid, home, lightbox, navbar};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::CatalogFetched { ticket, result } => {
            handle_catalog_fetched(app, ticket, result)
        }
        Message::PhotoFetched { id, result } => {
            handle_photo_fetched(app, id, result);
            Task::none()
        }
        Message::Navbar(message) => handle_navbar(app, message),
        Message::Home(home::Message::CardPressed(id)) => {
            app.screen = Screen::Gallery;
            if !app.controller.open_at(app.store.photos(), &id) {
                // The card's photo is outside the current filter; show
                // it in the unfiltered gallery instead of refusing.
                app.controller
                    .set_filter(CategoryFilter::All, app.store.photos());
                app.controller.open_at(app.store.photos(), &id);
            }
            schedule_visible_photos(app)
        }
        Message::Gallery(gallery_grid::Message::CategorySelected(filter)) => {
            app.controller.set_filter(filter, app.store.photos());
            schedule_visible_photos(app)
        }
        Message::Gallery(gallery_grid::Message::PhotoPressed(id)) => {
            app.controller.open_at(app.store.photos(), &id);
            // Covers photos the LRU cache may have evicted since the
            // grid was last scheduled.
            schedule_visible_photos(app)
        }
        Message::Lightbox(lightbox::Message::CloseRequested) => {
            app.controller.close();
            Task::none()
        }
        Message::Lightbox(lightbox::Message::NavigateRequested(direction)) => {
            app.controller.navigate(direction, app.store.photos());
            schedule_visible_photos(app)
        }
        Message::Lightbox(lightbox::Message::PhotoPressed) => Task::none(),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::HomeSelected => {
            app.screen = Screen::Home;
            schedule_visible_photos(app)
        }
        navbar::Message::GallerySelected => {
            app.screen = Screen::Gallery;
            schedule_visible_photos(app)
        }
        navbar::Message::RefreshRequested => start_fetch(app),
    }
}

/// Starts the catalog fetch unless one is already in flight.
///
/// The spawned task's handle aborts with the `App`, so an in-flight
/// fetch cannot outlive its consumer.
pub(super) fn start_fetch(app: &mut App) -> Task<Message> {
    let Some(ticket) = app.store.begin_fetch() else {
        return Task::none();
    };

    // Any handle still held here belongs to a completed fetch; dropping
    // it is a no-op.
    drop(app.fetch_handle.take());

    let fetcher = app.fetcher.clone();
    let (task, handle) = Task::perform(async move { fetcher.fetch().await }, move |result| {
        Message::CatalogFetched { ticket, result }
    })
    .abortable();

    app.fetch_handle = Some(handle.abort_on_drop());
    task
}

fn handle_catalog_fetched(
    app: &mut App,
    ticket: FetchTicket,
    result: Result<Catalog>,
) -> Task<Message> {
    let had_catalog = !app.store.photos().is_empty();
    let outcome = app.store.apply_result(ticket, result);

    match outcome {
        FetchOutcome::Applied => {
            // Photo ids are only unique within one catalog.
            app.photo_cache.clear();
            app.controller.close();

            let filter_gone = match app.controller.filter() {
                CategoryFilter::Only(category) => {
                    !app.store.categories().iter().any(|c| c == category)
                }
                CategoryFilter::All => false,
            };
            if filter_gone {
                app.controller
                    .set_filter(CategoryFilter::All, app.store.photos());
            }

            redraw_home(app);

            if app.has_loaded_once {
                app.notifications
                    .push(Notification::success("notification-catalog-refreshed"));
            }
            app.has_loaded_once = true;

            schedule_visible_photos(app)
        }
        FetchOutcome::AppliedEmpty => {
            app.photo_cache.clear();
            app.controller.close();
            app.home_hero = None;
            app.home_band = None;
            app.home_cards.clear();
            app.has_loaded_once = true;

            eprintln!("Catalog fetch succeeded but {}", Error::EmptyCatalog);
            app.notifications
                .push(Notification::warning("notification-empty-catalog"));
            Task::none()
        }
        FetchOutcome::Failed => {
            if let Some(error) = app.store.last_error() {
                eprintln!("Catalog fetch failed: {error}");
            }
            if had_catalog {
                // The previous catalog stays on screen; tell the user
                // the refresh did not happen.
                app.notifications
                    .push(Notification::error("notification-refetch-failed"));
            }
            Task::none()
        }
        FetchOutcome::Stale => Task::none(),
    }
}

fn handle_photo_fetched(app: &mut App, id: PhotoId, result: Result<Vec<u8>>) {
    match result {
        Ok(bytes) => app.photo_cache.insert(id, bytes),
        Err(error) => {
            eprintln!("Failed to download photo {id}: {error}");
            app.photo_cache.mark_failed(id);
        }
    }
}

/// Re-draws the Home surface picks from the current catalog.
///
/// Hero and background come from the whole catalog; the featured strip
/// samples the service's leading category.
fn redraw_home(app: &mut App) {
    let store = &app.store;
    let engine = &mut app.engine;
    let photos = store.photos();

    app.home_hero = engine.hero_photo(photos, None).map(|p| p.id.clone());
    app.home_band = engine
        .background_photo(photos, None, true)
        .map(|p| p.id.clone());
    app.home_cards = match store.categories().first() {
        Some(category) => engine
            .card_photos(photos, category, app.config.featured_count())
            .iter()
            .map(|p| p.id.clone())
            .collect(),
        None => Vec::new(),
    };
}

/// Schedules downloads for every photo the current screen can show:
/// the Home picks plus, on the Gallery screen, the filtered list.
fn schedule_visible_photos(app: &mut App) -> Task<Message> {
    let mut targets: Vec<(PhotoId, String)> = Vec::new();
    {
        let photos = app.store.photos();

        for id in app
            .home_hero
            .iter()
            .chain(app.home_band.iter())
            .chain(app.home_cards.iter())
        {
            if let Some(photo) = selection::photo_by_id(photos, id) {
                targets.push((photo.id.clone(), photo.full_url.clone()));
            }
        }

        if app.screen == Screen::Gallery {
            for photo in app.controller.filtered_photos(photos) {
                targets.push((photo.id.clone(), photo.full_url.clone()));
            }
        }
    }

    let mut tasks = Vec::new();
    for (id, url) in targets {
        if !app.photo_cache.needs_fetch(&id) {
            continue;
        }
        app.photo_cache.mark_pending(id.clone());

        let fetcher = app.fetcher.clone();
        tasks.push(Task::perform(
            async move { fetcher.fetch_bytes(&url).await },
            move |result| Message::PhotoFetched {
                id: id.clone(),
                result,
            },
        ));
    }

    Task::batch(tasks)
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar, any notification banners, and the active
//! screen. The catalog lifecycle gates the body: a loading indicator
//! while the first fetch is in flight, an error panel when fetching
//! failed with nothing to show, and the open lightbox replaces the
//! whole window.

use super::{App, Message, Screen};
use crate::catalog::model::Photo;
use crate::catalog::selection;
use crate::error::Error;
use crate::i18n::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{gallery_grid, home, lightbox, navbar, notifications};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let store = &app.store;

    // The lightbox is full-screen and replaces everything else.
    if let Some(context) = app.controller.lightbox_context(store.photos()) {
        return lightbox::view(lightbox::ViewContext {
            i18n: &app.i18n,
            lightbox: context,
            cache: &app.photo_cache,
        })
        .map(Message::Lightbox);
    }

    let body: Element<'_, Message> = if store.is_loading() && store.photos().is_empty() {
        loading_view(&app.i18n)
    } else {
        match store.last_error() {
            // A failed fetch with no prior catalog is the error state;
            // after a failed refetch the previous photos stay up and
            // the failure is a notification instead.
            Some(error) if store.photos().is_empty() => error_view(&app.i18n, error),
            _ => match app.screen {
                Screen::Home => home_view(app),
                Screen::Gallery => gallery_view(app),
            },
        }
    };

    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        home_active: app.screen == Screen::Home,
        refresh_enabled: !store.is_loading(),
    })
    .map(Message::Navbar);

    let mut column = Column::new().push(navbar_view);

    if app.notifications.has_notifications() {
        column = column.push(
            Container::new(
                notifications::view(&app.notifications, &app.i18n).map(Message::Notification),
            )
            .padding([spacing::XXS, spacing::MD]),
        );
    }

    column
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn home_view(app: &App) -> Element<'_, Message> {
    let photos = app.store.photos();
    let resolve = |id: &Option<crate::catalog::PhotoId>| {
        id.as_ref().and_then(|id| selection::photo_by_id(photos, id))
    };

    let cards: Vec<&Photo> = app
        .home_cards
        .iter()
        .filter_map(|id| selection::photo_by_id(photos, id))
        .collect();

    home::view(home::ViewContext {
        i18n: &app.i18n,
        hero: resolve(&app.home_hero),
        band: resolve(&app.home_band),
        cards,
        cache: &app.photo_cache,
    })
    .map(Message::Home)
}

fn gallery_view(app: &App) -> Element<'_, Message> {
    let photos = app.store.photos();

    gallery_grid::view(gallery_grid::ViewContext {
        i18n: &app.i18n,
        categories: app.store.categories(),
        filter: app.controller.filter(),
        photos: app.controller.filtered_photos(photos),
        cache: &app.photo_cache,
        columns: app.config.grid_columns(),
    })
    .map(Message::Gallery)
}

fn loading_view(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("gallery-loading")).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn error_view<'a>(i18n: &'a I18n, error: &Error) -> Element<'a, Message> {
    let display = ErrorDisplay::new(ErrorSeverity::Error)
        .title(i18n.tr("gallery-error-title"))
        .message(i18n.tr(error.i18n_key()))
        .details(error.to_string())
        .action(
            i18n.tr("gallery-error-retry"),
            Message::Navbar(navbar::Message::RefreshRequested),
        );

    centered_error_view(display)
}

// SPDX-License-Identifier: MPL-2.0
//! The gallery surface: category tabs, photo count, and the grid.
//!
//! Renders the filtered photo list the controller derives from the
//! store snapshot. Photos whose bytes have not arrived yet render as
//! placeholder cells; the update loop schedules their downloads.

use crate::catalog::model::Photo;
use crate::catalog::PhotoId;
use crate::gallery::{display_category_name, CategoryFilter};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::photo_cache::PhotoCache;
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, scrollable, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the gallery surface.
#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(CategoryFilter),
    PhotoPressed(PhotoId),
}

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Categories exactly as the service declared them.
    pub categories: &'a [String],
    pub filter: &'a CategoryFilter,
    /// The filtered photo list, in catalog order.
    pub photos: Vec<&'a Photo>,
    pub cache: &'a PhotoCache,
    pub columns: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tabs = category_tabs(&ctx);
    let count_line = photo_count(&ctx);

    let body: Element<'_, Message> = if ctx.photos.is_empty() {
        empty_state(ctx.i18n)
    } else {
        grid(&ctx)
    };

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(tabs)
        .push(count_line)
        .push(body)
        .into()
}

fn category_tabs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tab = |label: String, filter: CategoryFilter, active: bool| {
        let style = if active {
            styles::button::tab_selected
        } else {
            styles::button::tab_unselected
        };
        button(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::MD])
            .style(style)
            .on_press(Message::CategorySelected(filter))
    };

    let mut row = Row::new().spacing(spacing::XS).push(tab(
        ctx.i18n.tr("gallery-all-tab"),
        CategoryFilter::All,
        ctx.filter == &CategoryFilter::All,
    ));

    for category in ctx.categories {
        let filter = CategoryFilter::Only(category.clone());
        let active = ctx.filter == &filter;
        row = row.push(tab(display_category_name(category), filter, active));
    }

    scrollable(row)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill)
        .into()
}

fn photo_count<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut args = FluentArgs::new();
    args.set("count", ctx.photos.len() as i64);

    let line = match ctx.filter {
        CategoryFilter::All => ctx.i18n.tr_with("gallery-photo-count", &args),
        CategoryFilter::Only(category) => {
            args.set("category", display_category_name(category));
            ctx.i18n.tr_with("gallery-photo-count-filtered", &args)
        }
    };

    Container::new(Text::new(line).size(typography::CAPTION))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.columns.max(1);
    let mut column = Column::new().spacing(spacing::XS);

    for row_photos in ctx.photos.chunks(columns) {
        let mut row = Row::new().spacing(spacing::XS);
        for &photo in row_photos {
            row = row.push(cell(ctx, photo));
        }
        // Keep cells in short rows the same width as full rows.
        for _ in row_photos.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        column = column.push(row);
    }

    scrollable(column.width(Length::Fill)).height(Length::Fill).into()
}

fn cell<'a>(ctx: &ViewContext<'a>, photo: &'a Photo) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.cache.handle(&photo.id) {
        Some(handle) => Image::new(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GRID_CELL_HEIGHT))
            .into(),
        None => {
            let key = if ctx.cache.has_failed(&photo.id) {
                "photo-failed"
            } else {
                "photo-pending"
            };
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::GRID_CELL_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::placeholder)
                .into()
        }
    };

    button(content)
        .padding(0)
        .width(Length::FillPortion(1))
        .style(styles::button::photo)
        .on_press(Message::PhotoPressed(photo.id.clone()))
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("gallery-empty-title")).size(typography::TITLE_MD);
    let subtitle = Text::new(i18n.tr("gallery-empty-subtitle")).size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox over the filtered photo list.
//!
//! The lightbox replaces the gallery while open. Clicking the backdrop
//! closes it; clicks on the photo itself are absorbed so they do not
//! fall through to the backdrop. Navigation is available through the
//! on-screen arrows and mirrors the keyboard bindings.

use crate::gallery::{display_category_name, LightboxContext, NavigationDirection};
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::photo_cache::PhotoCache;
use crate::ui::styles;
use fluent_bundle::FluentArgs;
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the lightbox surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CloseRequested,
    NavigateRequested(NavigationDirection),
    /// A click landed on the photo itself; absorbed so it does not
    /// close the lightbox via the backdrop.
    PhotoPressed,
}

/// Context required to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: LightboxContext<'a>,
    pub cache: &'a PhotoCache,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let photo = ctx.lightbox.photo;

    let image: Element<'_, Message> = match ctx.cache.handle(&photo.id) {
        Some(handle) => Image::new(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
            .height(Length::Fixed(sizing::LIGHTBOX_MAX_HEIGHT))
            .into(),
        None => Container::new(
            Text::new(ctx.i18n.tr("photo-pending"))
                .size(typography::BODY)
                .color(palette::GRAY_200),
        )
        .width(Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH))
        .height(Length::Fixed(sizing::LIGHTBOX_MAX_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
    };

    let overlay_button = |label: &'static str, size: f32, message: Message| {
        button(Text::new(label).size(size).color(palette::WHITE))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(message)
    };

    let close_row = Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(overlay_button(
            "\u{2715}",
            typography::BODY,
            Message::CloseRequested,
        ));

    let image_row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(overlay_button(
            "\u{2039}",
            typography::TITLE_LG,
            Message::NavigateRequested(NavigationDirection::Previous),
        ))
        .push(mouse_area(image).on_press(Message::PhotoPressed))
        .push(overlay_button(
            "\u{203A}",
            typography::TITLE_LG,
            Message::NavigateRequested(NavigationDirection::Next),
        ));

    let caption = caption(&ctx);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(close_row)
        .push(image_row)
        .push(caption);

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    mouse_area(backdrop).on_press(Message::CloseRequested).into()
}

fn caption<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photo = ctx.lightbox.photo;

    let mut args = FluentArgs::new();
    args.set("category", display_category_name(&photo.category));
    args.set("index", (ctx.lightbox.index + 1) as i64);
    args.set("total", ctx.lightbox.total as i64);
    let position = ctx.i18n.tr_with("lightbox-position", &args);

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(&photo.description)
                .size(typography::BODY)
                .color(palette::WHITE),
        )
        .push(
            Text::new(position)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        )
        .into()
}

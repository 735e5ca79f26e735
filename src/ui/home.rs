// SPDX-License-Identifier: MPL-2.0
//! The Home screen: decorative surfaces fed by the selection engine.
//!
//! The hero banner, the featured card strip, and the background band
//! are all drawn from the store by randomized selection queries; the
//! picks themselves are made in the update loop whenever a catalog
//! lands, so this view only resolves ids and renders.

use crate::catalog::model::Photo;
use crate::catalog::PhotoId;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::photo_cache::PhotoCache;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the Home screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A featured card was clicked; opens the gallery at that photo.
    CardPressed(PhotoId),
}

/// Context required to render the Home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub hero: Option<&'a Photo>,
    pub band: Option<&'a Photo>,
    pub cards: Vec<&'a Photo>,
    pub cache: &'a PhotoCache,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("home-heading")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("home-intro")).size(typography::BODY));

    if let Some(hero) = ctx.hero {
        content = content.push(photo_panel(&ctx, hero, sizing::HERO_HEIGHT));
    }

    if !ctx.cards.is_empty() {
        content = content
            .push(Text::new(ctx.i18n.tr("home-featured-heading")).size(typography::TITLE_MD))
            .push(card_strip(&ctx));
    }

    if let Some(band) = ctx.band {
        content = content.push(photo_panel(&ctx, band, sizing::BAND_HEIGHT));
    }

    scrollable(content.width(Length::Fill)).height(Length::Fill).into()
}

fn card_strip<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD);

    for &photo in &ctx.cards {
        let image = photo_panel(ctx, photo, sizing::CARD_HEIGHT);
        let caption = Container::new(Text::new(&photo.description).size(typography::CAPTION))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center);

        let card = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .push(image)
            .push(caption);

        row = row.push(
            button(card)
                .padding(0)
                .style(styles::button::photo)
                .on_press(Message::CardPressed(photo.id.clone())),
        );
    }

    row.into()
}

fn photo_panel<'a>(
    ctx: &ViewContext<'a>,
    photo: &'a Photo,
    height: f32,
) -> Element<'a, Message> {
    match ctx.cache.handle(&photo.id) {
        Some(handle) => Image::new(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        None => Container::new(
            Text::new(ctx.i18n.tr("photo-pending"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into(),
    }
}

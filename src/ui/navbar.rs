// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: screen tabs and the refresh control.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    HomeSelected,
    GallerySelected,
    RefreshRequested,
}

/// Context required to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// True when the Home screen is active (otherwise Gallery is).
    pub home_active: bool,
    /// The refresh control is disabled while a fetch is in flight.
    pub refresh_enabled: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tab = |label: String, active: bool, message: Message| {
        let style = if active {
            styles::button::tab_selected
        } else {
            styles::button::tab_unselected
        };
        button(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::MD])
            .style(style)
            .on_press(message)
    };

    let home_tab = tab(
        ctx.i18n.tr("nav-home"),
        ctx.home_active,
        Message::HomeSelected,
    );
    let gallery_tab = tab(
        ctx.i18n.tr("nav-gallery"),
        !ctx.home_active,
        Message::GallerySelected,
    );

    let refresh = button(Text::new(ctx.i18n.tr("nav-refresh")).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::tab_unselected)
        .on_press_maybe(ctx.refresh_enabled.then_some(Message::RefreshRequested));

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(home_tab)
        .push(gallery_tab)
        .push(refresh);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XXS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .into()
}

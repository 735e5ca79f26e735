// SPDX-License-Identifier: MPL-2.0
//! Banner rendering for visible notifications.

use super::manager::{Manager, Message};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the visible notifications as stacked banners. Returns an
/// empty column when there is nothing to show.
pub fn view<'a>(manager: &'a Manager, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);

    for notification in manager.visible() {
        let message = Text::new(i18n.tr(notification.message_key()))
            .size(typography::BODY)
            .width(Length::Fill);

        let dismiss = button(Text::new("\u{2715}").size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::tab_unselected)
            .on_press(Message::Dismiss(notification.id()));

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(message)
            .push(dismiss);

        column = column.push(
            Container::new(row)
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(styles::container::banner(notification.severity().color())),
        );
    }

    column.into()
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Near-opaque dark backdrop behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::GRAY_900
        })),
        ..container::Style::default()
    }
}

/// Subtle panel for error and empty states.
pub fn surface(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}

/// Placeholder cell shown while a photo's bytes are still downloading.
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        text_color: Some(palette::GRAY_400),
        ..container::Style::default()
    }
}

/// Notification banner with a severity accent.
pub fn banner(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(extended.background.weak.color)),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::SM.into(),
            },
            text_color: Some(theme.palette().text),
            ..container::Style::default()
        }
    }
}

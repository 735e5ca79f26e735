// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (retry, refresh).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

fn pill(background: Color, text_color: Color, border_color: Color, raised: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: if raised { shadow::SM } else { shadow::NONE },
        snap: true,
    }
}

/// Active state for category tabs and navbar entries.
pub fn tab_selected(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => pill(palette::PRIMARY_400, WHITE, palette::PRIMARY_500, true),
        _ => pill(palette::PRIMARY_500, WHITE, palette::PRIMARY_600, true),
    }
}

/// Inactive state for category tabs and navbar entries.
pub fn tab_unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Hovered => pill(background, text_color, palette::PRIMARY_500, true),
        _ => pill(background, text_color, palette::GRAY_400, false),
    }
}

/// Translucent dark buttons floating over imagery (lightbox controls).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Invisible button wrapping a grid photo; hover shows a brand border.
pub fn photo(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::PRIMARY_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        _ => Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

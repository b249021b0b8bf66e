// SPDX-License-Identifier: MPL-2.0
//! Toast widget rendering.
//!
//! Toasts appear as small cards with a severity-colored accent border, an
//! icon glyph, the message, and a dismiss button. The overlay shows at most
//! one of them, anchored to the configured screen edge.

use super::content::{Toast, ToastId};
use super::manager::{Manager, Message};
use crate::config::ToastPosition;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast card.
pub fn card<'a>(id: ToastId, toast: &'a Toast) -> Element<'a, Message> {
    let severity = toast.severity();
    let accent_color = severity.color();

    let icon = Text::new(severity.icon().to_string())
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        });

    let message = Text::new(toast.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [icon] [message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the visible toast of `manager`, or an empty layer.
pub fn overlay(manager: &Manager) -> Element<'_, Message> {
    let Some(site) = manager.visible() else {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    };

    let vertical = match manager.config().position {
        ToastPosition::Top => alignment::Vertical::Top,
        ToastPosition::Bottom => alignment::Vertical::Bottom,
    };

    Container::new(card(site.id(), site.toast()))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(vertical)
        .padding(spacing::MD)
        .into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => hover_background(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_background(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo surface lists one button per presentation site. The toast
//! overlay is stacked on top and shows whichever site is current.

use super::Message;
use crate::queue::ToastQueue;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast::{self, ToastId};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a toast::Manager,
    pub queue: &'a ToastQueue<ToastId>,
    pub demo_sites: &'a [ToastId],
    pub jobs_in_flight: usize,
}

/// Renders the demo panel with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Toast queue").size(typography::TITLE_MD));

    for site in ctx.demo_sites.iter().filter_map(|id| ctx.toasts.site(*id)) {
        let label = format!("{:?}: {}", site.toast().severity(), site.toast().message());
        column = column.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::Toast(toast::Message::Present(site.id())))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .width(Length::Fixed(sizing::TOAST_WIDTH)),
        );
    }

    let job_label = if ctx.jobs_in_flight == 0 {
        "Run background job".to_string()
    } else {
        format!("Run background job ({} running)", ctx.jobs_in_flight)
    };
    column = column
        .push(
            button(Text::new(job_label).size(typography::BODY))
                .on_press(Message::StartBackgroundJob)
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .width(Length::Fixed(sizing::TOAST_WIDTH)),
        )
        .push(
            Text::new(format!(
                "Waiting: {} / {}",
                ctx.queue.pending_len(),
                ctx.queue.capacity().value()
            ))
            .size(typography::CAPTION),
        );

    let panel = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .push(panel)
        .push(toast::view::overlay(ctx.toasts).map(Message::Toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

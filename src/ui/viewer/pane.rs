// SPDX-License-Identifier: MPL-2.0
//! Viewer pane that renders the current image full-window with its overlay
//! chrome: close button, navigation arrows, and position counter.

use super::component::{Message, State};
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::{button, container, image, mouse_area, tooltip, Container, Stack, Text};
use iced::{Background, ContentFit, Element, Length, Padding, Theme};

pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub state: &'a State,
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        catalog,
        state,
        i18n,
    } = ctx;

    let picture: Element<'a, Message> = match catalog.get(state.current_index()) {
        Some(entry) => image(entry.handle())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        // Unreachable while the index invariant holds.
        None => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    // Photos sit on a dark surface regardless of the application theme.
    let surface = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::BLACK)),
            ..Default::default()
        });

    let cursor_interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    let gesture_surface = mouse_area(surface).interaction(cursor_interaction);

    let mut stack = Stack::new().push(gesture_surface);

    // Navigation arrows only where a neighbor exists; the index clamps at
    // both ends, so there is nothing to point at past them.
    if !state.at_first() {
        let left_arrow = button(Text::new("◀").size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::TRANSPARENT,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(Message::NavigatePrevious);

        stack = stack.push(
            Container::new(with_tooltip(left_arrow, i18n.tr("viewer-previous")))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Center),
        );
    }

    if !state.at_last() {
        let right_arrow = button(Text::new("▶").size(typography::TITLE_LG))
            .padding(spacing::SM)
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::TRANSPARENT,
                opacity::OVERLAY_MEDIUM,
            ))
            .on_press(Message::NavigateNext);

        stack = stack.push(
            Container::new(with_tooltip(right_arrow, i18n.tr("viewer-next")))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        );
    }

    let close_button = button(Text::new("✕").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ))
        .on_press(Message::CloseRequested);

    stack = stack.push(
        Container::new(with_tooltip(close_button, i18n.tr("viewer-close")))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top),
    );

    // Position counter at bottom center when there is more than one image.
    if state.total() > 1 {
        let position_text = format!("{}/{}", state.current_index() + 1, state.total());
        let position_indicator = Container::new(Text::new(position_text).size(typography::BODY))
            .padding(Padding {
                top: spacing::XXS,
                right: spacing::XS,
                bottom: spacing::XXS,
                left: spacing::XS,
            })
            .style(styles::overlay::indicator(radius::LG));

        stack = stack.push(
            Container::new(position_indicator)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}

fn with_tooltip<'a>(
    target: impl Into<Element<'a, Message>>,
    label: String,
) -> Element<'a, Message> {
    tooltip(
        target,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Bottom,
    )
    .into()
}

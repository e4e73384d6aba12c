// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders one of the two screens depending on whether an image is selected:
//! the thumbnail grid, or the full-screen viewer.

use super::Message;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::{gallery, viewer};
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub viewer: Option<&'a viewer::State>,
}

/// Renders the current application view based on the selection state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match ctx.viewer {
        Some(state) => state.view(ctx.catalog, ctx.i18n).map(Message::Viewer),
        None => gallery::view(ctx.catalog, ctx.i18n).map(Message::Gallery),
    };

    Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

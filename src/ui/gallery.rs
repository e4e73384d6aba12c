// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid screen.
//!
//! Stateless: renders the catalog as a fixed three-column grid of
//! square-cropped thumbnails and reports taps upward. The cell size follows
//! the available width via a `responsive` wrapper.

use crate::catalog::{Catalog, ImageId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{image, mouse_area, responsive, Column, Container, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length, Size};

/// Number of thumbnail columns.
pub const GRID_COLUMNS: usize = 3;

/// Messages emitted by the thumbnail grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was tapped.
    ImagePressed(ImageId),
}

/// Renders the thumbnail grid for the catalog.
pub fn view<'a>(catalog: &Catalog, i18n: &I18n) -> Element<'a, Message> {
    if catalog.is_empty() {
        return empty_state(i18n);
    }

    // Clone ids and handles into the responsive closure; handles are
    // reference-counted so this is cheap.
    let items: Vec<(ImageId, image::Handle)> = catalog
        .iter()
        .map(|entry| (entry.id(), entry.handle()))
        .collect();

    responsive(move |size: Size| grid(&items, size)).into()
}

fn grid(items: &[(ImageId, image::Handle)], available: Size) -> Element<'static, Message> {
    let content_width = (available.width - 2.0 * spacing::XS).max(0.0);
    let gaps = (GRID_COLUMNS - 1) as f32 * spacing::XS;
    let cell = ((content_width - gaps) / GRID_COLUMNS as f32).max(1.0);

    let mut rows = Column::new().spacing(spacing::XS);
    for chunk in items.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);
        for (id, handle) in chunk {
            row = row.push(thumbnail(*id, handle.clone(), cell));
        }
        rows = rows.push(row);
    }

    Scrollable::new(Container::new(rows).padding(spacing::XS))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn thumbnail(id: ImageId, handle: image::Handle, cell: f32) -> Element<'static, Message> {
    // Square cell, cover-cropped like a camera-roll thumbnail.
    let picture = image(handle)
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(cell))
        .height(Length::Fixed(cell));

    mouse_area(picture)
        .on_press(Message::ImagePressed(id))
        .into()
}

fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("empty-state-title"))
                .size(typography::TITLE_MD)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(i18n.tr("empty-state-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

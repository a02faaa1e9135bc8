use iced::widget::{container, scrollable, text, Column, Row};
use iced::{Element, Length};

use super::item;
use crate::state::{ImageRecord, ImageStore};
use crate::Message;

/// Split the records into grid rows of `columns` cells (the last row may be short)
pub fn grid_rows(records: &[ImageRecord], columns: usize) -> Vec<&[ImageRecord]> {
    records.chunks(columns.max(1)).collect()
}

/// Render the whole store as a scrollable grid
pub fn view<'a>(store: &ImageStore, columns: usize, thumbnail_size: f32) -> Element<'a, Message> {
    if store.is_empty() {
        return container(text("No images yet. Pick one to get started.").size(16))
            .padding(20)
            .center_x(Length::Fill)
            .into();
    }

    let rows = grid_rows(store.list(), columns).into_iter().map(|cells| {
        Element::from(Row::with_children(
            cells.iter().map(|record| item::view(record, thumbnail_size)),
        ))
    });

    scrollable(container(Column::with_children(rows)).center_x(Length::Fill))
        .height(Length::Fill)
        .into()
}

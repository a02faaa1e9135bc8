use iced::alignment::Horizontal;
use iced::widget::{button, column, text, Image};
use iced::{Alignment, ContentFit, Element, Length};

use super::image_handle;
use crate::state::ImageRecord;
use crate::Message;

/// Render one grid cell: a tappable thumbnail with a red "Remove" button under it
pub fn view<'a>(record: &ImageRecord, thumbnail_size: f32) -> Element<'a, Message> {
    let thumbnail = Image::new(image_handle(&record.uri))
        .width(Length::Fixed(thumbnail_size))
        .height(Length::Fixed(thumbnail_size))
        .content_fit(ContentFit::Cover);

    let open = button(thumbnail)
        .padding(0)
        .style(button::text)
        .on_press(Message::OpenImage(record.id.clone()));

    let remove = button(text("Remove").size(14).align_x(Horizontal::Center).width(Length::Fill))
        .width(Length::Fixed(thumbnail_size))
        .style(button::danger)
        .on_press(Message::RemoveImage(record.id.clone()));

    column![open, remove]
        .spacing(5)
        .padding(5)
        .align_x(Alignment::Center)
        .into()
}

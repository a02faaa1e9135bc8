//! Full-screen detail view of the selected record.
//! Stacked over the gallery and opaque, so the grid underneath gets no input
//! while it is open.

use iced::keyboard::{self, key::Named, Key};
use iced::widget::{button, column, container, opaque, text, Image};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

use super::image_handle;
use crate::state::ImageRecord;
use crate::Message;

pub fn view<'a>(record: &ImageRecord) -> Element<'a, Message> {
    let picture = Image::new(image_handle(&record.uri))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    let close = button(text("Close")).padding(10).on_press(Message::CloseOverlay);

    let content = column![picture, close]
        .spacing(10)
        .padding(10)
        .align_x(Alignment::Center);

    opaque(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::BLACK.into()),
                ..container::Style::default()
            }),
    )
}

/// System dismiss gesture: Escape closes the overlay like the Close button
pub fn dismiss_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseOverlay),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes() {
        let message = dismiss_key(Key::Named(Named::Escape), keyboard::Modifiers::default());
        assert!(matches!(message, Some(Message::CloseOverlay)));
    }

    #[test]
    fn test_other_keys_ignored() {
        let message = dismiss_key(Key::Character("q".into()), keyboard::Modifiers::default());
        assert!(message.is_none());
        let message = dismiss_key(Key::Named(Named::Enter), keyboard::Modifiers::default());
        assert!(message.is_none());
    }
}

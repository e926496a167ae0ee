//! URL input component

use crate::gui::app::Message;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// URL field with paste/clear helpers and the search button
pub fn url_input(value: &str, is_fetching: bool) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut input = text_input("Paste video URL here...", value)
        .padding(12)
        .width(Length::Fill)
        .style(iced::theme::TextInput::Custom(Box::new(theme::UrlField)));
    if !is_fetching {
        input = input
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::SearchPressed);
    }

    row![
        text("Video URL:")
            .size(14)
            .style(iced::theme::Text::Color(theme::INK_MUTED)),
        input,
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::FlatButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::FlatButton))),
        button(text(if is_fetching { "Searching..." } else { "Search" }).size(14))
            .on_press_maybe((!is_fetching).then_some(Message::SearchPressed))
            .padding([10, 20])
            .style(iced::theme::Button::Custom(Box::new(theme::ActionButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}

//! Main view implementation - Light Theme

use crate::gui::app::Message;
use crate::gui::components::{url_input, video_card};
use crate::session::Session;
use iced::widget::{column, container, image, scrollable, text};
use iced::{Element, Length};

/// Create the main view
pub fn main_view(
    session: &Session,
    thumbnail: Option<&image::Handle>,
    status_message: &str,
) -> Element<'static, Message> {
    use crate::gui::theme;

    let search_section = container(
        column![
            text("Download Video")
                .size(28)
                .style(iced::theme::Text::Color(theme::INK)),
            url_input(session.url(), session.is_fetching()),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(theme::Panel)));

    let mut content = column![search_section].spacing(20).width(Length::Fill);

    if let Some(card) = video_card(session, thumbnail) {
        content = content.push(card);
    }

    content = content.push(
        text(status_message.to_string())
            .size(12)
            .style(iced::theme::Text::Color(theme::INK_HINT)),
    );

    scrollable(content.padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

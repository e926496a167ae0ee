//! Fetched video: thumbnail, title, quality picker, folder and download controls

use crate::gui::app::Message;
use crate::session::Session;
use iced::widget::{button, column, container, image, pick_list, row, text, Space};
use iced::{Alignment, Element, Length};

/// Render the card for the last fetched video, if any
pub fn video_card(
    session: &Session,
    thumbnail: Option<&image::Handle>,
) -> Option<Element<'static, Message>> {
    use crate::gui::theme;

    let video = session.video()?;

    let preview: Element<'static, Message> = match thumbnail {
        Some(handle) => image(handle.clone()).into(),
        None => text("No thumbnail")
            .size(12)
            .style(iced::theme::Text::Color(theme::INK_HINT))
            .into(),
    };
    let preview = container(preview)
        .width(Length::Fixed(320.0))
        .height(Length::Fixed(180.0))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(theme::ThumbnailFrame)));

    let quality_row = row![
        text("Select Quality:")
            .size(14)
            .style(iced::theme::Text::Color(theme::INK_MUTED)),
        pick_list(
            session.resolutions().to_vec(),
            session.selected_resolution().map(str::to_string),
            Message::ResolutionSelected,
        )
        .placeholder("No resolutions")
        .text_size(14)
        .padding([6, 10])
        .width(Length::Fixed(160.0)),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let folder_row = row![
        button(text("Choose Folder").size(14))
            .on_press(Message::BrowseDownloadLocation)
            .padding([8, 16])
            .style(iced::theme::Button::Custom(Box::new(theme::ToolButton))),
        text(session.download_dir().display().to_string())
            .size(13)
            .style(iced::theme::Text::Color(theme::INK_VALUE)),
        Space::with_width(Length::Fill),
        button(text("Open").size(13))
            .on_press(Message::OpenDownloadFolder)
            .padding([6, 10])
            .style(iced::theme::Button::Custom(Box::new(theme::FlatButton))),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let download_button = button(
        text(if session.download_enabled() {
            "Download Video"
        } else {
            "Downloading..."
        })
        .size(16),
    )
    .on_press_maybe(session.download_enabled().then_some(Message::DownloadPressed))
    .padding([12, 28])
    .style(iced::theme::Button::Custom(Box::new(theme::ActionButton)));

    let card = column![
        preview,
        text(video.title.clone())
            .size(18)
            .style(iced::theme::Text::Color(theme::INK)),
        quality_row,
        folder_row,
        download_button,
    ]
    .spacing(16)
    .align_items(Alignment::Center);

    Some(
        container(card)
            .padding(24)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(theme::Panel)))
            .into(),
    )
}

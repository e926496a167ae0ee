//! Main GUI application

use crate::backend::{Backend, FetchedVideo};
use crate::gui::{clipboard, dialog};
use crate::session::Session;
use iced::widget::{container, image};
use iced::{Application, Command, Element, Length, Theme};
use tracing::{debug, warn};

/// Main application state
pub struct TubegrabApp {
    backend: Backend,
    session: Session,
    thumbnail: Option<image::Handle>,
    status_message: String,
}

/// Startup parameters handed over by `main`
pub struct AppFlags {
    pub backend: Backend,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,

    // Fetch events
    SearchPressed,
    FetchCompleted(Result<FetchedVideo, String>),

    // Selection
    ResolutionSelected(String),
    BrowseDownloadLocation,
    OpenDownloadFolder,

    // Download events
    DownloadPressed,
    DownloadFinished(Result<(), String>),
}

impl Application for TubegrabApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let download_dir = flags.backend.settings().download_location.clone();

        let app = Self {
            backend: flags.backend,
            session: Session::new(download_dir),
            thumbnail: None,
            status_message: "Ready".to_string(),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Tubegrab - Video Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.session.set_url(url);
                Command::none()
            }

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => {
                        self.session.set_url(content);
                        self.status_message = "URL pasted from clipboard".to_string();
                    }
                    Err(e) => {
                        warn!("{}", e);
                        self.status_message = e;
                    }
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.session.set_url(String::new());
                Command::none()
            }

            // Fetch events
            Message::SearchPressed => {
                if self.session.is_fetching() {
                    return Command::none();
                }

                match self.session.begin_fetch() {
                    Ok(url) => {
                        self.status_message = "Fetching video information...".to_string();
                        let backend = self.backend.clone();
                        Command::perform(
                            async move {
                                backend
                                    .fetch_video(&url)
                                    .await
                                    .map_err(|e| format!("{:#}", e))
                            },
                            Message::FetchCompleted,
                        )
                    }
                    Err(notice) => {
                        dialog::show_notice(&notice);
                        Command::none()
                    }
                }
            }

            Message::FetchCompleted(result) => {
                let result = result.map(|fetched| {
                    self.thumbnail = fetched
                        .thumbnail
                        .map(|t| image::Handle::from_pixels(t.width, t.height, t.rgba));
                    fetched.info
                });

                match self.session.finish_fetch(result) {
                    Some(notice) => {
                        self.status_message = "Ready".to_string();
                        dialog::show_notice(&notice);
                    }
                    None => {
                        self.status_message = match self.session.selected_resolution() {
                            Some(best) => format!("Best available quality: {}", best),
                            None => "No downloadable resolutions found".to_string(),
                        };
                    }
                }
                Command::none()
            }

            // Selection
            Message::ResolutionSelected(label) => {
                self.session.select_resolution(&label);
                Command::none()
            }

            Message::BrowseDownloadLocation => {
                let picked = dialog::pick_folder(self.session.download_dir());
                self.session.choose_download_dir(picked);
                Command::none()
            }

            Message::OpenDownloadFolder => {
                if let Err(e) = open::that(self.session.download_dir()) {
                    warn!("Failed to open folder: {}", e);
                    self.status_message = format!("Failed to open folder: {}", e);
                }
                Command::none()
            }

            // Download events
            Message::DownloadPressed => match self.session.begin_download() {
                Some(request) => {
                    debug!("Starting download: {:?}", request);
                    self.status_message = format!(
                        "Downloading up to {}p into {}...",
                        request.max_height,
                        request.output_dir.display()
                    );
                    let backend = self.backend.clone();
                    Command::perform(
                        async move {
                            backend
                                .download(&request)
                                .await
                                .map_err(|e| format!("{:#}", e))
                        },
                        Message::DownloadFinished,
                    )
                }
                None => Command::none(),
            },

            Message::DownloadFinished(result) => {
                let notice = self.session.finish_download(result);
                self.status_message = if notice.is_error() {
                    "Download failed".to_string()
                } else {
                    "Download completed".to_string()
                };
                dialog::show_notice(&notice);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::theme;
        use crate::gui::views::main_view;

        container(main_view(
            &self.session,
            self.thumbnail.as_ref(),
            &self.status_message,
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::WindowBackground,
        )))
        .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

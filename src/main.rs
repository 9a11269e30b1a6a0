use iced::widget::{column, container, scrollable, text};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod color;
mod compositor;
mod config;
mod decode;
mod state;
mod ui;

use config::AppConfig;
use decode::loader::TierSizes;
use decode::DecodeError;
use state::catalog::{self, FilterCatalog};
use state::data::DecodedImage;
use state::selection::{Completion, DecodeRequest, Selection, Ticket};

const TITLE: &str = "Image \"50 Shades\" Generator";
const READY: &str = "Ready. Choose an image to begin.";

/// Main application state
struct FiftyShades {
    config: AppConfig,
    /// Generated once, shared by every redraw
    catalog: &'static FilterCatalog,
    selection: Selection<Arc<DecodedImage>>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the file picker button
    OpenFile,
    /// The picker closed, with or without a file
    FileChosen(Option<PathBuf>),
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Background decode finished
    DecodeFinished(Ticket, Result<Arc<DecodedImage>, DecodeError>),
    /// User clicked "Clear Image"
    ClearImage,
}

impl FiftyShades {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let catalog = catalog::shared();
        tracing::info!("🎨 Fifty Shades initialized with {} filters", catalog.len());

        (
            FiftyShades {
                config,
                catalog,
                selection: Selection::new(),
                status: READY.to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFile => Task::perform(pick_image(), Message::FileChosen),
            Message::FileChosen(path) => self.select(path),
            Message::FileDropped(path) => {
                tracing::debug!("File dropped: {}", path.display());
                self.select(Some(path))
            }
            Message::DecodeFinished(ticket, result) => {
                match self.selection.complete(ticket, result) {
                    Completion::Loaded => {
                        if let Some(image) = self.selection.current() {
                            self.status = format!("Showing {} in 50 shades.", image.file_name);
                        }
                    }
                    Completion::Stale => {
                        tracing::debug!("Discarding superseded decode {:?}", ticket);
                    }
                    Completion::Failed(err) => {
                        tracing::warn!("⚠️  {}", err);
                        self.status = format!("Could not open image: {}", err);
                    }
                }

                Task::none()
            }
            Message::ClearImage => {
                if self.selection.is_decoding() {
                    tracing::debug!("Clearing with a decode still in flight");
                }
                if self.selection.clear() {
                    tracing::info!("🧹 Image cleared");
                }
                self.status = READY.to_string();

                Task::none()
            }
        }
    }

    /// Start decoding a chosen file, or clear when nothing was chosen
    fn select(&mut self, path: Option<PathBuf>) -> Task<Message> {
        let Some(DecodeRequest { ticket, file }) = self.selection.select_file(path) else {
            self.status = READY.to_string();
            return Task::none();
        };

        self.status = format!("Decoding {}...", file.display());
        tracing::info!("🔍 Decoding {}", file.display());

        Task::perform(
            decode::load_image(file, TierSizes::from(&self.config), self.catalog),
            move |result| Message::DecodeFinished(ticket, result),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let gallery = ui::gallery::layout(self.selection.state(), self.catalog);

        let content = column![
            text(TITLE).size(40),
            ui::upload::view(self.selection.is_loaded(), &self.status),
            ui::gallery::view(gallery, &self.config),
        ]
        .spacing(32)
        .padding(40)
        .max_width(1400.0)
        .align_x(Alignment::Center);

        scrollable(container(content).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    /// Files dropped onto the window count as a selection
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load();

    iced::application(TITLE, FiftyShades::update, FiftyShades::view)
        .subscription(FiftyShades::subscription)
        .theme(FiftyShades::theme)
        .centered()
        .run_with(move || FiftyShades::new(config))
}

/// Show the native file picker without blocking the UI
async fn pick_image() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select an Image")
        .add_filter("Images", &decode::IMAGE_EXTENSIONS[..])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

use iced::widget::image::Handle;
use iced::widget::{button, column, container, stack, text, Column, Image};
use iced::{font, keyboard, Alignment, Color, ContentFit, Element, Font, Length, Subscription, Task, Theme};

mod config;
mod error;
mod picker;
mod state;
mod ui;

use config::GalleryConfig;
use picker::PickerOutcome;
use state::{IdGenerator, ImageRecord, ImageStore, RecordId, SelectionState};

/// Main application state
struct GalleryApp {
    /// User settings, read once at startup
    config: GalleryConfig,
    /// Every record shown in the grid
    store: ImageStore,
    /// Record open in the detail overlay
    selection: SelectionState,
    ids: IdGenerator,
    /// A picker session is in flight
    picking: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the "Pick Image" button
    PickImage,
    /// Picker session ended
    PickerFinished(PickerOutcome),
    /// User tapped a thumbnail
    OpenImage(RecordId),
    /// User clicked a thumbnail's "Remove" button
    RemoveImage(RecordId),
    /// Close button or Escape in the detail overlay
    CloseOverlay,
}

impl GalleryApp {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (Self::with_config(config::load()), Task::none())
    }

    fn with_config(config: GalleryConfig) -> Self {
        log::info!(
            "🎨 Gallery initialized ({} columns, {}px thumbnails)",
            config.columns(),
            config.thumbnail_size()
        );

        GalleryApp {
            config,
            store: ImageStore::new(),
            selection: SelectionState::new(),
            ids: IdGenerator::new(),
            picking: false,
            status: "Ready.".to_string(),
        }
    }

    fn title(&self) -> String {
        self.config.title.clone()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                // The button is disabled while picking, but a queued press can still arrive
                if self.picking {
                    log::debug!("Picker already open, ignoring request");
                    return Task::none();
                }

                self.picking = true;
                self.status = "Waiting for image picker...".to_string();

                Task::perform(
                    picker::launch_image_library(self.config.picker.clone()),
                    Message::PickerFinished,
                )
            }
            Message::PickerFinished(outcome) => {
                self.picking = false;
                self.apply_pick(outcome);
                Task::none()
            }
            Message::OpenImage(id) => {
                if let Some(record) = self.store.get(&id).cloned() {
                    log::debug!("Opening image {}", id);
                    self.selection.select(record);
                }
                Task::none()
            }
            Message::RemoveImage(id) => {
                if !self.store.contains(&id) {
                    log::debug!("Remove of unknown image {} ignored", id);
                    return Task::none();
                }

                if let Some(removed) = self.store.remove_by_id(&id) {
                    log::info!("🗑️  Removed image {} ({})", removed.id, removed.uri);
                    // A deleted record must not stay on screen
                    if self.selection.is_selected(&removed.id) {
                        self.selection.clear();
                    }
                    self.status = self.count_status();
                }
                Task::none()
            }
            Message::CloseOverlay => {
                if self.selection.is_open() {
                    log::debug!("Closing image overlay");
                }
                self.selection.clear();
                Task::none()
            }
        }
    }

    /// Fold a picker outcome into the store
    fn apply_pick(&mut self, outcome: PickerOutcome) {
        match outcome {
            PickerOutcome::Cancelled => {
                log::info!("User cancelled image picker");
                self.status = self.count_status();
            }
            PickerOutcome::Failed { message } => {
                log::warn!("⚠️  Image picker error: {}", message);
                self.status = format!("Could not add image: {}", message);
            }
            PickerOutcome::Succeeded { uri } => {
                let record = ImageRecord::new(uri, self.ids.next_id());
                log::info!("📸 Added image {} ({})", record.id, record.uri);
                self.store.add(record);
                self.status = self.count_status();
            }
        }
    }

    fn count_status(&self) -> String {
        match self.store.len() {
            1 => "1 image in gallery.".to_string(),
            n => format!("{} images in gallery.", n),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let title = text(&self.config.title)
            .size(36)
            .color(Color::WHITE)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            });

        let pick = button("Pick Image")
            .padding(10)
            .on_press_maybe((!self.picking).then_some(Message::PickImage));

        let grid = ui::gallery::view(
            &self.store,
            self.config.columns(),
            self.config.thumbnail_size(),
        );

        let content: Column<Message> = column![title, pick, text(&self.status).size(16), grid]
            .spacing(20)
            .padding(20)
            .align_x(Alignment::Center);

        let mut screen = stack![container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)];

        if let Some(background) = &self.config.background {
            screen = stack![
                Image::new(Handle::from_path(background))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Cover),
                screen
            ];
        }

        match self.selection.selected() {
            Some(record) => stack![screen, ui::overlay::view(record)].into(),
            None => screen.into(),
        }
    }

    /// Escape is only routed while the overlay is up
    fn subscription(&self) -> Subscription<Message> {
        if self.selection.is_open() {
            keyboard::on_key_press(ui::overlay::dismiss_key)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(GalleryApp::title, GalleryApp::update, GalleryApp::view)
        .subscription(GalleryApp::subscription)
        .theme(GalleryApp::theme)
        .centered()
        .run_with(GalleryApp::new)
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the editor form to its collaborators (localization,
//! settings, the editing service) and translates the form's events into side
//! effects: native file dialogs, file reads and service calls.

pub mod config;
pub mod logging;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::EditingService;
use crate::application::submission;
use crate::domain::editing::ImageMediaType;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{HttpEditingService, UnavailableService};
use crate::media;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::editor_view::{self, component, ServiceStatus};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::widget::{text, Column};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    editor: component::Component,
    service: Arc<dyn EditingService>,
    service_status: ServiceStatus,
    theme_mode: ThemeMode,
    /// i18n key of a warning raised while loading settings.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("editor", &self.editor)
            .field("service_status", &self.service_status)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires the boot function to be `Fn`; flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the editing service for the resolved configuration.
///
/// A URL the HTTP adapter refuses does not abort start-up: the returned
/// stand-in reports the problem on every call, so it shows in the UI.
fn build_service(flags: &Flags, config: &Config) -> Arc<dyn EditingService> {
    let base_url = config::resolve_service_url(flags.service_url.as_deref(), config);

    match HttpEditingService::new(
        &base_url,
        &config.service.edit_path,
        &config.service.health_path,
    ) {
        Ok(service) => {
            tracing::info!(base_url = %service.base_url(), "editing service configured");
            Arc::new(service)
        }
        Err(err) => {
            tracing::error!(%base_url, error = %err, "editing service unusable");
            Arc::new(UnavailableService::new(err.to_string()))
        }
    }
}

impl App {
    /// Initializes application state from the CLI flags and the settings file,
    /// then checks the editing service health.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let service = build_service(&flags, &config);

        let (mut app, task) = Self::with_service(i18n, &config, service);
        app.startup_warning = config_warning;
        (app, task)
    }

    /// Builds the application around an already constructed service.
    pub fn with_service(
        i18n: I18n,
        config: &Config,
        service: Arc<dyn EditingService>,
    ) -> (Self, Task<Message>) {
        let app = App {
            i18n,
            editor: component::Component::new(),
            service: Arc::clone(&service),
            service_status: ServiceStatus::Checking,
            theme_mode: config.general.theme_mode,
            startup_warning: None,
        };

        let task = Task::perform(service.health(), Message::ServiceHealthChecked);
        (app, task)
    }

    #[must_use]
    pub fn editor(&self) -> &component::Component {
        &self.editor
    }

    #[must_use]
    pub fn service_status(&self) -> &ServiceStatus {
        &self.service_status
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(editor_message) => {
                let event = self.editor.update(editor_message);
                self.handle_editor_event(event)
            }
            Message::ServiceHealthChecked(result) => {
                self.service_status = match result {
                    Ok(()) => {
                        tracing::info!("editing service reachable");
                        ServiceStatus::Online
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "editing service unreachable");
                        ServiceStatus::Offline(err.to_string())
                    }
                };
                Task::none()
            }
        }
    }

    fn handle_editor_event(&mut self, event: component::Event) -> Task<Message> {
        match event {
            component::Event::None => Task::none(),
            component::Event::OpenFileDialog => {
                handle_open_file_dialog(self.i18n.tr("file-dialog-images"))
            }
            component::Event::LoadImage(path) => Task::perform(
                async move { media::load_selected_image(&path).await },
                |result| Message::Editor(component::Message::ImageLoaded(result)),
            ),
            component::Event::Submit(request) => Task::perform(
                submission::run(Arc::clone(&self.service), request),
                |outcome| Message::Editor(component::Message::SubmitCompleted(outcome)),
            ),
            component::Event::FetchPreview(reference) => {
                let download = self.service.fetch_image(&reference);
                Task::perform(download, move |result| {
                    Message::Editor(component::Message::PreviewLoaded { reference, result })
                })
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let editor = editor_view::view(editor_view::ViewContext {
            i18n: &self.i18n,
            component: &self.editor,
            service_status: &self.service_status,
        })
        .map(Message::Editor);

        match &self.startup_warning {
            Some(key) => Column::new()
                .spacing(spacing::XS)
                .padding(spacing::XS)
                .push(
                    text(self.i18n.tr(key))
                        .size(typography::CAPTION)
                        .style(styles::text::error),
                )
                .push(editor)
                .into(),
            None => editor,
        }
    }
}

/// Opens the native picker restricted to the accepted image types.
fn handle_open_file_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, ImageMediaType::EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path: Option<PathBuf>| Message::Editor(component::Message::ImagePicked(path)),
    )
}

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SubmitError;
use crate::ui::editor_view::component;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(component::Message),
    /// Outcome of the start-up health check of the editing service.
    ServiceHealthChecked(Result<(), SubmitError>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional editing service origin.
    /// Takes precedence over `PROMPT_EDITOR_SERVICE_URL` and the config file.
    pub service_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PROMPT_EDITOR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

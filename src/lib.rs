// SPDX-License-Identifier: MPL-2.0
//! `prompt_editor` is a small desktop client, built with the Iced GUI framework,
//! that sends an image plus a natural-language instruction to a remote editing
//! service and displays the edited result.
//!
//! The crate is layered the same way throughout:
//! - [`domain`]: value types for the selected image and the result reference
//! - [`application`]: the editing service port and the submit round trip
//! - [`infrastructure`]: the HTTP adapter for that port
//! - [`ui`]: the editor form (reducer, component, view) and styling
//! - [`app`]: the Iced application, configuration and logging

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

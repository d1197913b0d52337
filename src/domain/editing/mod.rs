// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for prompt-driven image editing:
//! - [`SelectedImage`]: The image chosen by the user, with its raw payload
//! - [`ImageMediaType`]: The media types accepted for upload
//! - [`ResultReference`]: The reference to an edited image returned by the service

pub mod newtypes;

pub use newtypes::{ImageMediaType, ResultReference, SelectedImage};

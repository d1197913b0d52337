// SPDX-License-Identifier: MPL-2.0
//! Image editing form: upload, instruction, submit and result preview.
//!
//! The form's data rules live in [`state`] as a plain reducer, the widget
//! glue in [`component`], rendering in [`view`].

pub mod component;
pub mod state;
mod view;

pub use component::{Component, Event, Message, Preview};
pub use state::{Action, EditorState, FormError};
pub use view::{view, ServiceStatus, ViewContext};

// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`editing`]: The remote editing service (edit, preview fetch, health)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no reqwest types)
//! - Traits are `Send + Sync` so one instance can be shared with background tasks
//! - Methods return boxed futures that callers hand to Iced's `Task::perform`
//!
//! # Example
//!
//! ```ignore
//! use prompt_editor::application::port::editing::{EditRequest, EditingService};
//!
//! async fn edit_once(service: &dyn EditingService, request: EditRequest) {
//!     match service.edit(request).await {
//!         Ok(response) => println!("edited: {}", response.reference),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

pub mod editing;

// Re-export main types for convenience
pub use editing::{EditRequest, EditResponse, EditingService, SubmitError};

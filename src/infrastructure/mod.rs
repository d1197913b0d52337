// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client.
//!
//! # Available Adapters
//!
//! - [`http`]: The remote editing service over HTTP (implements [`EditingService`])
//! - [`unavailable`]: Always-failing stand-in used when the service URL is unusable
//!
//! [`EditingService`]: crate::application::port::EditingService

pub mod http;
pub mod unavailable;

// Re-export main types for convenience
pub use http::HttpEditingService;
pub use unavailable::UnavailableService;

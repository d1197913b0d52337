// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports and use cases.
//!
//! This layer sits between the domain types and the infrastructure adapters.
//! It defines what the editor needs from the outside world without naming a
//! transport.
//!
//! # Modules
//!
//! - [`port`]: Trait definitions implemented by infrastructure adapters
//! - [`submission`]: The submit round trip, from request to outcome

pub mod port;
pub mod submission;

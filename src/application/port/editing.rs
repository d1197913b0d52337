// SPDX-License-Identifier: MPL-2.0
//! Editing service port definition.
//!
//! This module defines the [`EditingService`] trait for the external service
//! that turns an image plus an instruction into an edited image.

use crate::domain::editing::{ResultReference, SelectedImage};
use futures_util::future::BoxFuture;
use std::fmt;

/// Fallback shown when the service rejects a request without a readable detail.
pub const REJECTED_FALLBACK: &str = "Failed to edit image.";

/// Fallback shown when the round trip fails without any message.
pub const TRANSPORT_FALLBACK: &str = "Something went wrong while editing the image.";

/// Shown when a successful response carries no reference to the edited image.
pub const MISSING_REFERENCE_MESSAGE: &str = "The editing service did not return an edited image.";

// =============================================================================
// SubmitError
// =============================================================================

/// Errors that can end a submission round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The service answered with a non-success status.
    /// Carries the human-readable detail from the body, when there is one.
    Rejected(Option<String>),

    /// The request could not complete or the response could not be read.
    Transport(Option<String>),

    /// The service reported success but named no edited image.
    MissingReference,
}

impl SubmitError {
    /// Builds a rejection, treating an empty or blank detail as absent.
    #[must_use]
    pub fn rejected(detail: Option<String>) -> Self {
        Self::Rejected(detail.filter(|d| !d.trim().is_empty()))
    }

    /// Builds a transport failure, treating an empty message as absent.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(None)
        } else {
            Self::Transport(Some(message))
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected(Some(detail)) => f.write_str(detail),
            SubmitError::Rejected(None) => f.write_str(REJECTED_FALLBACK),
            SubmitError::Transport(Some(message)) => f.write_str(message),
            SubmitError::Transport(None) => f.write_str(TRANSPORT_FALLBACK),
            SubmitError::MissingReference => f.write_str(MISSING_REFERENCE_MESSAGE),
        }
    }
}

impl std::error::Error for SubmitError {}

// =============================================================================
// Request / Response
// =============================================================================

/// Everything one edit call sends: the raw image and the instruction as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub image: SelectedImage,
    /// Untrimmed; validation trims only to decide emptiness.
    pub instruction: String,
}

/// A successful edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResponse {
    pub reference: ResultReference,
}

// =============================================================================
// EditingService Trait
// =============================================================================

/// Port for the remote editing service.
///
/// The returned futures are `'static` so they can be moved into an Iced
/// `Task` without borrowing the service.
pub trait EditingService: Send + Sync {
    /// Sends one edit request.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the service rejects the request, the
    /// round trip fails, or the response names no edited image.
    fn edit(&self, request: EditRequest) -> BoxFuture<'static, Result<EditResponse, SubmitError>>;

    /// Downloads the bytes of an edited image for display.
    fn fetch_image(
        &self,
        reference: &ResultReference,
    ) -> BoxFuture<'static, Result<Vec<u8>, SubmitError>>;

    /// Checks that the service is reachable.
    fn health(&self) -> BoxFuture<'static, Result<(), SubmitError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_with_detail_displays_detail() {
        let err = SubmitError::rejected(Some("unsupported format".into()));
        assert_eq!(err.to_string(), "unsupported format");
    }

    #[test]
    fn rejected_without_detail_uses_fallback() {
        assert_eq!(SubmitError::rejected(None).to_string(), "Failed to edit image.");
        assert_eq!(
            SubmitError::rejected(Some("   ".into())),
            SubmitError::Rejected(None)
        );
    }

    #[test]
    fn transport_with_empty_message_uses_fallback() {
        let err = SubmitError::transport("");
        assert_eq!(err, SubmitError::Transport(None));
        assert_eq!(
            err.to_string(),
            "Something went wrong while editing the image."
        );
    }

    #[test]
    fn transport_keeps_message() {
        let err = SubmitError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn missing_reference_message() {
        assert_eq!(
            SubmitError::MissingReference.to_string(),
            MISSING_REFERENCE_MESSAGE
        );
    }
}

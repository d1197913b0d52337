// SPDX-License-Identifier: MPL-2.0
//! Editor form state and its transitions.
//!
//! The five fields of the form change only through [`EditorState::apply`], one
//! tagged [`Action`] at a time. The submit round trip is bracketed by
//! [`EditorState::begin_submission`] and [`EditorState::finish_submission`]:
//! the first validates and raises the in-flight flag, the second lowers it for
//! every outcome.

use crate::application::port::editing::{EditRequest, EditResponse, SubmitError};
use crate::domain::editing::{ResultReference, SelectedImage};
use std::fmt;

pub const MISSING_IMAGE_MESSAGE: &str = "Please upload an image to edit.";
pub const BLANK_INSTRUCTION_MESSAGE: &str = "Please provide instructions for editing.";
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Only PNG or JPEG images are supported.";

// =============================================================================
// FormError
// =============================================================================

/// The error line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submit pressed with no image selected.
    MissingImage,
    /// Submit pressed with an empty or whitespace-only instruction.
    BlankInstruction,
    /// A dropped file is not PNG or JPEG.
    UnsupportedFile,
    /// The chosen file could not be read.
    ReadFailed(String),
    /// The round trip to the editing service failed.
    Submit(SubmitError),
}

impl FormError {
    /// Returns the i18n message key for this error, or `None` when the text
    /// comes verbatim from the service or the transport.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            FormError::MissingImage => Some("error-missing-image"),
            FormError::BlankInstruction => Some("error-blank-instruction"),
            FormError::UnsupportedFile => Some("error-unsupported-file"),
            FormError::ReadFailed(_) => Some("error-read-failed"),
            FormError::Submit(SubmitError::Rejected(None)) => Some("error-edit-failed"),
            FormError::Submit(SubmitError::Transport(None)) => Some("error-unexpected"),
            FormError::Submit(SubmitError::MissingReference) => Some("error-missing-reference"),
            FormError::Submit(SubmitError::Rejected(Some(_)) | SubmitError::Transport(Some(_))) => {
                None
            }
        }
    }

    /// Technical detail to append after the localized message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            FormError::ReadFailed(detail) => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingImage => f.write_str(MISSING_IMAGE_MESSAGE),
            FormError::BlankInstruction => f.write_str(BLANK_INSTRUCTION_MESSAGE),
            FormError::UnsupportedFile => f.write_str(UNSUPPORTED_FILE_MESSAGE),
            FormError::ReadFailed(detail) => write!(f, "Could not read the image: {detail}"),
            FormError::Submit(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<SubmitError> for FormError {
    fn from(err: SubmitError) -> Self {
        FormError::Submit(err)
    }
}

// =============================================================================
// Action
// =============================================================================

/// One transition of the form state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the selected image and clear the error.
    SelectImage(SelectedImage),
    /// Replace the instruction verbatim.
    UpdateInstruction(String),
    /// Show an error without touching anything else.
    Reject(FormError),
    /// Clear the error and raise the in-flight flag.
    SubmitStart,
    /// Store the new result and lower the in-flight flag.
    SubmitSucceeded(ResultReference),
    /// Store the error, keep the previous result, lower the in-flight flag.
    SubmitFailed(FormError),
}

// =============================================================================
// EditorState
// =============================================================================

/// In-memory state of one editor form; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    selected_image: Option<SelectedImage>,
    instruction: String,
    is_submitting: bool,
    result: Option<ResultReference>,
    error: Option<FormError>,
}

impl EditorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one transition.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectImage(image) => {
                self.selected_image = Some(image);
                self.error = None;
            }
            Action::UpdateInstruction(text) => {
                self.instruction = text;
            }
            Action::Reject(error) => {
                self.error = Some(error);
            }
            Action::SubmitStart => {
                self.error = None;
                self.is_submitting = true;
            }
            Action::SubmitSucceeded(reference) => {
                self.result = Some(reference);
                self.is_submitting = false;
            }
            Action::SubmitFailed(error) => {
                self.error = Some(error);
                self.is_submitting = false;
            }
        }
    }

    /// Checks both required inputs, image first.
    ///
    /// # Errors
    ///
    /// [`FormError::MissingImage`] if no image is selected, otherwise
    /// [`FormError::BlankInstruction`] if the trimmed instruction is empty.
    pub fn validate(&self) -> Result<&SelectedImage, FormError> {
        let image = self.selected_image.as_ref().ok_or(FormError::MissingImage)?;
        if self.instruction.trim().is_empty() {
            return Err(FormError::BlankInstruction);
        }
        Ok(image)
    }

    /// Starts a submission if the inputs are valid.
    ///
    /// Returns the request to send, or `None` when nothing must be sent: either
    /// validation failed (the error is now set) or a request is already in
    /// flight (state unchanged).
    pub fn begin_submission(&mut self) -> Option<EditRequest> {
        if self.is_submitting {
            return None;
        }

        let request = match self.validate() {
            Ok(image) => EditRequest {
                image: image.clone(),
                instruction: self.instruction.clone(),
            },
            Err(error) => {
                self.apply(Action::Reject(error));
                return None;
            }
        };

        self.apply(Action::SubmitStart);
        Some(request)
    }

    /// Ends the current submission with its outcome.
    ///
    /// Always lowers the in-flight flag. Returns the new result reference on
    /// success so the caller can fetch the preview.
    pub fn finish_submission(
        &mut self,
        outcome: Result<EditResponse, SubmitError>,
    ) -> Option<ResultReference> {
        match outcome {
            Ok(response) => {
                self.apply(Action::SubmitSucceeded(response.reference.clone()));
                Some(response.reference)
            }
            Err(err) => {
                self.apply(Action::SubmitFailed(FormError::Submit(err)));
                None
            }
        }
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected_image.as_ref()
    }

    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether the submit control accepts a press.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }

    #[must_use]
    pub fn result(&self) -> Option<&ResultReference> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// The error line as plain English text, empty when there is no error.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Editor view component: message handling.
//!
//! [`Component::update`] never performs I/O itself. It changes the form state
//! and returns an [`Event`] describing the side effect the application should
//! run (open the picker, read a file, send the request, fetch the preview).

use super::state::{Action, EditorState, FormError};
use crate::application::port::editing::{EditRequest, EditResponse, SubmitError};
use crate::domain::editing::{ResultReference, SelectedImage};
use crate::error::Error;
use crate::media;
use iced::widget::{image, text_editor};
use std::fmt;
use std::path::PathBuf;

/// Messages emitted by the editor view.
#[derive(Debug, Clone)]
pub enum Message {
    /// The upload area was pressed.
    PickImage,
    /// The native picker closed; `None` when cancelled.
    ImagePicked(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The chosen file was read from disk.
    ImageLoaded(Result<SelectedImage, Error>),
    /// The instruction editor changed.
    InstructionEdited(text_editor::Action),
    /// The form was submitted.
    Submit,
    /// The editing service answered (or the transport gave up).
    SubmitCompleted(Result<EditResponse, SubmitError>),
    /// The edited image bytes arrived for display.
    PreviewLoaded {
        reference: ResultReference,
        result: Result<Vec<u8>, SubmitError>,
    },
}

/// Side effects requested from the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenFileDialog,
    LoadImage(PathBuf),
    Submit(EditRequest),
    FetchPreview(ResultReference),
}

/// Display state of the result pane.
#[derive(Debug, Clone, Default)]
pub enum Preview {
    /// No result yet: the placeholder is shown.
    #[default]
    Empty,
    Loading,
    Ready(image::Handle),
    /// The reference exists but its image could not be downloaded.
    Unavailable(String),
}

/// Editor view state: the form plus widget-only state.
#[derive(Default)]
pub struct Component {
    form: EditorState,
    instruction: text_editor::Content,
    preview: Preview,
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("form", &self.form)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

impl Component {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &EditorState {
        &self.form
    }

    #[must_use]
    pub fn instruction_content(&self) -> &text_editor::Content {
        &self.instruction
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Picked and dropped files share one gate: only PNG/JPEG paths are read.
    fn load_if_supported(&mut self, path: PathBuf) -> Event {
        if media::is_supported_upload(&path) {
            Event::LoadImage(path)
        } else {
            tracing::info!(path = %path.display(), "ignoring file with unsupported type");
            self.form.apply(Action::Reject(FormError::UnsupportedFile));
            Event::None
        }
    }

    /// Handles a message and returns the side effect to run.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PickImage => Event::OpenFileDialog,
            Message::ImagePicked(None) => Event::None,
            Message::ImagePicked(Some(path)) | Message::FileDropped(path) => {
                self.load_if_supported(path)
            }
            Message::ImageLoaded(Ok(image)) => {
                tracing::debug!(?image, "image selected");
                self.form.apply(Action::SelectImage(image));
                Event::None
            }
            Message::ImageLoaded(Err(err)) => {
                tracing::warn!(error = %err, "failed to read selected image");
                self.form
                    .apply(Action::Reject(FormError::ReadFailed(err.to_string())));
                Event::None
            }
            Message::InstructionEdited(action) => {
                let is_edit = action.is_edit();
                self.instruction.perform(action);
                if is_edit {
                    self.form
                        .apply(Action::UpdateInstruction(self.instruction.text()));
                }
                Event::None
            }
            Message::Submit => match self.form.begin_submission() {
                Some(request) => Event::Submit(request),
                None => Event::None,
            },
            Message::SubmitCompleted(outcome) => match self.form.finish_submission(outcome) {
                Some(reference) => {
                    self.preview = Preview::Loading;
                    Event::FetchPreview(reference)
                }
                None => Event::None,
            },
            Message::PreviewLoaded { reference, result } => {
                // A newer result may have replaced the one this download was for.
                if self.form.result() != Some(&reference) {
                    return Event::None;
                }
                self.preview = match result {
                    Ok(bytes) => Preview::Ready(image::Handle::from_bytes(bytes)),
                    Err(err) => {
                        tracing::warn!(%reference, error = %err, "failed to fetch edited image");
                        Preview::Unavailable(err.to_string())
                    }
                };
                Event::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editing::ImageMediaType;

    fn png() -> SelectedImage {
        SelectedImage::new("photo.png", ImageMediaType::Png, vec![0x89, b'P', b'N', b'G'])
    }

    fn with_image_and_instruction(instruction: &str) -> Component {
        let mut component = Component::new();
        component.update(Message::ImageLoaded(Ok(png())));
        component
            .form
            .apply(Action::UpdateInstruction(instruction.to_string()));
        component
    }

    #[test]
    fn pick_image_requests_dialog() {
        let mut component = Component::new();
        assert_eq!(component.update(Message::PickImage), Event::OpenFileDialog);
    }

    #[test]
    fn cancelled_picker_keeps_selection() {
        let mut component = with_image_and_instruction("x");
        assert_eq!(component.update(Message::ImagePicked(None)), Event::None);
        assert_eq!(component.form().selected_image(), Some(&png()));
    }

    #[test]
    fn picked_path_is_loaded() {
        let mut component = Component::new();
        let path = PathBuf::from("/tmp/photo.png");
        assert_eq!(
            component.update(Message::ImagePicked(Some(path.clone()))),
            Event::LoadImage(path)
        );
    }

    #[test]
    fn dropped_unsupported_file_sets_error() {
        let mut component = Component::new();
        let event = component.update(Message::FileDropped(PathBuf::from("clip.gif")));
        assert_eq!(event, Event::None);
        assert_eq!(component.form().error(), Some(&FormError::UnsupportedFile));
        assert!(component.form().selected_image().is_none());
    }

    #[test]
    fn dropped_png_is_loaded() {
        let mut component = Component::new();
        let path = PathBuf::from("holiday.PNG");
        assert_eq!(
            component.update(Message::FileDropped(path.clone())),
            Event::LoadImage(path)
        );
    }

    #[test]
    fn read_failure_keeps_previous_selection() {
        let mut component = with_image_and_instruction("x");
        component.update(Message::ImageLoaded(Err(Error::Io("permission denied".into()))));
        assert_eq!(component.form().selected_image(), Some(&png()));
        assert!(matches!(
            component.form().error(),
            Some(FormError::ReadFailed(detail)) if detail.contains("permission denied")
        ));
    }

    #[test]
    fn invalid_submit_issues_no_request() {
        let mut component = Component::new();
        assert_eq!(component.update(Message::Submit), Event::None);
        assert_eq!(
            component.form().error_message(),
            "Please upload an image to edit."
        );
    }

    #[test]
    fn valid_submit_issues_one_request_then_ignores_repeats() {
        let mut component = with_image_and_instruction("Replace the background with a beach at sunset.");

        let first = component.update(Message::Submit);
        assert!(matches!(first, Event::Submit(ref request)
            if request.instruction == "Replace the background with a beach at sunset."));
        assert!(!component.form().can_submit());

        assert_eq!(component.update(Message::Submit), Event::None);
    }

    #[test]
    fn success_requests_preview_and_stale_previews_are_dropped() {
        let mut component = with_image_and_instruction("edit");
        component.update(Message::Submit);

        let reference = ResultReference::new("https://example/x.png");
        let event = component.update(Message::SubmitCompleted(Ok(EditResponse {
            reference: reference.clone(),
        })));
        assert_eq!(event, Event::FetchPreview(reference.clone()));
        assert!(matches!(component.preview(), Preview::Loading));

        component.update(Message::PreviewLoaded {
            reference: ResultReference::new("https://example/old.png"),
            result: Ok(vec![1, 2, 3]),
        });
        assert!(matches!(component.preview(), Preview::Loading));

        component.update(Message::PreviewLoaded {
            reference,
            result: Err(SubmitError::transport("HTTP status: 404 Not Found")),
        });
        assert!(matches!(component.preview(), Preview::Unavailable(msg) if msg.contains("404")));
    }

    #[test]
    fn failed_submit_does_not_touch_preview() {
        let mut component = with_image_and_instruction("edit");
        component.update(Message::Submit);
        let event = component.update(Message::SubmitCompleted(Err(SubmitError::rejected(
            Some("unsupported format".into()),
        ))));

        assert_eq!(event, Event::None);
        assert!(matches!(component.preview(), Preview::Empty));
        assert_eq!(component.form().error_message(), "unsupported format");
        assert!(component.form().can_submit());
    }

    #[test]
    fn typed_instruction_reaches_request_verbatim() {
        let mut component = Component::new();
        component.update(Message::ImageLoaded(Ok(png())));
        component.update(Message::InstructionEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("  make it blue\n".to_string())),
        )));
        assert_eq!(component.form().instruction(), "  make it blue\n");

        let Event::Submit(request) = component.update(Message::Submit) else {
            panic!("a complete form should submit");
        };
        assert_eq!(request.instruction, "  make it blue\n");
    }

    #[test]
    fn picked_unsupported_file_sets_unsupported_error() {
        let mut component = with_image_and_instruction("x");
        let event = component.update(Message::ImagePicked(Some(PathBuf::from("scan.tiff"))));
        assert_eq!(event, Event::None);
        assert_eq!(component.form().error(), Some(&FormError::UnsupportedFile));
        assert_eq!(component.form().selected_image(), Some(&png()));
    }
}

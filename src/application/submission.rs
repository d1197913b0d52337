// SPDX-License-Identifier: MPL-2.0
//! The submit round trip.
//!
//! [`run`] sends exactly one request and always resolves to a `Result`, so the
//! caller's completion message is delivered on every exit path and the editor
//! can release its in-flight flag.

use crate::application::port::editing::{EditRequest, EditResponse, EditingService, SubmitError};
use std::sync::Arc;
use std::time::Instant;

/// Sends `request` through `service` once and logs how it ended.
///
/// # Errors
///
/// Passes through the [`SubmitError`] reported by the service.
pub async fn run(
    service: Arc<dyn EditingService>,
    request: EditRequest,
) -> Result<EditResponse, SubmitError> {
    let started = Instant::now();
    tracing::info!(
        file = request.image.name(),
        media_type = %request.image.media_type(),
        bytes = request.image.len(),
        instruction_chars = request.instruction.chars().count(),
        "submitting edit request"
    );

    let result = service.edit(request).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match &result {
        Ok(response) => {
            tracing::info!(reference = %response.reference, elapsed_ms, "edit succeeded");
        }
        Err(SubmitError::Rejected(detail)) => {
            tracing::warn!(detail = ?detail, elapsed_ms, "editing service rejected request");
        }
        Err(SubmitError::Transport(message)) => {
            tracing::warn!(message = ?message, elapsed_ms, "edit request failed");
        }
        Err(SubmitError::MissingReference) => {
            tracing::warn!(elapsed_ms, "editing service returned no edited image");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editing::{ImageMediaType, ResultReference, SelectedImage};
    use futures_util::future::{self, BoxFuture, FutureExt};
    use std::sync::Mutex;

    struct RecordingService {
        calls: Mutex<Vec<EditRequest>>,
        reply: Result<EditResponse, SubmitError>,
    }

    impl EditingService for RecordingService {
        fn edit(
            &self,
            request: EditRequest,
        ) -> BoxFuture<'static, Result<EditResponse, SubmitError>> {
            self.calls.lock().unwrap().push(request);
            future::ready(self.reply.clone()).boxed()
        }

        fn fetch_image(
            &self,
            _reference: &ResultReference,
        ) -> BoxFuture<'static, Result<Vec<u8>, SubmitError>> {
            future::ready(Ok(Vec::new())).boxed()
        }

        fn health(&self) -> BoxFuture<'static, Result<(), SubmitError>> {
            future::ready(Ok(())).boxed()
        }
    }

    fn request() -> EditRequest {
        EditRequest {
            image: SelectedImage::new("photo.png", ImageMediaType::Png, vec![0x89, b'P']),
            instruction: "  make it warmer ".to_string(),
        }
    }

    #[tokio::test]
    async fn run_sends_exactly_one_request_verbatim() {
        let service = Arc::new(RecordingService {
            calls: Mutex::new(Vec::new()),
            reply: Ok(EditResponse {
                reference: ResultReference::new("https://example/x.png"),
            }),
        });

        let result = run(service.clone(), request()).await;

        assert_eq!(
            result.map(|r| r.reference),
            Ok(ResultReference::new("https://example/x.png"))
        );
        let calls = service.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].instruction, "  make it warmer ");
        assert_eq!(calls[0].image.bytes(), &[0x89, b'P']);
    }

    #[tokio::test]
    async fn run_passes_errors_through() {
        let service = Arc::new(RecordingService {
            calls: Mutex::new(Vec::new()),
            reply: Err(SubmitError::rejected(Some("unsupported format".into()))),
        });

        let result = run(service, request()).await;

        assert_eq!(
            result,
            Err(SubmitError::Rejected(Some("unsupported format".into())))
        );
    }
}

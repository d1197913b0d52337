// SPDX-License-Identifier: MPL-2.0
//! Editing service stand-in for an unusable configuration.

use crate::application::port::editing::{EditRequest, EditResponse, EditingService, SubmitError};
use crate::domain::editing::ResultReference;
use futures_util::future::{self, BoxFuture, FutureExt};

/// Stand-in used when the configured service cannot be reached at all
/// (e.g. a malformed base URL). Every call fails with the same reason.
#[derive(Debug, Clone)]
pub struct UnavailableService {
    reason: String,
}

impl UnavailableService {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> SubmitError {
        SubmitError::transport(self.reason.clone())
    }
}

impl EditingService for UnavailableService {
    fn edit(&self, _request: EditRequest) -> BoxFuture<'static, Result<EditResponse, SubmitError>> {
        future::ready(Err(self.error())).boxed()
    }

    fn fetch_image(
        &self,
        _reference: &ResultReference,
    ) -> BoxFuture<'static, Result<Vec<u8>, SubmitError>> {
        future::ready(Err(self.error())).boxed()
    }

    fn health(&self) -> BoxFuture<'static, Result<(), SubmitError>> {
        future::ready(Err(self.error())).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_call_reports_the_reason() {
        let service = UnavailableService::new("Config Error: invalid service URL");
        let err = service.health().await.unwrap_err();
        assert_eq!(err.to_string(), "Config Error: invalid service URL");
        assert!(service
            .fetch_image(&ResultReference::new("/x.png"))
            .await
            .is_err());
    }
}

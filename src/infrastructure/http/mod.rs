// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the [`EditingService`] port.
//!
//! The edit call is a `multipart/form-data` POST with two parts:
//! - `file`: the raw image bytes, with the original file name and MIME type
//! - `prompt`: the instruction exactly as typed
//!
//! A successful response is JSON carrying `edited_image_url`. A failed one may
//! carry a `detail` field, either a string or a list of `{ "msg": ... }`
//! objects. Interpretation of `(status, body)` is kept in pure functions so it
//! can be tested without a server.
//!
//! No timeout and no retry: a request lives until the transport reports an
//! outcome.
//!
//! [`EditingService`]: crate::application::port::EditingService

use crate::application::port::editing::{EditRequest, EditResponse, EditingService, SubmitError};
use crate::domain::editing::ResultReference;
use crate::error::{Error, Result};
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::multipart::{Form, Part};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("PromptEditor/", env!("CARGO_PKG_VERSION"));

/// Body shape of a successful edit.
#[derive(Debug, Deserialize)]
struct EditSuccessBody {
    #[serde(default)]
    edited_image_url: Option<String>,
}

/// Editing service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEditingService {
    client: reqwest::Client,
    base_url: Url,
    edit_path: String,
    health_path: String,
}

impl HttpEditingService {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is not an absolute URL, or
    /// [`Error::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, edit_path: &str, health_path: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid service URL '{base_url}': {e}")))?;

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            edit_path: edit_path.to_string(),
            health_path: health_path.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the edit endpoint.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the configured path cannot be joined.
    pub fn edit_url(&self) -> std::result::Result<Url, SubmitError> {
        join(&self.base_url, &self.edit_path)
    }

    /// Resolves a result reference for downloading.
    ///
    /// Absolute references are used as-is; relative ones (e.g.
    /// `/edited_image/edited_ab12.png`) are appended to the service base URL.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the reference cannot form a URL.
    pub fn resolve(&self, reference: &ResultReference) -> std::result::Result<Url, SubmitError> {
        if reference.is_absolute() {
            Url::parse(reference.as_str()).map_err(|e| SubmitError::transport(e.to_string()))
        } else {
            join(&self.base_url, reference.as_str())
        }
    }
}

impl EditingService for HttpEditingService {
    fn edit(
        &self,
        request: EditRequest,
    ) -> BoxFuture<'static, std::result::Result<EditResponse, SubmitError>> {
        let client = self.client.clone();
        let url = self.edit_url();

        async move {
            let url = url?;
            let form = build_form(&request)?;
            tracing::debug!(%url, "posting edit form");

            let response = client
                .post(url)
                .multipart(form)
                .send()
                .await
                .map_err(|e| SubmitError::transport(e.to_string()))?;

            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| SubmitError::transport(e.to_string()))?;

            interpret_edit_response(status, &body)
        }
        .boxed()
    }

    fn fetch_image(
        &self,
        reference: &ResultReference,
    ) -> BoxFuture<'static, std::result::Result<Vec<u8>, SubmitError>> {
        let client = self.client.clone();
        let url = self.resolve(reference);

        async move {
            let url = url?;
            tracing::debug!(%url, "fetching edited image");

            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| SubmitError::transport(e.to_string()))?;

            if !response.status().is_success() {
                return Err(SubmitError::transport(format!(
                    "HTTP status: {}",
                    response.status()
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| SubmitError::transport(e.to_string()))?;
            Ok(bytes.to_vec())
        }
        .boxed()
    }

    fn health(&self) -> BoxFuture<'static, std::result::Result<(), SubmitError>> {
        let client = self.client.clone();
        let url = join(&self.base_url, &self.health_path);

        async move {
            let url = url?;
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| SubmitError::transport(e.to_string()))?;

            if response.status().is_success() {
                Ok(())
            } else {
                Err(SubmitError::transport(format!(
                    "HTTP status: {}",
                    response.status()
                )))
            }
        }
        .boxed()
    }
}

/// Appends `path` to the base URL's own path, so a base mounted under a
/// prefix (e.g. `http://host/editor`) keeps that prefix.
fn join(base: &Url, path: &str) -> std::result::Result<Url, SubmitError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let directory = format!("{}/", base.path());
        base.set_path(&directory);
    }
    base.join(path.trim_start_matches('/'))
        .map_err(|e| SubmitError::transport(format!("invalid URL '{path}': {e}")))
}

/// Builds the two-part upload form.
fn build_form(request: &EditRequest) -> std::result::Result<Form, SubmitError> {
    let image = &request.image;
    let file = Part::bytes(image.bytes().to_vec())
        .file_name(image.name().to_string())
        .mime_str(image.media_type().mime())
        .map_err(|e| SubmitError::transport(e.to_string()))?;

    Ok(Form::new()
        .part("file", file)
        .text("prompt", request.instruction.clone()))
}

/// Maps a finished edit response onto the editor's outcome.
///
/// # Errors
///
/// - non-success status: [`SubmitError::Rejected`] with the body's detail, if any
/// - success with an unreadable body: [`SubmitError::Transport`] with the parse error
/// - success without a reference: [`SubmitError::MissingReference`]
pub fn interpret_edit_response(
    status: StatusCode,
    body: &[u8],
) -> std::result::Result<EditResponse, SubmitError> {
    if !status.is_success() {
        return Err(SubmitError::rejected(extract_detail(body)));
    }

    let parsed: EditSuccessBody =
        serde_json::from_slice(body).map_err(|e| SubmitError::transport(e.to_string()))?;

    match parsed.edited_image_url {
        Some(url) if !url.is_empty() => Ok(EditResponse {
            reference: ResultReference::new(url),
        }),
        _ => Err(SubmitError::MissingReference),
    }
}

/// Reads the human-readable `detail` of a failure body.
///
/// Accepts a plain string or a list of validation entries with a `msg` each.
#[must_use]
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

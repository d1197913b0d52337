// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Editing Service Defaults
// ==========================================================================

/// Default origin of the editing service.
pub const DEFAULT_SERVICE_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default path of the edit endpoint, relative to the service origin.
pub const DEFAULT_EDIT_PATH: &str = "/api/edit";

/// Default path of the health endpoint, relative to the service origin.
pub const DEFAULT_HEALTH_PATH: &str = "/api/health";

/// Environment variable overriding the configured service origin.
pub const ENV_SERVICE_URL: &str = "PROMPT_EDITOR_SERVICE_URL";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_are_rooted() {
        assert!(DEFAULT_EDIT_PATH.starts_with('/'));
        assert!(DEFAULT_HEALTH_PATH.starts_with('/'));
    }

    #[test]
    fn default_base_url_has_scheme() {
        assert!(DEFAULT_SERVICE_BASE_URL.starts_with("http://"));
    }
}

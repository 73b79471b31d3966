//! API response types for server actions.

use serde::{Deserialize, Serialize};

use crate::domain::null_as_default;

/// Body of `GET /v1/server/{id}/restart`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebootResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Decoded restart response together with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartOutcome {
    pub status_code: u16,
    pub response: RebootResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reboot_response_null_message() {
        let response: RebootResponse =
            serde_json::from_str(r#"{"status": true, "message": null}"#).unwrap();
        assert!(response.status);
        assert_eq!(response.message, "");
    }
}

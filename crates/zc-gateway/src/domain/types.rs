//! Request/response types and input validation.

use serde::{Deserialize, Serialize};
use zc_history::HistoryEntry;

use super::config::LimitsConfig;
use super::error::ApiError;

/// POST body for `/api/convert`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertRequest {
    /// The string to convert; a missing field is treated as empty input.
    #[serde(default)]
    pub input_string: Option<String>,
}

/// Query parameters for GET `/api/convert`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertQuery {
    /// The string to convert.
    #[serde(default)]
    pub input_string: Option<String>,
}

/// Successful conversion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    /// The input as accepted (trimmed).
    pub input: String,
    /// The z-chain result sequence.
    pub result: Vec<u64>,
}

/// Response body for `/api/history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Recorded conversions, oldest first.
    pub history: Vec<HistoryEntry>,
}

/// Trim and validate a raw input string.
///
/// Rules, checked in order: present and non-empty after trimming, at most
/// `max_input_len` characters, ASCII only. The returned string is the
/// trimmed form that the transformation and the history record both use.
pub fn validate_input(raw: Option<&str>, limits: &LimitsConfig) -> Result<String, ApiError> {
    let input = raw.map(str::trim).unwrap_or_default();

    if input.is_empty() {
        return Err(ApiError::bad_request("Input string is required"));
    }
    if input.chars().count() > limits.max_input_len {
        return Err(ApiError::bad_request("Input string is too long"));
    }
    if !input.is_ascii() {
        return Err(ApiError::bad_request(
            "Input string contains invalid characters",
        ));
    }

    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn limits() -> LimitsConfig {
        LimitsConfig::default()
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(validate_input(Some("  z_a \n"), &limits()).unwrap(), "z_a");
    }

    #[test]
    fn test_missing_and_blank_are_required_errors() {
        for raw in [None, Some(""), Some("   ")] {
            let err = validate_input(raw, &limits()).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.detail, "Input string is required");
        }
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        let at_limit = "a".repeat(1000);
        assert!(validate_input(Some(&at_limit), &limits()).is_ok());

        let over = "a".repeat(1001);
        let err = validate_input(Some(&over), &limits()).unwrap_err();
        assert_eq!(err.detail, "Input string is too long");
    }

    #[test]
    fn test_non_ascii_rejected() {
        let err = validate_input(Some("zé"), &limits()).unwrap_err();
        assert_eq!(err.detail, "Input string contains invalid characters");
    }

    #[test]
    fn test_length_is_checked_before_ascii() {
        // An oversized non-ASCII input reports the length problem, matching
        // the validation order of the service contract.
        let raw = "é".repeat(1001);
        let err = validate_input(Some(&raw), &limits()).unwrap_err();
        assert_eq!(err.detail, "Input string is too long");
    }
}

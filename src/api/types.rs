// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CatalogStats;

// Password generation types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Approximate password length (default: 16, accepted range: 8-50)
    pub length: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (only present on success)
    pub password: Option<String>,
    /// Actual length of the generated password
    pub length: Option<usize>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(password: String) -> Self {
        let length = password.len();
        Self {
            success: true,
            password: Some(password),
            length: Some(length),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            length: None,
            error: Some(message.into()),
        }
    }
}

// Catalog types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Word catalog distribution
    pub catalog: Option<CatalogStats>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// System types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    /// Whether the operation was successful
    pub success: bool,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Seconds since the service started
    pub uptime_secs: u64,
    /// Number of words available to the composer
    pub catalog_words: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LogListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Matching log entries, oldest first
    pub logs: Vec<crate::logging::LogEntry>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_carries_password_and_length() {
        let response = GenerateResponse::ok("Mountain!4821".to_string());
        assert!(response.success);
        assert_eq!(response.length, Some(13));
        assert!(response.error.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["password"], "Mountain!4821");
        assert_eq!(json["length"], 13);
    }

    #[test]
    fn test_err_response_carries_message() {
        let response = GenerateResponse::err("Password length must be between 8 and 50");
        assert!(!response.success);
        assert!(response.password.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Password length must be between 8 and 50");
    }
}

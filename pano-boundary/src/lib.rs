use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyStatus {
    Valid,
    Invalid,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Running,
    Healthy,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Service metadata, returned by the root endpoint.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ApiInfo {
    pub api: String,
    pub status: ServiceStatus,
    pub api_key_status: ApiKeyStatus,
    /// Path → description
    pub endpoints: BTreeMap<String, String>,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Health {
    pub status: ServiceStatus,
    pub api_key_status: ApiKeyStatus,
    pub timestamp: String,
}

/// A successfully discovered and stored location.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RandomLocation {
    pub status: ResponseStatus,
    pub timestamp: String,
    /// ID of the stored panorama record
    pub reference: String,
}

impl RandomLocation {
    pub fn new(reference: String, timestamp: String) -> Self {
        Self {
            status: ResponseStatus::Success,
            timestamp,
            reference,
        }
    }
}

/// The uniform error envelope.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub status: ResponseStatus,
    pub message: String,
    pub timestamp: String,
}

impl Error {
    pub fn new(message: String, timestamp: String) -> Self {
        Self {
            status: ResponseStatus::Error,
            message,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_error_envelope() {
        let err = Error::new("boom".into(), "2024-03-09 15:25:42".into());
        assert_eq!(
            json!({"status": "error", "message": "boom", "timestamp": "2024-03-09 15:25:42"}),
            serde_json::to_value(&err).unwrap()
        );
    }

    #[test]
    fn serialize_random_location() {
        let loc = RandomLocation::new("abc".into(), "2024-03-09 15:25:42".into());
        assert_eq!(
            json!({"status": "success", "timestamp": "2024-03-09 15:25:42", "reference": "abc"}),
            serde_json::to_value(&loc).unwrap()
        );
    }

    #[test]
    fn serialize_health() {
        let health = Health {
            status: ServiceStatus::Healthy,
            api_key_status: ApiKeyStatus::Invalid,
            timestamp: "2024-03-09 15:25:42".into(),
        };
        assert_eq!(
            json!({"status": "healthy", "api_key_status": "invalid", "timestamp": "2024-03-09 15:25:42"}),
            serde_json::to_value(&health).unwrap()
        );
    }
}

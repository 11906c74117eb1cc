use std::fmt;

use strum::{AsRefStr, Display};

/// A secret credential for an external provider.
///
/// The [`fmt::Debug`] and [`fmt::Display`] implementations
/// only reveal the first and last four characters.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn masked(&self) -> String {
        let key = &self.0;
        if key.chars().count() > 8 {
            let prefix: String = key.chars().take(4).collect();
            let suffix: String = key.chars().skip(key.chars().count() - 4).collect();
            format!("{prefix}...{suffix}")
        } else {
            "****...****".to_string()
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Result of validating the provider credential at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ApiKeyStatus {
    Valid,
    Invalid,
}

impl ApiKeyStatus {
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_long_keys() {
        let key = ApiKey::new("AIzaSyB-1234567890-wxyz");
        assert_eq!("AIza...wxyz", key.masked());
        assert_eq!("AIza...wxyz", key.to_string());
        assert_eq!("ApiKey(\"AIza...wxyz\")", format!("{key:?}"));
    }

    #[test]
    fn mask_short_keys_completely() {
        assert_eq!("****...****", ApiKey::new("12345678").masked());
        assert_eq!("****...****", ApiKey::new("").masked());
    }

    #[test]
    fn api_key_status_as_str() {
        assert_eq!("valid", ApiKeyStatus::Valid.as_ref());
        assert_eq!("invalid", ApiKeyStatus::Invalid.to_string());
        assert!(ApiKeyStatus::Valid.is_valid());
        assert!(!ApiKeyStatus::Invalid.is_valid());
    }
}

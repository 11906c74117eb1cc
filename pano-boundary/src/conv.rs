use super::*;
use pano_entities as e;

impl From<e::api_key::ApiKeyStatus> for ApiKeyStatus {
    fn from(from: e::api_key::ApiKeyStatus) -> Self {
        use e::api_key::ApiKeyStatus as E;
        match from {
            E::Valid => Self::Valid,
            E::Invalid => Self::Invalid,
        }
    }
}

// OAuth 2.0 for server to server applications:
// <https://developers.google.com/identity/protocols/oauth2/service-account>

use std::time::Duration;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use parking_lot::Mutex;
use pano_core::entities::Timestamp;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{credentials::ServiceAccount, Error};

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

// Refresh tokens a little before they expire.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct AccessToken {
    token: String,
    expires_at: i64,
}

/// Fetches and caches access tokens for a service account.
pub struct TokenProvider {
    account: ServiceAccount,
    encoding_key: EncodingKey,
    timeout: Duration,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn try_new(account: ServiceAccount, timeout: Duration) -> Result<Self, Error> {
        let encoding_key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())?;
        Ok(Self {
            account,
            encoding_key,
            timeout,
            cached: Mutex::new(None),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.account.project_id
    }

    pub fn access_token(&self, client: &Client) -> Result<String, Error> {
        let now = Timestamp::now().as_secs();
        let mut cached = self.cached.lock();
        if let Some(token) = cached.as_ref() {
            if token.expires_at - EXPIRY_MARGIN_SECS > now {
                return Ok(token.token.clone());
            }
        }
        let token = self.request_token(client, now)?;
        let access_token = token.token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    fn assertion(&self, now: i64) -> Result<String, Error> {
        let claims = Claims {
            iss: &self.account.client_email,
            scope: DATASTORE_SCOPE,
            aud: &self.account.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let jwt = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)?;
        Ok(jwt)
    }

    fn request_token(&self, client: &Client, now: i64) -> Result<AccessToken, Error> {
        log::debug!("Requesting access token for {}", self.account.client_email);
        let assertion = self.assertion(now)?;
        let TokenResponse {
            access_token,
            expires_in,
        } = client
            .post(&self.account.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .timeout(self.timeout)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(AccessToken {
            token: access_token,
            expires_at: now + expires_in,
        })
    }
}

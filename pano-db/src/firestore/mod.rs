//! Cloud Firestore document store accessed through its REST API.

use std::{io, time::Duration};

use pano_core::{entities::*, repositories as repo};
use reqwest::{blocking::Client, StatusCode};
use thiserror::Error;

use crate::PANORAMA_COLLECTION;

mod credentials;
mod document;
mod token;

pub use self::credentials::ServiceAccount;
use self::{document::CommitRequest, token::TokenProvider};

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read credentials from {path}: {source}")]
    Credentials { path: String, source: io::Error },
    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(#[source] serde_json::Error),
    #[error("Invalid private key: {0}")]
    PrivateKey(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl From<Error> for repo::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Http(err) if err.status() == Some(StatusCode::CONFLICT) => Self::AlreadyExists,
            Error::Http(err) => Self::Connection(err.to_string()),
            Error::Credentials { .. } | Error::InvalidCredentials(_) | Error::PrivateKey(_) => {
                Self::Other(err.into())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub base_url: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: PANORAMA_COLLECTION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct Firestore {
    config: FirestoreConfig,
    tokens: TokenProvider,
    client: Client,
}

impl Firestore {
    pub fn try_new(account: ServiceAccount, config: FirestoreConfig) -> Result<Self, Error> {
        let tokens = TokenProvider::try_new(account, config.timeout)?;
        let client = Client::builder().build()?;
        log::info!(
            "Using Firestore database {} of project {}",
            config.database,
            tokens.project_id()
        );
        Ok(Self {
            config,
            tokens,
            client,
        })
    }

    fn database_path(&self) -> String {
        format!(
            "projects/{}/databases/{}",
            self.tokens.project_id(),
            self.config.database
        )
    }

    fn document_name(&self, id: &Id) -> String {
        format!(
            "{}/documents/{}/{id}",
            self.database_path(),
            self.config.collection
        )
    }

    fn commit(&self, request: &CommitRequest) -> Result<(), Error> {
        let access_token = self.tokens.access_token(&self.client)?;
        let url = format!(
            "{}/{}/documents:commit",
            self.config.base_url,
            self.database_path()
        );
        self.client
            .post(url)
            .bearer_auth(access_token)
            .json(request)
            .timeout(self.config.timeout)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

impl repo::PanoramaRepo for Firestore {
    fn create_panorama(&self, record: NewPanoramaRecord) -> Result<DocumentRef, repo::Error> {
        let id = record.id.clone();
        let request = CommitRequest::create_panorama(self.document_name(&id), record);
        self.commit(&request).inspect_err(|err| {
            log::error!("Unable to store panorama {id} in Firestore: {err}");
        })?;
        Ok(DocumentRef::new(&self.config.collection, id))
    }
}

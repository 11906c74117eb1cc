// Low-level document store access traits.
// Records are only ever created; there are
// no update or delete paths.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The object already exists")]
    AlreadyExists,
    #[error("Unable to connect to the document store: {0}")]
    Connection(String),
    #[error("Unable to encode the document: {0}")]
    Encoding(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PanoramaRepo {
    /// Writes a new record into the panorama collection.
    ///
    /// The creation timestamp is assigned by the store.
    fn create_panorama(&self, record: NewPanoramaRecord) -> Result<DocumentRef>;
}

impl<T> PanoramaRepo for &T
where
    T: PanoramaRepo + ?Sized,
{
    fn create_panorama(&self, record: NewPanoramaRecord) -> Result<DocumentRef> {
        (**self).create_panorama(record)
    }
}

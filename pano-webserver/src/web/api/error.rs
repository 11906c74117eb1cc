use pano_core::usecases::Error as UsecaseError;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    tokio::task::JoinError,
};
use thiserror::Error;

use super::json_error_response;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Google Maps API key validation failed. Please check your API key configuration.")]
    InvalidApiKey,
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("The discovery task was aborted: {0}")]
    Task(#[from] JoinError),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match &self {
            Error::InvalidApiKey => {
                warn!("Rejected discovery request: {self}");
            }
            Error::Usecase(UsecaseError::NoCoverageFound { .. }) => {
                warn!("{self}");
            }
            Error::Usecase(_) | Error::Task(_) => {
                error!("Error in random location: {self}");
            }
        }
        json_error_response(req, &self, Status::InternalServerError)
    }
}

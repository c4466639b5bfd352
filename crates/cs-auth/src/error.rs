use cs_db::StoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No active session {location}")]
    NoActiveSession { location: ErrorLocation },

    #[error("Store error: {source} {location}")]
    Store {
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Session persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn no_active_session() -> Self {
        Self::NoActiveSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code for client-side rendering
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoActiveSession { .. } => "NO_ACTIVE_SESSION",
            Self::Store { source, .. } => source.code(),
            Self::Persistence { .. } => "PERSISTENCE",
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;

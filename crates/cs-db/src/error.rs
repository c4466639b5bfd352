use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KvError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for KvError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type KvResult<T> = StdResult<T, KvError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("A user with email {email} already exists {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("User not found {location}")]
    UserNotFound { location: ErrorLocation },

    #[error("Invalid credential {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found() -> Self {
        Self::UserNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credential() -> Self {
        Self::InvalidCredential {
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
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::InvalidCredential { .. } => "INVALID_CREDENTIAL",
            Self::Persistence { .. } => "PERSISTENCE",
        }
    }
}

impl From<KvError> for StoreError {
    #[track_caller]
    fn from(source: KvError) -> Self {
        Self::Persistence {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, StoreError>;

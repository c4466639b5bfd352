use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Kv(#[from] cs_db::KvError),

    #[error("Store error: {0}")]
    Store(#[from] cs_db::StoreError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to initialize the session store table.
    #[error(transparent)]
    Sqlx(#[from] sea_orm::SqlxError),
}

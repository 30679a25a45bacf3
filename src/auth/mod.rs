//! Client-side session state
//!
//! Holds the bearer token and user profile between runs and decides,
//! without calling any server, whether the user counts as signed in.

pub mod models;
pub mod session;
pub mod store;
pub mod token;

use thiserror::Error;

pub use models::UserRecord;
pub use session::{AuthSession, AuthStatus, LANDING_PATH, TOKEN_KEY, USER_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use token::is_token_valid;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Session expired")]
    Expired,

    #[error("IO error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not determine data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, AuthError>;

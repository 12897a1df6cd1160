use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in, run `medlog auth login`")]
    NotAuthenticated,

    #[error("session expired, run `medlog auth login` again")]
    SessionExpired,

    #[error("token decode failed: {0}")]
    TokenDecode(String),

    #[error("state store error: {0}")]
    StateStoreError(String),
}

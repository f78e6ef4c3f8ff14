use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider not initialized")]
    NotInitialized,

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("identity should not be empty")]
    MissingIdentity,

    #[error("login failed: {0}")]
    LoginFailed(String),

    #[error("auth client error: {0}")]
    AuthClient(String),

    #[error("ledger undefined")]
    LedgerUnavailable,

    #[error("transfer failed: {0}")]
    Transfer(String),

    #[error("unknown provider type: {0}")]
    UnknownProvider(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("type error: {0}")]
    Type(#[from] icl_types::TypeError),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

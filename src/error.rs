use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppErrors {
    // -- General error
    #[error("Error: {0}")]
    Error(String),

    #[error("Can't set tracing Global Default")]
    SetGlobalDefaultError(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Can't set the logger")]
    SetLoggerError(#[from] tracing_log::log::SetLoggerError),

    // -- Authorisation
    #[error("no access token configured - run `openbanking-cli config set --token <TOKEN>` first")]
    TokenNotConfigured,

    #[error("the stored access token has expired - obtain a fresh token and run `openbanking-cli config set`")]
    TokenExpired,

    #[error("authentication failed: {0}")]
    AuthenticationFailure(String),

    #[error("not authorised: {0}")]
    AuthorisationFailure(String),

    // -- API error
    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limited by the API - wait before retrying")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unexpected response: {0}")]
    ResponseError(String),

    #[error("invalid header value {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    // -- File error
    #[error("Failed to open file")]
    FileError(#[from] std::io::Error),

    #[error("Failed to serialise toml")]
    TomlError(#[from] toml::ser::Error),

    #[error("Failed to deserialise toml")]
    TomlDeError(#[from] toml::de::Error),

    #[error("Failed to serialise JSON")]
    JsonError(#[from] serde_json::Error),

    // -- Command error
    #[error("Input error")]
    InputError(#[from] dialoguer::Error),
}

// A request that never produced a response is a transport failure; an error
// raised while building the request never left the process.
impl From<reqwest::Error> for AppErrors {
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            AppErrors::InvalidRequest(error.to_string())
        } else {
            AppErrors::NetworkError(error.to_string())
        }
    }
}

impl From<url::ParseError> for AppErrors {
    fn from(error: url::ParseError) -> Self {
        AppErrors::InvalidRequest(error.to_string())
    }
}

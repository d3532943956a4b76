use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

/// What the user sees when a search goes wrong. Only backend-reported
/// failures surface their own message; transport problems collapse into one
/// generic line so stack detail never reaches the modal.
pub(crate) const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";
pub(crate) const SEARCH_FAILED_MESSAGE: &str = "Search failed";
pub(crate) const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("can't search an empty query")]
    EmptyQuery,
    #[error("search service reported: {0}")]
    Search(String),
    #[error("request timed out")]
    Timeout,
    #[error("system error {0}")]
    System(#[from] SystemError),
}

impl AppError {
    /// Message shown in the error modal. Root causes of system errors are
    /// logged by the caller, never displayed.
    pub(crate) fn user_message(&self) -> String {
        match self {
            AppError::EmptyQuery => EMPTY_QUERY_MESSAGE.to_string(),
            AppError::Search(message) => message.clone(),
            AppError::Timeout | AppError::System(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Wraps the non-clonable transport error types behind an `Rc` so `AppError`
/// stays cheap to pass through signals and callbacks.
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(feature = "ssr")]
    HttpError(Rc<reqwest::Error>),
    #[cfg(not(feature = "ssr"))]
    FetchError(Rc<gloo_net::Error>),
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::HttpError(Rc::new(value))
    }
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::System(value.into())
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::FetchError(Rc::new(value))
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::System(value.into())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(feature = "ssr")]
            SystemError::HttpError(http) => write!(f, "{}", http),
            #[cfg(not(feature = "ssr"))]
            SystemError::FetchError(fetch) => write!(f, "{}", fetch),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(feature = "ssr")]
            SystemError::HttpError(http) => Some(http.as_ref()),
            #[cfg(not(feature = "ssr"))]
            SystemError::FetchError(fetch) => Some(fetch.as_ref()),
        }
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("transport failure: {0}")]
    TransportFailure(String),
    #[error("empty response body")]
    EmptyResponseBody,
    #[error("malformed response body: {0}")]
    MalformedResponseBody(String),
}

impl FetchError {
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, FetchError::TransportFailure(_))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterOptionError {
    #[error("unknown {category} option: {name}")]
    Unknown {
        category: crate::FilterCategory,
        name: String,
    },
}

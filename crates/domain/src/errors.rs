use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Query message too large: {0}")]
    MessageTooLarge(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Transport failure: {0}")]
    TransportFailure(String),
}

//! Error taxonomy for proxy record construction

use thiserror::Error;

/// Reasons a proxy record cannot be constructed.
///
/// Every decoder and the validator stop at the first violated condition and
/// return exactly one of these. The Display strings are the user-facing
/// descriptions and are meant to be shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ProxyError {
    #[error("Invalid type")]
    InvalidType,
    #[error("Invalid name")]
    InvalidName,
    #[error("Invalid host")]
    InvalidHost,
    #[error("Invalid port")]
    InvalidPort,
    #[error("Invalid encryption")]
    InvalidAuthScheme,
    #[error("Name already exists")]
    NameAlreadyExists,
    #[error("Invalid uri")]
    InvalidUri,
    #[error("Invalid password")]
    InvalidPassword,
}

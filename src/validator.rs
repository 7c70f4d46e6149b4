//! Structural and semantic checks run before a record may be stored.

use crate::error::ProxyError;
use crate::models::{ProxyRecord, ProxyType};
use crate::store::RecordStore;

pub const MAX_PORT: i64 = u16::MAX as i64;

/// Check a record against its invariants, returning the first failure.
///
/// Checks run in a fixed order: type, non-empty name, name uniqueness (via
/// `name_exists`), non-empty host, port range, then kind-specific fields.
/// `name_exists` is the only lookup performed.
pub fn validate<F>(record: &ProxyRecord, name_exists: F) -> Result<(), ProxyError>
where
    F: Fn(&str) -> bool,
{
    // `kind` is a closed enum; unknown type strings are rejected with
    // `InvalidType` where they are parsed.
    if record.name.is_empty() {
        return Err(ProxyError::InvalidName);
    }
    if name_exists(&record.name) {
        return Err(ProxyError::NameAlreadyExists);
    }
    if record.host.is_empty() {
        return Err(ProxyError::InvalidHost);
    }
    if !(record.port > 0 && record.port <= MAX_PORT) {
        return Err(ProxyError::InvalidPort);
    }
    match record.kind {
        ProxyType::Shadowsocks => {
            if record.auth_scheme.is_none() {
                return Err(ProxyError::InvalidAuthScheme);
            }
        }
        ProxyType::Https | ProxyType::Socks5 | ProxyType::None => {}
    }
    Ok(())
}

/// Validate against the proxy namespace of a store.
pub fn validate_in<S>(record: &ProxyRecord, store: &S) -> Result<(), ProxyError>
where
    S: RecordStore + ?Sized,
{
    validate(record, |name| store.proxy_name_exists(name))
}

use crate::error::ProxyError;
use crate::models::{ProxyDictionary, ProxyRecord, ProxyType};

/// Parse a plain key/value map into a proxy record
///
/// All six keys are required whatever the `type`:
///
/// | key          | error when missing or malformed |
/// |--------------|---------------------------------|
/// | `name`       | `InvalidName`                   |
/// | `host`       | `InvalidHost`                   |
/// | `type`       | `InvalidType`                   |
/// | `port`       | `InvalidPort`                   |
/// | `encryption` | `InvalidAuthScheme`             |
/// | `password`   | `InvalidPassword`               |
///
/// Values are taken verbatim; only `type` and `port` are parsed. Extra keys
/// are ignored.
pub fn decode_fields(fields: &ProxyDictionary) -> Result<ProxyRecord, ProxyError> {
    let name = fields.get("name").ok_or(ProxyError::InvalidName)?;
    let host = fields.get("host").ok_or(ProxyError::InvalidHost)?;
    let kind = fields
        .get("type")
        .ok_or(ProxyError::InvalidType)?
        .parse::<ProxyType>()?;
    let port = fields
        .get("port")
        .and_then(|p| p.parse::<i64>().ok())
        .ok_or(ProxyError::InvalidPort)?;
    let encryption = fields.get("encryption").ok_or(ProxyError::InvalidAuthScheme)?;
    let password = fields.get("password").ok_or(ProxyError::InvalidPassword)?;

    Ok(ProxyRecord {
        kind,
        name: name.clone(),
        host: host.clone(),
        port,
        auth_scheme: Some(encryption.clone()),
        password: Some(password.clone()),
        ..ProxyRecord::default()
    })
}

use crate::error::ProxyError;
use crate::models::ProxyRecord;
use crate::utils::string::strip_prefix_ignore_case;

use super::ss::{decode_uri, SS_PREFIX};

/// Link schemes the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriScheme {
    Shadowsocks,
}

impl UriScheme {
    /// Detect the scheme of a link by its prefix, ignoring ASCII case
    pub fn detect(link: &str) -> Option<UriScheme> {
        if strip_prefix_ignore_case(link, SS_PREFIX).is_some() {
            Some(UriScheme::Shadowsocks)
        } else {
            None
        }
    }
}

/// Explode a proxy link into a proxy record
///
/// This function detects the type of proxy link and calls the matching
/// decoder. Links without a supported scheme fail with `InvalidUri`.
pub fn explode_uri(link: &str) -> Result<ProxyRecord, ProxyError> {
    match UriScheme::detect(link) {
        Some(UriScheme::Shadowsocks) => decode_uri(link),
        None => Err(ProxyError::InvalidUri),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(
            UriScheme::detect("Ss://rc4:pw@host:1"),
            Some(UriScheme::Shadowsocks)
        );
        assert_eq!(UriScheme::detect("socks5://host:1"), None);
        assert_eq!(UriScheme::detect("https://host"), None);
    }

    #[test]
    fn test_explode_unsupported() {
        assert_eq!(
            explode_uri("trojan://pw@host:443"),
            Err(ProxyError::InvalidUri)
        );
        assert!(explode_uri("ss://rc4:pw@host:443").is_ok());
    }
}

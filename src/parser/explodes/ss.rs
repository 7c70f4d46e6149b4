use log::debug;

use crate::error::ProxyError;
use crate::models::{ProxyRecord, ProxyType};
use crate::utils::string::{find_first, find_last, strip_prefix_ignore_case};

pub const SS_PREFIX: &str = "ss://";
const OTA_SUFFIX: &str = "-auth";

/// Parse a Shadowsocks link into a proxy record
///
/// Accepted shape is `ss://<method>[-auth]:<password>@<host>:<port>`, with
/// the prefix matched case-insensitively. The split relies on three
/// delimiters: the first `:`, the last `@` and the last `:`, which must
/// appear in that order. The returned record has an empty `name`; the
/// caller supplies it.
pub fn decode_uri(uri: &str) -> Result<ProxyRecord, ProxyError> {
    let content = strip_prefix_ignore_case(uri, SS_PREFIX).ok_or(ProxyError::InvalidUri)?;

    let (Some(pc1), Some(pcm), Some(pc2)) = (
        find_first(content, b':'),
        find_last(content, b'@'),
        find_last(content, b':'),
    ) else {
        debug!("ss link is missing a delimiter: {}", uri);
        return Err(ProxyError::InvalidUri);
    };
    if !(pc1 < pcm && pcm < pc2) {
        debug!("ss link delimiters out of order: {}", uri);
        return Err(ProxyError::InvalidUri);
    }

    let full_scheme = content[..pc1].to_lowercase();
    let (auth_scheme, one_time_auth) = match full_scheme.strip_suffix(OTA_SUFFIX) {
        Some(method) => (method.to_string(), true),
        None => (full_scheme, false),
    };

    let password = &content[pc1 + 1..pcm];
    let host = &content[pcm + 1..pc2];
    let port = content[pc2 + 1..]
        .parse::<i64>()
        .map_err(|_| ProxyError::InvalidPort)?;

    Ok(ProxyRecord {
        kind: ProxyType::Shadowsocks,
        host: host.to_string(),
        port,
        auth_scheme: Some(auth_scheme),
        password: Some(password.to_string()),
        one_time_auth,
        ..ProxyRecord::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ota_link() {
        let node = decode_uri("ss://aes-256-cfb-auth:pass@1.2.3.4:8388").unwrap();
        assert_eq!(node.kind, ProxyType::Shadowsocks);
        assert_eq!(node.auth_scheme.as_deref(), Some("aes-256-cfb"));
        assert!(node.one_time_auth);
        assert_eq!(node.password.as_deref(), Some("pass"));
        assert_eq!(node.host, "1.2.3.4");
        assert_eq!(node.port, 8388);
        assert!(node.name.is_empty());
    }

    #[test]
    fn test_decode_plain_link() {
        let node = decode_uri("ss://rc4:pw@host:443").unwrap();
        assert_eq!(node.auth_scheme.as_deref(), Some("rc4"));
        assert!(!node.one_time_auth);
        assert_eq!(node.password.as_deref(), Some("pw"));
        assert_eq!(node.host, "host");
        assert_eq!(node.port, 443);
    }

    #[test]
    fn test_prefix_and_method_case() {
        let node = decode_uri("SS://AES-128-GCM-AUTH:PassWord@Example.COM:80").unwrap();
        assert_eq!(node.auth_scheme.as_deref(), Some("aes-128-gcm"));
        assert!(node.one_time_auth);
        // only the method is lower-cased
        assert_eq!(node.password.as_deref(), Some("PassWord"));
        assert_eq!(node.host, "Example.COM");
    }

    #[test]
    fn test_other_schemes_rejected() {
        for link in [
            "",
            "ss:/",
            "ssr://rc4:pw@host:443",
            "vmess://rc4:pw@host:443",
            "rc4:pw@host:443",
            " ss://rc4:pw@host:443",
        ] {
            assert_eq!(decode_uri(link), Err(ProxyError::InvalidUri), "{}", link);
        }
    }

    #[test]
    fn test_delimiter_ordering() {
        // no '@'
        assert_eq!(decode_uri("ss://rc4:pw:443"), Err(ProxyError::InvalidUri));
        // no ':' at all
        assert_eq!(decode_uri("ss://rc4pw@host443"), Err(ProxyError::InvalidUri));
        // only one ':' so first == last
        assert_eq!(decode_uri("ss://rc4pw@host:443"), Err(ProxyError::InvalidUri));
        // '@' after the last ':'
        assert_eq!(decode_uri("ss://rc4:pw:443@host"), Err(ProxyError::InvalidUri));
    }

    #[test]
    fn test_password_may_contain_at_and_colon() {
        let node = decode_uri("ss://rc4:p@ss:w0rd@host:443").unwrap();
        assert_eq!(node.password.as_deref(), Some("p@ss:w0rd"));
        assert_eq!(node.host, "host");
    }

    #[test]
    fn test_multibyte_fields() {
        let node = decode_uri("ss://chacha20:pässwörd@höst.例え:8443").unwrap();
        assert_eq!(node.auth_scheme.as_deref(), Some("chacha20"));
        assert_eq!(node.password.as_deref(), Some("pässwörd"));
        assert_eq!(node.host, "höst.例え");
        assert_eq!(node.port, 8443);
    }

    #[test]
    fn test_bad_port() {
        assert_eq!(decode_uri("ss://rc4:pw@host:"), Err(ProxyError::InvalidPort));
        assert_eq!(decode_uri("ss://rc4:pw@host:80a"), Err(ProxyError::InvalidPort));
        assert_eq!(decode_uri("ss://rc4:pw@host: 80"), Err(ProxyError::InvalidPort));
    }

    #[test]
    fn test_out_of_range_port_left_for_validation() {
        assert_eq!(decode_uri("ss://rc4:pw@host:70000").unwrap().port, 70000);
        assert_eq!(decode_uri("ss://rc4:pw@host:0").unwrap().port, 0);
    }

    #[test]
    fn test_empty_segments_decode() {
        let node = decode_uri("ss://:@:1").unwrap();
        assert_eq!(node.auth_scheme.as_deref(), Some(""));
        assert_eq!(node.password.as_deref(), Some(""));
        assert_eq!(node.host, "");
    }
}

use crate::models::{ProxyRecord, ProxyType};

/// Convert a proxy record to its canonical link
///
/// Only Shadowsocks records with both a method and a password have one:
/// `ss://{method}:{password}@{host}:{port}`. Everything else yields an
/// empty string. The `-auth` suffix is never emitted, so one-time auth is
/// lost on a round trip through this form.
pub fn to_uri(node: &ProxyRecord) -> String {
    match node.kind {
        ProxyType::Shadowsocks => match (&node.auth_scheme, &node.password) {
            (Some(method), Some(password)) => {
                format!("ss://{}:{}@{}:{}", method, password, node.host, node.port)
            }
            _ => String::new(),
        },
        ProxyType::Https | ProxyType::Socks5 | ProxyType::None => String::new(),
    }
}

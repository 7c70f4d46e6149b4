//! Proxy model definitions
//!
//! Contains the canonical record shape shared by both decoders, the
//! validator and the encoder.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ProxyError;

/// Plain key/value input accepted by the dictionary decoder.
pub type ProxyDictionary = HashMap<String, String>;

/// Represents the type of a proxy.
///
/// New kinds are added here and at the match sites in the validator and the
/// URI generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProxyType {
    #[default]
    Shadowsocks,
    Https,
    Socks5,
    None,
}

impl ProxyType {
    /// Canonical upper-case name, used only at serialization boundaries.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Shadowsocks => "SHADOWSOCKS",
            ProxyType::Https => "HTTPS",
            ProxyType::Socks5 => "SOCKS5",
            ProxyType::None => "NONE",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyType {
    type Err = ProxyError;

    /// Case-insensitive lookup of the canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SHADOWSOCKS" => Ok(ProxyType::Shadowsocks),
            "HTTPS" => Ok(ProxyType::Https),
            "SOCKS5" => Ok(ProxyType::Socks5),
            "NONE" => Ok(ProxyType::None),
            _ => Err(ProxyError::InvalidType),
        }
    }
}

/// A single upstream proxy endpoint.
///
/// Records are produced by one decoder call and validated right away; see
/// [`crate::builder::construct`]. Equality is identity: two records compare
/// equal only when they share the same `uuid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub uuid: Uuid,
    #[serde(rename = "type")]
    pub kind: ProxyType,
    pub name: String,
    pub host: String,
    /// Kept wider than `u16` so that out-of-range values reach validation.
    pub port: i64,
    pub auth_scheme: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Set when the scheme token carried the `-auth` suffix.
    #[serde(default)]
    pub one_time_auth: bool,
}

impl Default for ProxyRecord {
    fn default() -> Self {
        ProxyRecord {
            uuid: Uuid::new_v4(),
            kind: ProxyType::default(),
            name: String::new(),
            host: String::new(),
            port: 0,
            auth_scheme: None,
            user: None,
            password: None,
            one_time_auth: false,
        }
    }
}

impl PartialEq for ProxyRecord {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for ProxyRecord {}

impl fmt::Display for ProxyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl ProxyRecord {
    /// Canonical `ss://` form, or an empty string when the record has none.
    pub fn uri(&self) -> String {
        crate::generator::uri::to_uri(self)
    }
}

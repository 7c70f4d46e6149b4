use serde_yaml::Value;

use crate::error::ProxyError;
use crate::models::{ProxyDictionary, ProxyRecord};

use super::explodes::explode_uri;
use super::fields::decode_fields;

/// Input envelope for building a proxy record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyInput {
    /// A proxy link plus a separately supplied name.
    Uri { uri: String, name: Option<String> },
    /// A plain key/value map for the dictionary decoder.
    Fields(ProxyDictionary),
}

impl ProxyInput {
    pub fn uri(uri: impl Into<String>, name: impl Into<String>) -> Self {
        ProxyInput::Uri {
            uri: uri.into(),
            name: Some(name.into()),
        }
    }

    /// Build an input from a structured document (YAML or JSON mapping).
    ///
    /// Only string values are kept, so a numeric `port` counts as missing.
    /// Anything other than a mapping yields an empty dictionary.
    pub fn from_value(value: &Value) -> Self {
        let mut dict = ProxyDictionary::new();
        if let Value::Mapping(map) = value {
            for (key, value) in map {
                if let (Value::String(k), Value::String(v)) = (key, value) {
                    dict.insert(k.clone(), v.clone());
                }
            }
        }
        ProxyInput::from(dict)
    }

    /// Run the matching decoder.
    ///
    /// For links, decoding errors are reported before a missing name.
    pub fn decode(&self) -> Result<ProxyRecord, ProxyError> {
        match self {
            ProxyInput::Uri { uri, name } => {
                let mut record = explode_uri(uri)?;
                record.name = name.clone().ok_or(ProxyError::InvalidName)?;
                Ok(record)
            }
            ProxyInput::Fields(fields) => decode_fields(fields),
        }
    }
}

impl From<ProxyDictionary> for ProxyInput {
    /// A dictionary holding a `uri` key takes the link path; any other key
    /// besides `name` is then ignored.
    fn from(mut dict: ProxyDictionary) -> Self {
        match dict.remove("uri") {
            Some(uri) => ProxyInput::Uri {
                uri,
                name: dict.remove("name"),
            },
            None => ProxyInput::Fields(dict),
        }
    }
}

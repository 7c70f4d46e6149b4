pub mod builder;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod store;
pub mod utils;
pub mod validator;

// Re-export the main proxy types for easier access
pub use builder::{construct, construct_at, resolve_rule_set_collision};
pub use error::ProxyError;
pub use generator::to_uri;
pub use models::{ProxyDictionary, ProxyRecord, ProxyType};
pub use parser::{decode_fields, decode_uri, ProxyInput};
pub use settings::Settings;
pub use store::{MemoryStore, ProxyRegistry, RecordStore};
pub use validator::{validate, validate_in};

//! Core data models
//!
//! This module contains the proxy record shape used throughout the crate,
//! separated from the logic that decodes, validates and encodes it.
//!
//! # Usage
//!
//! ```rust
//! use proxy_model::models::{ProxyRecord, ProxyType};
//!
//! let mut proxy = ProxyRecord::default();
//! proxy.kind = ProxyType::Shadowsocks;
//! proxy.host = "example.com".to_string();
//! proxy.port = 8388;
//! ```
//!
//! # Working with Option fields
//!
//! `auth_scheme`, `user` and `password` are optional:
//!
//! ```rust
//! use proxy_model::ProxyRecord;
//!
//! let proxy = ProxyRecord::default();
//! let method = proxy.auth_scheme.as_deref().unwrap_or("none");
//! assert_eq!(method, "none");
//! ```

mod proxy;

pub use proxy::*;

//! Record stores consulted for name uniqueness.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

use log::{debug, info};

use crate::builder::construct;
use crate::error::ProxyError;
use crate::models::ProxyRecord;
use crate::parser::ProxyInput;

/// Existence queries a store must answer for construction.
///
/// Both lookups are synchronous and side-effect free. Names are compared
/// exactly (case-sensitive).
pub trait RecordStore {
    /// Whether a proxy record with this name is already stored.
    fn proxy_name_exists(&self, name: &str) -> bool;

    /// Whether a rule set with this name is already stored.
    fn rule_set_name_exists(&self, name: &str) -> bool;
}

/// In-memory store keyed by proxy name.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    proxies: HashMap<String, ProxyRecord>,
    rule_sets: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule-set name. Returns false if it was already present.
    pub fn add_rule_set(&mut self, name: impl Into<String>) -> bool {
        self.rule_sets.insert(name.into())
    }

    /// Store a record, rejecting a duplicate name.
    pub fn insert(&mut self, record: ProxyRecord) -> Result<(), ProxyError> {
        if self.proxies.contains_key(&record.name) {
            return Err(ProxyError::NameAlreadyExists);
        }
        self.proxies.insert(record.name.clone(), record);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ProxyRecord> {
        self.proxies.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ProxyRecord> {
        self.proxies.remove(name)
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    pub fn proxies(&self) -> impl Iterator<Item = &ProxyRecord> {
        self.proxies.values()
    }
}

impl RecordStore for MemoryStore {
    fn proxy_name_exists(&self, name: &str) -> bool {
        self.proxies.contains_key(name)
    }

    fn rule_set_name_exists(&self, name: &str) -> bool {
        self.rule_sets.contains(name)
    }
}

/// Shared store where decode, validation and insertion happen as one step.
#[derive(Debug, Default)]
pub struct ProxyRegistry {
    store: RwLock<MemoryStore>,
}

impl ProxyRegistry {
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Construct a record from `input` and store it.
    ///
    /// The write lock is held from the uniqueness checks through the insert,
    /// so two concurrent calls cannot both claim the same name.
    pub fn add(&self, input: &ProxyInput) -> Result<ProxyRecord, ProxyError> {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let record = construct(input, &*store)?;
        store.insert(record.clone())?;
        info!("Added proxy '{}' ({})", record.name, record.kind);
        Ok(record)
    }

    pub fn add_rule_set(&self, name: impl Into<String>) -> bool {
        let name = name.into();
        debug!("Registering rule set '{}'", name);
        self.store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .add_rule_set(name)
    }

    pub fn get(&self, name: &str) -> Option<ProxyRecord> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.store.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current store contents.
    pub fn snapshot(&self) -> MemoryStore {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RecordStore for ProxyRegistry {
    fn proxy_name_exists(&self, name: &str) -> bool {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .proxy_name_exists(name)
    }

    fn rule_set_name_exists(&self, name: &str) -> bool {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rule_set_name_exists(name)
    }
}

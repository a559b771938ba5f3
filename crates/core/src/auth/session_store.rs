use std::collections::HashMap;
use std::sync::RwLock;

use super::auth_traits::SessionStoreTrait;

/// In-memory session store standing in for the host's key-value
/// storage surface.
#[derive(Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        MemorySessionStore {
            values: RwLock::new(HashMap::new()),
        }
    }
}

impl SessionStoreTrait for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.write().unwrap().remove(key);
    }
}

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// Key-value scratch space shared between advisory functions. Guarded by a
/// mutex so it stays coherent if a future caller shares one instance across
/// request handlers. No eviction.
#[derive(Debug, Default)]
pub struct SharedMemory {
    store: Mutex<HashMap<String, Value>>,
}

impl SharedMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.store
            .lock()
            .expect("shared memory lock poisoned")
            .insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.store
            .lock()
            .expect("shared memory lock poisoned")
            .get(key)
            .cloned()
    }
}

use super::{check_key, KeyValueStore, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-process store; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        check_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        check_key(key)?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        check_key(key)?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::store::{KeyValueStore, StoreError};

    #[test]
    fn set_then_get_returns_latest_value() {
        let store = MemoryStore::new();
        store.set("todos", "[]").unwrap();
        store.set("todos", "[1]").unwrap();
        assert_eq!(store.get("todos").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn blank_key_is_rejected() {
        let store = MemoryStore::new();
        let err = store.set(" ", "x").unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("notes").unwrap();
        assert!(store.is_empty());
    }
}

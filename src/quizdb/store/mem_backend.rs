use super::KvBackend;
use crate::error::{QuizError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory storage backend for testing.
///
/// Clones share the same map, the way two views of a page share one browser
/// storage area. Uses `Rc<RefCell<..>>` since quizdb is single-threaded.
#[derive(Clone, Default)]
pub struct MemBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
    simulate_write_error: Rc<Cell<bool>>,
    simulate_read_error: Rc<Cell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `set` and `remove` fail until switched off again.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Make `get` fail until switched off again.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Test helper: the stored blob, bypassing the read-error switch.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Test helper: store a blob directly, bypassing the write-error switch.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KvBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(QuizError::StorageUnavailable(
                "Simulated read error".to_string(),
            ));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuizError::StorageUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(QuizError::StorageUnavailable(
                "Simulated write error".to_string(),
            ));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let a = MemBackend::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap(), Some("v".to_string()));
        b.remove("k").unwrap();
        assert!(!a.contains_key("k"));
    }

    #[test]
    fn write_errors_leave_previous_value() {
        let backend = MemBackend::new();
        backend.set("k", "old").unwrap();
        backend.set_simulate_write_error(true);

        let err = backend.set("k", "new").unwrap_err();
        assert!(matches!(err, QuizError::StorageUnavailable(_)));
        assert!(backend.remove("k").is_err());
        assert_eq!(backend.raw("k"), Some("old".to_string()));
    }

    #[test]
    fn read_errors_surface_as_unavailable() {
        let backend = MemBackend::new();
        backend.set_simulate_read_error(true);
        assert!(matches!(
            backend.get("k"),
            Err(QuizError::StorageUnavailable(_))
        ));
    }
}

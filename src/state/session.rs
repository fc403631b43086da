// Session store - page-lifetime key/value storage for the sidebar scroll offset
use std::collections::HashMap;

/// Key under which the sidebar offset survives a page navigation.
pub const SCROLL_KEY: &str = "sidebar-scroll";

/// The three capabilities the sidebar needs from the host's session storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn delete(&mut self, key: &str);
}

/// In-process store living as long as the hosting window.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.values.remove(key);
    }
}

pub fn persist_scroll(store: &mut (impl SessionStore + ?Sized), offset: f32) {
    store.set(SCROLL_KEY, offset.to_string());
}

/// Read and clear the pending offset. A value that is not a number is
/// discarded.
pub fn take_scroll(store: &mut (impl SessionStore + ?Sized)) -> Option<f32> {
    let raw = store.get(SCROLL_KEY)?;
    store.delete(SCROLL_KEY);
    match raw.trim().parse::<f32>() {
        Ok(offset) if offset.is_finite() => Some(offset),
        _ => {
            log::warn!("Ignoring stored sidebar offset {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_destructive() {
        let mut store = MemoryStore::new();
        persist_scroll(&mut store, 240.5);
        assert_eq!(take_scroll(&mut store), Some(240.5));
        assert_eq!(take_scroll(&mut store), None);
        assert_eq!(store.get(SCROLL_KEY), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryStore::new();
        persist_scroll(&mut store, 10.0);
        persist_scroll(&mut store, 30.0);
        assert_eq!(take_scroll(&mut store), Some(30.0));
    }

    #[test]
    fn test_zero_offset_is_a_value() {
        let mut store = MemoryStore::new();
        persist_scroll(&mut store, 0.0);
        assert_eq!(take_scroll(&mut store), Some(0.0));
    }

    #[test]
    fn test_garbage_is_cleared() {
        let mut store = MemoryStore::new();
        store.set(SCROLL_KEY, "not a number".to_string());
        assert_eq!(take_scroll(&mut store), None);
        assert_eq!(store.get(SCROLL_KEY), None);
    }
}

//! A reader/writer-locked hash map.

use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// A map safe to share between threads.
///
/// Any number of readers proceed concurrently. A writer holds the lock
/// exclusively for the duration of one mutation. Values are cloned out on
/// read, so `V` is typically an `Arc`.
#[derive(Debug)]
pub struct SynchronizedMap<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for SynchronizedMap<K, V> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash, V: Clone> SynchronizedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Returns a clone of the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().get(key).cloned()
    }

    /// Stores `value` for `key`, replacing any previous value.
    pub fn set(&self, key: K, value: V) {
        self.inner.write().insert(key, value);
    }

    /// Stores `value` only if `key` is vacant. Returns the value that ends up
    /// stored, which is the existing one if there was one.
    pub fn insert_if_absent(&self, key: K, value: V) -> V {
        self.inner.write().entry(key).or_insert(value).clone()
    }

    /// Returns the value for `key`, building and storing it on a miss.
    ///
    /// The lookup and the insert happen under one write lock, so `make` runs
    /// at most once per key even when many threads miss at the same time. A
    /// failed `make` stores nothing.
    ///
    /// `make` runs while the write lock is held, so readers of every key wait
    /// for it. Keep it short and do no logging or I/O inside it.
    pub fn get_or_try_insert_with<Q, E, F>(&self, key: &Q, make: F) -> Result<V, E>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let mut map = self.inner.write();
        match map.entry(key.to_owned()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => Ok(entry.insert(make()?).clone()),
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    /// Number of entries. May be stale as soon as it returns.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of the keys currently stored.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_get_set() {
        let map: SynchronizedMap<String, u32> = SynchronizedMap::new();
        assert!(map.get("a").is_none());
        map.set("a".to_string(), 1);
        map.set("a".to_string(), 2);
        assert_eq!(map.get("a"), Some(2));
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("a"));
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_insert_if_absent_keeps_first() {
        let map = SynchronizedMap::new();
        assert_eq!(map.insert_if_absent("k", 1), 1);
        assert_eq!(map.insert_if_absent("k", 2), 1);
        assert_eq!(map.get("k"), Some(1));
    }

    #[test]
    fn test_failed_insert_stores_nothing() {
        let map: SynchronizedMap<String, u32> = SynchronizedMap::new();
        let result: Result<u32, &str> = map.get_or_try_insert_with("bad", || Err("nope"));
        assert_eq!(result, Err("nope"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_concurrent_get_or_insert_builds_once() {
        let map: Arc<SynchronizedMap<String, Arc<u32>>> = Arc::new(SynchronizedMap::new());
        let builds = Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let map = Arc::clone(&map);
                let builds = Arc::clone(&builds);
                thread::spawn(move || {
                    map.get_or_try_insert_with("key", || {
                        builds.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                        Ok::<_, ()>(Arc::new(7))
                    })
                    .unwrap()
                })
            })
            .collect();

        let values: Vec<Arc<u32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(builds.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert!(values.iter().all(|v| Arc::ptr_eq(v, &values[0])));
        assert_eq!(map.len(), 1);
    }
}

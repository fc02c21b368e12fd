use crate::error::ValueError;
use crate::value::{TypedValue, Value};
use log::{debug, log_enabled, trace, Level};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A thread-safe map from string keys to [`Value`]s
///
/// Every operation takes the single internal lock for its whole duration, so
/// each call observes the map as left by some fully applied earlier call.
/// `ConcurrentMap` is a handle: cloning it gives another handle to the same
/// entries, which is how collaborators share one map.
///
/// # Examples
///
/// ```
/// use sovran_syncmap::{ConcurrentMap, Value};
///
/// let map = ConcurrentMap::new();
/// map.store("foo", "bar");
/// map.store("foo2", 2i64);
///
/// match map.load("foo") {
///     Some(Value::String(s)) => assert_eq!(s.value(), "bar"),
///     Some(other) => panic!("expected a string, got {}", other.kind()),
///     None => panic!("foo should be present"),
/// }
/// assert_eq!(map.load("foo2"), Some(Value::from(2i64)));
/// assert_eq!(map.load("foo3"), None);
///
/// assert!(map.delete("foo"));
/// assert!(!map.delete("foo"));
/// ```
#[derive(Clone)]
pub struct ConcurrentMap {
    items: Arc<Mutex<HashMap<String, Value>>>,
}

impl ConcurrentMap {
    /// Creates a new, empty map
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map with room for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        debug!("creating concurrent map (capacity {})", capacity);
        Self {
            items: Arc::new(Mutex::new(HashMap::with_capacity(capacity))),
        }
    }

    /// Stores `value` under `key`, replacing whatever was there
    ///
    /// The empty string is a valid key. Once this returns, any `load` that
    /// starts afterwards sees this value or a later one.
    pub fn store(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let kind = value.kind();

        // keep log output out of the critical section
        let logged_key = log_enabled!(Level::Trace).then(|| key.clone());
        let replaced = self.items.lock().insert(key, value).is_some();

        if let Some(key) = logged_key {
            trace!("store {:?} ({}), replaced: {}", key, kind, replaced);
        }
    }

    /// Returns a copy of the value stored under `key`, or `None` if absent
    ///
    /// The caller matches on the returned [`Value`] to get at the payload.
    pub fn load(&self, key: &str) -> Option<Value> {
        self.items.lock().get(key).cloned()
    }

    /// Removes the entry for `key`
    ///
    /// # Returns
    ///
    /// Returns `true` if an entry existed and was removed, `false` if there was
    /// nothing to remove.
    pub fn delete(&self, key: &str) -> bool {
        let removed = self.items.lock().remove(key).is_some();
        trace!("delete {:?}, removed: {}", key, removed);
        removed
    }

    /// Returns true if the map holds an entry for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Runs `f` against the value stored under `key` without copying it
    ///
    /// The lock is held while `f` runs, so `f` must not call back into this
    /// map.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_syncmap::ConcurrentMap;
    ///
    /// let map = ConcurrentMap::new();
    /// map.store("greeting", "hello world");
    ///
    /// let words = map.with("greeting", |v| v.as_str().map(|s| s.split(' ').count()));
    /// assert_eq!(words, Some(Some(2)));
    /// assert_eq!(map.with("missing", |_| ()), None);
    /// ```
    pub fn with<F, R>(&self, key: &str, f: F) -> Option<R>
    where
        F: FnOnce(&Value) -> R,
    {
        let items = self.items.lock();
        items.get(key).map(f)
    }

    /// Loads the value under `key` as the variant `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_syncmap::{ConcurrentMap, IntegerValue, StringValue, ValueError};
    ///
    /// let map = ConcurrentMap::new();
    /// map.store("port", 8080i64);
    ///
    /// let port = map.load_as::<IntegerValue>("port")?;
    /// assert_eq!(port.map(|p| p.value()), Some(8080));
    ///
    /// assert!(map.load_as::<StringValue>("port").is_err());
    /// assert_eq!(map.load_as::<StringValue>("host")?, None);
    /// # Ok::<(), ValueError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ValueError::KindMismatch` if the stored value is another variant.
    /// A missing key is `Ok(None)`, not an error.
    pub fn load_as<T: TypedValue>(&self, key: &str) -> Result<Option<T>, ValueError> {
        self.with(key, |value| T::from_value_ref(value).cloned()).transpose()
    }
}

impl Default for ConcurrentMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConcurrentMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ConcurrentMap").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{IntegerValue, StringValue, ValueKind};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_map_is_send_and_sync() {
        assert_send_sync::<ConcurrentMap>();
    }

    #[test]
    fn test_missing_key() {
        let map = ConcurrentMap::new();
        assert_eq!(map.load("nope"), None);
        assert!(!map.contains_key("nope"));
        assert!(!map.delete("nope"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_last_store_wins() {
        let map = ConcurrentMap::new();
        map.store("k", "first");
        map.store("k", "second");
        assert_eq!(map.load("k"), Some(Value::from("second")));

        // a later store may change the kind, too
        map.store("k", 3i64);
        assert_eq!(map.load("k"), Some(Value::from(3i64)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_string_key() {
        let map = ConcurrentMap::new();
        map.store("", "empty");
        assert_eq!(map.load(""), Some(Value::from("empty")));
        assert!(map.delete(""));
        assert_eq!(map.load(""), None);
    }

    #[test]
    fn test_clone_shares_entries() {
        let map = ConcurrentMap::new();
        let handle = map.clone();

        handle.store("shared", 1i64);
        assert_eq!(map.load("shared"), Some(Value::from(1i64)));

        assert!(map.delete("shared"));
        assert!(!handle.contains_key("shared"));
    }

    #[test]
    fn test_load_returns_independent_copy() {
        let map = ConcurrentMap::new();
        map.store("k", "original");

        let loaded = map.load("k");
        map.store("k", "replaced");

        assert_eq!(loaded, Some(Value::from("original")));
        assert_eq!(map.load("k"), Some(Value::from("replaced")));
    }

    #[test]
    fn test_load_as() {
        let map = ConcurrentMap::new();
        map.store("name", StringValue::new("sovran"));

        assert_eq!(
            map.load_as::<StringValue>("name"),
            Ok(Some(StringValue::new("sovran")))
        );
        assert_eq!(map.load_as::<IntegerValue>("missing"), Ok(None));
        assert_eq!(
            map.load_as::<IntegerValue>("name"),
            Err(ValueError::KindMismatch {
                expected: ValueKind::Integer,
                found: ValueKind::String,
            })
        );
    }

    #[test]
    fn test_len_and_debug() {
        let map = ConcurrentMap::with_capacity(16);
        map.store("a", 1i64);
        map.store("b", 2i64);

        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert_eq!(format!("{:?}", map), "ConcurrentMap { len: 2 }");
    }
}

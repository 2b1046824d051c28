//! Form Drafts
//!
//! Keeps in-progress form fields in browser storage as JSON snapshots keyed by
//! form id, plus a small debouncer so typing doesn't write on every keystroke.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Field name -> value snapshot of one form
pub type Fields = BTreeMap<String, String>;

/// Common result type for draft operations
pub type DraftResult<T> = Result<T, DraftError>;

/// Draft storage errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// No storage backend (no window, storage disabled, private mode...)
    Unavailable,
    /// The backend refused the operation (quota, security error)
    Storage(String),
    /// A stored snapshot is not a JSON object
    Parse(String),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::Unavailable => write!(f, "Draft storage unavailable"),
            DraftError::Storage(msg) => write!(f, "Draft storage error: {}", msg),
            DraftError::Parse(msg) => write!(f, "Malformed draft: {}", msg),
        }
    }
}

impl std::error::Error for DraftError {}

/// Key/value backend for draft snapshots
pub trait DraftStore {
    fn read(&self, key: &str) -> DraftResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> DraftResult<()>;
    fn remove(&self, key: &str) -> DraftResult<()>;
}

/// `window.localStorage` backend
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> DraftResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(DraftError::Unavailable)
    }
}

impl DraftStore for LocalStorageStore {
    fn read(&self, key: &str) -> DraftResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| DraftError::Storage(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> DraftResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| DraftError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> DraftResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| DraftError::Storage(format!("{:?}", e)))
    }
}

impl<S: DraftStore + ?Sized> DraftStore for Rc<S> {
    fn read(&self, key: &str) -> DraftResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> DraftResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> DraftResult<()> {
        (**self).remove(key)
    }
}

/// In-memory backend, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl DraftStore for MemoryStore {
    fn read(&self, key: &str) -> DraftResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> DraftResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DraftResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Draft snapshots for a family of forms sharing one key prefix
#[derive(Debug, Clone)]
pub struct Drafts<S> {
    store: S,
    prefix: String,
}

impl<S: DraftStore> Drafts<S> {
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self { store, prefix: prefix.into() }
    }

    /// Storage key for a form, e.g. `focus-form-quick-task-form`
    pub fn key(&self, form_id: &str) -> String {
        format!("{}{}", self.prefix, form_id)
    }

    pub fn save(&self, form_id: &str, fields: &Fields) -> DraftResult<()> {
        let json = serde_json::to_string(fields).map_err(|e| DraftError::Parse(e.to_string()))?;
        self.store.write(&self.key(form_id), &json)
    }

    /// Load a saved snapshot. Scalar values are stringified, nested values dropped.
    pub fn load(&self, form_id: &str) -> DraftResult<Option<Fields>> {
        let Some(raw) = self.store.read(&self.key(form_id))? else {
            return Ok(None);
        };
        parse_snapshot(&raw).map(Some)
    }

    pub fn clear(&self, form_id: &str) -> DraftResult<()> {
        self.store.remove(&self.key(form_id))
    }
}

fn parse_snapshot(raw: &str) -> DraftResult<Fields> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| DraftError::Parse(e.to_string()))?;
    let serde_json::Value::Object(map) = value else {
        return Err(DraftError::Parse("expected a JSON object".to_string()));
    };

    let mut fields = Fields::new();
    for (name, value) in map {
        let text = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            other => {
                tracing::debug!(field = %name, value = %other, "skipping non-scalar draft value");
                continue;
            }
        };
        fields.insert(name, text);
    }
    Ok(fields)
}

/// Runs the most recently scheduled callback once input has been quiet for `delay_ms`.
///
/// Scheduling again before the delay elapses drops (and so cancels) the pending timer.
/// A zero delay runs the callback immediately.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, pending: Rc::new(RefCell::new(None)) }
    }

    pub fn schedule<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if self.delay_ms == 0 {
            self.cancel();
            callback();
            return;
        }
        // Replacing a handle that already fired only clears a stale timer id
        let timeout = Timeout::new(self.delay_ms, callback);
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafts() -> (MemoryStore, Drafts<MemoryStore>) {
        let store = MemoryStore::new();
        (store.clone(), Drafts::new(store, "focus-form-"))
    }

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_key_uses_prefix_and_form_id() {
        let (_, drafts) = drafts();
        assert_eq!(drafts.key("quick-task-form"), "focus-form-quick-task-form");
    }

    #[test]
    fn test_save_then_load_restores_fields() {
        let (store, drafts) = drafts();
        let snapshot = fields(&[("title", "Write report"), ("priority", "high")]);

        drafts.save("quick-task-form", &snapshot).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(drafts.load("quick-task-form").unwrap(), Some(snapshot));
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let (store, drafts) = drafts();
        drafts.save("f", &fields(&[("title", "a")])).unwrap();
        drafts.save("f", &fields(&[("title", "ab")])).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(drafts.load("f").unwrap(), Some(fields(&[("title", "ab")])));
    }

    #[test]
    fn test_load_missing_is_none() {
        let (_, drafts) = drafts();
        assert_eq!(drafts.load("nothing-here").unwrap(), None);
    }

    #[test]
    fn test_clear_removes_snapshot() {
        let (store, drafts) = drafts();
        drafts.save("f", &fields(&[("title", "x")])).unwrap();
        drafts.clear("f").unwrap();

        assert!(store.is_empty());
        assert_eq!(drafts.load("f").unwrap(), None);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let (store, drafts) = drafts();
        store.write("focus-form-f", "{not json").unwrap();
        assert!(matches!(drafts.load("f"), Err(DraftError::Parse(_))));

        store.write("focus-form-f", "[1, 2]").unwrap();
        assert!(matches!(drafts.load("f"), Err(DraftError::Parse(_))));
    }

    #[test]
    fn test_load_stringifies_scalars() {
        let (store, drafts) = drafts();
        store
            .write("focus-form-f", r#"{"count": 3, "done": true, "tags": ["a"], "name": "n"}"#)
            .unwrap();

        let loaded = drafts.load("f").unwrap().unwrap();
        assert_eq!(loaded, fields(&[("count", "3"), ("done", "true"), ("name", "n")]));
    }

    #[test]
    fn test_shared_store_behind_rc() {
        let store = MemoryStore::new();
        let shared: Rc<dyn DraftStore> = Rc::new(store.clone());
        let drafts = Drafts::new(shared, "focus-form-");

        drafts.save("f", &fields(&[("title", "x")])).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_zero_delay_runs_immediately() {
        let runs = Rc::new(RefCell::new(0));
        let debouncer = Debouncer::new(0);
        for _ in 0..2 {
            let runs = runs.clone();
            debouncer.schedule(move || *runs.borrow_mut() += 1);
        }
        assert_eq!(*runs.borrow(), 2);
    }
}

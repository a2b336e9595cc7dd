//! Session mirror.
//!
//! Field values are copied into a session-scoped string store on every
//! blur and copied back when a page is built. Entries live as long as the
//! store (one application session); there is no expiry and no encryption.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::field::{FieldKind, Form};

/// Which kind of control an entry was mirrored from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionSource {
    Input,
    Select,
}

impl SessionSource {
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Select => SessionSource::Select,
            _ => SessionSource::Input,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            SessionSource::Input => "form input",
            SessionSource::Select => "form select",
        }
    }
}

/// Deterministic store key: `"form input name=<name>"` or
/// `"form select name=<name>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(source: SessionSource, name: &str) -> Self {
        Self(format!("{} name={}", source.prefix(), name))
    }

    pub fn for_field(kind: FieldKind, name: &str) -> Self {
        Self::new(SessionSource::for_kind(kind), name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-scoped key/value string table.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &SessionKey) -> Option<String>;

    /// Insert or overwrite; last write wins.
    fn set(&self, key: &SessionKey, value: &str);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store shared by every page of one application run.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &SessionKey) -> Option<String> {
        self.entries.read().get(key.as_str()).cloned()
    }

    fn set(&self, key: &SessionKey, value: &str) {
        self.entries
            .write()
            .insert(key.as_str().to_string(), value.to_string());
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

/// Binds a [`SessionStore`] to form fields.
#[derive(Clone)]
pub struct SessionMirror {
    store: Arc<dyn SessionStore>,
}

impl SessionMirror {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Blur handler: mirror the field's current value.
    pub fn on_blur(&self, kind: FieldKind, name: &str, value: &str) {
        let key = SessionKey::for_field(kind, name);
        tracing::trace!(%key, "mirroring field to session");
        self.store.set(&key, value);
    }

    /// Load-time rehydration: every field takes its stored value, or an
    /// empty string when nothing was stored.
    pub fn rehydrate(&self, form: &mut Form) {
        let mut restored = 0usize;
        for card in &mut form.cards {
            for field in &mut card.fields {
                let key = SessionKey::for_field(field.kind, &field.name);
                match self.store.get(&key) {
                    Some(value) => {
                        field.value = value;
                        restored += 1;
                    }
                    None => field.value.clear(),
                }
            }
        }
        tracing::debug!(restored, "rehydrated form from session");
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }
}

impl fmt::Debug for SessionMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionMirror")
            .field("entries", &self.store.len())
            .finish()
    }
}

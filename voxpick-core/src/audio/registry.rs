use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::debug;
use uuid::Uuid;

/// Opaque reference to audio bytes held by an `AudioRegistry`. Valid until
/// revoked; looking up a revoked handle yields nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioHandle(String);

impl AudioHandle {
    fn generate() -> Self {
        Self(format!("audio:{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Default)]
struct RegistryInner {
    live: HashMap<AudioHandle, Arc<[u8]>>,
    created: usize,
    revoked: usize,
}

/// Store of in-memory audio blobs addressed by handle. Entries stay alive
/// until explicitly revoked, so the owner must release the old handle before
/// it drops the reference.
#[derive(Clone, Default)]
pub struct AudioRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl AudioRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, bytes: Vec<u8>) -> AudioHandle {
        let handle = AudioHandle::generate();
        let mut inner = self.inner.lock().unwrap();
        inner.live.insert(handle.clone(), Arc::from(bytes));
        inner.created += 1;
        debug!(%handle, live = inner.live.len(), "audio handle created");
        handle
    }

    pub fn get(&self, handle: &AudioHandle) -> Option<Arc<[u8]>> {
        self.inner.lock().unwrap().live.get(handle).cloned()
    }

    /// Releases the bytes behind `handle`. Returns false if it was already gone.
    pub fn revoke(&self, handle: &AudioHandle) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let removed = inner.live.remove(handle).is_some();
        if removed {
            inner.revoked += 1;
            debug!(%handle, live = inner.live.len(), "audio handle revoked");
        }
        removed
    }

    pub fn live_count(&self) -> usize {
        self.inner.lock().unwrap().live.len()
    }

    pub fn created_count(&self) -> usize {
        self.inner.lock().unwrap().created
    }

    pub fn revoked_count(&self) -> usize {
        self.inner.lock().unwrap().revoked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_revoke() {
        let registry = AudioRegistry::new();
        let handle = registry.create(vec![1, 2, 3]);

        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.get(&handle).as_deref(), Some(&[1u8, 2, 3][..]));

        assert!(registry.revoke(&handle));
        assert!(!registry.revoke(&handle));
        assert!(registry.get(&handle).is_none());
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.created_count(), 1);
        assert_eq!(registry.revoked_count(), 1);
    }

    #[test]
    fn handles_are_unique() {
        let registry = AudioRegistry::new();
        let a = registry.create(vec![]);
        let b = registry.create(vec![]);
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("audio:"));
    }
}

use std::sync::Arc;

use super::registry::{AudioHandle, AudioRegistry};

/// The current synthesis result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioResult {
    pub handle: AudioHandle,
    pub size: usize,
}

/// Owner of the single current `AudioResult`. Replacing revokes the previous
/// handle before the new one is registered, so at most one handle from this
/// slot is ever live.
pub struct AudioSlot {
    registry: AudioRegistry,
    current: Option<AudioResult>,
}

impl AudioSlot {
    pub fn new(registry: AudioRegistry) -> Self {
        Self {
            registry,
            current: None,
        }
    }

    pub fn replace(&mut self, bytes: Vec<u8>) -> &AudioResult {
        self.clear();
        let size = bytes.len();
        let handle = self.registry.create(bytes);
        self.current.insert(AudioResult { handle, size })
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.registry.revoke(&previous.handle);
        }
    }

    pub fn current(&self) -> Option<&AudioResult> {
        self.current.as_ref()
    }

    pub fn bytes(&self) -> Option<Arc<[u8]>> {
        self.current
            .as_ref()
            .and_then(|result| self.registry.get(&result.handle))
    }

    pub fn registry(&self) -> &AudioRegistry {
        &self.registry
    }
}

impl Drop for AudioSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_revokes_previous_handle() {
        let registry = AudioRegistry::new();
        let mut slot = AudioSlot::new(registry.clone());

        let first = slot.replace(vec![1; 10]).clone();
        assert_eq!(registry.live_count(), 1);

        let second = slot.replace(vec![2; 20]).clone();
        assert_eq!(registry.live_count(), 1);
        assert!(registry.get(&first.handle).is_none());
        assert_eq!(second.size, 20);
        assert_eq!(slot.bytes().map(|b| b.len()), Some(20));
    }

    #[test]
    fn drop_releases_current() {
        let registry = AudioRegistry::new();
        {
            let mut slot = AudioSlot::new(registry.clone());
            slot.replace(vec![0; 4]);
        }
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn empty_slot_has_no_bytes() {
        let slot = AudioSlot::new(AudioRegistry::new());
        assert!(slot.current().is_none());
        assert!(slot.bytes().is_none());
    }
}

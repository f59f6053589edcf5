//! Thread-shared state for concurrent renders.
//!
//! A parsed template can be rendered by many threads at once. What they
//! may share is kept here, behind `parking_lot` locks:
//! - [`PersistentParameters`]: a session's parameter map, visible to every
//!   request of that session
//! - [`SharedBuffer`]: an in-memory output sink whose contents can be read
//!   while a context still owns a handle to it

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// A persistent parameter map. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct PersistentParameters {
    map: Arc<Mutex<FxHashMap<String, String>>>,
}

impl PersistentParameters {
    pub fn new() -> Self {
        PersistentParameters::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.map.lock().get(name).cloned()
    }

    pub fn set(&self, name: &str, value: String) {
        self.map.lock().insert(name.to_owned(), value);
    }

    pub fn remove(&self, name: &str) {
        self.map.lock().remove(name);
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> FxHashMap<String, String> {
        self.map.lock().clone()
    }
}

impl From<FxHashMap<String, String>> for PersistentParameters {
    fn from(map: FxHashMap<String, String>) -> Self {
        PersistentParameters {
            map: Arc::new(Mutex::new(map)),
        }
    }
}

/// Output sink that captures bytes in memory. Clones share the buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        SharedBuffer::default()
    }

    /// Captured output, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//! Key-value persistence
//!
//! The game persists two kinds of records: one session per UTC day
//! (`session-YYYY-MM-DD`) and the aggregate stats (`stats`). Backends only
//! need to store strings under string keys.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// String key-value storage
///
/// Platform-specific backends implement this; the game never assumes more
/// than get/set/remove.
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete the value under `key`; missing keys are not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be deleted.
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

/// Backend chosen at runtime: files on disk, or memory for throwaway games
#[derive(Debug, Clone)]
pub enum AnyStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl KeyValueStore for AnyStore {
    type Error = std::io::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        match self {
            Self::File(store) => store.get(key),
            Self::Memory(store) => store.get(key).map_err(|never| match never {}),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self {
            Self::File(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value).map_err(|never| match never {}),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        match self {
            Self::File(store) => store.remove(key),
            Self::Memory(store) => store.remove(key).map_err(|never| match never {}),
        }
    }
}

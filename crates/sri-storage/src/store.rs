use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// String key-value storage, the shape of browser `localStorage`.
///
/// Reads take `&self`; writes take `&mut self`, so a store has one writer.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Load and deserialize a JSON value. `Ok(None)` if the key is absent.
pub fn load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize a value as JSON and store it under `key`.
pub fn save_json<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

//! Schema-versioned persisted slices.
//!
//! Each store persists a subset of its fields under one key, wrapped in an
//! envelope carrying the slice's schema version. A version mismatch on
//! load discards the slice instead of rehydrating a shape the code no
//! longer understands — bump the version whenever a slice's fields change.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientStorage, StorageError};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// Persist a slice under `key` with the given schema `version`.
pub fn save_slice<T: Serialize>(
    storage: &dyn ClientStorage,
    key: &str,
    version: u32,
    state: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&Envelope { version, state })?;
    storage.put(key, &raw)
}

/// Load a slice, returning `None` when absent, unreadable, or written by a
/// different schema version.
pub fn load_slice<T: DeserializeOwned>(
    storage: &dyn ClientStorage,
    key: &str,
    version: u32,
) -> Option<T> {
    let raw = storage.get(key)?;
    let envelope: Envelope<T> = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(key, %err, "discarding unreadable persisted slice");
            return None;
        }
    };
    if envelope.version != version {
        tracing::warn!(
            key,
            stored = envelope.version,
            expected = version,
            "discarding persisted slice with mismatched schema version"
        );
        return None;
    }
    Some(envelope.state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Slice {
        ids: Vec<String>,
    }

    #[test]
    fn slice_round_trips_at_matching_version() {
        let storage = MemoryStorage::new();
        let slice = Slice {
            ids: vec!["p1".into()],
        };
        save_slice(&storage, "wishlist-storage", 1, &slice).unwrap();
        assert_eq!(load_slice::<Slice>(&storage, "wishlist-storage", 1), Some(slice));
    }

    #[test]
    fn version_mismatch_discards_slice() {
        let storage = MemoryStorage::new();
        save_slice(&storage, "cart-storage", 1, &Slice { ids: vec![] }).unwrap();
        assert_eq!(load_slice::<Slice>(&storage, "cart-storage", 2), None);
    }

    #[test]
    fn missing_and_corrupt_slices_load_as_none() {
        let storage = MemoryStorage::new();
        assert_eq!(load_slice::<Slice>(&storage, "absent", 1), None);

        storage.put("cart-storage", "not json").unwrap();
        assert_eq!(load_slice::<Slice>(&storage, "cart-storage", 1), None);
    }
}

//! `shopfront-storage` — the client-storage boundary.
//!
//! Stores persist selected slices of their state here after every
//! transition and rehydrate them on construction. The trait is a plain
//! string KV; the file backend writes synchronously (multi-process use is
//! last-writer-wins, by accepted limitation).

pub mod file;
pub mod memory;
pub mod slice;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Client-side key/value storage (the localStorage of this client).
pub trait ClientStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use slice::{load_slice, save_slice};

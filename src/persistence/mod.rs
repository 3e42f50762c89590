//! Key-value persistence
//!
//! The game stores two small JSON strings: the leaderboard and the tuning.
//! Backends:
//! - `MemoryStorage`: in-process map (tests, headless runs)
//! - `FileStorage`: one file per key in a directory (native)
//! - `LocalStorage`: browser LocalStorage (wasm32)

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(target_arch = "wasm32")]
pub mod local;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Storage errors
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No storage backend available (e.g. LocalStorage disabled)
    #[error("Storage unavailable")]
    Unavailable,

    /// Browser storage call rejected
    #[error("Browser storage error: {0}")]
    Browser(String),

    /// Key cannot be mapped onto the backend
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// A named-value store
pub trait Storage {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

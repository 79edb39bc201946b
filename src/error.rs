//! Error types for persistence.

use thiserror::Error;

/// Everything that can go wrong between the item store and its storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No window or no localStorage (private mode, non-browser host).
    #[error("armazenamento indisponível")]
    Unavailable,

    /// The gateway rejected a read.
    #[error("erro ao ler a lista: {0}")]
    Read(String),

    /// The gateway rejected a write.
    #[error("erro ao salvar a lista: {0}")]
    Write(String),

    /// Snapshot could not be serialized.
    #[error("erro ao serializar a lista: {0}")]
    Encode(#[source] serde_json::Error),

    /// Persisted value is not a valid item collection.
    #[error("lista salva inválida: {0}")]
    Decode(#[source] serde_json::Error),

    /// Persisted value parses but breaks a collection invariant.
    #[error("lista salva inválida: {0}")]
    Invalid(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

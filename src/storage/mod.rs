//! Storage Gateway
//!
//! Async key-value persistence used by the item store.
//! Implementations can use localStorage, in-memory, etc.

mod browser;
#[cfg(test)]
mod memory;

use async_trait::async_trait;

use crate::error::StorageResult;

pub use browser::BrowserStorage;
#[cfg(test)]
pub use memory::MemoryStorage;

/// String key-value store with async access
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait StorageGateway {
    /// Read the value under `key`, `None` if nothing was ever written
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;
}

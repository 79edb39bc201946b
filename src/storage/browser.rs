//! localStorage-backed gateway.

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use super::StorageGateway;
use crate::error::{StorageError, StorageResult};

/// Gateway over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// `on_error` tags a throwing `localStorage` getter as a read or a write
    fn storage(on_error: fn(String) -> StorageError) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| on_error(js_message(&e)))?
            .ok_or(StorageError::Unavailable)
    }
}

#[async_trait(?Send)]
impl StorageGateway for BrowserStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage(StorageError::Read)?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_message(&e)))
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        Self::storage(StorageError::Write)?
            .set_item(key, &value)
            .map_err(|e| StorageError::Write(js_message(&e)))
    }
}

/// Pull `message` off a thrown DOMException, or debug-print whatever it was
fn js_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

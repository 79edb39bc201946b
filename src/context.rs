//! Application Context
//!
//! Session-wide item store provided via Leptos Context API.

use std::num::NonZeroU32;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::error::StorageError;
use crate::models::{Item, SortMode};
use crate::stats::Stats;
use crate::storage::BrowserStorage;
use crate::store::{ItemStore, PendingSave};

pub type AppItemStore = ItemStore<BrowserStorage>;

/// Handle to the one item store of this session
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every change to the store - read
    pub version: ReadSignal<u32>,
    /// Bumped after every change to the store - write
    set_version: WriteSignal<u32>,
    store: StoredValue<AppItemStore, LocalStorage>,
}

impl AppContext {
    pub fn new(version: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            version: version.0,
            set_version: version.1,
            store: StoredValue::new_local(ItemStore::new(Rc::new(BrowserStorage))),
        }
    }

    /// Read the store, re-running the caller whenever it changes
    fn read<U>(&self, f: impl FnOnce(&AppItemStore) -> U) -> U {
        self.version.track();
        self.store.with_value(f)
    }

    fn touch(&self) {
        self.set_version.update(|v| *v = v.wrapping_add(1));
    }

    /// Apply a list mutation and fire its save in the background
    fn mutate(&self, f: impl FnOnce(&mut AppItemStore) -> PendingSave) {
        let Some(save) = self.store.try_update_value(f) else {
            return;
        };
        self.touch();
        spawn_local(async move {
            if let Err(err) = save.await {
                report_error(&err);
            }
        });
    }

    // ========================
    // Reads
    // ========================

    pub fn view_items(&self) -> Vec<Item> {
        self.read(|store| store.derived_view().into_iter().cloned().collect())
    }

    pub fn mode(&self) -> SortMode {
        self.read(|store| store.mode())
    }

    pub fn stats(&self) -> Stats {
        self.read(|store| store.stats())
    }

    // ========================
    // Operations
    // ========================

    pub fn add(&self, name: String, quantity: NonZeroU32) {
        self.mutate(|store| store.add(name, quantity));
    }

    pub fn remove(&self, id: Uuid) {
        self.mutate(|store| store.remove(id));
    }

    pub fn toggle_stored(&self, id: Uuid) {
        self.mutate(|store| store.toggle_stored(id));
    }

    pub fn clear(&self) {
        self.mutate(|store| store.clear());
    }

    pub fn set_mode(&self, mode: SortMode) {
        if self.store.try_update_value(|store| store.set_mode(mode)).is_some() {
            self.touch();
        }
    }

    /// Load the persisted list once, replacing the empty startup list
    pub fn hydrate(&self) {
        let ctx = *self;
        let load = self.store.with_value(|store| store.load());
        spawn_local(async move {
            match load.await {
                Ok(Some(items)) => {
                    log::info!("[APP] Restored {} items", items.len());
                    if ctx.store.try_update_value(|store| store.hydrate(items)).is_some() {
                        ctx.touch();
                    }
                }
                Ok(None) => log::info!("[APP] No saved list"),
                Err(err) => report_error(&err),
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Log and show a blocking alert; the in-memory list stays as it is
fn report_error(err: &StorageError) {
    log::error!("[STORE] {}", err);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&err.to_string());
    }
}

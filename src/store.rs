//! Item Store
//!
//! Authoritative in-memory list plus the active view mode. Every list
//! mutation hands back the save of a full snapshot; the caller decides
//! whether to await it or spawn it.

use std::collections::HashSet;
use std::num::NonZeroU32;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use uuid::Uuid;

use crate::config::STORAGE_KEY;
use crate::error::{StorageError, StorageResult};
use crate::models::{Item, SortMode};
use crate::stats::Stats;
use crate::storage::StorageGateway;

/// Write of one collection snapshot, detached from the store
pub type PendingSave = LocalBoxFuture<'static, StorageResult<()>>;

/// Session state for the checklist
pub struct ItemStore<G> {
    items: Vec<Item>,
    mode: SortMode,
    gateway: Rc<G>,
    key: String,
}

impl<G: StorageGateway + 'static> ItemStore<G> {
    pub fn new(gateway: Rc<G>) -> Self {
        Self::with_key(gateway, STORAGE_KEY)
    }

    /// Store persisting under a custom key
    pub fn with_key(gateway: Rc<G>, key: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            mode: SortMode::default(),
            gateway,
            key: key.into(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn mode(&self) -> SortMode {
        self.mode
    }

    pub fn stats(&self) -> Stats {
        Stats::from_items(&self.items)
    }

    /// Items to display under the current mode
    pub fn derived_view(&self) -> Vec<&Item> {
        self.mode.apply(&self.items)
    }

    // ========================
    // Persistence
    // ========================

    /// Read the persisted collection once
    ///
    /// `Ok(None)` when nothing was ever saved. Values that do not parse as
    /// an item list, or that repeat an id, are rejected rather than used
    /// half-valid.
    pub fn load(&self) -> LocalBoxFuture<'static, StorageResult<Option<Vec<Item>>>> {
        let gateway = Rc::clone(&self.gateway);
        let key = self.key.clone();
        async move {
            let Some(raw) = gateway.get(&key).await? else {
                return Ok(None);
            };
            let items: Option<Vec<Item>> = serde_json::from_str(&raw).map_err(StorageError::Decode)?;
            if let Some(items) = &items {
                check_unique_ids(items)?;
            }
            log::debug!("[STORE] Loaded {} items", items.as_ref().map_or(0, Vec::len));
            Ok(items)
        }
        .boxed_local()
    }

    /// Replace the collection with previously persisted items
    pub fn hydrate(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    fn persist(&self) -> PendingSave {
        let snapshot = serde_json::to_string(&self.items);
        let gateway = Rc::clone(&self.gateway);
        let key = self.key.clone();
        let count = self.items.len();
        async move {
            let snapshot = snapshot.map_err(StorageError::Encode)?;
            gateway.set(&key, snapshot).await?;
            log::debug!("[STORE] Saved {} items", count);
            Ok(())
        }
        .boxed_local()
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new, not yet stored item
    pub fn add(&mut self, name: impl Into<String>, quantity: NonZeroU32) -> PendingSave {
        self.items.push(Item::new(name, quantity));
        self.persist()
    }

    /// Remove an item by ID (absent IDs are ignored)
    pub fn remove(&mut self, id: Uuid) -> PendingSave {
        self.items.retain(|item| item.id != id);
        self.persist()
    }

    /// Flip the stored flag of an item by ID (absent IDs are ignored)
    pub fn toggle_stored(&mut self, id: Uuid) -> PendingSave {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.stored = !item.stored;
        }
        self.persist()
    }

    pub fn clear(&mut self) -> PendingSave {
        self.items.clear();
        self.persist()
    }

    /// Change the view mode; never persisted
    pub fn set_mode(&mut self, mode: SortMode) {
        self.mode = mode;
    }
}

fn check_unique_ids(items: &[Item]) -> StorageResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    match items.iter().find(|item| !seen.insert(item.id)) {
        Some(item) => Err(StorageError::Invalid(format!("id duplicado {}", item.id))),
        None => Ok(()),
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::storage::MemoryStorage;
    use futures::executor::block_on;
    use proptest::prelude::*;

    /// One user action; indexes pick an existing item modulo the list length
    #[derive(Debug, Clone)]
    enum Op {
        Add(String, u32),
        Remove(usize),
        RemoveMissing,
        Toggle(usize),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => ("[A-Za-zãé ]{0,6}", 1u32..=20).prop_map(|(name, quantity)| Op::Add(name, quantity)),
            2 => any::<usize>().prop_map(Op::Remove),
            1 => Just(Op::RemoveMissing),
            3 => any::<usize>().prop_map(Op::Toggle),
            1 => Just(Op::Clear),
        ]
    }

    fn ops(max: usize) -> impl Strategy<Value = Vec<Op>> {
        proptest::collection::vec(op(), 0..max)
    }

    fn pick(store: &ItemStore<MemoryStorage>, index: usize) -> Uuid {
        match store.items().len() {
            0 => Uuid::new_v4(),
            len => store.items()[index % len].id,
        }
    }

    fn apply(store: &mut ItemStore<MemoryStorage>, op: &Op) -> StorageResult<()> {
        let save = match op {
            Op::Add(name, quantity) => {
                let quantity = NonZeroU32::new(*quantity).unwrap_or(NonZeroU32::MIN);
                store.add(name.clone(), quantity)
            }
            Op::Remove(index) => {
                let id = pick(store, *index);
                store.remove(id)
            }
            Op::RemoveMissing => store.remove(Uuid::new_v4()),
            Op::Toggle(index) => {
                let id = pick(store, *index);
                store.toggle_stored(id)
            }
            Op::Clear => store.clear(),
        };
        block_on(save)
    }

    /// Fields that survive a replay; ids of freshly added items differ per run
    fn content(items: &[Item]) -> Vec<(String, u32, bool)> {
        items.iter().map(|item| (item.name.clone(), item.quantity.get(), item.stored)).collect()
    }

    fn reopen(storage: &Rc<MemoryStorage>) -> ItemStore<MemoryStorage> {
        let mut store = ItemStore::new(Rc::clone(storage));
        if let Some(items) = block_on(store.load()).expect("load failed") {
            store.hydrate(items);
        }
        store
    }

    proptest! {
        #[test]
        fn test_every_op_saves_and_reload_matches(ops in ops(40)) {
            let storage = Rc::new(MemoryStorage::new());
            let mut store = ItemStore::new(Rc::clone(&storage));
            for op in &ops {
                prop_assert!(apply(&mut store, op).is_ok());
            }

            prop_assert_eq!(storage.writes().len(), ops.len());
            let reopened = reopen(&storage);
            prop_assert_eq!(reopened.items(), store.items());
        }

        #[test]
        fn test_replay_on_loaded_snapshot(before in ops(20), after in ops(20)) {
            let storage = Rc::new(MemoryStorage::new());
            let mut live = ItemStore::new(Rc::clone(&storage));
            for op in &before {
                apply(&mut live, op).unwrap();
            }

            let mut restored = reopen(&storage);
            prop_assert_eq!(restored.items(), live.items());

            // index-based picks resolve to the same item on both sides
            for op in &after {
                apply(&mut live, op).unwrap();
                apply(&mut restored, op).unwrap();
            }

            prop_assert_eq!(content(live.items()), content(restored.items()));
        }

        #[test]
        fn test_views_follow_mode(ops in ops(40)) {
            let storage = Rc::new(MemoryStorage::new());
            let mut store = ItemStore::new(storage);
            for op in &ops {
                apply(&mut store, op).unwrap();
            }
            let items = store.items().to_vec();

            store.set_mode(SortMode::Newest);
            let newest: Vec<Item> = store.derived_view().into_iter().cloned().collect();
            prop_assert_eq!(&newest, &items);

            store.set_mode(SortMode::Stored);
            let stored: Vec<Item> = store.derived_view().into_iter().cloned().collect();
            let expected: Vec<Item> = items.iter().filter(|item| item.stored).cloned().collect();
            prop_assert_eq!(&stored, &expected);

            store.set_mode(SortMode::Alphabetically);
            let sorted: Vec<Item> = store.derived_view().into_iter().cloned().collect();
            prop_assert!(sorted.windows(2).all(|pair| pair[0].name <= pair[1].name));
            let mut sorted_ids: Vec<Uuid> = sorted.iter().map(|item| item.id).collect();
            let mut all_ids: Vec<Uuid> = items.iter().map(|item| item.id).collect();
            sorted_ids.sort();
            all_ids.sort();
            prop_assert_eq!(sorted_ids, all_ids);
            let twice: Vec<Item> = SortMode::Alphabetically.apply(&sorted).into_iter().cloned().collect();
            prop_assert_eq!(&twice, &sorted);

            // views never touch the collection
            prop_assert_eq!(store.items(), items.as_slice());
        }
    }
}

//! # Entity Store & Transactions
//!
//! Every [`ResourceActor`](crate::ResourceActor) owns exactly one [`Store`]. Because the actor
//! drains its mailbox one message at a time, the store never needs a lock: each request sees
//! the state left by the previous one, which gives serializable isolation per resource type.
//!
//! Multi-entity commands go through a [`Transaction`]: an overlay of staged writes on top of
//! the committed store. Reads through the transaction see the staged writes. The actor turns a
//! successful transaction into [`Changes`] and commits them in one step; a failed command simply
//! drops its transaction, so nothing it staged is ever observed.

use crate::entity::ActorEntity;
use std::collections::{BTreeMap, BTreeSet};

/// Ordered map of entities plus the sequential id counter.
pub struct Store<T: ActorEntity> {
    items: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Store<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entities in ascending id order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.values()
    }

    /// `(id, entity)` pairs in ascending id order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&T::Id, &T)> {
        self.items.iter()
    }

    /// The id the next created entity will receive.
    pub fn peek_id(&self) -> T::Id {
        T::Id::from(self.next_id)
    }

    /// Stores an entity under the id returned by [`Store::peek_id`] and advances the counter.
    pub(crate) fn push(&mut self, id: T::Id, item: T) {
        self.items.insert(id, item);
        self.next_id += 1;
    }

    pub(crate) fn replace(&mut self, id: T::Id, item: T) {
        self.items.insert(id, item);
    }

    pub(crate) fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.items.remove(id)
    }

    /// Opens a transaction over the current committed state.
    pub fn begin(&self) -> Transaction<'_, T> {
        Transaction {
            base: self,
            writes: BTreeMap::new(),
            next_id: self.next_id,
        }
    }

    /// Applies the changes of a successful transaction.
    pub(crate) fn commit(&mut self, changes: Changes<T>) {
        for (id, slot) in changes.writes {
            match slot {
                Some(item) => {
                    self.items.insert(id, item);
                }
                None => {
                    self.items.remove(&id);
                }
            }
        }
        self.next_id = changes.next_id;
    }
}

/// Staged writes over a [`Store`]. `None` in `writes` marks a removal.
pub struct Transaction<'a, T: ActorEntity> {
    base: &'a Store<T>,
    writes: BTreeMap<T::Id, Option<T>>,
    next_id: u32,
}

impl<'a, T: ActorEntity> Transaction<'a, T> {
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        match self.writes.get(id) {
            Some(slot) => slot.as_ref(),
            None => self.base.get(id),
        }
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Mutable access to an entity; the first access copies it into the overlay.
    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        if !self.writes.contains_key(id) {
            let current = self.base.get(id)?.clone();
            self.writes.insert(id.clone(), Some(current));
        }
        self.writes.get_mut(id).and_then(Option::as_mut)
    }

    /// Visible ids in ascending order.
    pub fn ids(&self) -> Vec<T::Id> {
        let mut ids: BTreeSet<T::Id> = self.base.items.keys().cloned().collect();
        for (id, slot) in &self.writes {
            if slot.is_some() {
                ids.insert(id.clone());
            } else {
                ids.remove(id);
            }
        }
        ids.into_iter().collect()
    }

    /// Visible entities in ascending id order.
    pub fn values(&self) -> Vec<&T> {
        self.ids().iter().filter_map(|id| self.get(id)).collect()
    }

    /// Applies `f` to every visible entity.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        for id in self.ids() {
            if let Some(item) = self.get_mut(&id) {
                f(item);
            }
        }
    }

    /// Builds and stages a new entity under the next sequential id.
    /// The counter only advances if `build` succeeds.
    pub fn insert_with<F>(&mut self, build: F) -> Result<T::Id, T::Error>
    where
        F: FnOnce(T::Id) -> Result<T, T::Error>,
    {
        let id = T::Id::from(self.next_id);
        let item = build(id.clone())?;
        self.writes.insert(id.clone(), Some(item));
        self.next_id += 1;
        Ok(id)
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let existing = self.get(id).cloned()?;
        self.writes.insert(id.clone(), None);
        Some(existing)
    }

    /// Number of staged writes.
    pub fn pending(&self) -> usize {
        self.writes.len()
    }

    pub(crate) fn into_changes(self) -> Changes<T> {
        Changes {
            writes: self.writes,
            next_id: self.next_id,
        }
    }
}

/// Owned result of a transaction, detached from the store borrow so it can be committed.
pub struct Changes<T: ActorEntity> {
    writes: BTreeMap<T::Id, Option<T>>,
    next_id: u32,
}

impl<T: ActorEntity> Changes<T> {
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Unsupported;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Flag {
        id: u32,
        on: bool,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("flag error")]
    struct FlagError;

    #[async_trait]
    impl ActorEntity for Flag {
        type Id = u32;
        type Create = bool;
        type Update = Unsupported;
        type Action = Unsupported;
        type ActionResult = ();
        type Query = Unsupported;
        type QueryResult = ();
        type Command = Unsupported;
        type CommandResult = ();
        type Context = ();
        type Error = FlagError;

        fn from_create_params(id: u32, on: bool) -> Result<Self, Self::Error> {
            Ok(Self { id, on })
        }
        async fn on_update(&mut self, update: Unsupported, _: &()) -> Result<(), Self::Error> {
            match update {}
        }
        async fn handle_action(&mut self, action: Unsupported, _: &()) -> Result<(), Self::Error> {
            match action {}
        }
        async fn handle_query(_: &Store<Self>, query: Unsupported, _: &()) -> Result<(), Self::Error> {
            match query {}
        }
        async fn handle_command<'s>(
            _: &mut Transaction<'s, Self>,
            command: Unsupported,
            _: &(),
        ) -> Result<(), Self::Error> {
            match command {}
        }
    }

    fn seeded() -> Store<Flag> {
        let mut store = Store::new();
        for on in [true, false, false] {
            let id = store.peek_id();
            store.push(id, Flag { id, on });
        }
        store
    }

    #[test]
    fn transaction_reads_its_own_writes_without_touching_base() {
        let store = seeded();
        let mut tx = store.begin();
        tx.for_each_mut(|flag| flag.on = !flag.on);

        assert!(!tx.get(&1).unwrap().on);
        assert!(tx.get(&2).unwrap().on);
        assert!(store.get(&1).unwrap().on);
        assert_eq!(tx.pending(), 3);
    }

    #[test]
    fn commit_applies_updates_inserts_and_removals() {
        let mut store = seeded();
        let mut tx = store.begin();
        tx.remove(&2);
        let new_id = tx.insert_with(|id| Ok(Flag { id, on: true })).unwrap();
        tx.get_mut(&3).unwrap().on = true;
        assert_eq!(tx.ids(), vec![1, 3, 4]);

        let changes = tx.into_changes();
        store.commit(changes);

        assert_eq!(new_id, 4);
        assert!(!store.contains(&2));
        assert!(store.get(&3).unwrap().on);
        assert_eq!(store.len(), 3);
        assert_eq!(store.peek_id(), 5);
    }

    #[test]
    fn dropped_transaction_leaves_store_and_counter_untouched() {
        let store = seeded();
        {
            let mut tx = store.begin();
            tx.for_each_mut(|flag| flag.on = false);
            tx.insert_with(|id| Ok(Flag { id, on: true })).unwrap();
        }
        assert!(store.get(&1).unwrap().on);
        assert_eq!(store.peek_id(), 4);
    }

    #[test]
    fn failed_insert_does_not_consume_an_id() {
        let store = seeded();
        let mut tx = store.begin();
        assert!(tx.insert_with(|_| Err(FlagError)).is_err());
        assert_eq!(tx.insert_with(|id| Ok(Flag { id, on: false })).unwrap(), 4);
    }
}

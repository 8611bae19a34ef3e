//! Ordered list editor for the repeatable draft entities.
//!
//! Items are addressed by position, matching how the form renders them.
//! Removing an item shifts every later position down by one, so callers that
//! need an identity that survives removals should hold on to the
//! [`EntryKey`] returned by [`CollectionEditor::add`] instead of an index.
//!
//! The backing sequence is shared behind an `Arc`. A [`CollectionEditor::snapshot`]
//! taken before an edit never observes that edit, and [`CollectionEditor::version`]
//! increases on every effective change.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::{DraftItem, FieldValue};

/// Stable identity of an entry, independent of its current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(u64);

/// An item together with its stable key.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    key: EntryKey,
    item: T,
}

impl<T> Entry<T> {
    pub fn key(&self) -> EntryKey {
        self.key
    }

    pub fn item(&self) -> &T {
        &self.item
    }
}

#[derive(Debug, Clone)]
pub struct CollectionEditor<T> {
    entries: Arc<Vec<Entry<T>>>,
    next_key: u64,
    version: u64,
}

impl<T> Default for CollectionEditor<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
            next_key: 0,
            version: 0,
        }
    }
}

impl<T: DraftItem> CollectionEditor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an editor pre-populated with `items`, in order.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut editor = Self::new();
        let mut entries = Vec::new();
        for item in items {
            entries.push(Entry {
                key: editor.allocate_key(),
                item,
            });
        }
        editor.entries = Arc::new(entries);
        editor
    }

    /// Appends a blank item and returns its key.
    pub fn add(&mut self) -> EntryKey {
        self.push(T::blank())
    }

    /// Appends `item` and returns its key.
    pub fn push(&mut self, item: T) -> EntryKey {
        let key = self.allocate_key();
        Arc::make_mut(&mut self.entries).push(Entry { key, item });
        self.version += 1;
        key
    }

    /// Removes the item at `index`. Out-of-range indexes are a no-op and
    /// return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = Arc::make_mut(&mut self.entries).remove(index);
        self.version += 1;
        Some(removed.item)
    }

    /// Replaces one field of the item at `index`, keeping all other fields.
    ///
    /// Returns `Ok(false)` without touching anything when `index` is out of
    /// range. A value of the wrong kind for the field is rejected and leaves
    /// the item unchanged.
    pub fn update_at(
        &mut self,
        index: usize,
        field: T::Field,
        value: impl Into<FieldValue>,
    ) -> Result<bool, ValidationError> {
        let Some(entry) = self.entries.get(index) else {
            return Ok(false);
        };
        let mut updated = entry.item.clone();
        updated.set_field(field, value.into())?;

        Arc::make_mut(&mut self.entries)[index].item = updated;
        self.version += 1;
        Ok(true)
    }

    /// Removes the entry with `key`, wherever it currently sits.
    pub fn remove_by_key(&mut self, key: EntryKey) -> Option<T> {
        self.index_of(key).and_then(|index| self.remove_at(index))
    }

    /// Updates the entry with `key`, wherever it currently sits.
    pub fn update_by_key(
        &mut self,
        key: EntryKey,
        field: T::Field,
        value: impl Into<FieldValue>,
    ) -> Result<bool, ValidationError> {
        match self.index_of(key) {
            Some(index) => self.update_at(index, field, value),
            None => Ok(false),
        }
    }

    pub fn index_of(&self, key: EntryKey) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn key_at(&self, index: usize) -> Option<EntryKey> {
        self.entries.get(index).map(Entry::key)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(Entry::item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(Entry::item)
    }

    /// Immutable view of the current sequence.
    pub fn snapshot(&self) -> Arc<Vec<Entry<T>>> {
        Arc::clone(&self.entries)
    }

    /// Monotonic change counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn allocate_key(&mut self) -> EntryKey {
        let key = EntryKey(self.next_key);
        self.next_key += 1;
        key
    }
}

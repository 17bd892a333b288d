// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`FieldList`] container: ordered fields with stable keys and derived positions.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::changes::Changes;
use crate::config::FieldListConfig;
use crate::error::FieldListError;
use crate::types::{Field, FieldControls, FieldKey};

/// An ordered list of fields for a repeatable form group.
///
/// Each field has a [`FieldKey`] that never changes and is never reused, and a
/// `position` that always equals its offset in the list. After every call the
/// positions are exactly `0..len()` in order.
///
/// ## Permissive and strict operations
///
/// [`add`](Self::add), [`remove`](Self::remove) and [`move_field`](Self::move_field)
/// never fail: adding past the ceiling or addressing a missing position leaves
/// the list unchanged and emits a `debug` event. UI event handlers can call
/// them with stale indices without checking first.
///
/// The `try_*` variants perform the same mutation but report a
/// [`FieldListError`] instead of absorbing it.
///
/// ## Changes
///
/// Mutations apply immediately. [`commit`](Self::commit) returns the keys that
/// were added, removed or shifted since the previous commit, which is what a
/// renderer needs to patch its slots. Fields created at construction are
/// reported as added by the first commit.
pub struct FieldList<D> {
    name: String,
    ceiling: Option<usize>,
    fields: Vec<Field<D>>,
    next_key: u64,
    committed: Vec<FieldKey>,
}

impl<D> fmt::Debug for FieldList<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldList")
            .field("name", &self.name)
            .field("ceiling", &self.ceiling)
            .field("len", &self.fields.len())
            .field("next_key", &self.next_key)
            .finish_non_exhaustive()
    }
}

impl<D: Default> Default for FieldList<D> {
    fn default() -> Self {
        Self::new(FieldListConfig::default())
    }
}

impl<D: Default> FieldList<D> {
    /// Create a list and pre-populate `config.initial_count` default fields.
    ///
    /// Pre-population goes through [`add`](Self::add), so the initial count
    /// is clamped by the ceiling.
    pub fn new(config: FieldListConfig) -> Self {
        Self::with_initial(config, |_| D::default())
    }

    /// Append a field with a default payload. Does nothing at capacity.
    pub fn add(&mut self) {
        self.add_with(D::default());
    }

    /// Append a field with a default payload, reporting a full list as an error.
    pub fn try_add(&mut self) -> Result<FieldKey, FieldListError> {
        self.try_add_with(D::default())
    }
}

impl<D> FieldList<D> {
    /// Create a list and pre-populate it with payloads from `init`.
    ///
    /// `init` receives the position of each field being created.
    pub fn with_initial(config: FieldListConfig, mut init: impl FnMut(usize) -> D) -> Self {
        let ceiling = config.ceiling();
        let count = ceiling.map_or(config.initial_count, |max| config.initial_count.min(max));
        let mut list = Self {
            name: config.name,
            ceiling,
            fields: Vec::with_capacity(count),
            next_key: 0,
            committed: Vec::new(),
        };
        for position in 0..count {
            list.add_with(init(position));
        }
        list
    }

    /// Append a field carrying `data`. Does nothing at capacity.
    pub fn add_with(&mut self, data: D) {
        if let Err(err) = self.try_add_with(data) {
            self.ignored("add", err);
        }
    }

    /// Append a field carrying `data` and return its key.
    pub fn try_add_with(&mut self, data: D) -> Result<FieldKey, FieldListError> {
        if let Some(max) = self.ceiling
            && self.fields.len() >= max
        {
            return Err(FieldListError::AtCapacity { max });
        }
        let key = FieldKey::new(self.next_key);
        self.next_key += 1;
        let position = self.fields.len();
        self.fields.push(Field {
            key,
            position,
            data,
        });
        tracing::trace!(list = %self.name, %key, position, "added field");
        Ok(key)
    }

    /// Remove the field at `index` and renumber the rest. Does nothing if `index` is out of range.
    pub fn remove(&mut self, index: usize) {
        if let Err(err) = self.try_remove(index) {
            self.ignored("remove", err);
        }
    }

    /// Remove the field at `index` and return it, renumbering the rest.
    ///
    /// The returned record keeps the position it had before removal.
    pub fn try_remove(&mut self, index: usize) -> Result<Field<D>, FieldListError> {
        self.check_index(index)?;
        let field = self.fields.remove(index);
        self.reindex();
        tracing::trace!(
            list = %self.name,
            key = %field.key,
            index,
            len = self.fields.len(),
            "removed field"
        );
        Ok(field)
    }

    /// [`remove`](Self::remove) for hosts that hand out signed indices; negatives are ignored.
    pub fn remove_signed(&mut self, index: i64) {
        let result = signed_index(index).and_then(|index| self.try_remove(index).map(drop));
        if let Err(err) = result {
            self.ignored("remove", err);
        }
    }

    /// Move the field at `from` so that it ends up at `to`, renumbering every field.
    ///
    /// Does nothing unless both indices address live fields. `to` is the
    /// final position of the moved field: moving `2` to `0` in `[a, b, c]`
    /// yields `[c, a, b]`, and moving `0` to `2` yields `[b, c, a]`.
    pub fn move_field(&mut self, from: usize, to: usize) {
        if let Err(err) = self.try_move(from, to) {
            self.ignored("move", err);
        }
    }

    /// Move the field at `from` to `to`, reporting invalid indices as errors.
    pub fn try_move(&mut self, from: usize, to: usize) -> Result<FieldKey, FieldListError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let field = self.fields.remove(from);
        let key = field.key;
        self.fields.insert(to, field);
        self.reindex();
        tracing::trace!(list = %self.name, %key, from, to, "moved field");
        Ok(key)
    }

    /// [`move_field`](Self::move_field) for hosts that hand out signed indices; negatives are ignored.
    pub fn move_signed(&mut self, from: i64, to: i64) {
        let result = signed_index(from).and_then(|from| {
            let to = signed_index(to)?;
            self.try_move(from, to)
        });
        if let Err(err) = result {
            self.ignored("move", err);
        }
    }

    /// Remove every field. Keys handed out so far stay retired.
    pub fn clear(&mut self) {
        self.fields.clear();
        tracing::trace!(list = %self.name, "cleared fields");
    }

    /// Borrow the live fields in order.
    pub fn fields(&self) -> &[Field<D>] {
        &self.fields
    }

    /// Iterate the live fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &Field<D>> + '_ {
        self.fields.iter()
    }

    /// The field at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Field<D>> {
        self.fields.get(position)
    }

    /// Mutable access to the payload at `position`. Keys and positions stay read-only.
    pub fn field_data_mut(&mut self, position: usize) -> Option<&mut D> {
        self.fields.get_mut(position).map(|field| &mut field.data)
    }

    /// Current position of the field identified by `key`, if it is live.
    pub fn position_of(&self, key: FieldKey) -> Option<usize> {
        self.fields.iter().position(|field| field.key == key)
    }

    /// Number of live fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the list has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The group name from the configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The effective ceiling, or `None` if unbounded.
    pub fn max_count(&self) -> Option<usize> {
        self.ceiling
    }

    /// True if an add would be ignored.
    pub fn is_at_capacity(&self) -> bool {
        self.ceiling.is_some_and(|max| self.fields.len() >= max)
    }

    /// The gestures that would currently change the list.
    pub fn controls(&self) -> FieldControls {
        let mut controls = FieldControls::empty();
        controls.set(FieldControls::ADD, !self.is_at_capacity());
        controls.set(FieldControls::REMOVE, !self.fields.is_empty());
        controls.set(FieldControls::MOVE, self.fields.len() > 1);
        controls
    }

    /// The form path of the field at `position`, such as `contacts[2]`.
    ///
    /// Downstream form values are addressed by position, so the path of a
    /// field changes when fields before it are removed or moved.
    pub fn field_path(&self, position: usize) -> Option<String> {
        (position < self.fields.len()).then(|| format!("{}[{}]", self.name, position))
    }

    /// Report structural changes since the previous commit.
    pub fn commit(&mut self) -> Changes {
        let live: Vec<FieldKey> = self.fields.iter().map(|field| field.key).collect();
        let changes = Changes::between(&self.committed, &live);
        self.committed = live;
        changes
    }

    // --- internals ---

    fn check_index(&self, index: usize) -> Result<(), FieldListError> {
        let len = self.fields.len();
        if index < len {
            Ok(())
        } else {
            Err(FieldListError::IndexOutOfRange { index, len })
        }
    }

    fn reindex(&mut self) {
        for (position, field) in self.fields.iter_mut().enumerate() {
            field.position = position;
        }
    }

    fn ignored(&self, op: &'static str, err: FieldListError) {
        tracing::debug!(list = %self.name, op, error = %err, "ignored field list operation");
    }
}

impl<D: Clone> FieldList<D> {
    /// An owned snapshot of the live fields in order.
    ///
    /// Mutating the snapshot does not affect the list.
    pub fn get_fields(&self) -> Vec<Field<D>> {
        self.fields.clone()
    }
}

impl<'a, D> IntoIterator for &'a FieldList<D> {
    type Item = &'a Field<D>;
    type IntoIter = core::slice::Iter<'a, Field<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn signed_index(index: i64) -> Result<usize, FieldListError> {
    if index < 0 {
        return Err(FieldListError::NegativeIndex { index });
    }
    // Wider than the address space can only be out of range.
    Ok(usize::try_from(index).unwrap_or(usize::MAX))
}

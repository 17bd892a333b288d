// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched change summary returned by [`FieldList::commit`](crate::FieldList::commit).

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::types::FieldKey;

/// Structural changes since the previous commit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    /// Keys of fields that are live now but were not at the last commit, in list order.
    pub added: Vec<FieldKey>,
    /// Keys of fields that were live at the last commit and are gone now, in their old order.
    pub removed: Vec<FieldKey>,
    /// Surviving fields whose position changed: `(key, old, new)`, in list order.
    pub moved: Vec<(FieldKey, usize, usize)>,
}

impl Changes {
    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.moved.is_empty()
    }

    /// Diff the committed key order against the live key order.
    pub(crate) fn between(committed: &[FieldKey], live: &[FieldKey]) -> Self {
        let old: BTreeMap<FieldKey, usize> =
            committed.iter().enumerate().map(|(i, &k)| (k, i)).collect();
        let new: BTreeMap<FieldKey, usize> =
            live.iter().enumerate().map(|(i, &k)| (k, i)).collect();

        let mut changes = Self::default();
        for (position, &key) in live.iter().enumerate() {
            match old.get(&key) {
                None => changes.added.push(key),
                Some(&prev) if prev != position => changes.moved.push((key, prev, position)),
                Some(_) => {}
            }
        }
        changes.removed = committed
            .iter()
            .copied()
            .filter(|key| !new.contains_key(key))
            .collect();
        changes
    }
}

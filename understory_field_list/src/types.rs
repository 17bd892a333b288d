// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the field list: keys, field records, and control flags.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a field in a [`FieldList`](crate::FieldList).
///
/// Keys come from a per-list counter that starts at `0` and only ever grows.
///
/// ## Semantics
///
/// - Every successful add consumes exactly one key.
/// - Removing a field never frees its key; a later add gets a fresh one.
/// - Moving a field carries its key along, so a key names the same field
///   for as long as that field is live.
///
/// Unlike [`Field::position`], a key is suitable for diffing rendered slots
/// across mutations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(u64);

impl FieldKey {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value of this key.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One entry of a field list.
///
/// Records handed out by the list are either borrowed (`&Field<D>`) or owned
/// snapshots, so editing them never reaches back into the list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field<D> {
    /// Stable identity, assigned once at creation.
    pub key: FieldKey,
    /// Zero-based offset in the list at the time the record was read.
    pub position: usize,
    /// Caller payload supplied when the field was added.
    pub data: D,
}

bitflags::bitflags! {
    /// Gestures that would currently change a list.
    ///
    /// Returned by [`FieldList::controls`](crate::FieldList::controls) so a UI
    /// can disable buttons instead of relying on silent no-ops.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FieldControls: u8 {
        /// The list is below its ceiling; an add would append a field.
        const ADD    = 0b0000_0001;
        /// The list is non-empty; some remove would succeed.
        const REMOVE = 0b0000_0010;
        /// The list holds two or more fields; some move would reorder it.
        const MOVE   = 0b0000_0100;
    }
}

impl Default for FieldControls {
    fn default() -> Self {
        Self::ADD
    }
}

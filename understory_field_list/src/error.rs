// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the strict `try_*` operations.

use thiserror::Error;

/// Why a strict field list operation left the list unchanged.
///
/// The permissive operations ([`FieldList::add`](crate::FieldList::add),
/// [`FieldList::remove`](crate::FieldList::remove),
/// [`FieldList::move_field`](crate::FieldList::move_field)) absorb these
/// and only log them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldListError {
    /// The list already holds its maximum number of fields.
    #[error("field list is at capacity ({max} fields)")]
    AtCapacity {
        /// The configured ceiling.
        max: usize,
    },

    /// A position did not address a live field.
    #[error("index {index} is out of range for a list of {len} fields")]
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// A host-supplied signed index was negative.
    #[error("index {index} is negative")]
    NegativeIndex {
        /// The rejected index.
        index: i64,
    },
}

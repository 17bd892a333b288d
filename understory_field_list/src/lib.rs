// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_field_list --heading-base-level=0

//! Understory Field List: ordered fields for repeatable form groups.
//!
//! A form that lets users add, remove and reorder rows (contacts, line items, addresses)
//! needs two numbers per row: a stable identity for diffing rendered slots, and a
//! contiguous index for naming form values (`contacts[0]`, `contacts[1]`, ...).
//! [`FieldList`] keeps both:
//!
//! - Every field gets a [`FieldKey`] from a monotonically increasing counter.
//!   Keys survive removals and moves of other fields and are never reused.
//! - Every field's `position` equals its offset in the list and is renumbered after
//!   each structural change, so positions are always `0..len`.
//! - An optional ceiling caps the number of fields.
//!
//! ## Permissive by default
//!
//! [`FieldList::add`], [`FieldList::remove`] and [`FieldList::move_field`] ignore
//! requests they cannot honor (adding past the ceiling, out-of-range indices) and
//! leave the list unchanged. This suits UI event handlers, which may fire with
//! stale indices. The `try_*` variants report a [`FieldListError`] instead, and
//! [`FieldList::controls`] tells a UI which gestures are currently meaningful.
//!
//! ## Changes
//!
//! Mutations apply immediately. [`FieldList::commit`] returns the [`Changes`]
//! since the previous commit: added and removed keys, and survivors whose
//! position shifted.
//!
//! ## Example
//!
//! ```rust
//! use understory_field_list::{FieldList, FieldListConfig};
//!
//! let mut list: FieldList<()> =
//!     FieldList::new(FieldListConfig::new("contacts").with_initial_count(3));
//! let keys: Vec<_> = list.iter().map(|f| f.key).collect();
//!
//! // Move the last field to the front; keys travel with their fields.
//! list.move_field(2, 0);
//! let order: Vec<_> = list.iter().map(|f| f.key).collect();
//! assert_eq!(order, [keys[2], keys[0], keys[1]]);
//!
//! // Remove the middle field; positions stay contiguous.
//! list.remove(1);
//! let positions: Vec<_> = list.iter().map(|f| f.position).collect();
//! assert_eq!(positions, [0, 1]);
//! assert_eq!(list.field_path(1).as_deref(), Some("contacts[1]"));
//!
//! // Out-of-range requests are ignored.
//! list.remove(7);
//! assert_eq!(list.len(), 2);
//! ```
//!
//! ## Logging
//!
//! Successful mutations emit `trace` events and ignored requests emit `debug`
//! events through [`tracing`]. The crate installs no subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod changes;
pub mod config;
pub mod error;
pub mod list;
pub mod types;

pub use changes::Changes;
pub use config::FieldListConfig;
pub use error::FieldListError;
pub use list::FieldList;
pub use types::{Field, FieldControls, FieldKey};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a [`FieldList`](crate::FieldList).
//!
//! The configuration is passed in explicitly rather than looked up from an
//! enclosing form, so a list can be built and tested on its own.
//! It deserializes from both `snake_case` and `camelCase` keys, which lets a
//! host forward element attributes (`initialCount`, `maxCount`) unchanged.
//!
//! ```
//! use understory_field_list::FieldListConfig;
//!
//! let config: FieldListConfig =
//!     serde_json::from_str(r#"{ "name": "contacts", "initialCount": 2, "maxCount": 5 }"#).unwrap();
//! assert_eq!(config, FieldListConfig::new("contacts").with_initial_count(2).with_max_count(5));
//! ```

use alloc::string::String;

use serde::{Deserialize, Serialize};

/// Configuration for a field list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldListConfig {
    /// Identifier of the group, used as the prefix of field paths (`name[0]`).
    pub name: String,
    /// Number of fields to create at construction. Clamped by the ceiling.
    #[serde(alias = "initialCount")]
    pub initial_count: usize,
    /// Optional maximum number of fields. `None` and `Some(0)` both mean unbounded.
    #[serde(alias = "maxCount")]
    pub max_count: Option<usize>,
}

impl FieldListConfig {
    /// Create an unbounded, initially empty configuration for the group `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the number of fields created at construction.
    #[must_use]
    pub fn with_initial_count(mut self, initial_count: usize) -> Self {
        self.initial_count = initial_count;
        self
    }

    /// Set the maximum number of fields.
    #[must_use]
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// The effective ceiling: `max_count` with `0` normalized to `None`.
    pub fn ceiling(&self) -> Option<usize> {
        self.max_count.filter(|&max| max > 0)
    }
}

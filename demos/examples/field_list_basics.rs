// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field list basics.
//!
//! Build a contact list from JSON configuration, add, move and remove rows,
//! and print the form paths and batched changes after each step.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_demos --example field_list_basics`

use tracing_subscriber::EnvFilter;
use understory_field_list::{FieldList, FieldListConfig};

#[derive(Clone, Debug, Default)]
struct Contact {
    name: &'static str,
    phone: &'static str,
}

fn print_rows(list: &FieldList<Contact>) {
    for field in list {
        let path = list.field_path(field.position).unwrap_or_default();
        println!(
            "  {path:<12} key={:<3} {} {}",
            field.key, field.data.name, field.data.phone
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: FieldListConfig =
        serde_json::from_str(r#"{ "name": "contacts", "initialCount": 1, "maxCount": 4 }"#)
            .expect("valid config");
    let mut list: FieldList<Contact> = FieldList::new(config);

    list.add_with(Contact {
        name: "John",
        phone: "123456",
    });
    list.add_with(Contact {
        name: "Ada",
        phone: "654321",
    });
    println!("after adds:");
    print_rows(&list);
    println!("changes: {:?}", list.commit());

    // Drag the last row to the top.
    list.move_field(2, 0);
    println!("after move 2 -> 0:");
    print_rows(&list);
    println!("changes: {:?}", list.commit());

    // A stale handler firing twice: the second removal is ignored.
    list.remove(1);
    list.remove(5);
    println!("after remove 1:");
    print_rows(&list);
    println!("changes: {:?}", list.commit());

    list.add();
    list.add();
    println!("controls at capacity: {:?}", list.controls());
    println!("strict add: {:?}", list.try_add());
}

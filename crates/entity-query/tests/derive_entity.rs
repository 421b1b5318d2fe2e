#![cfg(feature = "derive")]
#![allow(dead_code)]

use entity_query::{Entity, ImmutableQueryBuilder, QueryBuilder};

#[derive(Entity)]
struct Customer {
    id: i64,
    name: String,
}

#[derive(Entity)]
#[entity(name = "PurchaseOrder", alias = "po")]
struct OrderRow {
    id: i64,
}

#[derive(Entity)]
#[entity(alias = "w")]
struct Wrapper<T> {
    inner: T,
}

#[test]
fn default_name_is_type_name() {
    assert_eq!(Customer::entity_name(), "Customer");
    assert_eq!(Customer::default_alias(), None);
    assert_eq!(QueryBuilder::of::<Customer>().to_query(), "SELECT e FROM Customer e");
}

#[test]
fn attributes_override_name_and_alias() {
    assert_eq!(
        QueryBuilder::of::<OrderRow>().to_query(),
        "SELECT po FROM PurchaseOrder po"
    );
    assert_eq!(
        ImmutableQueryBuilder::of_as::<OrderRow>("x").to_query(),
        "SELECT x FROM PurchaseOrder x"
    );
}

#[test]
fn generic_types_use_simple_name() {
    assert_eq!(
        QueryBuilder::of::<Wrapper<u8>>().to_query(),
        "SELECT w FROM Wrapper w"
    );
}

//! Derive macros for entity-query
//!
//! Provides `#[derive(Entity)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod entity;
mod ident;

/// Derive the `Entity` trait for a type.
///
/// # Example
///
/// Runs as a doctest in `entity_query::entity`.
///
/// ```ignore
/// use entity_query::{Entity, QueryBuilder};
///
/// #[derive(Entity)]
/// #[entity(name = "Customer", alias = "c")]
/// struct CustomerRow {
///     id: i64,
/// }
///
/// assert_eq!(QueryBuilder::of::<CustomerRow>().to_query(), "SELECT c FROM Customer c");
/// ```
///
/// # Attributes
///
/// - `#[entity(name = "Name")]` - Entity name used in FROM (default: the type name)
/// - `#[entity(alias = "x")]` - Default alias (default: the builder's default alias)
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    entity::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

//! # entity-query
//!
//! A fluent builder for parameterized entity query language (JPQL-style)
//! SELECT statements.
//!
//! ## Features
//!
//! - **Fragments stay text**: select, join, filter, group/having/order bodies
//!   are opaque strings; only `?` placeholders are ever looked at
//! - **Named parameters**: `?` is rewritten to `:param<N>` and the value is
//!   bound under that name in a [`ParamMap`]
//! - **Safe failures**: a placeholder/value count mismatch is a [`QbError`]
//!   and leaves the builder unchanged
//! - **Two lifecycles**: mutable [`QueryBuilder`] and copy-on-write
//!   [`ImmutableQueryBuilder`] with the same API and output
//!
//! ## Example
//!
//! ```
//! use entity_query::{QueryBuilder, Value};
//!
//! let mut qb = QueryBuilder::new("Entity e");
//! qb.and_where("e.name = ?", ["sample"])?
//!     .and_where("e.accountId = ?", [5])?
//!     .or_where("e.companyId = ?", [12])?;
//!
//! assert_eq!(
//!     qb.to_query(),
//!     "SELECT e FROM Entity e WHERE (e.name = :param1) AND (e.accountId = :param2) OR (e.companyId = :param3)"
//! );
//! assert_eq!(qb.params().get("param3"), Some(&Value::Int(12)));
//! # Ok::<(), entity_query::QbError>(())
//! ```
//!
//! Filters are laid out flat: every AND entry first, then a single `OR`
//! before the OR entries. Group conditions inside one fragment when a
//! different precedence is needed.

pub mod config;
pub mod entity;
pub mod error;
pub mod qb;
pub mod value;

pub mod prelude;

pub use config::QbConfig;
pub use entity::{Entity, simple_type_name};
pub use error::{QbError, QbResult};
pub use value::Value;

pub use qb::{
    BuiltQuery, EntityQuery, ImmutableQueryBuilder, JoinKind, ParamMap, QueryBuilder, QueryParts,
    select_from, snapshot_from,
};

#[cfg(feature = "derive")]
pub use entity_query_derive::Entity;

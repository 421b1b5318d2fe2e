//! Convenient imports for typical `entity-query` usage.
//!
//! ```
//! use entity_query::prelude::*;
//!
//! let mut qb = QueryBuilder::new("Entity e");
//! qb.and_where("e.id = ?", values![7])?;
//! assert_eq!(qb.params().get("param1"), Some(&Value::Int(7)));
//! # Ok::<(), QbError>(())
//! ```

pub use crate::{
    Entity, EntityQuery, ImmutableQueryBuilder, QbConfig, QbError, QbResult, QueryBuilder, Value,
    values,
};

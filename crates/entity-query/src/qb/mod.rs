//! Query builder (QB) for entity query language SELECT statements.
//!
//! # Features
//!
//! - **Positional to named parameters**: `?` in a fragment becomes `:param<N>`
//!   when the fragment is added, and the value is bound under that name
//! - **One counter per query**: numbering is shared by AND and OR filters and
//!   never skips or repeats
//! - **Atomic filters**: a placeholder/value count mismatch is rejected before
//!   anything changes
//! - **Two lifecycles**: [`QueryBuilder`] mutates in place,
//!   [`ImmutableQueryBuilder`] returns a new snapshot from every call
//!
//! # Usage
//!
//! ```
//! use entity_query::qb;
//!
//! let mut q = qb::select_from("Entity e");
//! q.select("e.name")
//!     .left_join("e.company c")
//!     .and_where("e.name = ?", ["sample"])?
//!     .and_where("e.accountId = ?", [5])?
//!     .or_where("c.id = ?", [12])?
//!     .order_by("e.name");
//!
//! assert_eq!(
//!     q.to_query(),
//!     "SELECT e.name FROM Entity e LEFT JOIN e.company c \
//!      WHERE (e.name = :param1) AND (e.accountId = :param2) OR (c.id = :param3) \
//!      ORDER BY e.name"
//! );
//! # Ok::<(), entity_query::QbError>(())
//! ```

#[macro_use]
mod macros;

mod join;
mod param;
mod parts;
mod select;
mod snapshot;
mod template;
mod traits;

pub use join::JoinKind;
pub use param::ParamMap;
pub use parts::{Connective, QueryParts};
pub use select::QueryBuilder;
pub use snapshot::ImmutableQueryBuilder;
pub use template::{
    PLACEHOLDER, check_param_count, count_placeholders, param_name, rewrite_placeholders,
};
pub use traits::{BuiltQuery, EntityQuery};

/// Create a mutable builder over a verbatim FROM clause.
///
/// # Example
/// ```
/// let q = entity_query::qb::select_from("Entity e");
/// assert_eq!(q.to_query(), "SELECT e FROM Entity e");
/// ```
pub fn select_from(from: &str) -> QueryBuilder {
    QueryBuilder::new(from)
}

/// Create a copy-on-write builder over a verbatim FROM clause.
pub fn snapshot_from(from: &str) -> ImmutableQueryBuilder {
    ImmutableQueryBuilder::new(from)
}

//! Trait definitions for query builders.

use serde::Serialize;

use crate::qb::param::ParamMap;
use crate::qb::parts::QueryParts;

/// Read side shared by [`QueryBuilder`](crate::QueryBuilder) and
/// [`ImmutableQueryBuilder`](crate::ImmutableQueryBuilder).
///
/// Useful for code that hands a finished query to an execution layer without
/// caring which lifecycle variant produced it.
pub trait EntityQuery {
    /// The accumulated clauses.
    fn parts(&self) -> &QueryParts;

    /// Render the query text.
    fn to_query(&self) -> String {
        self.parts().render()
    }

    /// Named parameters to bind alongside [`to_query`](EntityQuery::to_query).
    fn params(&self) -> &ParamMap {
        self.parts().params()
    }

    /// Snapshot text and parameters together.
    fn build(&self) -> BuiltQuery {
        BuiltQuery::new(self.to_query(), self.params().clone())
    }
}

/// The result of building a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub query: String,
    pub params: ParamMap,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(query: String, params: ParamMap) -> Self {
        Self { query, params }
    }
}

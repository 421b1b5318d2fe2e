//! Copy-on-write SELECT query builder.

use std::fmt;
use std::sync::Arc;

use crate::config::QbConfig;
use crate::entity::Entity;
use crate::error::QbResult;
use crate::qb::join::JoinKind;
use crate::qb::param::ParamMap;
use crate::qb::parts::{Connective, QueryParts};
use crate::qb::select::QueryBuilder;
use crate::qb::traits::{BuiltQuery, EntityQuery};
use crate::value::Value;

/// Copy-on-write SELECT builder.
///
/// Every call returns a new snapshot and leaves `self` untouched, so one
/// builder can be forked into several queries sharing a common prefix:
///
/// ```
/// use entity_query::ImmutableQueryBuilder;
///
/// let base = ImmutableQueryBuilder::new("Entity e").and_where("e.active = ?", [true])?;
/// let by_name = base.and_where("e.name = ?", ["sample"])?;
/// let by_company = base.or_where("e.companyId = ?", [12])?;
///
/// assert_eq!(base.params().len(), 1);
/// assert_eq!(
///     by_name.to_query(),
///     "SELECT e FROM Entity e WHERE (e.active = :param1) AND (e.name = :param2)"
/// );
/// assert_eq!(
///     by_company.to_query(),
///     "SELECT e FROM Entity e WHERE (e.active = :param1) OR (e.companyId = :param2)"
/// );
/// # Ok::<(), entity_query::QbError>(())
/// ```
///
/// Cloning a snapshot is cheap (the state is behind an `Arc`); each chained
/// call copies the state once.
#[must_use]
#[derive(Clone, Debug)]
pub struct ImmutableQueryBuilder {
    parts: Arc<QueryParts>,
}

impl ImmutableQueryBuilder {
    /// Create a builder over a verbatim FROM clause such as `"Entity e"`.
    pub fn new(from: &str) -> Self {
        Self::with_config(from, QbConfig::default())
    }

    /// Create a builder with custom naming conventions.
    pub fn with_config(from: &str, config: QbConfig) -> Self {
        Self::from_parts(QueryParts::new(from, config))
    }

    /// Create a builder for `FROM <entity> <alias>` selecting `<alias>`.
    pub fn from_entity(entity: &str, alias: Option<&str>) -> Self {
        Self::from_entity_with_config(entity, alias, QbConfig::default())
    }

    pub fn from_entity_with_config(entity: &str, alias: Option<&str>, config: QbConfig) -> Self {
        Self::from_parts(QueryParts::for_entity(entity, alias, config))
    }

    /// Create a builder for an [`Entity`] type.
    pub fn of<T: Entity>() -> Self {
        Self::from_entity(T::entity_name(), T::default_alias())
    }

    /// Create a builder for an [`Entity`] type with an explicit alias.
    pub fn of_as<T: Entity>(alias: &str) -> Self {
        Self::from_entity(T::entity_name(), Some(alias))
    }

    pub(crate) fn from_parts(parts: QueryParts) -> Self {
        Self {
            parts: Arc::new(parts),
        }
    }

    /// Copy the state, apply one change, and wrap the result as a new snapshot.
    fn derive(&self, change: impl FnOnce(&mut QueryParts)) -> Self {
        let mut parts = QueryParts::clone(&self.parts);
        change(&mut parts);
        Self::from_parts(parts)
    }

    fn try_derive(&self, change: impl FnOnce(&mut QueryParts) -> QbResult<()>) -> QbResult<Self> {
        let mut parts = QueryParts::clone(&self.parts);
        change(&mut parts)?;
        Ok(Self::from_parts(parts))
    }

    // ==================== SELECT ====================

    /// Replace the SELECT expression.
    pub fn select(&self, select: &str) -> Self {
        self.derive(|p| p.set_select(select))
    }

    // ==================== JOIN ====================

    /// Add a JOIN of the given kind.
    pub fn join_with(&self, kind: JoinKind, target: &str) -> Self {
        self.derive(|p| p.push_join(kind, target))
    }

    impl_join_methods!(snapshot);

    // ==================== WHERE ====================

    /// Add an AND condition with `?` placeholders.
    pub fn and_where<I>(&self, fragment: &str, values: I) -> QbResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.try_derive(|p| p.push_filter(Connective::And, fragment, values))
    }

    /// Add an OR condition with `?` placeholders.
    pub fn or_where<I>(&self, fragment: &str, values: I) -> QbResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.try_derive(|p| p.push_filter(Connective::Or, fragment, values))
    }

    /// Add an AND condition with one placeholder, unless `value` is null/`None`.
    ///
    /// A skipped condition returns a snapshot equal to `self`.
    pub fn and_where_opt(&self, fragment: &str, value: impl Into<Value>) -> QbResult<Self> {
        let value = value.into();
        if value.is_null() {
            return Ok(self.clone());
        }
        self.and_where(fragment, [value])
    }

    /// Add an OR condition with one placeholder, unless `value` is null/`None`.
    pub fn or_where_opt(&self, fragment: &str, value: impl Into<Value>) -> QbResult<Self> {
        let value = value.into();
        if value.is_null() {
            return Ok(self.clone());
        }
        self.or_where(fragment, [value])
    }

    // ==================== Ordering & Grouping ====================

    pub fn order_by(&self, clause: &str) -> Self {
        self.derive(|p| p.set_order_by(clause))
    }

    pub fn group_by(&self, clause: &str) -> Self {
        self.derive(|p| p.set_group_by(clause))
    }

    pub fn having(&self, clause: &str) -> Self {
        self.derive(|p| p.set_having(clause))
    }

    // ==================== Output ====================

    /// Render the query text.
    pub fn to_query(&self) -> String {
        self.parts.render()
    }

    /// Named parameters bound so far.
    pub fn params(&self) -> &ParamMap {
        self.parts.params()
    }

    /// Snapshot the query text and parameters.
    pub fn build(&self) -> BuiltQuery {
        BuiltQuery::new(self.to_query(), self.params().clone())
    }

    pub fn parts(&self) -> &QueryParts {
        &self.parts
    }

    /// Copy into a mutable builder. `self` stays valid.
    pub fn thaw(&self) -> QueryBuilder {
        QueryBuilder::from_parts(QueryParts::clone(&self.parts))
    }
}

impl EntityQuery for ImmutableQueryBuilder {
    fn parts(&self) -> &QueryParts {
        &self.parts
    }
}

impl PartialEq for ImmutableQueryBuilder {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.parts, &other.parts) || self.parts == other.parts
    }
}

impl From<QueryBuilder> for ImmutableQueryBuilder {
    fn from(builder: QueryBuilder) -> Self {
        builder.freeze()
    }
}

impl fmt::Display for ImmutableQueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.parts, f)
    }
}

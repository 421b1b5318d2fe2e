//! Mutable SELECT query builder.

use std::fmt;

use crate::config::QbConfig;
use crate::entity::Entity;
use crate::error::QbResult;
use crate::qb::join::JoinKind;
use crate::qb::param::ParamMap;
use crate::qb::parts::{Connective, QueryParts};
use crate::qb::snapshot::ImmutableQueryBuilder;
use crate::qb::traits::{BuiltQuery, EntityQuery};
use crate::value::Value;

/// Mutable SELECT builder: every call changes this instance and returns it
/// for chaining.
///
/// ```
/// use entity_query::QueryBuilder;
///
/// let mut qb = QueryBuilder::new("Entity e");
/// qb.and_where("e.name = ?", ["sample"])?
///     .and_where("e.companyId = ?", [12])?;
///
/// assert_eq!(
///     qb.to_query(),
///     "SELECT e FROM Entity e WHERE (e.name = :param1) AND (e.companyId = :param2)"
/// );
/// assert_eq!(qb.params().len(), 2);
/// # Ok::<(), entity_query::QbError>(())
/// ```
///
/// Not internally synchronized: share it across threads only behind your own
/// lock, or [`freeze`](QueryBuilder::freeze) it first.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuilder {
    parts: QueryParts,
}

impl QueryBuilder {
    /// Create a builder over a verbatim FROM clause such as `"Entity e"`.
    pub fn new(from: &str) -> Self {
        Self::with_config(from, QbConfig::default())
    }

    /// Create a builder with custom naming conventions.
    pub fn with_config(from: &str, config: QbConfig) -> Self {
        Self {
            parts: QueryParts::new(from, config),
        }
    }

    /// Create a builder for `FROM <entity> <alias>` selecting `<alias>`.
    ///
    /// `alias` defaults to `e`.
    pub fn from_entity(entity: &str, alias: Option<&str>) -> Self {
        Self::from_entity_with_config(entity, alias, QbConfig::default())
    }

    pub fn from_entity_with_config(entity: &str, alias: Option<&str>, config: QbConfig) -> Self {
        Self {
            parts: QueryParts::for_entity(entity, alias, config),
        }
    }

    /// Create a builder for an [`Entity`] type.
    pub fn of<T: Entity>() -> Self {
        Self::from_entity(T::entity_name(), T::default_alias())
    }

    /// Create a builder for an [`Entity`] type with an explicit alias.
    pub fn of_as<T: Entity>(alias: &str) -> Self {
        Self::from_entity(T::entity_name(), Some(alias))
    }

    // ==================== SELECT ====================

    /// Replace the SELECT expression.
    pub fn select(&mut self, select: &str) -> &mut Self {
        self.parts.set_select(select);
        self
    }

    // ==================== JOIN ====================

    /// Add a JOIN of the given kind.
    pub fn join_with(&mut self, kind: JoinKind, target: &str) -> &mut Self {
        self.parts.push_join(kind, target);
        self
    }

    impl_join_methods!(mutable);

    // ==================== WHERE ====================

    /// Add an AND condition with `?` placeholders.
    ///
    /// Fails without changing the builder when the placeholder count differs
    /// from the number of values.
    pub fn and_where<I>(&mut self, fragment: &str, values: I) -> QbResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.parts
            .push_filter(Connective::And, fragment, values.into_iter().map(Into::into).collect())?;
        Ok(self)
    }

    /// Add an OR condition with `?` placeholders.
    pub fn or_where<I>(&mut self, fragment: &str, values: I) -> QbResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.parts
            .push_filter(Connective::Or, fragment, values.into_iter().map(Into::into).collect())?;
        Ok(self)
    }

    /// Add an AND condition with one placeholder, unless `value` is null/`None`.
    pub fn and_where_opt(
        &mut self,
        fragment: &str,
        value: impl Into<Value>,
    ) -> QbResult<&mut Self> {
        let value = value.into();
        if value.is_null() {
            return Ok(self);
        }
        self.and_where(fragment, [value])
    }

    /// Add an OR condition with one placeholder, unless `value` is null/`None`.
    pub fn or_where_opt(
        &mut self,
        fragment: &str,
        value: impl Into<Value>,
    ) -> QbResult<&mut Self> {
        let value = value.into();
        if value.is_null() {
            return Ok(self);
        }
        self.or_where(fragment, [value])
    }

    // ==================== Ordering & Grouping ====================

    /// Set ORDER BY clause.
    pub fn order_by(&mut self, clause: &str) -> &mut Self {
        self.parts.set_order_by(clause);
        self
    }

    /// Set GROUP BY clause.
    pub fn group_by(&mut self, clause: &str) -> &mut Self {
        self.parts.set_group_by(clause);
        self
    }

    /// Set HAVING clause.
    pub fn having(&mut self, clause: &str) -> &mut Self {
        self.parts.set_having(clause);
        self
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

    /// Convert into a copy-on-write builder.
    pub fn freeze(self) -> ImmutableQueryBuilder {
        ImmutableQueryBuilder::from_parts(self.parts)
    }

    pub(crate) fn from_parts(parts: QueryParts) -> Self {
        Self { parts }
    }
}

impl EntityQuery for QueryBuilder {
    fn parts(&self) -> &QueryParts {
        &self.parts
    }
}

impl From<ImmutableQueryBuilder> for QueryBuilder {
    fn from(snapshot: ImmutableQueryBuilder) -> Self {
        snapshot.thaw()
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parts, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_empty_select() {
        let qb = QueryBuilder::new("Entity e");
        assert_eq!(qb.to_query(), "SELECT e FROM Entity e");
        assert!(qb.params().is_empty());
    }

    #[test]
    fn test_select_columns() {
        let mut qb = QueryBuilder::new("Entity e");
        qb.select("e.field1, e.field2");
        assert_eq!(qb.to_query(), "SELECT e.field1, e.field2 FROM Entity e");
        assert!(qb.params().is_empty());
    }

    #[test]
    fn test_and_where_without_params() {
        let mut qb = QueryBuilder::new("Entity e");
        qb.and_where("e.name is null", values![]).unwrap();
        assert_eq!(qb.to_query(), "SELECT e FROM Entity e WHERE (e.name is null)");
        assert!(qb.params().is_empty());
    }

    #[test]
    fn test_and_where_opt_with_value() {
        let mut qb = QueryBuilder::new("Entity e");
        qb.and_where_opt("e.field1 = ?", Some("value")).unwrap();
        assert_eq!(qb.to_query(), "SELECT e FROM Entity e WHERE (e.field1 = :param1)");
        assert_eq!(qb.params().get("param1"), Some(&Value::from("value")));
    }

    #[test]
    fn test_or_where_opt_skips_none() {
        let mut qb = QueryBuilder::new("Entity e");
        qb.or_where_opt("e.field1 = ?", None::<&str>).unwrap();
        qb.or_where_opt("e.field2 = ?", Value::Null).unwrap();
        assert_eq!(qb.to_query(), "SELECT e FROM Entity e");
        assert!(qb.params().is_empty());
    }

    #[test]
    fn test_joins_keep_insertion_order() {
        let mut qb = QueryBuilder::from_entity("Order", Some("o"));
        qb.left_join_fetch("o.lines l").inner_join("o.customer c");
        assert_eq!(
            qb.to_query(),
            "SELECT o FROM Order o LEFT JOIN FETCH o.lines l INNER JOIN o.customer c"
        );
    }

    #[test]
    fn test_last_order_by_wins() {
        let mut qb = QueryBuilder::new("Entity e");
        qb.order_by("e.id").order_by("e.name DESC");
        assert_eq!(qb.to_query(), "SELECT e FROM Entity e ORDER BY e.name DESC");
    }
}

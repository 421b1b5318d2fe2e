//! Query state shared by the mutable and copy-on-write builders.

use std::fmt;

use crate::config::QbConfig;
use crate::error::QbResult;
use crate::qb::join::JoinKind;
use crate::qb::param::ParamMap;
use crate::qb::template;
use crate::value::Value;

/// Which filter list a WHERE fragment goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn as_str(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// The clauses of one query under construction.
///
/// Filter fragments are stored already rewritten (`:param1`, ...); every
/// named token they contain has exactly one entry in [`QueryParts::params`].
#[derive(Clone, Debug, PartialEq)]
pub struct QueryParts {
    config: QbConfig,
    select: String,
    from: String,
    joins: Vec<String>,
    and_filters: Vec<String>,
    or_filters: Vec<String>,
    group_by: Option<String>,
    having: Option<String>,
    order_by: Option<String>,
    params: ParamMap,
}

impl QueryParts {
    /// `SELECT <default alias> FROM <from>`.
    pub(crate) fn new(from: &str, config: QbConfig) -> Self {
        Self {
            select: config.default_alias.clone(),
            from: from.to_string(),
            config,
            joins: Vec::new(),
            and_filters: Vec::new(),
            or_filters: Vec::new(),
            group_by: None,
            having: None,
            order_by: None,
            params: ParamMap::new(),
        }
    }

    /// `SELECT <alias> FROM <entity> <alias>`.
    pub(crate) fn for_entity(entity: &str, alias: Option<&str>, config: QbConfig) -> Self {
        let alias = alias.unwrap_or(config.default_alias.as_str()).to_string();
        let mut parts = Self::new(&format!("{entity} {alias}"), config);
        parts.select = alias;
        parts
    }

    // ==================== Mutation ====================

    pub(crate) fn set_select(&mut self, select: &str) {
        self.select = select.to_string();
    }

    pub(crate) fn push_join(&mut self, kind: JoinKind, target: &str) {
        self.joins.push(kind.clause(target));
    }

    /// Rewrite `fragment` and append it to the AND or OR list.
    ///
    /// On a count mismatch nothing is appended and no parameter number is used.
    pub(crate) fn push_filter(
        &mut self,
        connective: Connective,
        fragment: &str,
        values: Vec<Value>,
    ) -> QbResult<()> {
        let start = self.params.next_index();
        let prefix = &self.config.param_prefix;
        let rewritten = match template::rewrite(fragment, values, prefix, start) {
            Ok(r) => r,
            Err(err) => {
                #[cfg(feature = "tracing")]
                {
                    let crate::error::QbError::ParamCount {
                        placeholders,
                        values,
                        fragment,
                    } = &err;
                    tracing::debug!(
                        target: "entity_query.builder",
                        clause = connective.as_str(),
                        placeholders,
                        values,
                        fragment = %fragment,
                        "rejected filter fragment"
                    );
                }
                return Err(err);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "entity_query.builder",
            clause = connective.as_str(),
            first_param = start,
            param_count = rewritten.bindings.len(),
            fragment = %rewritten.fragment,
            "accepted filter fragment"
        );

        for (name, value) in rewritten.bindings {
            self.params.insert(name, value);
        }
        match connective {
            Connective::And => self.and_filters.push(rewritten.fragment),
            Connective::Or => self.or_filters.push(rewritten.fragment),
        }
        Ok(())
    }

    pub(crate) fn set_group_by(&mut self, clause: &str) {
        self.group_by = Some(clause.to_string());
    }

    pub(crate) fn set_having(&mut self, clause: &str) {
        self.having = Some(clause.to_string());
    }

    pub(crate) fn set_order_by(&mut self, clause: &str) {
        self.order_by = Some(clause.to_string());
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &QbConfig {
        &self.config
    }

    pub fn select(&self) -> &str {
        &self.select
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    /// JOIN clauses in insertion order, keyword included.
    pub fn joins(&self) -> &[String] {
        &self.joins
    }

    pub fn and_filters(&self) -> &[String] {
        &self.and_filters
    }

    pub fn or_filters(&self) -> &[String] {
        &self.or_filters
    }

    pub fn group_by(&self) -> Option<&str> {
        self.group_by.as_deref()
    }

    pub fn having(&self) -> Option<&str> {
        self.having.as_deref()
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    pub fn params(&self) -> &ParamMap {
        &self.params
    }

    // ==================== Rendering ====================

    /// Render the query text.
    ///
    /// AND entries come first, then a single `OR` before the OR entries:
    /// `(a1) AND (a2) OR (o1) OR (o2)`. The layout is flat on purpose; group
    /// conditions inside one fragment when different precedence is needed.
    pub fn render(&self) -> String {
        let mut sql = format!("SELECT {} FROM {}", self.select, self.from);

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        if !self.and_filters.is_empty() || !self.or_filters.is_empty() {
            sql.push_str(" WHERE ");
        }
        push_joined(&mut sql, &self.and_filters, Connective::And);
        if !self.or_filters.is_empty() {
            if !self.and_filters.is_empty() {
                sql.push_str(" OR ");
            }
            push_joined(&mut sql, &self.or_filters, Connective::Or);
        }

        if let Some(ref group) = self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(group);
        }

        if let Some(ref having) = self.having {
            sql.push_str(" HAVING ");
            sql.push_str(having);
        }

        if let Some(ref order) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }

        sql
    }
}

/// Append `(f1) <OP> (f2) <OP> ...`.
fn push_joined(sql: &mut String, filters: &[String], connective: Connective) {
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            sql.push(' ');
            sql.push_str(connective.as_str());
            sql.push(' ');
        }
        sql.push('(');
        sql.push_str(filter);
        sql.push(')');
    }
}

impl fmt::Display for QueryParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

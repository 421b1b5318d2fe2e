//! JOIN keyword phrases.

use std::fmt;

/// The join variants understood by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Join,
    JoinFetch,
    Inner,
    InnerFetch,
    Left,
    LeftFetch,
    LeftOuter,
    LeftOuterFetch,
}

impl JoinKind {
    /// The keyword phrase prepended to the join target.
    pub fn keyword(self) -> &'static str {
        match self {
            JoinKind::Join => "JOIN",
            JoinKind::JoinFetch => "JOIN FETCH",
            JoinKind::Inner => "INNER JOIN",
            JoinKind::InnerFetch => "INNER JOIN FETCH",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::LeftFetch => "LEFT JOIN FETCH",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
            JoinKind::LeftOuterFetch => "LEFT OUTER JOIN FETCH",
        }
    }

    /// Build the stored clause text: `"<KEYWORD> <target>"`.
    pub(crate) fn clause(self, target: &str) -> String {
        format!("{} {}", self.keyword(), target)
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

//! `?` placeholder handling for filter fragments.
//!
//! Fragments are opaque text: the only thing ever inspected is the `?`
//! character, which is replaced left to right by `:<prefix><n>`.

use crate::error::{QbError, QbResult};
use crate::value::Value;

/// The positional placeholder token.
pub const PLACEHOLDER: char = '?';

/// Count `?` placeholders in a fragment.
pub fn count_placeholders(fragment: &str) -> usize {
    fragment.matches(PLACEHOLDER).count()
}

/// Fail unless `fragment` has exactly `values` placeholders.
pub fn check_param_count(fragment: &str, values: usize) -> QbResult<()> {
    let placeholders = count_placeholders(fragment);
    if placeholders != values {
        return Err(QbError::param_count(placeholders, values, fragment));
    }
    Ok(())
}

/// Format a generated parameter name (`param3`), without the leading `:`.
pub fn param_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index}")
}

/// Replace every `?` in `fragment` with `:<prefix><n>`, numbering from `start`.
pub fn rewrite_placeholders(fragment: &str, prefix: &str, start: usize) -> String {
    let mut out = String::with_capacity(fragment.len() + prefix.len() * 2);
    let mut idx = start;
    for ch in fragment.chars() {
        if ch == PLACEHOLDER {
            out.push(':');
            out.push_str(prefix);
            out.push_str(&idx.to_string());
            idx += 1;
        } else {
            out.push(ch);
        }
    }
    out
}

/// A fragment whose placeholders have been rewritten, together with the
/// parameter bindings it introduces.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rewritten {
    pub(crate) fragment: String,
    pub(crate) bindings: Vec<(String, Value)>,
}

/// Validate and rewrite a fragment in one step.
///
/// Nothing is produced on a count mismatch, so callers can apply the result
/// atomically.
pub(crate) fn rewrite(
    fragment: &str,
    values: Vec<Value>,
    prefix: &str,
    start: usize,
) -> QbResult<Rewritten> {
    check_param_count(fragment, values.len())?;
    let bindings = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (param_name(prefix, start + i), v))
        .collect();
    Ok(Rewritten {
        fragment: rewrite_placeholders(fragment, prefix, start),
        bindings,
    })
}

//! Parsing of container query expressions into [`ConstraintRecord`]s.
//!
//! Accepted input is either a bare number with an optional unit (`640px`,
//! `40rem`, `.5em`), which is shorthand for a minimum width, or a
//! parenthesized expression such as `(min-width: 400px) and (max-width: 800px)`.
//! Anything else is rejected with `None`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::normalize::normalize;

/// Stand-in for an absent minimum bound, the most negative safe integer.
pub const UNBOUNDED_MIN: f64 = -9_007_199_254_740_991.0;
/// Stand-in for an absent maximum bound, the most positive safe integer.
pub const UNBOUNDED_MAX: f64 = 9_007_199_254_740_991.0;

lazy_static! {
    // a number at the very start, followed by a unit or nothing at all
    static ref BARE_NUMBER: Regex = Regex::new(r"^(?:[0-9]+\.[0-9]+|[0-9]+|\.[0-9]+)(?:[^0-9]|$)").unwrap();
    static ref MIN_WIDTH: Regex = Regex::new(r"min-width:\s*([0-9]+\.[0-9]+|[0-9]+|\.[0-9]+)[^0-9]+").unwrap();
    static ref MAX_WIDTH: Regex = Regex::new(r"max-width:\s*([0-9]+\.[0-9]+|[0-9]+|\.[0-9]+)[^0-9]+").unwrap();
    static ref MIN_HEIGHT: Regex = Regex::new(r"min-height:\s*([0-9]+\.[0-9]+|[0-9]+|\.[0-9]+)[^0-9]+").unwrap();
    static ref MAX_HEIGHT: Regex = Regex::new(r"max-height:\s*([0-9]+\.[0-9]+|[0-9]+|\.[0-9]+)[^0-9]+").unwrap();
}

/// The bounds a container query places on its container.
///
/// Bounds that were not given hold [`UNBOUNDED_MIN`] or [`UNBOUNDED_MAX`], so
/// ordering can compare them directly without looking at presence.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRecord {
    pub raw: String,
    pub sortable: bool,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl ConstraintRecord {
    /// True when no clause was recognized and the query is passed through as is.
    pub fn is_raw(&self) -> bool {
        !self.sortable
    }
}

fn bound(clause: &Regex, value: &str) -> Option<f64> {
    clause
        .captures(value)
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse::<f64>().ok())
}

/// Parses a modifier value into a [`ConstraintRecord`].
///
/// Returns `None` when the value is neither a bare number nor wrapped in
/// parentheses. A parenthesized value without any width or height clause
/// still parses, as an unsortable raw record.
pub fn parse(value: &str) -> Option<ConstraintRecord> {
    let normalized = normalize(value);
    let raw = if BARE_NUMBER.is_match(&normalized) {
        format!("(min-width: {normalized})")
    } else {
        normalized.into_owned()
    };

    if !raw.starts_with('(') || !raw.ends_with(')') {
        trace!(value, "not a container query");
        return None;
    }

    let min_width = bound(&MIN_WIDTH, &raw);
    let max_width = bound(&MAX_WIDTH, &raw);
    let min_height = bound(&MIN_HEIGHT, &raw);
    let max_height = bound(&MAX_HEIGHT, &raw);
    let sortable = min_width.is_some() || max_width.is_some() || min_height.is_some() || max_height.is_some();

    Some(ConstraintRecord {
        raw,
        sortable,
        min_width: min_width.unwrap_or(UNBOUNDED_MIN),
        max_width: max_width.unwrap_or(UNBOUNDED_MAX),
        min_height: min_height.unwrap_or(UNBOUNDED_MIN),
        max_height: max_height.unwrap_or(UNBOUNDED_MAX),
    })
}

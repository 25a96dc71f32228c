//! Deterministic ordering of container query variants.
//!
//! Narrow containers come first: minimums ascend, and among equal minimums the
//! looser maximum comes first. Variants without any recognized clause go
//! after all others. Fully tied variants are ordered by label, with unlabeled
//! variants last.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::collate;
use crate::constraint::parse;

/// A variant usage: the query value plus the optional container label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    pub value: String,
    #[serde(default)]
    pub modifier: Option<String>,
}

impl Variant {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), modifier: None }
    }
    pub fn labeled(value: impl Into<String>, modifier: impl Into<String>) -> Self {
        Self { value: value.into(), modifier: Some(modifier.into()) }
    }
    pub fn label(&self) -> &str {
        self.modifier.as_deref().unwrap_or("")
    }
}

/// Three-way comparison of two variants.
///
/// A value that does not parse compares equal to everything, so one bad value
/// never aborts a sort. Over parseable values the ordering is a total preorder.
pub fn compare(a: &Variant, b: &Variant) -> Ordering {
    let (Some(left), Some(right)) = (parse(&a.value), parse(&b.value)) else {
        trace!(a = %a.value, b = %b.value, "unparseable variant left unordered");
        return Ordering::Equal;
    };

    // raw values go last
    match (left.sortable, right.sortable) {
        (false, false) => return Ordering::Equal,
        (false, true) => return Ordering::Greater,
        (true, false) => return Ordering::Less,
        (true, true) => (),
    }

    let order = left.min_width.total_cmp(&right.min_width)
        .then_with(|| left.min_height.total_cmp(&right.min_height))
        .then_with(|| right.max_width.total_cmp(&left.max_width))
        .then_with(|| right.max_height.total_cmp(&left.max_height));
    if order != Ordering::Equal {
        return order;
    }

    match (a.label(), b.label()) {
        ("", "") => Ordering::Equal,
        ("", _) => Ordering::Greater,
        (_, "") => Ordering::Less,
        (a_label, b_label) => collate::compare(a_label, b_label),
    }
}

//! Rule text produced for the `@` variant and the `container` utility.

use serde::Serialize;

use crate::constraint::parse;

/// Builds the `@container` directive for a variant value and optional label.
///
/// Returns `None` when the value is not a container query, meaning no rule
/// should be generated for this usage.
pub fn generate(value: Option<&str>, modifier: Option<&str>) -> Option<String> {
    let record = parse(value.unwrap_or(""))?;
    Some(format!("@container {} {}", modifier.unwrap_or(""), record.raw))
}

/// A single CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

/// Declarations for `container`, `container/name`, `container-block/name` and so on.
pub fn container_utility(value: &str, modifier: Option<&str>) -> Vec<Declaration> {
    let mut declarations = vec![Declaration { property: "container-type", value: value.to_string() }];
    if let Some(name) = modifier {
        declarations.push(Declaration { property: "container-name", value: name.to_string() });
    }
    declarations
}

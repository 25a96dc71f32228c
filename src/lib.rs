//! Container queries – `@container` variants for utility-first stylesheets.
//!
//! A container query variant is written as `@<value>` or `@<value>/<label>`,
//! where `<value>` is one of:
//! * a bare length such as `640px` or `40rem`, shorthand for `(min-width: <value>)`;
//! * a parenthesized expression such as `(min-width: 400px) and (max-width: 800px)`;
//! * a name from the theme's `containers` table (`sm`, `md`, ...).
//!
//! Each value is parsed into a [`constraint::ConstraintRecord`] carrying its
//! width and height bounds. The bounds drive a deterministic ordering of the
//! generated rules, so narrow containers come before wide ones no matter in
//! which order usages were found and no matter which locale the build runs in.
//!
//! ## Modules
//! * [`constraint`] – Parsing of query values into constraint records.
//! * [`ordering`] – The variant comparator.
//! * [`collate`] – Fixed English, numeric-aware label collation.
//! * [`variant`] – Text of the `@container` directive and the `container` utility.
//! * [`normalize`] – Underscore to space normalization of raw tokens.
//! * [`theme`] – Named container sizes supplied by the host.
//! * [`settings`] – Variant and utility names.
//! * [`plugin`] – Registration with a host through [`plugin::PluginApi`].
//!
//! ## Failure Model
//! Nothing in the parsing or ordering path returns an error. A value that is
//! not a container query parses to `None`, generates no rule and compares
//! equal to everything. A parenthesized value without width or height
//! clauses is passed through verbatim and ordered after all others. Only the
//! configuration layer reports errors, through [`ContainerQueryError`].
//!
//! ## Quick Start
//! ```
//! use container_queries::{plugin::ContainerQueries, ordering::Variant, theme::Theme};
//! let theme = Theme::new().with("sm", "(min-width:640px)");
//! let plugin = ContainerQueries::new(theme);
//! let expanded = plugin.expand(&[Variant::new("sm"), Variant::new("400px"), Variant::new("garbage")]);
//! assert_eq!(expanded[0].rule.as_deref(), Some("@container  (min-width: 400px)"));
//! assert_eq!(expanded[1].rule.as_deref(), Some("@container  (min-width:640px)"));
//! assert_eq!(expanded[2].rule, None);
//! ```

pub mod collate;
pub mod constraint;
pub mod error;
pub mod normalize;
pub mod ordering;
pub mod plugin;
pub mod settings;
pub mod theme;
pub mod variant;

pub use error::{ContainerQueryError, Result};

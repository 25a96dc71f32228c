//! Registration of container queries with a host styling engine.
//!
//! The host owns rule emission. It exposes [`PluginApi`], through which this
//! crate hands over the `@` variant (generator, theme values and comparator)
//! and the `container` utility. [`ContainerQueries::expand`] performs the
//! same resolve, generate and sort steps locally, for hosts that only need
//! the ordered directives.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use config::Config;
use tracing::debug;

use crate::error::Result;
use crate::ordering::{compare, Variant};
use crate::settings::Settings;
use crate::theme::Theme;
use crate::variant::{container_utility, generate, Declaration};

pub type VariantGenerator = fn(Option<&str>, Option<&str>) -> Option<String>;
pub type VariantSort = fn(&Variant, &Variant) -> Ordering;
pub type UtilityGenerator = fn(&str, Option<&str>) -> Vec<Declaration>;

pub struct UtilityOptions {
    pub values: BTreeMap<String, String>,
    /// Whether any `/name` modifier is accepted.
    pub arbitrary_modifiers: bool,
}

pub struct VariantOptions {
    pub values: BTreeMap<String, String>,
    pub sort: VariantSort,
}

/// The registration facilities a host provides to plugins.
pub trait PluginApi {
    fn match_utilities(&mut self, name: &str, utility: UtilityGenerator, options: UtilityOptions);
    fn match_variant(&mut self, name: &str, generator: VariantGenerator, options: VariantOptions);
}

/// One candidate after resolution and generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// The value as written at the usage site, theme key or arbitrary value.
    pub candidate: String,
    /// The candidate with theme keys replaced by their values.
    pub variant: Variant,
    /// The `@container` directive, `None` when no rule is generated.
    pub rule: Option<String>,
}

fn container_types() -> BTreeMap<String, String> {
    [("DEFAULT", "inline"), ("block", "block"), ("inline", "inline")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ContainerQueries {
    settings: Settings,
    theme: Theme,
}

impl ContainerQueries {
    pub fn new(theme: Theme) -> Self {
        Self { settings: Settings::default(), theme }
    }
    pub fn with_settings(settings: Settings, theme: Theme) -> Self {
        Self { settings, theme }
    }
    /// Builds the plugin from a host configuration holding `variant`,
    /// `utility` and a `containers` table, all optional.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self { settings: Settings::from_config(config)?, theme: Theme::from_config(config)? })
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn register<A: PluginApi + ?Sized>(&self, api: &mut A) {
        api.match_utilities(
            &self.settings.utility,
            container_utility,
            UtilityOptions { values: container_types(), arbitrary_modifiers: true },
        );
        api.match_variant(
            &self.settings.variant,
            generate,
            VariantOptions { values: self.theme.values().clone(), sort: compare },
        );
        debug!(variant = %self.settings.variant, utility = %self.settings.utility, containers = self.theme.len(), "registered container queries");
    }

    /// Replaces a theme key with its value and unwraps `[...]` arbitrary values.
    pub fn resolve(&self, candidate: &Variant) -> Variant {
        let value = match self.theme.get(&candidate.value) {
            Some(themed) => themed.to_string(),
            None => candidate.value
                .strip_prefix('[')
                .and_then(|inner| inner.strip_suffix(']'))
                .unwrap_or(candidate.value.as_str())
                .to_string(),
        };
        Variant { value, modifier: candidate.modifier.clone() }
    }

    /// Resolves, generates and orders a batch of candidates.
    ///
    /// Candidates that produce no rule keep their relative order and follow
    /// all others, so the comparator only ever sees parseable values.
    pub fn expand(&self, candidates: &[Variant]) -> Vec<Expansion> {
        let (mut expanded, skipped): (Vec<_>, Vec<_>) = candidates
            .iter()
            .map(|candidate| {
                let variant = self.resolve(candidate);
                let rule = generate(Some(variant.value.as_str()), variant.modifier.as_deref());
                Expansion { candidate: candidate.value.clone(), variant, rule }
            })
            .partition(|expansion| expansion.rule.is_some());
        expanded.sort_by(|a, b| compare(&a.variant, &b.variant));
        debug!(rules = expanded.len(), skipped = skipped.len(), "expanded container query candidates");
        expanded.extend(skipped);
        expanded
    }
}

//! Badge identifiers and catalog entries.
//!
//! A badge is a slug permanently attached to an operator once earned.
//! `BadgeSet` only exposes growing operations: there is no removal API,
//! so a set can never lose a badge it already holds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Static catalog entry used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDefinition {
    /// Stable identifier stored on the operator
    pub slug: &'static str,
    /// Display label
    pub label: &'static str,
    /// Icon name (PrimeIcons / Material set used by the web client)
    pub icon: &'static str,
    /// Hex color
    pub color: &'static str,
    /// How the badge is earned
    pub description: &'static str,
}

impl BadgeDefinition {
    pub const fn new(
        slug: &'static str,
        label: &'static str,
        icon: &'static str,
        color: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            slug,
            label,
            icon,
            color,
            description,
        }
    }
}

/// Set of earned badge slugs. Membership only, order irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeSet(BTreeSet<String>);

impl BadgeSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.contains(slug)
    }

    /// Add a slug. Returns true when it was not present before.
    pub fn insert(&mut self, slug: impl Into<String>) -> bool {
        self.0.insert(slug.into())
    }

    /// Add every slug of `other` into this set
    pub fn union_with(&mut self, other: &BadgeSet) {
        for slug in &other.0 {
            if !self.0.contains(slug) {
                self.0.insert(slug.clone());
            }
        }
    }

    /// Slugs present here but not in `earlier`, sorted
    pub fn added_since(&self, earlier: &BadgeSet) -> Vec<String> {
        self.0.difference(&earlier.0).cloned().collect()
    }

    pub fn is_superset(&self, other: &BadgeSet) -> bool {
        self.0.is_superset(&other.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BadgeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for BadgeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

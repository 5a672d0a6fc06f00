//! Mathematical domain model.
//!
//! A [`Domain`] is one of a closed set of five subject areas. Every piece of
//! canned content shown to the user is keyed by it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{Result, SymmatriaError};

/// The subject area the user is currently exploring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Domain {
    #[default]
    Topology,
    NumberTheory,
    Combinatorics,
    AlgebraicGeometry,
    Analysis,
}

impl Domain {
    /// Stable identifier, e.g. `number-theory`.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// All domains in display order.
    pub fn all() -> impl Iterator<Item = Domain> {
        Domain::iter()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Domain {
    type Err = SymmatriaError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Domain::iter()
            .find(|domain| domain.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SymmatriaError::invalid_input("domain", needle))
    }
}

/// A canned conjecture shown in the conjecture panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conjecture {
    pub title: &'static str,
    pub statement: &'static str,
    /// Displayed confidence in the range `0.0..=1.0`.
    pub confidence: f32,
    pub evidence: &'static [&'static str],
}

/// A canned recognised pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternInsight {
    /// Pattern family, e.g. `Structural`
    pub kind: &'static str,
    pub confidence: f32,
    pub description: &'static str,
}

/// Immutable display and content profile for a [`Domain`].
///
/// Profiles are compile-time constants; see [`crate::domain::lookup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainProfile {
    pub domain: Domain,
    pub label: &'static str,
    pub glyph: &'static str,
    /// Placeholder prompt for the input area
    pub prompt: &'static str,
    pub suggestions: &'static [&'static str],
    /// Reply template; `{input}` marks where the user's text is placed.
    #[serde(skip)]
    pub response_template: &'static str,
    pub conjectures: &'static [Conjecture],
    pub patterns: &'static [PatternInsight],
}

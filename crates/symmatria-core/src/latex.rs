//! LaTeX scratch document with insertable templates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{Result, SymmatriaError};

/// Snippets offered by the LaTeX editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LatexTemplate {
    Theorem,
    Definition,
    Equation,
}

impl LatexTemplate {
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = LatexTemplate> {
        LatexTemplate::iter()
    }

    pub fn body(self) -> &'static str {
        match self {
            LatexTemplate::Theorem => {
                "\\begin{theorem}\n  Let $G$ be a finite group of order $p$ where $p$ is prime. Then $G$ is cyclic.\n\\end{theorem}\n\n\\begin{proof}\n  Since $|G| = p$ is prime, by Lagrange's theorem...\n\\end{proof}"
            }
            LatexTemplate::Definition => {
                "\\begin{definition}\n  A topological space $X$ is called \\emph{compact} if every open cover of $X$ has a finite subcover.\n\\end{definition}"
            }
            LatexTemplate::Equation => {
                "\\begin{align}\n  \\int_{-\\infty}^{\\infty} e^{-x^2} dx &= \\sqrt{\\pi} \\\\\n  \\sum_{n=1}^{\\infty} \\frac{1}{n^2} &= \\frac{\\pi^2}{6}\n\\end{align}"
            }
        }
    }
}

impl FromStr for LatexTemplate {
    type Err = SymmatriaError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        LatexTemplate::iter()
            .find(|template| template.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SymmatriaError::invalid_input("latex template", needle))
    }
}

/// Free-form LaTeX source edited by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexDocument {
    source: String,
}

impl LatexDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Appends `template` after a blank line.
    pub fn insert(&mut self, template: LatexTemplate) {
        self.source.push_str("\n\n");
        self.source.push_str(template.body());
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_appends_after_blank_line() {
        let mut document = LatexDocument::new("% notes");
        document.insert(LatexTemplate::Definition);
        assert!(document.source().starts_with("% notes\n\n\\begin{definition}"));
        assert!(document.source().ends_with("\\end{definition}"));
    }

    #[test]
    fn test_insert_into_empty_document() {
        let mut document = LatexDocument::default();
        document.insert(LatexTemplate::Theorem);
        document.insert(LatexTemplate::Equation);
        assert!(document.source().starts_with("\n\n\\begin{theorem}"));
        assert_eq!(document.source().matches("\\begin{").count(), 3);
    }

    #[test]
    fn test_parse_template() {
        assert_eq!("equation".parse::<LatexTemplate>().unwrap(), LatexTemplate::Equation);
        assert!("lemma".parse::<LatexTemplate>().is_err());
    }
}

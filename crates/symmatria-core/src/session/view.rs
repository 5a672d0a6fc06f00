//! Page and tool-panel identifiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{Result, SymmatriaError};

/// Top-level page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Think,
    Collaborate,
}

/// Tool panel shown in the collaboration workspace.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToolView {
    #[default]
    Workspace,
    Proof,
    Visualization,
    Language,
}

impl Page {
    pub fn id(self) -> &'static str {
        self.into()
    }
}

impl ToolView {
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolView::Workspace => "Math Workspace",
            ToolView::Proof => "Proof Explorer",
            ToolView::Visualization => "Visual Engine",
            ToolView::Language => "NL Builder",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ToolView::Workspace => "∇",
            ToolView::Proof => "⊢",
            ToolView::Visualization => "◊",
            ToolView::Language => "℘",
        }
    }
}

impl FromStr for Page {
    type Err = SymmatriaError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Page::iter()
            .find(|page| page.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SymmatriaError::invalid_input("page", needle))
    }
}

impl FromStr for ToolView {
    type Err = SymmatriaError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        ToolView::iter()
            .find(|view| view.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SymmatriaError::invalid_input("view", needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_views() {
        assert_eq!("proof".parse::<ToolView>().unwrap(), ToolView::Proof);
        assert_eq!("Language".parse::<ToolView>().unwrap(), ToolView::Language);
        assert!("canvas".parse::<ToolView>().is_err());
    }

    #[test]
    fn test_parse_pages() {
        assert_eq!("think".parse::<Page>().unwrap(), Page::Think);
        assert!("settings".parse::<Page>().unwrap_err().is_invalid_input());
    }
}

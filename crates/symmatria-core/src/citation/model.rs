//! Citation domain model and formatting.

use serde::{Deserialize, Serialize};

/// Kind of cited work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    Theorem,
    Paper,
    Book,
    Webpage,
}

/// A bibliography entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    pub kind: CitationKind,
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arxiv: Option<String>,
}

impl Citation {
    /// APA-style single line, e.g. `Gauss, C.F. (1799). Title. DOI: ...`.
    pub fn to_apa(&self) -> String {
        let locator = match (&self.doi, &self.arxiv) {
            (Some(doi), _) => format!(" DOI: {doi}"),
            (None, Some(arxiv)) => format!(" arXiv: {arxiv}"),
            (None, None) => String::new(),
        };
        format!(
            "{} ({}). {}.{}",
            self.authors.join(", "),
            self.year,
            self.title,
            locator
        )
    }

    /// BibTeX `@article` entry keyed by the citation id.
    pub fn to_bibtex(&self) -> String {
        let mut lines = vec![
            format!("@article{{{},", self.id),
            format!("  title={{{}}},", self.title),
            format!("  author={{{}}},", self.authors.join(" and ")),
            format!("  year={{{}}},", self.year),
        ];
        if let Some(doi) = &self.doi {
            lines.push(format!("  doi={{{doi}}},"));
        }
        if let Some(arxiv) = &self.arxiv {
            lines.push(format!("  arxiv={{{arxiv}}},"));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauss() -> Citation {
        Citation {
            id: "1".to_string(),
            kind: CitationKind::Theorem,
            title: "Fundamental Theorem of Algebra".to_string(),
            authors: vec!["Gauss, C.F.".to_string()],
            year: 1799,
            doi: Some("10.1007/example".to_string()),
            arxiv: None,
        }
    }

    #[test]
    fn test_apa_prefers_doi() {
        let mut citation = gauss();
        citation.arxiv = Some("math/123".to_string());
        assert_eq!(
            citation.to_apa(),
            "Gauss, C.F. (1799). Fundamental Theorem of Algebra. DOI: 10.1007/example"
        );
    }

    #[test]
    fn test_apa_without_locator() {
        let mut citation = gauss();
        citation.doi = None;
        citation.authors.push("Euler, L.".to_string());
        assert_eq!(
            citation.to_apa(),
            "Gauss, C.F., Euler, L. (1799). Fundamental Theorem of Algebra."
        );
    }

    #[test]
    fn test_bibtex_entry() {
        let expected = "@article{1,\n  title={Fundamental Theorem of Algebra},\n  author={Gauss, C.F.},\n  year={1799},\n  doi={10.1007/example},\n}";
        assert_eq!(gauss().to_bibtex(), expected);
    }
}

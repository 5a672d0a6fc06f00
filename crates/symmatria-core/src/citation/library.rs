//! In-memory bibliography.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Citation, CitationKind};

/// Form input for a new citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationDraft {
    pub title: String,
    /// Comma separated author list
    pub authors: String,
    pub year: i32,
    #[serde(default)]
    pub doi: String,
    #[serde(default)]
    pub arxiv: String,
}

impl Default for CitationDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            authors: String::new(),
            year: Utc::now().year(),
            doi: String::new(),
            arxiv: String::new(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The session bibliography, seeded with two classic references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationLibrary {
    citations: Vec<Citation>,
}

impl Default for CitationLibrary {
    fn default() -> Self {
        Self {
            citations: vec![
                Citation {
                    id: "1".to_string(),
                    kind: CitationKind::Theorem,
                    title: "Fundamental Theorem of Algebra".to_string(),
                    authors: vec!["Gauss, C.F.".to_string()],
                    year: 1799,
                    doi: Some("10.1007/example".to_string()),
                    arxiv: None,
                },
                Citation {
                    id: "2".to_string(),
                    kind: CitationKind::Paper,
                    title: "On the Riemann Hypothesis".to_string(),
                    authors: vec!["Riemann, B.".to_string()],
                    year: 1859,
                    doi: None,
                    arxiv: Some("math.NT/1859.12345".to_string()),
                },
            ],
        }
    }
}

impl CitationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty library without the seed entries.
    pub fn empty() -> Self {
        Self {
            citations: Vec::new(),
        }
    }

    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    pub fn len(&self) -> usize {
        self.citations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.citations.is_empty()
    }

    fn next_id(&self, now: DateTime<Utc>) -> String {
        let clock = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let last = self
            .citations
            .iter()
            .filter_map(|c| c.id.parse::<u64>().ok())
            .max();
        match last {
            Some(last) if clock <= last => (last + 1).to_string(),
            _ => clock.to_string(),
        }
    }

    /// Adds a paper from `draft`. Blank titles are ignored.
    pub fn add(&mut self, draft: &CitationDraft, now: DateTime<Utc>) -> Option<&Citation> {
        let title = non_blank(&draft.title)?;
        let citation = Citation {
            id: self.next_id(now),
            kind: CitationKind::Paper,
            title,
            authors: draft
                .authors
                .split(',')
                .map(|author| author.trim().to_string())
                .filter(|author| !author.is_empty())
                .collect(),
            year: draft.year,
            doi: non_blank(&draft.doi),
            arxiv: non_blank(&draft.arxiv),
        };
        self.citations.push(citation);
        self.citations.last()
    }

    /// BibTeX for the whole library, entries separated by a blank line.
    pub fn to_bibtex(&self) -> String {
        self.citations
            .iter()
            .map(Citation::to_bibtex)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

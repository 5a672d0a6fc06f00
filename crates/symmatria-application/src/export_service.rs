//! Plain-text exports of user content.

use std::path::{Path, PathBuf};

use symmatria_core::citation::CitationLibrary;
use symmatria_core::error::Result;
use symmatria_core::latex::LatexDocument;

pub const BIBLIOGRAPHY_FILE: &str = "bibliography.bib";
pub const LATEX_FILE: &str = "theorem.tex";

/// Writes exports into a fixed output directory.
pub struct ExportService {
    output_dir: PathBuf,
}

impl ExportService {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    async fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, content).await?;
        tracing::info!(path = %path.display(), bytes = content.len(), "Export written");
        Ok(path)
    }

    /// Writes the library as BibTeX to `bibliography.bib`.
    pub async fn export_bibliography(&self, library: &CitationLibrary) -> Result<PathBuf> {
        self.write(BIBLIOGRAPHY_FILE, &library.to_bibtex()).await
    }

    /// Writes the document source verbatim to `theorem.tex`.
    pub async fn export_latex(&self, document: &LatexDocument) -> Result<PathBuf> {
        self.write(LATEX_FILE, document.source()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symmatria_core::latex::LatexTemplate;

    #[tokio::test]
    async fn test_export_bibliography() {
        let dir = tempfile::tempdir().unwrap();
        let service = ExportService::new(dir.path().join("out"));

        let path = service
            .export_bibliography(&CitationLibrary::new())
            .await
            .unwrap();

        assert_eq!(path.file_name().unwrap(), BIBLIOGRAPHY_FILE);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, CitationLibrary::new().to_bibtex());
    }

    #[tokio::test]
    async fn test_export_latex_is_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let service = ExportService::new(dir.path());
        let mut document = LatexDocument::new("% draft");
        document.insert(LatexTemplate::Theorem);

        let path = service.export_latex(&document).await.unwrap();

        assert_eq!(path, dir.path().join(LATEX_FILE));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), document.source());
    }

    #[tokio::test]
    async fn test_export_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = ExportService::new(&blocker)
            .export_latex(&LatexDocument::default())
            .await
            .unwrap_err();
        assert!(err.is_io());
    }
}

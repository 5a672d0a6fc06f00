use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use symmatria_application::ExportService;
use symmatria_core::citation::CitationLibrary;
use symmatria_core::latex::{LatexDocument, LatexTemplate};

/// Writes the seeded bibliography to `dir`.
pub async fn bibliography(dir: &Path) -> Result<PathBuf> {
    ExportService::new(dir)
        .export_bibliography(&CitationLibrary::new())
        .await
        .with_context(|| format!("Failed to export bibliography to {}", dir.display()))
}

/// Writes a document built from `templates` to `dir`.
pub async fn latex(dir: &Path, templates: &[LatexTemplate]) -> Result<PathBuf> {
    let mut document = LatexDocument::default();
    for template in templates {
        document.insert(*template);
    }
    ExportService::new(dir)
        .export_latex(&document)
        .await
        .with_context(|| format!("Failed to export LaTeX to {}", dir.display()))
        .inspect(|path| tracing::debug!(templates = templates.len(), path = %path.display(), "LaTeX exported"))
}

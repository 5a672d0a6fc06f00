//! Citation management.

mod library;
mod model;

pub use library::{CitationDraft, CitationLibrary};
pub use model::{Citation, CitationKind};

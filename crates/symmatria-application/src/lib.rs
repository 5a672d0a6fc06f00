//! Application layer for Symmatria.
//!
//! This crate provides the async services that drive the core domain types:
//! the session controller, the Think page rotation and file exports.

pub mod contemplation_service;
pub mod export_service;
pub mod session;

pub use contemplation_service::ContemplationService;
pub use export_service::ExportService;
pub use session::{SessionController, SubmissionHandle, SubmitOutcome};

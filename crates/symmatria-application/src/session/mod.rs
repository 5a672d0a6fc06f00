//! Session application services.
//!
//! This module contains the controller that owns a session's state and runs
//! its submissions.

mod controller;

pub use controller::{SessionController, SubmissionHandle, SubmitOutcome};

//! Reply producer seam.

use async_trait::async_trait;

use super::state::PendingSubmission;
use crate::domain::Reply;

/// Produces the reply for an accepted submission.
///
/// An accepted submission always completes with exactly one reply; there is
/// no failure path.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, submission: &PendingSubmission) -> Reply;
}

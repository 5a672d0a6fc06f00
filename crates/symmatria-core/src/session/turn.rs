//! Conversation turn types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Domain;

/// Identifier of a [`ConversationTurn`].
///
/// Derived from the wall clock in milliseconds, bumped past the previous id
/// when the clock has not advanced, so ids strictly increase within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TurnId(u64);

impl TurnId {
    /// Assigns the id following `previous` at time `now`.
    pub fn next(previous: Option<TurnId>, now: DateTime<Utc>) -> Self {
        let clock = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match previous {
            Some(TurnId(last)) if clock <= last => TurnId(last + 1),
            _ => TurnId(clock),
        }
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One human input paired with the generated reply.
///
/// Turns are created once per accepted submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: TurnId,
    /// Domain captured when the submission was made
    pub domain: Domain,
    pub human: String,
    pub response: String,
    pub insights: Vec<String>,
    /// Completion time (ISO 8601 format)
    pub created_at: String,
}

use serde::{Deserialize, Serialize};

use super::turn::ConversationTurn;
use super::view::{Page, ToolView};
use crate::domain::Domain;

/// Why a submission was absorbed without producing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitRejection {
    /// Input was empty or whitespace only.
    EmptyInput,
    /// Another submission is still being processed.
    InFlight,
}

/// High-level events published by a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A submission was accepted and is being processed.
    SubmissionAccepted { text: String, domain: Domain },
    /// A submission was absorbed without effect.
    SubmissionRejected { reason: SubmitRejection },
    /// A reply arrived and a turn was appended.
    TurnAppended { turn: ConversationTurn },
    /// Domain changed; the displayed suggestions were regenerated.
    DomainChanged {
        domain: Domain,
        suggestions: Vec<String>,
    },
    ViewChanged { view: ToolView },
    PageChanged { page: Page },
    /// Draft input was replaced (suggestion picked, cleared, typed).
    DraftChanged { draft: String },
}

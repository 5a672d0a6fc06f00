//! Session state and its transitions.
//!
//! Every transition consumes a [`SessionState`] and returns a [`Transition`]
//! holding the next state and the effects the owner has to carry out. Nothing
//! in here performs IO or sleeps; the controller in `symmatria-application`
//! applies transitions under a lock and runs the effects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::discovery::DiscoverySession;
use super::event::{SessionEvent, SubmitRejection};
use super::turn::{ConversationTurn, TurnId};
use super::view::{Page, ToolView};
use crate::domain::{Domain, Reply, lookup};

/// A submission that has been accepted and awaits its reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSubmission {
    pub text: String,
    /// Domain captured at submission time
    pub domain: Domain,
    pub submitted_at: String,
}

/// Submission lifecycle of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Phase {
    #[default]
    Idle,
    Submitting(PendingSubmission),
}

/// Work the owner of a session must carry out after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Produce a reply for the submission and feed it back via
    /// [`SessionState::complete`].
    ScheduleReply(PendingSubmission),
    /// Publish an event to observers.
    Publish(SessionEvent),
}

/// Result of applying a transition.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn quiet(state: SessionState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn publish(state: SessionState, event: SessionEvent) -> Self {
        Self {
            state,
            effects: vec![Effect::Publish(event)],
        }
    }

    /// The reply request carried by this transition, if any.
    pub fn scheduled(&self) -> Option<&PendingSubmission> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::ScheduleReply(pending) => Some(pending),
            Effect::Publish(_) => None,
        })
    }

    /// Events carried by this transition, in order.
    pub fn events(&self) -> impl Iterator<Item = &SessionEvent> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Publish(event) => Some(event),
            Effect::ScheduleReply(_) => None,
        })
    }
}

/// UI-facing state of one exploration session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Unique session identifier (UUID format)
    pub id: String,
    pub domain: Domain,
    pub page: Page,
    pub view: ToolView,
    /// Text currently in the input area
    pub draft: String,
    pub phase: Phase,
    /// Suggestions displayed for the current domain
    pub suggestions: Vec<String>,
    /// Conversation history in submission order
    pub turns: Vec<ConversationTurn>,
    pub discoveries: DiscoverySession,
}

fn suggestions_for(domain: Domain) -> Vec<String> {
    lookup(domain)
        .suggestions
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl SessionState {
    /// Creates an idle session on the home page.
    pub fn new(domain: Domain) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            domain,
            page: Page::default(),
            view: ToolView::default(),
            draft: String::new(),
            phase: Phase::Idle,
            suggestions: suggestions_for(domain),
            turns: Vec::new(),
            discoveries: DiscoverySession::new(),
        }
    }

    /// Allocation-free stand-in that holds a session's slot while a
    /// transition owns the real state. It has no id and no suggestions.
    pub fn vacant() -> Self {
        Self {
            id: String::new(),
            domain: Domain::default(),
            page: Page::default(),
            view: ToolView::default(),
            draft: String::new(),
            phase: Phase::Idle,
            suggestions: Vec::new(),
            turns: Vec::new(),
            discoveries: DiscoverySession::new(),
        }
    }

    pub fn is_vacant(&self) -> bool {
        self.id.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    pub fn last_turn_id(&self) -> Option<TurnId> {
        self.turns.last().map(|turn| turn.id)
    }

    /// Accepts `text` for processing unless it is blank or a submission is
    /// already in flight; rejected calls leave the state untouched.
    pub fn submit(mut self, text: &str, now: DateTime<Utc>) -> Transition {
        let rejection = if text.trim().is_empty() {
            Some(SubmitRejection::EmptyInput)
        } else if self.is_submitting() {
            Some(SubmitRejection::InFlight)
        } else {
            None
        };
        if let Some(reason) = rejection {
            return Transition::publish(self, SessionEvent::SubmissionRejected { reason });
        }

        let pending = PendingSubmission {
            text: text.to_string(),
            domain: self.domain,
            submitted_at: now.to_rfc3339(),
        };
        self.phase = Phase::Submitting(pending.clone());

        let accepted = SessionEvent::SubmissionAccepted {
            text: pending.text.clone(),
            domain: pending.domain,
        };
        Transition {
            state: self,
            effects: vec![Effect::Publish(accepted), Effect::ScheduleReply(pending)],
        }
    }

    /// Submits the current draft.
    pub fn submit_draft(self, now: DateTime<Utc>) -> Transition {
        let draft = self.draft.clone();
        self.submit(&draft, now)
    }

    /// Appends the turn for the in-flight submission and returns to idle.
    ///
    /// Without a submission in flight this is a no-op.
    pub fn complete(mut self, reply: Reply, now: DateTime<Utc>) -> Transition {
        let pending = match std::mem::take(&mut self.phase) {
            Phase::Submitting(pending) => pending,
            Phase::Idle => return Transition::quiet(self),
        };

        let turn = ConversationTurn {
            id: TurnId::next(self.last_turn_id(), now),
            domain: pending.domain,
            human: pending.text,
            response: reply.response,
            insights: reply.insights,
            created_at: now.to_rfc3339(),
        };
        self.discoveries.absorb(&turn.insights);
        self.turns.push(turn.clone());

        let mut effects = vec![Effect::Publish(SessionEvent::TurnAppended { turn })];
        if !self.draft.is_empty() {
            self.draft.clear();
            effects.push(Effect::Publish(SessionEvent::DraftChanged {
                draft: String::new(),
            }));
        }
        Transition {
            state: self,
            effects,
        }
    }

    /// Switches domain and regenerates the displayed suggestions.
    ///
    /// Existing turns and any in-flight submission keep their own domain.
    pub fn set_domain(mut self, domain: Domain) -> Transition {
        if self.domain == domain {
            return Transition::quiet(self);
        }
        self.domain = domain;
        self.suggestions = suggestions_for(domain);
        let event = SessionEvent::DomainChanged {
            domain,
            suggestions: self.suggestions.clone(),
        };
        Transition::publish(self, event)
    }

    pub fn set_view(mut self, view: ToolView) -> Transition {
        if self.view == view {
            return Transition::quiet(self);
        }
        self.view = view;
        Transition::publish(self, SessionEvent::ViewChanged { view })
    }

    pub fn set_page(mut self, page: Page) -> Transition {
        if self.page == page {
            return Transition::quiet(self);
        }
        self.page = page;
        Transition::publish(self, SessionEvent::PageChanged { page })
    }

    pub fn set_draft(mut self, draft: impl Into<String>) -> Transition {
        self.draft = draft.into();
        let event = SessionEvent::DraftChanged {
            draft: self.draft.clone(),
        };
        Transition::publish(self, event)
    }

    /// Copies the suggestion at `index` into the draft.
    pub fn apply_suggestion(self, index: usize) -> Transition {
        match self.suggestions.get(index).cloned() {
            Some(suggestion) => self.set_draft(suggestion),
            None => Transition::quiet(self),
        }
    }
}

use std::sync::Arc;

use chrono::Utc;
use symmatria_core::domain::{Domain, DomainProfile, lookup};
use symmatria_core::session::{
    ConversationTurn, DiscoverySession, Effect, Page, PendingSubmission, Responder,
    SessionEvent, SessionState, SubmitRejection, ToolView, Transition,
};
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Result of a `submit` call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The submission is being processed; await the handle for the turn.
    Accepted(SubmissionHandle),
    /// The submission was absorbed without effect.
    Rejected(SubmitRejection),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Waits for the turn if the submission was accepted.
    pub async fn completed(self) -> Option<ConversationTurn> {
        match self {
            Self::Accepted(handle) => handle.completed().await,
            Self::Rejected(_) => None,
        }
    }
}

/// Handle to an in-flight submission.
///
/// Dropping the handle does not cancel the work: the turn is still appended
/// to the session once the reply arrives.
#[derive(Debug)]
pub struct SubmissionHandle {
    task: JoinHandle<Option<ConversationTurn>>,
}

impl SubmissionHandle {
    /// Waits for the reply and returns the appended turn.
    pub async fn completed(self) -> Option<ConversationTurn> {
        match self.task.await {
            Ok(turn) => turn,
            Err(e) => {
                tracing::error!("Submission task failed: {}", e);
                None
            }
        }
    }
}

/// Owns the state of one exploration session.
///
/// `SessionController` is responsible for:
/// - Applying session transitions under a lock
/// - Running accepted submissions in the background
/// - Publishing session events to an optional observer channel
///
/// The lock is never held while waiting for a reply, so domain, view and
/// page switches stay responsive during a submission.
pub struct SessionController {
    session_id: String,
    state: Arc<Mutex<SessionState>>,
    responder: Arc<dyn Responder>,
    events: Option<UnboundedSender<SessionEvent>>,
}

impl SessionController {
    /// Creates a controller for a fresh session on `domain`.
    pub fn new(domain: Domain, responder: Arc<dyn Responder>) -> Self {
        let state = SessionState::new(domain);
        Self {
            session_id: state.id.clone(),
            state: Arc::new(Mutex::new(state)),
            responder,
            events: None,
        }
    }

    /// Publishes every session event to `sender`.
    pub fn with_event_sender(mut self, sender: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    /// Applies `transition` to the shared state and returns its effects.
    async fn apply<F>(
        state: &Mutex<SessionState>,
        events: Option<&UnboundedSender<SessionEvent>>,
        transition: F,
    ) -> Vec<Effect>
    where
        F: FnOnce(SessionState) -> Transition,
    {
        let mut guard = state.lock().await;
        let current = std::mem::replace(&mut *guard, SessionState::vacant());
        let Transition {
            state: next,
            effects,
        } = transition(current);
        *guard = next;
        drop(guard);

        for effect in &effects {
            if let Effect::Publish(event) = effect {
                tracing::debug!(?event, "Session event");
                if let Some(sender) = events {
                    // Observers may have gone away; the session keeps working.
                    let _ = sender.send(event.clone());
                }
            }
        }
        effects
    }

    async fn update<F>(&self, transition: F) -> Vec<Effect>
    where
        F: FnOnce(SessionState) -> Transition,
    {
        Self::apply(&self.state, self.events.as_ref(), transition).await
    }

    /// Submits `text` for a reply.
    ///
    /// Blank text, or any call while another submission is in flight, is
    /// rejected without touching the session.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let now = Utc::now();
        let effects = self.update(|state| state.submit(text, now)).await;
        self.run_effects(effects)
    }

    /// Submits the current draft.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let now = Utc::now();
        let effects = self.update(|state| state.submit_draft(now)).await;
        self.run_effects(effects)
    }

    fn run_effects(&self, effects: Vec<Effect>) -> SubmitOutcome {
        let mut rejection = None;
        for effect in effects {
            match effect {
                Effect::ScheduleReply(pending) => {
                    return SubmitOutcome::Accepted(self.spawn_reply(pending));
                }
                Effect::Publish(SessionEvent::SubmissionRejected { reason }) => {
                    rejection = Some(reason);
                }
                Effect::Publish(_) => {}
            }
        }
        let reason = rejection.unwrap_or(SubmitRejection::InFlight);
        tracing::debug!(?reason, "Submission ignored");
        SubmitOutcome::Rejected(reason)
    }

    fn spawn_reply(&self, pending: PendingSubmission) -> SubmissionHandle {
        let state = Arc::clone(&self.state);
        let responder = Arc::clone(&self.responder);
        let events = self.events.clone();

        let span = tracing::info_span!("submission", session = %self.session_id);
        span.in_scope(|| tracing::info!(domain = %pending.domain, "Submission accepted"));
        let task = tokio::spawn(async move {
            let reply = responder.respond(&pending).await;
            let now = Utc::now();
            let effects = Self::apply(&state, events.as_ref(), |state| {
                state.complete(reply, now)
            })
            .await;

            let turn = effects.into_iter().find_map(|effect| match effect {
                Effect::Publish(SessionEvent::TurnAppended { turn }) => Some(turn),
                _ => None,
            });
            if let Some(turn) = &turn {
                tracing::info!(turn_id = %turn.id, domain = %turn.domain, "Turn appended");
            }
            turn
        }
        .instrument(span));
        SubmissionHandle { task }
    }

    /// Switches domain and returns the profile now displayed.
    pub async fn set_domain(&self, domain: Domain) -> &'static DomainProfile {
        self.update(|state| state.set_domain(domain)).await;
        lookup(domain)
    }

    pub async fn set_view(&self, view: ToolView) {
        self.update(|state| state.set_view(view)).await;
    }

    pub async fn set_page(&self, page: Page) {
        self.update(|state| state.set_page(page)).await;
    }

    /// Returns to the home page.
    pub async fn back(&self) {
        self.set_page(Page::Home).await;
    }

    pub async fn set_draft(&self, draft: impl Into<String>) {
        let draft = draft.into();
        self.update(|state| state.set_draft(draft)).await;
    }

    /// Copies the suggestion at `index` into the draft and returns it.
    pub async fn apply_suggestion(&self, index: usize) -> Option<String> {
        let effects = self.update(|state| state.apply_suggestion(index)).await;
        effects.into_iter().find_map(|effect| match effect {
            Effect::Publish(SessionEvent::DraftChanged { draft }) => Some(draft),
            _ => None,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returns a copy of the whole session state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub async fn domain(&self) -> Domain {
        self.state.lock().await.domain
    }

    pub async fn suggestions(&self) -> Vec<String> {
        self.state.lock().await.suggestions.clone()
    }

    pub async fn turns(&self) -> Vec<ConversationTurn> {
        self.state.lock().await.turns.clone()
    }

    pub async fn discoveries(&self) -> DiscoverySession {
        self.state.lock().await.discoveries.clone()
    }

    pub async fn is_submitting(&self) -> bool {
        self.state.lock().await.is_submitting()
    }
}

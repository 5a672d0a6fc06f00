//! Session domain module.
//!
//! This module contains the session state, its pure transitions, and the
//! types that flow out of them.
//!
//! # Module Structure
//!
//! - `state`: `SessionState`, `Phase` and the transition functions
//! - `turn`: conversation history types (`ConversationTurn`, `TurnId`)
//! - `discovery`: the discovery accumulator (`DiscoverySession`)
//! - `view`: page and tool-panel identifiers (`Page`, `ToolView`)
//! - `event`: events published to observers (`SessionEvent`)
//! - `responder`: the reply producer seam (`Responder`)
//!
//! # Usage
//!
//! ```ignore
//! use symmatria_core::session::{SessionState, Transition, Effect};
//! use symmatria_core::session::{ConversationTurn, DiscoverySession};
//! ```

mod discovery;
mod event;
mod responder;
mod state;
mod turn;
mod view;

// Re-export public API
pub use discovery::{DiscoverySession, DiscoveryStats};
pub use event::{SessionEvent, SubmitRejection};
pub use responder::Responder;
pub use state::{Effect, PendingSubmission, Phase, SessionState, Transition};
pub use turn::{ConversationTurn, TurnId};
pub use view::{Page, ToolView};

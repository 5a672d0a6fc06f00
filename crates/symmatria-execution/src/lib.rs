//! Runtime pieces for Symmatria front ends: the delayed canned responder and
//! the tracing setup.

pub mod logging;
pub mod responder;
pub mod tracing_layer;

pub use logging::{LogOutput, init_tracing};
pub use responder::DelayedResponder;
pub use tracing_layer::{ActivityEvent, ActivityLayer};

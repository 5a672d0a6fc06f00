//! Domain registry module.
//!
//! # Module Structure
//!
//! - `model`: `Domain` and its immutable `DomainProfile`
//! - `registry`: compile-time profiles and `lookup`
//! - `reply`: deterministic reply composition from a profile

mod model;
mod registry;
mod reply;

pub use model::{Conjecture, Domain, DomainProfile, PatternInsight};
pub use registry::lookup;
pub use reply::{Reply, compose_insights, compose_reply, compose_response};

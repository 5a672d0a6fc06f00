//! Core domain types for Symmatria.
//!
//! Everything in this crate is synchronous and free of IO apart from
//! configuration loading. The async controller lives in
//! `symmatria-application`.

pub mod citation;
pub mod config;
pub mod contemplation;
pub mod domain;
pub mod error;
pub mod latex;
pub mod session;

// Re-export common error type
pub use error::SymmatriaError;

//! Pre-implementation confidence gating.
//!
//! Turns a checklist of discrete evidence signals about a proposed task into a
//! single calibrated score and a recommended action (proceed, present
//! alternatives, or ask clarifying questions), so callers can decide whether a
//! task is ready to be worked on before spending effort on it.

pub mod config;
pub mod error;
pub mod request;
pub mod scorer;

pub use config::*;
pub use error::*;
pub use request::*;
pub use scorer::*;

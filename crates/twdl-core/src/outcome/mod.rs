//! Outcome classification for external tool runs.
//!
//! Maps an exit status plus captured stderr into an [`OutcomeKind`] and decides
//! whether the fallback tool should be tried, so the batch loop stays a plain
//! sequence of calls.

mod classify;
mod policy;

pub use classify::{classify, matches_signature, OutcomeKind, ToolOutcome};
pub use policy::{FallbackDecision, FallbackPolicy};

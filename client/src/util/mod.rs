//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys glue from component logic. `observer` only
//! exists in the hydrate build; `scroll` compiles everywhere and degrades to
//! no-ops on the server.

#[cfg(feature = "hydrate")]
pub mod observer;
pub mod scroll;

//! Client-side UI state models.
//!
//! DESIGN
//! ======
//! Each model is plain data with no browser dependency so the behavior can be
//! unit-tested natively. Components wrap them in `RwSignal`s and drive them
//! from observers and timers.

pub mod carousel;
pub mod invitation;
pub mod nav;
pub mod reveal;
pub mod wishes;

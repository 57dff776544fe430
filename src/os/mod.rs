//! OS-level interactions.

pub mod open;

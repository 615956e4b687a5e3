//! Domain layer - screening state and its shared primitives.

pub mod foundation;
pub mod screening;

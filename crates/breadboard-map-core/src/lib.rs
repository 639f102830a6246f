//! Core types for breadboard component mapping.
//!
//! This crate is intentionally small and purely topological. It does *not*
//! depend on any camera calibration or pixel geometry: positions are already
//! resolved board coordinates, and connectivity is a pure function of them.

mod connectivity;
mod logger;
mod position;

pub use connectivity::are_connected;
pub use position::{BreadboardPosition, Column, RowHalf};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;

//! High-level facade crate for the `breadboard-map-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - [`SharedMapper`], calibration state shared between a recalibration
//!   operator and per-frame resolution callers.
//!
//! ## Quickstart
//!
//! ```
//! use breadboard_map::{are_connected, Detection, SharedMapper};
//!
//! # fn main() -> Result<(), breadboard_map::CalibrationError> {
//! let mapper = SharedMapper::with_defaults()?;
//!
//! let led = Detection {
//!     x: 195.0,
//!     y: 121.72,
//!     width: 20.0,
//!     height: 63.45,
//!     label: "led".to_string(),
//! };
//! let mapped = mapper.map(&led);
//! assert_eq!(mapped.leg1.label().as_deref(), Some("a1"));
//! assert!(!are_connected(&mapped.leg1, mapped.leg2.as_ref().unwrap()));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `breadboard_map::core`: position and connectivity value types.
//! - `breadboard_map::grid`: calibration geometry, resolver, leg mapper.

pub use breadboard_map_core as core;
pub use breadboard_map_grid as grid;

pub use breadboard_map_core::{are_connected, BreadboardPosition, Column, RowHalf};

#[cfg(feature = "tracing")]
pub use breadboard_map_core::init_tracing;
pub use breadboard_map_core::init_with_level;

pub use breadboard_map_grid::{
    BoardCalibration, BoardLayout, CalibrationError, CornerUpdate, Detection, EdgePolicy,
    LegMapper, LegMapperParams, MappedComponent, PositionResolver, ResolverParams,
};

mod shared;
pub use shared::SharedMapper;

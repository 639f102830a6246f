//! Calibration geometry and pixel-to-grid resolution for breadboard mapping.
//!
//! Detection runs upstream; this crate turns the pixel coordinates it emits
//! into breadboard positions and leg assignments.
//!
//! ## Quickstart
//!
//! ```
//! use breadboard_map_grid::{BoardCalibration, BoardLayout, PositionResolver, ResolverParams};
//! use nalgebra::Point2;
//!
//! # fn main() -> Result<(), breadboard_map_grid::CalibrationError> {
//! let calibration = BoardCalibration::new(BoardLayout::default())?;
//! let resolver = PositionResolver::new(calibration, ResolverParams::default());
//!
//! let pos = resolver.resolve(Point2::new(195.0, 95.0));
//! assert_eq!(pos.label().as_deref(), Some("a1"));
//! # Ok(())
//! # }
//! ```

mod calibrate;
mod geometry;
mod legs;
mod resolver;

pub use calibrate::CornerUpdate;
pub use geometry::{
    BoardCalibration, BoardLayout, CalibrationError, DerivedSpacing, GridGeometry, PowerRail,
};
pub use legs::{Detection, LegMapper, LegMapperParams, MappedComponent};
pub use resolver::{EdgePolicy, PositionResolver, ResolverParams};

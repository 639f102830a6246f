//! Calibration geometry for the breadboard camera view.
//!
//! [`BoardLayout`] is the serializable description of where the board sits in
//! pixel space; [`BoardCalibration`] is the validated form carrying the
//! derived hole spacing. All spacing goes through one validated constructor,
//! so no resolver can ever see a layout with stale or degenerate spacing.

use breadboard_map_core::Column;
use serde::{Deserialize, Serialize};

/// Pixel-space extent of one 5-column grid section.
///
/// `x_start`/`x_end` are the hole centers of the first and last column,
/// `y_start`/`y_end` the hole centers of the first and last row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub x_start: f32,
    pub x_end: f32,
    pub y_start: f32,
    pub y_end: f32,
    /// Column labels in left-to-right board order.
    pub columns: [Column; 5],
}

/// Pixel x-coordinates of one side's power-rail pair.
///
/// The y-range is shared with the main grid; rail matching uses a fixed
/// tolerance window around each x-coordinate (see `ResolverParams`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerRail {
    pub positive_x: f32,
    pub negative_x: f32,
    pub y_start: f32,
    pub y_end: f32,
}

/// Hole spacing derived from the grid geometry.
///
/// Only ever produced by [`BoardCalibration`]'s constructor; never set
/// manually.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DerivedSpacing {
    /// Vertical pixel distance between adjacent rows.
    pub row: f32,
    /// Horizontal pixel distance between adjacent left-section columns.
    pub col_left: f32,
    /// Horizontal pixel distance between adjacent right-section columns.
    pub col_right: f32,
}

/// Static calibration layout for the camera view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Left grid section, columns `a..=e`.
    pub left: GridGeometry,
    /// Right grid section, columns `f..=j`.
    pub right: GridGeometry,
    pub left_power: PowerRail,
    pub right_power: PowerRail,
    #[serde(default = "default_num_rows")]
    pub num_rows: u8,
    #[serde(default = "default_cols_per_side")]
    pub num_cols_per_side: u8,
}

fn default_num_rows() -> u8 {
    30
}

fn default_cols_per_side() -> u8 {
    5
}

impl Default for BoardLayout {
    /// Reference calibration for the 1280x960 test camera.
    ///
    /// Recalibrate from corner anchors when switching cameras.
    fn default() -> Self {
        Self {
            left: GridGeometry {
                x_start: 195.0,
                x_end: 390.0,
                y_start: 95.0,
                y_end: 870.0,
                columns: Column::LEFT_HALF,
            },
            right: GridGeometry {
                x_start: 455.0,
                x_end: 650.0,
                y_start: 95.0,
                y_end: 870.0,
                columns: Column::RIGHT_HALF,
            },
            left_power: PowerRail {
                positive_x: 115.0,
                negative_x: 145.0,
                y_start: 95.0,
                y_end: 870.0,
            },
            right_power: PowerRail {
                positive_x: 710.0,
                negative_x: 740.0,
                y_start: 95.0,
                y_end: 870.0,
            },
            num_rows: 30,
            num_cols_per_side: 5,
        }
    }
}

/// Calibration geometry validation errors.
#[derive(thiserror::Error, Debug)]
pub enum CalibrationError {
    #[error("unsupported grid size: {rows} rows x {cols} columns per side (need >= 2 each, <= 5 columns)")]
    InvalidSize { rows: u8, cols: u8 },
    #[error("non-positive or non-finite {axis} spacing, geometry spans no pixels")]
    DegenerateSpan { axis: &'static str },
}

/// Validated board calibration with derived hole spacing.
///
/// Immutable: recalibration produces a fresh value (see
/// [`BoardCalibration::recalibrate`]), so a failed update leaves the previous
/// calibration untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCalibration {
    layout: BoardLayout,
    spacing: DerivedSpacing,
}

impl BoardCalibration {
    /// Validate a layout and derive its hole spacing.
    pub fn new(layout: BoardLayout) -> Result<Self, CalibrationError> {
        let spacing = derive_spacing(&layout)?;
        Ok(Self { layout, spacing })
    }

    /// The validated layout.
    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The derived hole spacing.
    #[inline]
    pub fn spacing(&self) -> DerivedSpacing {
        self.spacing
    }
}

fn derive_spacing(layout: &BoardLayout) -> Result<DerivedSpacing, CalibrationError> {
    if layout.num_rows < 2 || layout.num_cols_per_side < 2 || layout.num_cols_per_side > 5 {
        return Err(CalibrationError::InvalidSize {
            rows: layout.num_rows,
            cols: layout.num_cols_per_side,
        });
    }

    let rows = f32::from(layout.num_rows - 1);
    let cols = f32::from(layout.num_cols_per_side - 1);
    let spacing = DerivedSpacing {
        row: (layout.left.y_end - layout.left.y_start) / rows,
        col_left: (layout.left.x_end - layout.left.x_start) / cols,
        col_right: (layout.right.x_end - layout.right.x_start) / cols,
    };

    for (value, axis) in [
        (spacing.row, "row"),
        (spacing.col_left, "left column"),
        (spacing.col_right, "right column"),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(CalibrationError::DegenerateSpan { axis });
        }
    }

    Ok(spacing)
}

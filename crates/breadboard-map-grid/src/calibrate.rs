//! Corner-anchored recalibration.
//!
//! An operator (or an upstream detector) supplies pixel locations for a few
//! named reference holes; the geometry they anchor is updated and the spacing
//! re-derived through the validated constructor.

use log::info;
use serde::{Deserialize, Serialize};

use crate::geometry::{BoardCalibration, CalibrationError};

/// Partial set of named calibration corners, in pixels.
///
/// Corner names follow the board holes they anchor: `a1`, `e1` and `a30` fix
/// the left section, `f1` and `j1` the right section's x-range. Absent
/// corners leave the corresponding geometry untouched, so a partial update is
/// valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a1: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e1: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a30: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f1: Option<[f32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j1: Option<[f32; 2]>,
}

impl BoardCalibration {
    /// Apply new corner anchors and return a freshly validated calibration.
    ///
    /// The left section updates only when `a1`, `e1` and `a30` are all
    /// present; the right section updates when `f1` and `j1` are both
    /// present, with its `y_end` pinned to the left section's (the two sides
    /// are row-aligned). On error `self` is untouched and stays usable.
    pub fn recalibrate(&self, corners: &CornerUpdate) -> Result<BoardCalibration, CalibrationError> {
        let mut layout = *self.layout();

        if let (Some(a1), Some(e1), Some(a30)) = (corners.a1, corners.e1, corners.a30) {
            layout.left.x_start = a1[0];
            layout.left.x_end = e1[0];
            layout.left.y_start = a1[1];
            layout.left.y_end = a30[1];
        }

        if let (Some(f1), Some(j1)) = (corners.f1, corners.j1) {
            layout.right.x_start = f1[0];
            layout.right.x_end = j1[0];
            layout.right.y_start = f1[1];
            layout.right.y_end = layout.left.y_end;
        }

        let next = BoardCalibration::new(layout)?;
        let s = next.spacing();
        info!(
            "recalibrated: row_spacing={:.1}px col_spacing={:.1}/{:.1}px",
            s.row, s.col_left, s.col_right
        );
        Ok(next)
    }
}

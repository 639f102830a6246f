//! Pixel-to-position resolution.

use breadboard_map_core::{BreadboardPosition, Column};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::geometry::{BoardCalibration, GridGeometry};

/// Behavior for pixels inside a grid section's horizontal band whose rounded
/// column index falls before the first or past the last column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Snap to the nearest edge column.
    #[default]
    Snap,
    /// Mark the position invalid instead of snapping.
    Reject,
}

/// Tunables for position resolution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolverParams {
    /// Half-width of the rail matching window in pixels.
    ///
    /// Rails use this fixed window regardless of hole spacing.
    pub rail_halfwidth_px: f32,
    /// Edge handling for laterally out-of-range grid pixels.
    pub edge_policy: EdgePolicy,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            rail_halfwidth_px: 20.0,
            edge_policy: EdgePolicy::Snap,
        }
    }
}

/// Converts pixel coordinates into breadboard positions.
///
/// Cheap to copy; a value resolves against one immutable calibration
/// snapshot. Unresolvable input yields an invalid position, never an error.
#[derive(Clone, Copy, Debug)]
pub struct PositionResolver {
    calibration: BoardCalibration,
    params: ResolverParams,
}

impl PositionResolver {
    /// Create a resolver for a validated calibration.
    pub fn new(calibration: BoardCalibration, params: ResolverParams) -> Self {
        Self {
            calibration,
            params,
        }
    }

    /// Calibration this resolver reads.
    #[inline]
    pub fn calibration(&self) -> &BoardCalibration {
        &self.calibration
    }

    /// Resolver parameters.
    #[inline]
    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    /// Resolve a pixel coordinate to a breadboard position.
    ///
    /// Zones are tried in fixed priority order: left rails, left grid, right
    /// grid, right rails; the first match wins. A row outside the board's
    /// vertical band invalidates the whole result; a row without a matching
    /// zone is kept in the value but the position stays invalid.
    pub fn resolve(&self, p: Point2<f32>) -> BreadboardPosition {
        let Some(row) = self.row_for_y(p.y) else {
            return BreadboardPosition::INVALID;
        };

        BreadboardPosition {
            row: Some(row),
            column: self.column_for_x(p.x),
        }
    }

    fn row_for_y(&self, y: f32) -> Option<u8> {
        let left = &self.calibration.layout().left;
        let spacing = self.calibration.spacing().row;
        if y < left.y_start - spacing / 2.0 || y > left.y_end + spacing / 2.0 {
            return None;
        }

        let row = ((y - left.y_start) / spacing).round() as i32 + 1;
        let last = i32::from(self.calibration.layout().num_rows);
        Some(row.clamp(1, last) as u8)
    }

    fn column_for_x(&self, x: f32) -> Option<Column> {
        let layout = self.calibration.layout();
        let spacing = self.calibration.spacing();
        let w = self.params.rail_halfwidth_px;

        if (x - layout.left_power.positive_x).abs() <= w {
            return Some(Column::PosLeft);
        }
        if (x - layout.left_power.negative_x).abs() <= w {
            return Some(Column::NegLeft);
        }
        if let Some(col) = self.grid_column(&layout.left, spacing.col_left, x) {
            return Some(col);
        }
        if let Some(col) = self.grid_column(&layout.right, spacing.col_right, x) {
            return Some(col);
        }
        if (x - layout.right_power.positive_x).abs() <= w {
            return Some(Column::PosRight);
        }
        if (x - layout.right_power.negative_x).abs() <= w {
            return Some(Column::NegRight);
        }
        None
    }

    fn grid_column(&self, grid: &GridGeometry, spacing: f32, x: f32) -> Option<Column> {
        if x < grid.x_start - spacing / 2.0 || x > grid.x_end + spacing / 2.0 {
            return None;
        }

        let last = i32::from(self.calibration.layout().num_cols_per_side) - 1;
        let index = ((x - grid.x_start) / spacing).round() as i32;
        let index = match self.params.edge_policy {
            EdgePolicy::Snap => index.clamp(0, last),
            EdgePolicy::Reject if index < 0 || index > last => return None,
            EdgePolicy::Reject => index,
        };
        Some(grid.columns[index as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoardLayout;

    fn resolver() -> PositionResolver {
        let calibration = BoardCalibration::new(BoardLayout::default()).expect("calibration");
        PositionResolver::new(calibration, ResolverParams::default())
    }

    fn resolve(r: &PositionResolver, x: f32, y: f32) -> BreadboardPosition {
        r.resolve(Point2::new(x, y))
    }

    #[test]
    fn grid_corner_anchors() {
        let r = resolver();
        assert_eq!(resolve(&r, 195.0, 95.0), BreadboardPosition::new(1, Column::A));
        assert_eq!(resolve(&r, 390.0, 95.0), BreadboardPosition::new(1, Column::E));
        assert_eq!(resolve(&r, 455.0, 95.0), BreadboardPosition::new(1, Column::F));
        assert_eq!(resolve(&r, 650.0, 95.0), BreadboardPosition::new(1, Column::J));
        assert_eq!(resolve(&r, 650.0, 870.0), BreadboardPosition::new(30, Column::J));
    }

    #[test]
    fn row_formula_in_mid_board() {
        let r = resolver();
        // round((500 - 95) / 26.724) + 1 = 16, round((300 - 195) / 48.75) = 2.
        assert_eq!(resolve(&r, 300.0, 500.0), BreadboardPosition::new(16, Column::C));
    }

    #[test]
    fn rails_match_within_fixed_window() {
        let r = resolver();
        // round((300 - 95) / 26.724) + 1 = 9.
        assert_eq!(resolve(&r, 115.0, 300.0), BreadboardPosition::new(9, Column::PosLeft));
        assert_eq!(resolve(&r, 134.0, 300.0), BreadboardPosition::new(9, Column::PosLeft));
        assert_eq!(resolve(&r, 145.0, 300.0), BreadboardPosition::new(9, Column::NegLeft));
        assert_eq!(resolve(&r, 710.0, 300.0), BreadboardPosition::new(9, Column::PosRight));
        assert_eq!(resolve(&r, 740.0, 300.0), BreadboardPosition::new(9, Column::NegRight));
        // 95 is more than 20 px from either left rail.
        assert!(resolve(&r, 95.0 - 0.5, 300.0).column.is_none());
    }

    #[test]
    fn vertical_band_bounds_the_board() {
        let r = resolver();
        let half_row = r.calibration().spacing().row / 2.0;

        let above = resolve(&r, 195.0, 95.0 - half_row - 1.0);
        assert_eq!(above, BreadboardPosition::INVALID);

        let below = resolve(&r, 195.0, 870.0 + half_row + 1.0);
        assert_eq!(below, BreadboardPosition::INVALID);

        // Just inside the band still clamps to the edge rows.
        assert_eq!(
            resolve(&r, 195.0, 95.0 - half_row + 1.0),
            BreadboardPosition::new(1, Column::A)
        );
        assert_eq!(
            resolve(&r, 195.0, 870.0 + half_row - 1.0),
            BreadboardPosition::new(30, Column::A)
        );
    }

    #[test]
    fn dead_zone_between_sections_keeps_row_but_stays_invalid() {
        let r = resolver();
        let pos = resolve(&r, 422.0, 500.0);
        assert!(!pos.is_valid());
        assert_eq!(pos.row, Some(16));
        assert_eq!(pos.column, None);
        assert_eq!(pos.label(), None);
    }

    #[test]
    fn snap_policy_saturates_at_edge_columns() {
        let r = resolver();
        // Half a spacing past column e still lands in the left band.
        assert_eq!(resolve(&r, 412.0, 95.0).column, Some(Column::E));
        assert_eq!(resolve(&r, 172.0, 95.0).column, Some(Column::A));
    }

    #[test]
    fn reject_policy_invalidates_past_edge_pixels() {
        let calibration = BoardCalibration::new(BoardLayout::default()).expect("calibration");
        let r = PositionResolver::new(
            calibration,
            ResolverParams {
                edge_policy: EdgePolicy::Reject,
                ..ResolverParams::default()
            },
        );

        // Exactly half a spacing before column a: in the band, rounds to -1.
        let pos = r.resolve(Point2::new(170.625, 95.0));
        assert!(!pos.is_valid());
        // Interior pixels are unaffected by the policy.
        assert_eq!(
            r.resolve(Point2::new(300.0, 500.0)),
            BreadboardPosition::new(16, Column::C)
        );
    }
}

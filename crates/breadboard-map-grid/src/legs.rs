//! Mapping detection bounding boxes onto component leg positions.

use breadboard_map_core::BreadboardPosition;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::resolver::PositionResolver;

/// One detected component, as supplied by the detection collaborator.
///
/// `x`/`y` is the bounding-box center in pixels. `label` is already mapped
/// into this workspace's component vocabulary (`led`, `resistor`, `wire`,
/// `button`, ...); vocabulary mapping and confidence filtering happen
/// upstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(rename = "type")]
    pub label: String,
}

impl Detection {
    /// Bounding-box center.
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// A detection mapped onto one or two breadboard leg positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MappedComponent {
    #[serde(rename = "type")]
    pub label: String,
    pub leg1: BreadboardPosition,
    /// Second leg for components spanning multiple holes, `None` for
    /// single-hole detections.
    pub leg2: Option<BreadboardPosition>,
    /// True when the legs bridge the non-conductive center channel. Circuit
    /// assembly must then treat the two legs as independent nets.
    pub spans_gap: bool,
}

impl MappedComponent {
    /// Iterate over the mapped legs.
    pub fn legs(&self) -> impl Iterator<Item = &BreadboardPosition> {
        std::iter::once(&self.leg1).chain(self.leg2.as_ref())
    }
}

/// Tunables for leg mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegMapperParams {
    /// Bounding boxes smaller than `span_factor` times the hole spacing in
    /// both dimensions are treated as single-hole components.
    pub span_factor: f32,
    /// Inward offset in pixels from the bounding-box edge to the estimated
    /// lead tip, compensating box imprecision at the true lead ends.
    pub lead_inset_px: f32,
}

impl Default for LegMapperParams {
    fn default() -> Self {
        Self {
            span_factor: 1.5,
            lead_inset_px: 5.0,
        }
    }
}

/// Maps detection bounding boxes onto component leg positions.
#[derive(Clone, Copy, Debug)]
pub struct LegMapper {
    resolver: PositionResolver,
    params: LegMapperParams,
}

impl LegMapper {
    /// Create a mapper on top of a position resolver.
    pub fn new(resolver: PositionResolver, params: LegMapperParams) -> Self {
        Self { resolver, params }
    }

    /// The underlying position resolver.
    #[inline]
    pub fn resolver(&self) -> &PositionResolver {
        &self.resolver
    }

    /// Mapper parameters.
    #[inline]
    pub fn params(&self) -> &LegMapperParams {
        &self.params
    }

    /// Map one detection onto its leg position(s).
    ///
    /// Boxes smaller than `span_factor` hole spacings in both dimensions
    /// resolve at their center; larger boxes are classified by aspect and
    /// resolve one leg near each end, inset by `lead_inset_px`.
    pub fn map(&self, detection: &Detection) -> MappedComponent {
        let spacing = self.resolver.calibration().spacing();
        let col_spacing = self.col_spacing_at(detection.x);

        if detection.width < self.params.span_factor * col_spacing
            && detection.height < self.params.span_factor * spacing.row
        {
            return MappedComponent {
                label: detection.label.clone(),
                leg1: self.resolver.resolve(detection.center()),
                leg2: None,
                spans_gap: false,
            };
        }

        let inset = self.params.lead_inset_px;
        let (p1, p2) = if detection.height > detection.width {
            // Vertical component, legs at the top and bottom of the box.
            (
                Point2::new(detection.x, detection.y - detection.height / 2.0 + inset),
                Point2::new(detection.x, detection.y + detection.height / 2.0 - inset),
            )
        } else {
            // Horizontal component, possibly bridging the center channel.
            (
                Point2::new(detection.x - detection.width / 2.0 + inset, detection.y),
                Point2::new(detection.x + detection.width / 2.0 - inset, detection.y),
            )
        };

        let leg1 = self.resolver.resolve(p1);
        let leg2 = self.resolver.resolve(p2);
        let spans_gap = spans_center_gap(&leg1, &leg2);

        MappedComponent {
            label: detection.label.clone(),
            leg1,
            leg2: Some(leg2),
            spans_gap,
        }
    }

    /// Column spacing of the grid section nearest to `x`.
    fn col_spacing_at(&self, x: f32) -> f32 {
        let layout = self.resolver.calibration().layout();
        let spacing = self.resolver.calibration().spacing();
        let midpoint = (layout.left.x_end + layout.right.x_start) / 2.0;
        if x > midpoint {
            spacing.col_right
        } else {
            spacing.col_left
        }
    }
}

/// True when two valid legs sit in different row-halves of the main grid.
///
/// Rail legs belong to no row-half and never span the gap.
fn spans_center_gap(leg1: &BreadboardPosition, leg2: &BreadboardPosition) -> bool {
    let (Some(c1), Some(c2)) = (leg1.column, leg2.column) else {
        return false;
    };
    if leg1.row.is_none() || leg2.row.is_none() {
        return false;
    }
    match (c1.half(), c2.half()) {
        (Some(h1), Some(h2)) => h1 != h2,
        _ => false,
    }
}

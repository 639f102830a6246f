//! Calibration state shared between recalibration and resolution callers.

use std::sync::{Arc, PoisonError, RwLock};

use nalgebra::Point2;

use breadboard_map_core::BreadboardPosition;
use breadboard_map_grid::{
    BoardCalibration, BoardLayout, CalibrationError, CornerUpdate, Detection, LegMapper,
    LegMapperParams, MappedComponent, PositionResolver, ResolverParams,
};

/// Shared, atomically recalibratable mapper.
///
/// Resolution callers take an immutable snapshot [`Arc`] under a short read
/// lock, so frequent per-frame calls never block each other and never observe
/// a geometry with stale spacing. [`SharedMapper::recalibrate`] holds the
/// write lock across the whole read-modify-swap, which serializes the rare
/// operator-triggered updates and publishes geometry and spacing together.
///
/// Independent instances are cheap; tests and multi-board setups construct
/// their own rather than sharing process-global state.
pub struct SharedMapper {
    state: RwLock<Arc<LegMapper>>,
}

impl SharedMapper {
    /// Create from an explicit calibration and parameter sets.
    pub fn new(
        calibration: BoardCalibration,
        resolver: ResolverParams,
        legs: LegMapperParams,
    ) -> Self {
        let mapper = LegMapper::new(PositionResolver::new(calibration, resolver), legs);
        Self {
            state: RwLock::new(Arc::new(mapper)),
        }
    }

    /// Create with the reference camera calibration and default parameters.
    pub fn with_defaults() -> Result<Self, CalibrationError> {
        let calibration = BoardCalibration::new(BoardLayout::default())?;
        Ok(Self::new(
            calibration,
            ResolverParams::default(),
            LegMapperParams::default(),
        ))
    }

    /// Current immutable mapper snapshot.
    ///
    /// The snapshot stays internally consistent even if a recalibration lands
    /// afterwards; batch callers should resolve a whole frame against one
    /// snapshot.
    pub fn snapshot(&self) -> Arc<LegMapper> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Resolve one pixel coordinate against the current calibration.
    pub fn resolve(&self, p: Point2<f32>) -> BreadboardPosition {
        self.snapshot().resolver().resolve(p)
    }

    /// Map one detection against the current calibration.
    pub fn map(&self, detection: &Detection) -> MappedComponent {
        self.snapshot().map(detection)
    }

    /// Map a frame's worth of detections against one consistent snapshot.
    pub fn map_all(&self, detections: &[Detection]) -> Vec<MappedComponent> {
        let mapper = self.snapshot();
        detections.iter().map(|d| mapper.map(d)).collect()
    }

    /// Apply new calibration corners and publish the updated snapshot.
    ///
    /// On error the previous calibration stays published and usable.
    pub fn recalibrate(&self, corners: &CornerUpdate) -> Result<(), CalibrationError> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.resolver().calibration().recalibrate(corners)?;
        let mapper = LegMapper::new(
            PositionResolver::new(next, *guard.resolver().params()),
            *guard.params(),
        );
        *guard = Arc::new(mapper);
        Ok(())
    }
}

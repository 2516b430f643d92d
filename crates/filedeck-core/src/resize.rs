//! Two-pane column resizing.
//!
//! [`ColumnResizeController`] turns raw pointer positions into a clamped
//! percentage split between the navigation pane (primary) and the content
//! pane (secondary). Updates are always recomputed from the position and
//! split recorded when the drag started, so replaying the same pointer
//! position yields the same split no matter how many moves came before.

use crate::error::ConfigError;

/// Inclusive percentage bounds for the primary pane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeBounds {
    min_percent: f64,
    max_percent: f64,
}

impl ResizeBounds {
    /// Fails unless `0 <= min <= max <= 100` and both are finite.
    pub fn new(min_percent: f64, max_percent: f64) -> Result<Self, ConfigError> {
        let in_range = |p: f64| p.is_finite() && (0.0..=100.0).contains(&p);
        if !in_range(min_percent) || !in_range(max_percent) || min_percent > max_percent {
            return Err(ConfigError::InvalidBounds {
                min: min_percent,
                max: max_percent,
            });
        }
        Ok(Self {
            min_percent,
            max_percent,
        })
    }

    #[inline]
    pub fn min_percent(&self) -> f64 {
        self.min_percent
    }

    #[inline]
    pub fn max_percent(&self) -> f64 {
        self.max_percent
    }

    /// Clamps `percent` into the bounds. NaN maps to the lower bound.
    pub fn clamp(&self, percent: f64) -> f64 {
        if percent.is_nan() {
            return self.min_percent;
        }
        percent.clamp(self.min_percent, self.max_percent)
    }
}

/// Width allocation between two adjacent panes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSplit {
    primary_percent: f64,
}

impl ColumnSplit {
    #[inline]
    pub fn primary_percent(&self) -> f64 {
        self.primary_percent
    }

    /// Always `100 - primary_percent`.
    #[inline]
    pub fn secondary_percent(&self) -> f64 {
        100.0 - self.primary_percent
    }
}

/// An in-progress drag on the resize handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    /// Pointer x at pointer-down.
    pub origin_x: f64,
    /// Primary percentage at pointer-down.
    pub origin_percent: f64,
}

/// Tracks the split and the active gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnResizeController {
    bounds: ResizeBounds,
    split: ColumnSplit,
    gesture: Option<DragGesture>,
}

impl ColumnResizeController {
    /// Creates a controller whose split starts at `default_primary_percent`,
    /// clamped into `[min_percent, max_percent]`.
    pub fn new(
        min_percent: f64,
        max_percent: f64,
        default_primary_percent: f64,
    ) -> Result<Self, ConfigError> {
        let bounds = ResizeBounds::new(min_percent, max_percent)?;
        Ok(Self::with_bounds(bounds, default_primary_percent))
    }

    pub fn with_bounds(bounds: ResizeBounds, default_primary_percent: f64) -> Self {
        Self {
            bounds,
            split: ColumnSplit {
                primary_percent: bounds.clamp(default_primary_percent),
            },
            gesture: None,
        }
    }

    #[inline]
    pub fn split(&self) -> ColumnSplit {
        self.split
    }

    #[inline]
    pub fn bounds(&self) -> ResizeBounds {
        self.bounds
    }

    #[inline]
    pub fn gesture(&self) -> Option<DragGesture> {
        self.gesture
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Starts a gesture at `pointer_x`. Ignored while one is already active.
    pub fn begin_drag(&mut self, pointer_x: f64) {
        if self.gesture.is_some() {
            return;
        }
        let origin_x = if pointer_x.is_finite() { pointer_x } else { 0.0 };
        log::debug!(
            "resize: drag started at x={origin_x} ({}%)",
            self.split.primary_percent
        );
        self.gesture = Some(DragGesture {
            origin_x,
            origin_percent: self.split.primary_percent,
        });
    }

    /// Applies the pointer displacement since drag start as a percentage of
    /// `container_width_px`.
    ///
    /// Returns `true` if the split was recomputed. Nothing happens without an
    /// active gesture, with a non-positive or non-finite width, or with a
    /// non-finite pointer position.
    pub fn update_drag(&mut self, pointer_x: f64, container_width_px: f64) -> bool {
        let Some(gesture) = self.gesture else {
            return false;
        };
        if !container_width_px.is_finite() || container_width_px <= 0.0 || !pointer_x.is_finite()
        {
            return false;
        }

        let delta_percent = (pointer_x - gesture.origin_x) / container_width_px * 100.0;
        self.split.primary_percent = self.bounds.clamp(gesture.origin_percent + delta_percent);
        true
    }

    /// Ends the active gesture, if any.
    pub fn end_drag(&mut self) {
        if self.gesture.take().is_some() {
            log::debug!("resize: drag ended at {}%", self.split.primary_percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ColumnResizeController {
        ColumnResizeController::new(20.0, 80.0, 30.0).unwrap()
    }

    #[test]
    fn test_default_is_kept_when_in_bounds() {
        let c = controller();
        assert_eq!(c.split().primary_percent(), 30.0);
        assert_eq!(c.split().secondary_percent(), 70.0);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_default_is_clamped() {
        let low = ColumnResizeController::new(20.0, 80.0, 5.0).unwrap();
        assert_eq!(low.split().primary_percent(), 20.0);
        let high = ColumnResizeController::new(20.0, 80.0, 95.0).unwrap();
        assert_eq!(high.split().primary_percent(), 80.0);
        let nan = ColumnResizeController::new(20.0, 80.0, f64::NAN).unwrap();
        assert_eq!(nan.split().primary_percent(), 20.0);
    }

    #[test]
    fn test_reversed_bounds_fail() {
        let err = ColumnResizeController::new(80.0, 20.0, 50.0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBounds { min: 80.0, max: 20.0 });
    }

    #[test]
    fn test_out_of_range_bounds_fail() {
        assert!(ResizeBounds::new(-1.0, 50.0).is_err());
        assert!(ResizeBounds::new(10.0, 101.0).is_err());
        assert!(ResizeBounds::new(f64::NAN, 50.0).is_err());
        assert!(ResizeBounds::new(40.0, 40.0).is_ok());
    }

    #[test]
    fn test_drag_moves_split_by_container_fraction() {
        let mut c = controller();
        c.begin_drag(100.0);
        // 100px of a 1000px container is 10 percentage points.
        assert!(c.update_drag(200.0, 1000.0));
        assert!((c.split().primary_percent() - 40.0).abs() < 1e-9);
        assert!(c.update_drag(50.0, 1000.0));
        assert!((c.split().primary_percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_is_clamped() {
        let mut c = controller();
        c.begin_drag(0.0);
        c.update_drag(10_000.0, 1000.0);
        assert_eq!(c.split().primary_percent(), 80.0);
        c.update_drag(-10_000.0, 1000.0);
        assert_eq!(c.split().primary_percent(), 20.0);
    }

    #[test]
    fn test_update_without_gesture_is_noop() {
        let mut c = controller();
        assert!(!c.update_drag(500.0, 1000.0));
        assert_eq!(c.split().primary_percent(), 30.0);
    }

    #[test]
    fn test_zero_and_negative_width_are_ignored() {
        let mut c = controller();
        c.begin_drag(0.0);
        assert!(!c.update_drag(100.0, 0.0));
        assert!(!c.update_drag(100.0, -50.0));
        assert!(!c.update_drag(100.0, f64::INFINITY));
        assert_eq!(c.split().primary_percent(), 30.0);
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let mut c = controller();
        c.begin_drag(0.0);
        c.update_drag(100.0, 1000.0);
        assert!(!c.update_drag(f64::NAN, 1000.0));
        assert!((c.split().primary_percent() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_begin_drag_is_idempotent() {
        let mut c = controller();
        c.begin_drag(100.0);
        c.update_drag(300.0, 1000.0);
        c.begin_drag(300.0);
        assert_eq!(c.gesture().unwrap().origin_x, 100.0);
        assert_eq!(c.gesture().unwrap().origin_percent, 30.0);
    }

    #[test]
    fn test_end_drag_freezes_split() {
        let mut c = controller();
        c.begin_drag(0.0);
        c.update_drag(100.0, 1000.0);
        c.end_drag();
        let frozen = c.split();
        assert!(!c.update_drag(900.0, 1000.0));
        assert_eq!(c.split(), frozen);
        c.end_drag();
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_second_gesture_starts_from_current_split() {
        let mut c = controller();
        c.begin_drag(0.0);
        c.update_drag(100.0, 1000.0);
        c.end_drag();

        c.begin_drag(500.0);
        assert_eq!(c.gesture().unwrap().origin_percent, c.split().primary_percent());
        c.update_drag(600.0, 1000.0);
        assert!((c.split().primary_percent() - 50.0).abs() < 1e-9);
    }
}

#![forbid(unsafe_code)]

//! Pointer coordinate → first-pane ratio.
//!
//! # Clamping
//!
//! The pointer position, taken relative to the container's start edge along
//! the split axis, is clamped to `[min, extent - min]` and divided by the
//! extent. When the container is smaller than twice the minimum the upper
//! bound falls below the lower one and the result saturates at
//! `min / extent`: the first pane keeps its minimum and the second pane gives
//! way. No error is ever raised.

use splitpane_core::geometry::Rect;

use crate::orientation::Orientation;

/// First-pane share of the split axis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Ratio(f64);

impl Ratio {
    /// Wrap a raw fraction.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Fraction in `[0, 1]` for non-degenerate containers.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Second-pane share, `1 - ratio`.
    #[must_use]
    pub fn supplement(self) -> f64 {
        1.0 - self.0
    }
}

/// Split-axis bounds a drag works against.
///
/// Captured from the container rect once per gesture; later container
/// changes do not affect an existing value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    /// Start edge of the container along the split axis.
    pub origin: f64,
    /// Container size along the split axis.
    pub extent: f64,
    /// Lowest allowed first-pane size.
    pub min: f64,
    /// Highest allowed first-pane size, `extent - min`.
    pub max: f64,
}

impl DragBounds {
    /// Snapshot bounds from `container`.
    #[must_use]
    pub fn capture(container: &Rect, min_extent: f64, orientation: Orientation) -> Self {
        let extent = orientation.extent(container);
        Self {
            origin: orientation.origin(container),
            extent,
            min: min_extent,
            max: extent - min_extent,
        }
    }

    /// Ratio for an absolute pointer coordinate on the split axis.
    #[must_use]
    pub fn ratio_at(&self, pointer: f64) -> Ratio {
        self.ratio_for_local(pointer - self.origin)
    }

    /// Ratio for a first-pane size measured from the start edge.
    #[must_use]
    pub fn ratio_for_local(&self, local: f64) -> Ratio {
        if self.extent.is_nan() || self.extent <= 0.0 {
            return Ratio(0.0);
        }
        // Lower bound applied last so it wins when `max < min`.
        let clamped = local.min(self.max).max(self.min);
        Ratio(clamped / self.extent)
    }

    /// Smallest ratio a drag can produce.
    #[must_use]
    pub fn min_ratio(&self) -> Ratio {
        self.ratio_for_local(self.min)
    }

    /// Largest ratio a drag can produce.
    #[must_use]
    pub fn max_ratio(&self) -> Ratio {
        self.ratio_for_local(self.max)
    }
}

/// Clamped ratio for `pointer` within `container`.
#[must_use]
pub fn compute_ratio(
    pointer: f64,
    container: &Rect,
    min_extent: f64,
    orientation: Orientation,
) -> Ratio {
    DragBounds::capture(container, min_extent, orientation).ratio_at(pointer)
}

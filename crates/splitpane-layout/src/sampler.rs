#![forbid(unsafe_code)]

//! Geometry sampling for a split-pane root.

use splitpane_core::geometry::Rect;
use splitpane_core::surface::{LayoutSurface, NodeId};
use tracing::debug;

use crate::config::SplitpaneConfig;
use crate::orientation::{Orientation, VERTICAL_MARKER};

/// Cursor value hosts report when no cursor was set.
pub const UNSET_CURSOR: &str = "auto";

/// The three direct children of a split-pane root, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub first: NodeId,
    pub divider: NodeId,
    pub second: NodeId,
}

impl Regions {
    /// Regions as `[first, divider, second]`.
    #[must_use]
    pub const fn as_array(&self) -> [NodeId; 3] {
        [self.first, self.divider, self.second]
    }
}

/// Everything fixed at construction, plus the initial container rect.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySample {
    pub orientation: Orientation,
    pub min_extent: f64,
    pub container: Rect,
    pub thickness: f64,
    pub cursor: String,
}

impl GeometrySample {
    /// Read the rendered geometry of `root` and its regions.
    pub fn capture<S: LayoutSurface + ?Sized>(
        surface: &S,
        root: NodeId,
        regions: &Regions,
        config: &SplitpaneConfig,
    ) -> Self {
        let orientation = Orientation::from_marker(surface.has_marker(root, VERTICAL_MARKER));
        let container = surface.bounding_rect(root);
        let measured = orientation.extent(&surface.bounding_rect(regions.divider));
        let thickness = resolve_thickness(measured, orientation.extent(&container), config.handle);
        if thickness != measured {
            debug!(%root, measured, fallback = thickness, "divider thickness defaulted");
        }

        let computed = surface.computed_cursor(regions.divider);
        let cursor = resolve_cursor(computed, config.cursor.for_orientation(orientation));
        if computed != Some(cursor) {
            debug!(%root, ?computed, fallback = cursor, "divider cursor defaulted");
        }

        Self {
            orientation,
            min_extent: config.min_extent(orientation),
            container,
            thickness,
            cursor: cursor.to_owned(),
        }
    }
}

/// Measured divider thickness, or `fallback` when the measurement says the
/// divider was never sized: under one pixel, or stretched across the whole
/// container.
#[must_use]
pub fn resolve_thickness(measured: f64, container_extent: f64, fallback: f64) -> f64 {
    if measured.is_nan() || measured < 1.0 || measured == container_extent {
        fallback
    } else {
        measured
    }
}

/// Computed cursor, or `fallback` when unset.
#[must_use]
pub fn resolve_cursor<'a>(computed: Option<&'a str>, fallback: &'a str) -> &'a str {
    match computed {
        Some(cursor) if cursor != UNSET_CURSOR && !cursor.is_empty() => cursor,
        _ => fallback,
    }
}

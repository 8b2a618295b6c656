#![forbid(unsafe_code)]

//! Split orientation and per-axis accessors.

use serde::{Deserialize, Serialize};
use splitpane_core::geometry::Rect;

/// Marker class that selects [`Orientation::Vertical`] on a root element.
pub const VERTICAL_MARKER: &str = "vertical";

/// Direction of the split.
///
/// `Vertical` stacks the panes top/bottom, so the split axis is the y axis.
/// `Horizontal` places them left/right, so the split axis is the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    #[default]
    Horizontal,
}

impl Orientation {
    /// Orientation selected by the presence of [`VERTICAL_MARKER`].
    #[must_use]
    pub const fn from_marker(has_vertical_marker: bool) -> Self {
        if has_vertical_marker {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Start edge of `rect` along the split axis.
    #[must_use]
    pub const fn origin(self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical => rect.y,
            Self::Horizontal => rect.x,
        }
    }

    /// Size of `rect` along the split axis.
    #[must_use]
    pub const fn extent(self, rect: &Rect) -> f64 {
        match self {
            Self::Vertical => rect.height,
            Self::Horizontal => rect.width,
        }
    }

    /// Pick the split-axis component of a point.
    #[must_use]
    pub const fn coordinate(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Vertical => y,
            Self::Horizontal => x,
        }
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

#![forbid(unsafe_code)]

//! Geometric primitives.

/// A bounding box in surface pixels.
///
/// Origin is the top-left corner of the surface. Values are fractional to
/// match rendered geometry, which is rarely whole-pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(2.0, 3.0));
        assert!(rect.contains(5.9, 7.9));
        assert!(!rect.contains(6.0, 3.0));
        assert!(!rect.contains(2.0, 8.0));
    }

    #[test]
    fn rect_edges_follow_size() {
        let rect = Rect::new(10.0, 20.0, 300.0, 150.5);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 310.0);
        assert_eq!(rect.bottom(), 170.5);
    }

    mod props {
        use super::Rect;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn contains_agrees_with_edges(
                x in -500.0f64..500.0,
                y in -500.0f64..500.0,
                width in 0.0f64..400.0,
                height in 0.0f64..400.0,
                px in -1000.0f64..1000.0,
                py in -1000.0f64..1000.0,
            ) {
                let rect = Rect::new(x, y, width, height);
                let inside = px >= rect.left() && px < rect.right()
                    && py >= rect.top() && py < rect.bottom();
                prop_assert_eq!(rect.contains(px, py), inside);
            }
        }
    }
}

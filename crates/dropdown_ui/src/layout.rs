//! Geometry primitives shared by the layout engine, the views and the platform.

use serde::{Deserialize, Serialize};

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// True when either dimension is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether this rectangle lies entirely inside `size` anchored at the origin.
    pub fn is_inside(&self, size: Size) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= size.width && self.bottom() <= size.height
    }
}

/// Measured geometry of the trigger button at open time.
///
/// A read-only snapshot in absolute (screen) coordinates. It is taken again on
/// every open and dropped on close.
pub type ButtonLayout = Rectangle;

/// Horizontal reading direction of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// The visible screen area the overlay must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub direction: LayoutDirection,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Builder: set the layout direction.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_edges() {
        let r = Rectangle::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert!(r.contains(Point::new(10.0, 60.0)));
        assert!(!r.contains(Point::new(41.0, 30.0)));
    }

    #[test]
    fn test_rectangle_inside_viewport() {
        let size = Size::new(100.0, 100.0);
        assert!(Rectangle::new(0.0, 0.0, 100.0, 100.0).is_inside(size));
        assert!(!Rectangle::new(-1.0, 0.0, 10.0, 10.0).is_inside(size));
        assert!(!Rectangle::new(50.0, 95.0, 10.0, 10.0).is_inside(size));
    }

    #[test]
    fn test_degenerate_size() {
        assert!(Size::zero().is_degenerate());
        assert!(Size::new(f32::NAN, 10.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }
}

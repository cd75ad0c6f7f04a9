// File: ./src/geometry.rs
// Toolkit-independent coordinates and row hit-testing
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitMode {
    /// Both coordinates must fall inside the box.
    Full,
    /// Only the y coordinate is checked; any x along the row counts.
    VerticalOnly,
}

/// A rendered box: left, top, width, height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Boxes without area show up before the first layout pass.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Edges are inclusive. A degenerate box contains nothing.
    pub fn contains(&self, point: Point, mode: HitMode) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let in_y = self.y <= point.y && point.y <= self.y + self.height;
        match mode {
            HitMode::VerticalOnly => in_y,
            HitMode::Full => in_y && self.x <= point.x && point.x <= self.x + self.width,
        }
    }
}

/// Fixed-height rows stacked from `top`, all `width` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub top: f32,
    pub row_height: f32,
    pub width: f32,
}

impl RowLayout {
    /// Index of the row closest to `y`, clamped into the list.
    /// `None` only when there are no rows.
    pub fn nearest(&self, y: f32, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if self.row_height <= 0.0 {
            return Some(0);
        }
        let offset = ((y - self.top) / self.row_height).floor();
        if offset <= 0.0 {
            Some(0)
        } else {
            Some((offset as usize).min(len - 1))
        }
    }

    pub fn bbox(&self, index: usize) -> Bounds {
        Bounds::new(
            0.0,
            self.top + index as f32 * self.row_height,
            self.width,
            self.row_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: Bounds = Bounds::new(10.0, 20.0, 100.0, 18.0);

    #[test]
    fn vertical_only_ignores_x() {
        for x in [-500.0, 0.0, 10.0, 55.0, 110.0, 9000.0] {
            assert!(ROW.contains(Point::new(x, 25.0), HitMode::VerticalOnly));
        }
        assert!(!ROW.contains(Point::new(500.0, 25.0), HitMode::Full));
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(ROW.contains(Point::new(10.0, 20.0), HitMode::Full));
        assert!(ROW.contains(Point::new(110.0, 38.0), HitMode::Full));
    }

    #[test]
    fn y_outside_is_never_contained() {
        for y in [19.9, 38.1, -1.0, 1000.0] {
            let p = Point::new(50.0, y);
            assert!(!ROW.contains(p, HitMode::Full));
            assert!(!ROW.contains(p, HitMode::VerticalOnly));
        }
    }

    #[test]
    fn degenerate_boxes_never_hit() {
        let flat = Bounds::new(0.0, 0.0, 100.0, 0.0);
        let thin = Bounds::new(0.0, 0.0, 0.0, 18.0);
        let origin = Point::ORIGIN;
        for b in [flat, thin] {
            assert!(b.is_degenerate());
            assert!(!b.contains(origin, HitMode::Full));
            assert!(!b.contains(origin, HitMode::VerticalOnly));
        }
    }

    #[test]
    fn nearest_clamps_into_list() {
        let layout = RowLayout {
            top: 24.0,
            row_height: 18.0,
            width: 180.0,
        };
        assert_eq!(layout.nearest(0.0, 0), None);
        assert_eq!(layout.nearest(0.0, 3), Some(0));
        assert_eq!(layout.nearest(24.0, 3), Some(0));
        assert_eq!(layout.nearest(42.5, 3), Some(1));
        assert_eq!(layout.nearest(500.0, 3), Some(2));
    }

    #[test]
    fn bbox_stacks_rows() {
        let layout = RowLayout {
            top: 24.0,
            row_height: 18.0,
            width: 180.0,
        };
        assert_eq!(layout.bbox(2), Bounds::new(0.0, 60.0, 180.0, 18.0));
        let below_last = Point::new(0.0, 500.0);
        assert!(!layout.bbox(2).contains(below_last, HitMode::VerticalOnly));
    }

    #[test]
    fn point_vector_arithmetic() {
        let a = Point::new(110.0, 120.0);
        let b = Point::new(100.0, 100.0);
        assert_eq!(a - b, Vector::new(10.0, 20.0));
        assert_eq!(b + (a - b), a);
        assert_eq!(a - Vector::new(10.0, 20.0), b);
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}

//! Lattice geometry for rasterization.
//!
//! Provides the integer value types the rasterizer consumes and produces.
//! Coordinates are `i32`; deltas are widened to `i64` so that any pair of
//! `i32` endpoints can be measured without overflow.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::gcd::gcd;

/// A lattice point with signed integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (chessboard) distance to another point.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u64 {
        let dx = (i64::from(other.x) - i64::from(self.x)).unsigned_abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).unsigned_abs();
        dx.max(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `"x,y"` (whitespace around either number is ignored).
impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// The axis driven one unit per rasterization step.
///
/// When both deltas are equal the X axis is dominant. This tie-break is
/// fixed: exact diagonals are walked along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DominantAxis {
    /// Horizontal axis (also chosen for ties).
    X,
    /// Vertical axis.
    Y,
}

/// A segment between two lattice points. May be degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl LineSegment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Signed delta `(end - start)`, widened to `i64`.
    #[must_use]
    pub fn delta(&self) -> (i64, i64) {
        (
            i64::from(self.end.x) - i64::from(self.start.x),
            i64::from(self.end.y) - i64::from(self.start.y),
        )
    }

    /// True if start and end coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// The dominant axis, X on ties.
    #[must_use]
    pub fn dominant_axis(&self) -> DominantAxis {
        let (dx, dy) = self.delta();
        if dy.unsigned_abs() > dx.unsigned_abs() {
            DominantAxis::Y
        } else {
            DominantAxis::X
        }
    }

    /// Number of points the rasterized path will contain: `max(|dx|, |dy|) + 1`.
    #[must_use]
    pub fn point_count(&self) -> u64 {
        self.start.chebyshev_distance(self.end) + 1
    }

    /// The same segment walked from end to start.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Smallest lattice step along this segment's direction.
    ///
    /// This is the delta divided by `gcd(|dx|, |dy|)`. A degenerate segment
    /// returns `(0, 0)`.
    #[must_use]
    pub fn primitive_step(&self) -> (i64, i64) {
        let (dx, dy) = self.delta();
        match gcd(dx, dy) {
            0 => (0, 0),
            // |dx| and |dy| are below 2^32, so g is too
            g => (dx / g as i64, dy / g as i64),
        }
    }

    /// Number of lattice points lying exactly on the segment, endpoints included.
    #[must_use]
    pub fn lattice_point_count(&self) -> u64 {
        let (dx, dy) = self.delta();
        gcd(dx, dy) + 1
    }
}

impl From<(Point, Point)> for LineSegment {
    fn from((start, end): (Point, Point)) -> Self {
        Self::new(start, end)
    }
}

/// An ordered, 8-connected run of lattice points from a segment's start to its end.
///
/// Built only by the rasterizer and never mutated afterwards. It always holds
/// at least one point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RasterizedPath {
    points: Vec<Point>,
}

impl RasterizedPath {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        debug_assert!(!points.is_empty(), "rasterized path must not be empty");
        Self { points }
    }

    /// First point (the segment start).
    #[must_use]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last point (the segment end).
    #[must_use]
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a path holds at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Take ownership of the points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Check that every consecutive pair is at Chebyshev distance exactly 1.
    #[must_use]
    pub fn is_eight_connected(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| pair[0].chebyshev_distance(pair[1]) == 1)
    }
}

impl<'a> IntoIterator for &'a RasterizedPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for RasterizedPath {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl AsRef<[Point]> for RasterizedPath {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

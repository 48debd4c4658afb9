//! Line rasterization primitives.
//!
//! Implements the half-delta form of Bresenham's algorithm: exactly one
//! unit step along the dominant axis per point, with at most one step on
//! the minor axis.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::geometry::{DominantAxis, LineSegment, Point, RasterizedPath};

/// Types that rasterize into a lattice path.
pub trait Rasterize {
    /// Produce the ordered lattice points approximating this shape.
    fn rasterize(&self) -> RasterizedPath;
}

// ============================================================================
// Line Iteration
// ============================================================================

/// Lazy iterator over the lattice points of a segment.
///
/// Yields exactly what [`rasterize_line`] returns, without allocating.
/// A full-range segment has `2^32` points, more than `usize` holds on
/// 32-bit targets, so the exact count is [`LineIter::remaining`] rather
/// than `ExactSizeIterator::len`.
#[derive(Debug, Clone)]
pub struct LineIter {
    x: i32,
    y: i32,
    sx: i32,
    sy: i32,
    axis: DominantAxis,
    major: i64,
    minor: i64,
    err: i64,
    remaining: u64,
}

impl LineIter {
    /// Start walking `segment` from its start point.
    #[must_use]
    pub fn new(segment: LineSegment) -> Self {
        let (dx, dy) = segment.delta();
        // sign of the delta, +1 when it is zero
        let sx = if dx < 0 { -1 } else { 1 };
        let sy = if dy < 0 { -1 } else { 1 };
        let (dx, dy) = (dx.abs(), dy.abs());
        let axis = segment.dominant_axis();
        let (major, minor) = match axis {
            DominantAxis::X => (dx, dy),
            DominantAxis::Y => (dy, dx),
        };

        Self {
            x: segment.start.x,
            y: segment.start.y,
            sx,
            sy,
            axis,
            major,
            minor,
            err: major / 2,
            remaining: segment.point_count(),
        }
    }

    /// The axis this iterator steps along.
    #[must_use]
    pub fn dominant_axis(&self) -> DominantAxis {
        self.axis
    }

    /// Points still to be yielded, the final point included.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Advance one unit along the dominant axis.
    ///
    /// Never called after the final point, so the coordinates stay between
    /// the endpoints and cannot overflow.
    #[inline]
    fn step(&mut self) {
        self.err -= self.minor;
        let minor_step = self.err < 0;
        if minor_step {
            self.err += self.major;
        }

        match self.axis {
            DominantAxis::X => {
                if minor_step {
                    self.y += self.sy;
                }
                self.x += self.sx;
            }
            DominantAxis::Y => {
                if minor_step {
                    self.x += self.sx;
                }
                self.y += self.sy;
            }
        }
    }
}

impl Iterator for LineIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }

        let current = Point::new(self.x, self.y);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for LineIter {}

impl LineSegment {
    /// Iterate over this segment's lattice points without allocating.
    #[must_use]
    pub fn iter(&self) -> LineIter {
        LineIter::new(*self)
    }
}

impl IntoIterator for LineSegment {
    type Item = Point;
    type IntoIter = LineIter;

    fn into_iter(self) -> LineIter {
        LineIter::new(self)
    }
}

// ============================================================================
// Line Rasterization
// ============================================================================

/// Rasterize a line using Bresenham's algorithm (half-delta form).
///
/// The path starts at `(x0, y0)`, ends at `(x1, y1)` and has
/// `max(|dx|, |dy|) + 1` points, each one unit (Chebyshev) from the last.
/// On equal deltas the X axis is dominant.
///
/// # Arguments
///
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
///
/// # Examples
///
/// ```
/// use lattice_raster::geometry::Point;
/// use lattice_raster::render::rasterize_line;
///
/// let path = rasterize_line(0, 0, 4, 2);
/// let expected: Vec<Point> =
///     [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)].into_iter().map(Point::from).collect();
/// assert_eq!(path.points(), expected.as_slice());
/// ```
#[must_use]
pub fn rasterize_line(x0: i32, y0: i32, x1: i32, y1: i32) -> RasterizedPath {
    LineSegment::from_coords(x0, y0, x1, y1).rasterize()
}

/// Checked rasterization that refuses paths longer than `max_points`.
///
/// The length is known up front, so nothing is allocated for a refused path.
pub fn try_rasterize_line(segment: LineSegment, max_points: usize) -> Result<RasterizedPath> {
    let points = segment.point_count();
    if usize::try_from(points).map_or(true, |n| n > max_points) {
        tracing::debug!(
            start = %segment.start,
            end = %segment.end,
            points,
            limit = max_points,
            "refusing to rasterize segment"
        );
        return Err(Error::PathTooLong { points, limit: max_points });
    }
    Ok(segment.rasterize())
}

impl Rasterize for LineSegment {
    fn rasterize(&self) -> RasterizedPath {
        let iter = self.iter();
        tracing::trace!(
            start = %self.start,
            end = %self.end,
            axis = ?iter.dominant_axis(),
            points = iter.remaining(),
            "rasterizing segment"
        );

        let points: Vec<Point> = iter.collect();
        debug_assert_eq!(points.last(), Some(&self.end), "walk must land on the end point");
        RasterizedPath::from_points(points)
    }
}

// ============================================================================
// Polyline Rasterization
// ============================================================================

/// Number of points [`rasterize_polyline`] produces for `vertices`.
#[must_use]
pub fn polyline_point_count(vertices: &[Point]) -> u64 {
    if vertices.is_empty() {
        return 0;
    }
    vertices
        .windows(2)
        .map(|pair| LineSegment::new(pair[0], pair[1]).point_count() - 1)
        .sum::<u64>()
        + 1
}

/// Rasterize a chain of vertices, emitting each shared vertex once.
///
/// An empty slice gives an empty path; a single vertex gives that vertex.
#[must_use]
pub fn rasterize_polyline(vertices: &[Point]) -> Vec<Point> {
    let Some(&first) = vertices.first() else {
        return Vec::new();
    };

    let capacity = polyline_point_count(vertices);
    let mut points = Vec::with_capacity(usize::try_from(capacity).unwrap_or(0));
    points.push(first);

    for pair in vertices.windows(2) {
        // skip the start point, it ended the previous segment
        points.extend(LineSegment::new(pair[0], pair[1]).iter().skip(1));
    }

    points
}

/// Checked polyline rasterization that refuses more than `max_points` points.
pub fn try_rasterize_polyline(vertices: &[Point], max_points: usize) -> Result<Vec<Point>> {
    let points = polyline_point_count(vertices);
    if usize::try_from(points).map_or(true, |n| n > max_points) {
        tracing::debug!(
            vertices = vertices.len(),
            points,
            limit = max_points,
            "refusing to rasterize polyline"
        );
        return Err(Error::PathTooLong { points, limit: max_points });
    }
    Ok(rasterize_polyline(vertices))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_rasterize_shallow() {
        let path = rasterize_line(0, 0, 4, 2);
        assert_eq!(path.points(), pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn test_rasterize_vertical() {
        let path = rasterize_line(0, 0, 0, 3);
        assert_eq!(path.points(), pts(&[(0, 0), (0, 1), (0, 2), (0, 3)]));
    }

    #[test]
    fn test_rasterize_horizontal_negative() {
        let path = rasterize_line(3, 7, -1, 7);
        assert_eq!(path.points(), pts(&[(3, 7), (2, 7), (1, 7), (0, 7), (-1, 7)]));
    }

    #[test]
    fn test_rasterize_degenerate() {
        let path = rasterize_line(2, 2, 2, 2);
        assert_eq!(path.points(), pts(&[(2, 2)]));
        assert_eq!(path.start(), path.end());
        assert!(path.is_eight_connected());
    }

    #[test]
    fn test_rasterize_diagonal_reversed() {
        let forward = rasterize_line(0, 0, 5, 5);
        let mut backward = rasterize_line(5, 5, 0, 0).into_points();
        backward.reverse();
        assert_eq!(forward.points(), backward.as_slice());
        assert_eq!(forward.points(), pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]));
    }

    #[test]
    fn test_rasterize_steep() {
        let path = rasterize_line(0, 0, 2, 4);
        assert_eq!(path.points(), pts(&[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4)]));
    }

    #[test]
    fn test_rasterize_all_octants() {
        for (x1, y1) in [(7, 3), (3, 7), (-3, 7), (-7, 3), (-7, -3), (-3, -7), (3, -7), (7, -3)] {
            let path = rasterize_line(0, 0, x1, y1);
            assert_eq!(path.len(), 8, "octant ({x1},{y1})");
            assert_eq!(path.start(), Point::ORIGIN);
            assert_eq!(path.end(), Point::new(x1, y1));
            assert!(path.is_eight_connected(), "octant ({x1},{y1})");
        }
    }

    #[test]
    fn test_rasterize_extreme_coordinates() {
        let path = rasterize_line(i32::MAX - 2, i32::MIN, i32::MAX, i32::MIN + 1);
        assert_eq!(
            path.points(),
            pts(&[(i32::MAX - 2, i32::MIN), (i32::MAX - 1, i32::MIN), (i32::MAX, i32::MIN + 1)])
        );
    }

    #[test]
    fn test_line_iter_remaining() {
        let mut iter = LineSegment::from_coords(0, 0, 10, -4).iter();
        assert_eq!(iter.remaining(), 11);
        assert_eq!(iter.size_hint(), (11, Some(11)));
        iter.next();
        assert_eq!(iter.remaining(), 10);
        assert_eq!(iter.by_ref().count(), 10);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_line_iter_spans_full_i32_range() {
        let seg = LineSegment::from_coords(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(seg.iter().remaining(), u64::from(u32::MAX) + 1);
        assert_eq!(seg.iter().nth(1), Some(Point::new(i32::MIN + 1, 0)));
    }

    #[test]
    fn test_segment_into_iter_matches_rasterize() {
        let seg = LineSegment::from_coords(-3, 9, 12, 1);
        let collected: Vec<Point> = seg.into_iter().collect();
        assert_eq!(collected, seg.rasterize().into_points());
    }

    #[test]
    fn test_try_rasterize_limit() {
        let seg = LineSegment::from_coords(0, 0, 9, 3);
        assert_eq!(try_rasterize_line(seg, 10).unwrap().len(), 10);

        let err = try_rasterize_line(seg, 9).unwrap_err();
        assert!(matches!(err, Error::PathTooLong { points: 10, limit: 9 }));
    }

    #[test]
    fn test_polyline_shares_vertices() {
        let vertices = pts(&[(0, 0), (2, 0), (2, 2)]);
        assert_eq!(rasterize_polyline(&vertices), pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn test_try_rasterize_polyline_limit() {
        let vertices = pts(&[(0, 0), (4, 2)]);
        assert_eq!(try_rasterize_polyline(&vertices, 5).unwrap().len(), 5);

        let err = try_rasterize_polyline(&vertices, 3).unwrap_err();
        assert!(matches!(err, Error::PathTooLong { points: 5, limit: 3 }));
        assert_eq!(err.to_string(), "path of 5 points exceeds the limit of 3");
    }

    #[test]
    fn test_polyline_point_count() {
        assert_eq!(polyline_point_count(&[]), 0);
        assert_eq!(polyline_point_count(&pts(&[(1, 1)])), 1);
        assert_eq!(polyline_point_count(&pts(&[(0, 0), (2, 0), (2, 2)])), 5);
        assert!(try_rasterize_polyline(&[], 1).unwrap().is_empty());
    }

    #[test]
    fn test_zero_delta_axis_never_moves() {
        for (x1, y1) in [(-6, 0), (6, 0), (0, -6), (0, 6)] {
            let path = rasterize_line(0, 0, x1, y1);
            assert!(path.iter().all(|p| p.x * y1 == 0 && p.y * x1 == 0), "({x1},{y1})");
        }
    }

    #[test]
    fn test_polyline_edge_cases() {
        assert!(rasterize_polyline(&[]).is_empty());
        assert_eq!(rasterize_polyline(&pts(&[(4, 4)])), pts(&[(4, 4)]));
        assert_eq!(rasterize_polyline(&pts(&[(4, 4), (4, 4)])), pts(&[(4, 4)]));
    }
}

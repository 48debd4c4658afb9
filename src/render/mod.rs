//! Integer line rasterization.
//!
//! Converts lattice segments into ordered, 8-connected point paths using
//! only integer arithmetic.
//!
//! # Algorithms
//!
//! - **Bresenham's Line** (half-delta form): one unit step along the dominant
//!   axis per point, ties resolved to X
//! - **Polyline**: consecutive segments joined at shared vertices
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;

pub use primitives::{
    polyline_point_count, rasterize_line, rasterize_polyline, try_rasterize_line,
    try_rasterize_polyline, LineIter, Rasterize,
};

//! # lattice-raster
//!
//! Exact integer line rasterization for lattice grids.
//!
//! Given two lattice points, lattice-raster produces the ordered sequence of
//! lattice points that best approximates the segment between them, using
//! only integer arithmetic. A small greatest-common-divisor module supports
//! slope and ratio reduction.
//!
//! ## Features
//!
//! - **Pure integer arithmetic**: no floating point, no rounding drift
//! - **Exact paths**: `max(|dx|, |dy|) + 1` points, 8-connected, endpoints exact
//! - **Lazy or eager**: [`render::LineIter`] or [`render::rasterize_line`]
//! - **Coordinates only**: no framebuffer, no clipping
//!
//! ## Quick Start
//!
//! ```rust
//! use lattice_raster::prelude::*;
//!
//! let path = rasterize_line(0, 0, 0, 3);
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.end(), Point::new(0, 3));
//!
//! assert_eq!(gcd(48, 18), 6);
//! ```
//!
//! ## Coordinate Range
//!
//! Coordinates are `i32` and every delta is computed in `i64`, so any pair
//! of `i32` endpoints is valid input. The longest path has `2^32` points.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/deserialize geometry types
//! - `config`: YAML configuration ([`config::RasterConfig`])
//! - `cli`: The `lattice-line` command-line tool
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal 4(1).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Lattice points, segments and rasterized paths.
pub mod geometry;

/// Greatest common divisor and ratio reduction.
pub mod gcd;

/// Line rasterization.
pub mod render;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML configuration for the command-line tool.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for lattice-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use lattice_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::gcd::{gcd, reduce_ratio};
    pub use crate::geometry::{DominantAxis, LineSegment, Point, RasterizedPath};
    pub use crate::render::{
        rasterize_line, rasterize_polyline, try_rasterize_line, try_rasterize_polyline,
        LineIter, Rasterize,
    };
}

// ============================================================================
// Tests
// ============================================================================

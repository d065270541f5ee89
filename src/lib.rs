//! # aaline
//!
//! Anti-aliased line rasterization for discrete pixel grids.
//!
//! Two classic scan-conversion algorithms are implemented behind a single
//! contract: rasterize a segment between two real-valued endpoints into an
//! ordered sequence of [`PixelSample`](raster::PixelSample)s, each carrying
//! a coverage value in `[0, 1]` suitable for alpha-blended compositing.
//!
//! - [`GuptaSproull`](raster::GuptaSproull) walks the major axis with a
//!   Bresenham decision variable, tracks the perpendicular distance to the
//!   ideal line analytically, and filters it through a cubic kernel to
//!   weight the pixels neighboring the primary path.
//! - [`XiaolinWu`](raster::XiaolinWu) walks the major axis with a running
//!   fractional y-intercept and splits each column's coverage between the
//!   two vertically adjacent pixels it straddles.
//!
//! The crate produces coverage only. Mapping coverage to a color channel
//! and compositing it into a framebuffer is the renderer's responsibility.
//!
//! ## Quick Start
//!
//! ```rust
//! use aaline::prelude::*;
//!
//! let line = Line::from_coords(20.0, 10.0, 30.0, 18.0);
//! for sample in GuptaSproull.rasterize(line)? {
//!     println!("({}, {}) -> {:.3}", sample.x, sample.y, sample.intensity());
//! }
//! # Ok::<(), aaline::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Gupta, S., & Sproull, R. F. (1981). "Filtering Edges for Gray-Scale
//!   Displays." SIGGRAPH '81.
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, line segments).
pub mod geometry;

/// Line rasterization algorithms and their output types.
pub mod raster;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for aaline operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use aaline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Line, Point};
    pub use crate::raster::{
        filter_kernel, rasterize_gupta_sproull, rasterize_xiaolin_wu, Coverage, GuptaSproull,
        PixelSample, Rasterize, XiaolinWu,
    };
}

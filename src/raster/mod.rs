//! Line rasterization algorithms and their output types.
//!
//! Both rasterizers implement the same contract: turn a [`Line`] into a
//! freshly allocated, ordered sequence of [`PixelSample`]s whose
//! intensities lie in `[0, 1]`. Each call is a pure function of the four
//! endpoint coordinates; no state is shared between calls, so concurrent
//! use from multiple threads needs no synchronization.

use crate::error::{Error, Result};
use crate::geometry::{Line, Point};

pub mod gupta_sproull;
pub mod xiaolin_wu;

pub use gupta_sproull::{filter_kernel, rasterize_gupta_sproull, GuptaSproull};
pub use xiaolin_wu::{rasterize_xiaolin_wu, XiaolinWu};

// ============================================================================
// Output Types
// ============================================================================

/// Coverage carried by a single emitted sample.
///
/// Gupta-Sproull emits one `Primary` sample per major-axis step followed
/// by its `Antialiased` neighbors; consumers that want the bare stepped
/// path can select on the variant instead of comparing intensities
/// against `1.0`. Xiaolin Wu output contains no `Primary` samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coverage {
    /// A pixel on the primary stepped path, intensity exactly `1.0`.
    Primary,
    /// An anti-aliased sample with the given weight in `[0, 1]`.
    Antialiased(f64),
}

impl Coverage {
    /// Scalar intensity of this sample in `[0, 1]`.
    #[must_use]
    pub fn intensity(self) -> f64 {
        match self {
            Self::Primary => 1.0,
            Self::Antialiased(weight) => weight,
        }
    }

    /// Whether this sample lies on the primary stepped path.
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// A single rasterized pixel with its coverage.
///
/// Coordinates are in the caller's axes; the steep-axis swap applied
/// during rasterization is always undone before a sample is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    /// Grid x coordinate.
    pub x: i32,
    /// Grid y coordinate.
    pub y: i32,
    /// Coverage of this pixel.
    pub coverage: Coverage,
}

impl PixelSample {
    /// Scalar intensity of this sample in `[0, 1]`.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.coverage.intensity()
    }
}

/// Trait for line rasterization algorithms.
pub trait Rasterize {
    /// Rasterize `line` into an ordered sequence of coverage samples.
    ///
    /// The returned vector is owned by the caller and ordered by
    /// generation: Gupta-Sproull emits each primary pixel before its
    /// anti-aliased neighbors, Wu emits the two endpoint columns first
    /// and then the interior columns left to right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] if any endpoint coordinate
    /// is NaN or infinite. No samples are produced on failure.
    fn rasterize(&self, line: Line) -> Result<Vec<PixelSample>>;
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Reject NaN and infinite endpoint coordinates up front.
pub(crate) fn validate_endpoints(line: Line) -> Result<()> {
    let coords = [
        ("x0", line.start.x),
        ("y0", line.start.y),
        ("x1", line.end.x),
        ("y1", line.end.y),
    ];
    for (coordinate, value) in coords {
        if !value.is_finite() {
            return Err(Error::NonFiniteCoordinate { coordinate, value });
        }
    }
    Ok(())
}

/// Normalize a segment for major-axis stepping.
///
/// Swaps the coordinate roles of a steep segment (|dy| > |dx|) so the
/// major axis is always "x" internally, then orders the endpoints left
/// to right. Returns the normalized endpoints and the steep flag that
/// [`SampleBuffer`] uses to undo the swap on output.
pub(crate) fn normalize(line: Line) -> (Point, Point, bool) {
    let (p0, p1) = (line.start, line.end);
    let steep = (p1.y - p0.y).abs() > (p1.x - p0.x).abs();
    let (p0, p1) = if steep {
        (Point::new(p0.y, p0.x), Point::new(p1.y, p1.x))
    } else {
        (p0, p1)
    };
    if p0.x > p1.x {
        (p1, p0, steep)
    } else {
        (p0, p1, steep)
    }
}

/// Collects samples in generation order, undoing the steep-axis swap on
/// every push so emitted coordinates are always in the caller's axes.
pub(crate) struct SampleBuffer {
    steep: bool,
    samples: Vec<PixelSample>,
}

impl SampleBuffer {
    pub(crate) fn new(steep: bool) -> Self {
        Self {
            steep,
            samples: Vec::new(),
        }
    }

    /// Push a sample at (major, minor) in normalized axes.
    pub(crate) fn push(&mut self, major: i32, minor: i32, coverage: Coverage) {
        let (x, y) = if self.steep {
            (minor, major)
        } else {
            (major, minor)
        };
        self.samples.push(PixelSample { x, y, coverage });
    }

    pub(crate) fn into_samples(self) -> Vec<PixelSample> {
        self.samples
    }
}

// ============================================================================
// Tests
// ============================================================================

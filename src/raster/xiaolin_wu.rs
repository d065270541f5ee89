//! Xiaolin Wu's anti-aliased line rasterization.
//!
//! Walks the major axis with a running fractional y-intercept and splits
//! each column's unit of coverage between the two vertically adjacent
//! pixels straddling the intercept. The two endpoint columns receive
//! partial horizontal coverage ("gap") weighting instead of a full unit.
//!
//! Reference: Wu, X. (1991). "An Efficient Antialiasing Technique."
//! SIGGRAPH '91.

use crate::error::Result;
use crate::geometry::Line;

use super::{normalize, validate_endpoints, Coverage, PixelSample, Rasterize, SampleBuffer};

/// Xiaolin Wu line rasterizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct XiaolinWu;

impl Rasterize for XiaolinWu {
    fn rasterize(&self, line: Line) -> Result<Vec<PixelSample>> {
        rasterize_xiaolin_wu(line.start.x, line.start.y, line.end.x, line.end.y)
    }
}

/// Rasterize a segment with Xiaolin Wu's algorithm.
///
/// Every column emits exactly two [`Coverage::Antialiased`] samples. The
/// pair's weights sum to `1.0` for interior columns and to the endpoint's
/// gap weight for the two endpoint columns. Emission order is: first
/// endpoint pair, second endpoint pair, then interior columns left to
/// right. The output never contains [`Coverage::Primary`] samples.
///
/// A degenerate run (`dx == 0` after normalization) assigns gradient 0,
/// so the intercept never advances; this is defined behavior, not a
/// fault.
///
/// # Errors
///
/// Returns [`Error::NonFiniteCoordinate`](crate::Error::NonFiniteCoordinate)
/// if any coordinate is NaN or infinite.
pub fn rasterize_xiaolin_wu(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Vec<PixelSample>> {
    let line = Line::from_coords(x0, y0, x1, y1);
    validate_endpoints(line)?;

    let (p0, p1, steep) = normalize(line);
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let gradient = if dx == 0.0 { 0.0 } else { dy / dx };

    let mut buf = SampleBuffer::new(steep);

    // First endpoint column.
    let xend = p0.x.round();
    let yend = p0.y + gradient * (xend - p0.x);
    let xgap = rfpart(p0.x + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;
    buf.push(xpxl1, ypxl1, Coverage::Antialiased(rfpart(yend) * xgap));
    buf.push(xpxl1, ypxl1 + 1, Coverage::Antialiased(fpart(yend) * xgap));

    let mut intery = yend + gradient;

    // Second endpoint column. Takes the complementary gap weight, and the
    // intercept correction runs in the opposite direction.
    let xend = p1.x.round();
    let yend = p1.y - gradient * (xend - p1.x);
    let xgap = fpart(p1.x + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;
    buf.push(xpxl2, ypxl2, Coverage::Antialiased(rfpart(yend) * xgap));
    buf.push(xpxl2, ypxl2 + 1, Coverage::Antialiased(fpart(yend) * xgap));

    // Interior columns split a full unit of coverage between the two
    // pixels straddling the intercept.
    for x in (xpxl1 + 1)..xpxl2 {
        let yfloor = intery.floor() as i32;
        buf.push(x, yfloor, Coverage::Antialiased(rfpart(intery)));
        buf.push(x, yfloor + 1, Coverage::Antialiased(fpart(intery)));
        intery += gradient;
    }

    Ok(buf.into_samples())
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}

// ============================================================================
// Tests
// ============================================================================

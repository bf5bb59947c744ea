//! Contains the Axis and SampleGrid structs, which describe the
//! relationship between a rectangle on the integral plane with an
//! origin at 0,0 (rows and columns of samples), and a rectangle on the
//! complex plane spanned by two evenly spaced coordinate sequences.
use itertools::iproduct;
use num::Complex;

use crate::config::Config;

/// An ordered run of evenly spaced real numbers from `lo` to `hi`,
/// both ends included.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis(Vec<f64>);

impl Axis {
    /// Builds `count` evenly spaced values from `lo` to `hi` inclusive.
    /// The first value is exactly `lo` and the last exactly `hi`; a
    /// single sample sits at `lo`.
    pub fn linspace(lo: f64, hi: f64, count: usize) -> Axis {
        if count < 2 {
            return Axis(vec![lo; count]);
        }
        let step = (hi - lo) / ((count - 1) as f64);
        let mut values: Vec<f64> = (0..count).map(|k| lo + (k as f64) * step).collect();
        // Rounding in the step must not move the far end.
        values[count - 1] = hi;
        Axis(values)
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the axis holds no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The samples, in order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// First and last sample.  An empty axis has no bounds.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match (self.0.first(), self.0.last()) {
            (Some(lo), Some(hi)) => Some((*lo, *hi)),
            _ => None,
        }
    }
}

/// The complex plane, sampled.  Holds the two axes and the complex
/// value at every (row, column) pair, stored row by row.  Once built,
/// it is never modified.
#[derive(Clone, Debug)]
pub struct SampleGrid {
    /// Sample positions along the real axis; one per column.
    pub real: Axis,
    /// Sample positions along the imaginary axis; one per row.
    pub imag: Axis,
    points: Vec<Complex<f64>>,
}

impl SampleGrid {
    /// Combines the two axes: `grid[row][col] = real[col] + i * imag[row]`.
    pub fn new(real: Axis, imag: Axis) -> SampleGrid {
        let points = iproduct!(imag.values().iter(), real.values().iter())
            .map(|(&im, &re)| Complex::new(re, im))
            .collect();
        SampleGrid { real, imag, points }
    }

    /// Builds both axes from the configured corners and sample counts.
    pub fn from_config(config: &Config) -> SampleGrid {
        let (re_lo, re_hi) = config.re_range();
        let (im_lo, im_hi) = config.im_range();
        SampleGrid::new(
            Axis::linspace(re_lo, re_hi, config.width),
            Axis::linspace(im_lo, im_hi, config.height),
        )
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.real.len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.imag.len()
    }

    /// The total number of points in the grid.  Used to calculate
    /// memory needs.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Describes that the grid has no samples at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// One row of samples, all sharing the same imaginary part.
    pub fn row(&self, row: usize) -> &[Complex<f64>] {
        let width = self.width();
        &self.points[row * width..(row + 1) * width]
    }

    /// Every sample, row by row.
    pub fn points(&self) -> &[Complex<f64>] {
        &self.points
    }
}

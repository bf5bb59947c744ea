// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time evaluation
//!
//! The Mandelbrot takes a point on the complex plane and repeatedly
//! squares it and adds the point back in, measuring how quickly the
//! result goes to infinity.  Once the magnitude passes 2 it never
//! comes back, so the number of steps it takes to get there (the
//! "escape time") is the number we keep.  Points in the black heart
//! of the set never escape and get the iteration limit instead.
//!
//! Every point is independent of every other, so the sweep over the
//! grid can be cut up any way we like; the threaded version hands out
//! whole rows and gets the same answer as the single-threaded one.

use num::Complex;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex};

use crate::error::Error;
use crate::planes::SampleGrid;

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, usize>>>>;

/// The escape time of a single point, bounded by `limit`.
///
/// Starting from `z = c`, each step first tests the current `z` and
/// only then replaces it with `z * z + c`.  The test therefore sees `c`
/// itself on step 0, and a point already outside the radius-2 disk
/// reports 0.  Returns `limit` if the point never escapes.
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut z = c;
    for n in 0..limit {
        if z.norm() > 2.0 {
            return n;
        }
        z = z * z + c;
    }
    limit
}

/// A 2D field of escape times, the same shape as the grid it came from,
/// stored row by row.  Every entry lies in `[0, limit]`.
#[derive(Clone, Debug, PartialEq)]
pub struct EscapeField {
    width: usize,
    height: usize,
    limit: usize,
    values: Vec<usize>,
}

impl EscapeField {
    /// Wraps a row-major buffer of `width * height` escape times.
    pub fn new(
        width: usize,
        height: usize,
        limit: usize,
        values: Vec<usize>,
    ) -> Result<EscapeField, Error> {
        if values.len() != width * height {
            return Err(Error::Shape(format!(
                "{} values for a {}x{} field",
                values.len(),
                width,
                height
            )));
        }
        if let Some(n) = values.iter().find(|n| **n > limit) {
            return Err(Error::Shape(format!(
                "escape time {} is past the limit {}",
                n, limit
            )));
        }
        Ok(EscapeField::from_sweep(width, height, limit, values))
    }

    // The sweeps size their buffers from the grid and bound every entry.
    fn from_sweep(width: usize, height: usize, limit: usize, values: Vec<usize>) -> EscapeField {
        EscapeField {
            width,
            height,
            limit,
            values,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, matching the grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// The iteration bound the field was computed with.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The escape time at a row and column.
    pub fn get(&self, row: usize, column: usize) -> usize {
        self.values[row * self.width + column]
    }

    /// One row of escape times.
    pub fn row(&self, row: usize) -> &[usize] {
        &self.values[row * self.width..(row + 1) * self.width]
    }

    /// Every escape time, row by row.
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Smallest and largest escape time in the field.
    pub fn range(&self) -> Option<(usize, usize)> {
        let min = self.values.iter().min()?;
        let max = self.values.iter().max()?;
        Some((*min, *max))
    }
}

/// Takes a sampled plane and a limit (the number of iterations to
/// conduct per-point), and produces the escape field over it.
pub struct EscapeRenderer {
    grid: SampleGrid,
    limit: usize,
}

impl EscapeRenderer {
    /// Requires the grid to evaluate and the iteration bound.
    pub fn new(grid: SampleGrid, limit: usize) -> Self {
        EscapeRenderer { grid, limit }
    }

    /// The grid being evaluated.
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    fn evaluate_row(&self, row: usize, out: &mut [usize]) {
        for (slot, point) in out.iter_mut().zip(self.grid.row(row)) {
            *slot = escape_time(*point, self.limit);
        }
    }

    /// The main function for single-threaded sweeps.
    pub fn field_single(&self) -> EscapeField {
        let values = self
            .grid
            .points()
            .iter()
            .map(|point| escape_time(*point, self.limit))
            .collect();
        EscapeField::from_sweep(self.grid.width(), self.grid.height(), self.limit, values)
    }

    /// A multi-threaded version of the sweep that takes a thread count.
    /// Workers pull whole rows off a shared queue and write straight into
    /// their own slice of the output, so nothing is merged afterwards.
    pub fn field(&self, threads: usize) -> EscapeField {
        let (width, height) = (self.grid.width(), self.grid.height());
        let mut buffer = vec![0 as usize; self.grid.len()];
        if width > 0 {
            let rows: RowQueue = Arc::new(Mutex::new(buffer.chunks_mut(width).enumerate()));
            let scoped = crossbeam::scope(|spawner| {
                for _ in 0..threads.max(1) {
                    let rows = rows.clone();
                    spawner.spawn(move |_| loop {
                        let next = { rows.lock().unwrap().next() };
                        match next {
                            Some((row, out)) => self.evaluate_row(row, out),
                            None => break,
                        }
                    });
                }
            });
            if let Err(panic) = scoped {
                std::panic::resume_unwind(panic);
            }
        }
        EscapeField::from_sweep(width, height, self.limit, buffer)
    }
}

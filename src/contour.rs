// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Iso-lines of the escape field.
//!
//! The field never changes once it has been computed, and neither do
//! its level curves, so they are traced exactly once with marching
//! squares and the animation only ever re-projects them.  Each segment
//! is kept in data space: real part, imaginary part, and the level
//! itself as the height.

use crate::error::Error;
use crate::escape::EscapeField;
use crate::planes::Axis;

/// A point in data space: `[re, im, height]`.
pub type Point3 = [f64; 3];

/// A straight piece of a level curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment(pub Point3, pub Point3);

/// All the segments traced at one iso-value.
#[derive(Clone, Debug)]
pub struct Level {
    /// The iso-value, and the height every segment sits at.
    pub value: f64,
    /// The traced segments; possibly none.
    pub segments: Vec<Segment>,
}

/// The level curves of an escape field.
#[derive(Clone, Debug)]
pub struct ContourSet {
    levels: Vec<Level>,
    range: (f64, f64),
}

/// `count` evenly spaced iso-values strictly between `min` and `max`.
/// A level at either extreme would trace nothing at the bottom and the
/// rim of the plateau at the top, so both ends are left out.  A flat
/// field has no levels.
pub fn level_values(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !(min < max) {
        return vec![];
    }
    let values = Axis::linspace(min, max, count + 2);
    values.values()[1..=count].to_vec()
}

// A sample corner: x, y, value.
type Corner = (f64, f64, f64);

fn crossing(level: f64, a: Corner, b: Corner) -> Option<Point3> {
    if (a.2 >= level) == (b.2 >= level) {
        return None;
    }
    let t = (level - a.2) / (b.2 - a.2);
    Some([a.0 + t * (b.0 - a.0), a.1 + t * (b.1 - a.1), level])
}

fn push_segment(out: &mut Vec<Segment>, a: Point3, b: Point3) {
    if a != b {
        out.push(Segment(a, b));
    }
}

/// Traces one cell.  Corners go around the cell: (row, col),
/// (row, col + 1), (row + 1, col + 1), (row + 1, col).  Edge `k` runs
/// from corner `k` to corner `k + 1`.
fn march_cell(level: f64, corners: [Corner; 4], out: &mut Vec<Segment>) {
    let mut hits: [Option<Point3>; 4] = [None; 4];
    let mut count = 0;
    for k in 0..4 {
        hits[k] = crossing(level, corners[k], corners[(k + 1) % 4]);
        if hits[k].is_some() {
            count += 1;
        }
    }
    match count {
        2 => {
            let mut found = hits.iter().filter_map(|h| *h);
            if let (Some(a), Some(b)) = (found.next(), found.next()) {
                push_segment(out, a, b);
            }
        }
        4 => {
            // Saddle.  The center decides which diagonal pair is joined.
            let center = corners.iter().map(|c| c.2).sum::<f64>() / 4.0;
            let (e0, e1, e2, e3) = match hits {
                [Some(e0), Some(e1), Some(e2), Some(e3)] => (e0, e1, e2, e3),
                _ => return,
            };
            if (center >= level) == (corners[0].2 >= level) {
                push_segment(out, e0, e1);
                push_segment(out, e2, e3);
            } else {
                push_segment(out, e3, e0);
                push_segment(out, e1, e2);
            }
        }
        _ => {}
    }
}

impl ContourSet {
    /// Traces `count` evenly spaced levels across the field's value range.
    /// `real` supplies the column positions and `imag` the row positions.
    /// Fails if the axes don't match the field's shape.
    pub fn extract(
        field: &EscapeField,
        real: &Axis,
        imag: &Axis,
        count: usize,
    ) -> Result<ContourSet, Error> {
        if real.len() != field.width() || imag.len() != field.height() {
            return Err(Error::Shape(format!(
                "axes of {}x{} samples for a {}x{} field",
                real.len(),
                imag.len(),
                field.width(),
                field.height()
            )));
        }
        let range = match field.range() {
            Some((min, max)) => (min as f64, max as f64),
            None => {
                return Ok(ContourSet {
                    levels: vec![],
                    range: (0.0, 0.0),
                })
            }
        };
        let (xs, ys) = (real.values(), imag.values());
        let corner = |row: usize, col: usize| (xs[col], ys[row], field.get(row, col) as f64);

        let levels = level_values(range.0, range.1, count)
            .into_iter()
            .map(|value| {
                let mut segments = vec![];
                for row in 0..field.height().saturating_sub(1) {
                    for col in 0..field.width().saturating_sub(1) {
                        let corners = [
                            corner(row, col),
                            corner(row, col + 1),
                            corner(row + 1, col + 1),
                            corner(row + 1, col),
                        ];
                        march_cell(value, corners, &mut segments);
                    }
                }
                Level { value, segments }
            })
            .collect();

        Ok(ContourSet { levels, range })
    }

    /// The traced levels, lowest first.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Smallest and largest value of the field the levels were drawn from.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Where a level value sits within the field's range, in `[0, 1]`.
    /// Used to pick the level's color.
    pub fn normalize(&self, value: f64) -> f64 {
        let (min, max) = self.range;
        if max > min {
            (value - min) / (max - min)
        } else {
            0.0
        }
    }

    /// Total number of segments across all levels.
    pub fn segment_count(&self) -> usize {
        self.levels.iter().map(|l| l.segments.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::escape::EscapeRenderer;
    use crate::planes::SampleGrid;

    fn unit_axes() -> (Axis, Axis) {
        (Axis::linspace(-1.0, 1.0, 3), Axis::linspace(-1.0, 1.0, 3))
    }

    #[test]
    fn level_values_stay_inside_the_range() {
        assert_eq!(level_values(0.0, 6.0, 5), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(level_values(0.0, 4.0, 1), vec![2.0]);
        assert!(level_values(3.0, 3.0, 50).is_empty());
        assert!(level_values(0.0, 4.0, 0).is_empty());
    }

    #[test]
    fn flat_field_has_no_levels() {
        let (re, im) = unit_axes();
        let field = EscapeField::new(3, 3, 9, vec![7; 9]).unwrap();
        let set = ContourSet::extract(&field, &re, &im, 50).unwrap();
        assert!(set.levels().is_empty());
        assert_eq!(set.segment_count(), 0);
    }

    #[test]
    fn mismatched_axes_are_refused() {
        let field = EscapeField::new(3, 3, 9, vec![7; 9]).unwrap();
        let re = Axis::linspace(-1.0, 1.0, 4);
        let im = Axis::linspace(-1.0, 1.0, 3);
        match ContourSet::extract(&field, &re, &im, 5) {
            Err(Error::Shape(_)) => {}
            other => panic!("expected a shape error, got {:?}", other),
        }
    }

    #[test]
    fn peak_is_ringed() {
        let (re, im) = unit_axes();
        let field = EscapeField::new(3, 3, 10, vec![0, 0, 0, 0, 10, 0, 0, 0, 0]).unwrap();
        let set = ContourSet::extract(&field, &re, &im, 3).unwrap();
        let values: Vec<f64> = set.levels().iter().map(|l| l.value).collect();
        assert_eq!(values, vec![2.5, 5.0, 7.5]);

        for level in set.levels() {
            assert_eq!(level.segments.len(), 4, "level {}", level.value);
        }

        let ring = &set.levels()[1].segments;
        // Every endpoint is shared by exactly two segments: the ring closes.
        let ends: Vec<Point3> = ring.iter().flat_map(|s| vec![s.0, s.1]).collect();
        for end in &ends {
            assert_eq!(ends.iter().filter(|e| *e == end).count(), 2);
            let on_axis = (end[0].abs() == 0.5 && end[1] == 0.0)
                || (end[0] == 0.0 && end[1].abs() == 0.5);
            assert!(on_axis, "unexpected crossing {:?}", end);
        }
    }

    #[test]
    fn saddle_is_split_by_the_center() {
        let (re, im) = (Axis::linspace(0.0, 1.0, 2), Axis::linspace(0.0, 1.0, 2));
        // High on one diagonal, low on the other; center average is 5.
        let field = EscapeField::new(2, 2, 10, vec![10, 0, 0, 10]).unwrap();
        let mut out = vec![];
        let corners = [
            (0.0, 0.0, 10.0),
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 10.0),
            (0.0, 1.0, 0.0),
        ];
        march_cell(4.0, corners, &mut out);
        assert_eq!(out.len(), 2);
        // Center above, like corner 0: the low corners are cut off.
        assert_eq!(out[0], Segment([0.6, 0.0, 4.0], [1.0, 0.4, 4.0]));

        let mut out = vec![];
        march_cell(6.0, corners, &mut out);
        assert_eq!(out.len(), 2);
        // Center below: the high corners are cut off instead.
        assert_eq!(out[0], Segment([0.0, 0.4, 6.0], [0.4, 0.0, 6.0]));

        let set = ContourSet::extract(&field, &re, &im, 3).unwrap();
        assert_eq!(set.levels()[1].value, 5.0);
        assert_eq!(set.levels()[1].segments.len(), 2);
    }

    #[test]
    fn segments_sit_on_their_level() {
        let grid = SampleGrid::new(Axis::linspace(-2.0, 2.0, 41), Axis::linspace(-2.0, 2.0, 41));
        let field = EscapeRenderer::new(grid.clone(), 30).field_single();
        let set = ContourSet::extract(&field, &grid.real, &grid.imag, 12).unwrap();
        assert_eq!(set.levels().len(), 12);
        assert!(set.segment_count() > 0);
        for level in set.levels() {
            for Segment(a, b) in &level.segments {
                assert_eq!(a[2], level.value);
                assert_eq!(b[2], level.value);
                for p in &[a, b] {
                    assert!(p[0] >= -2.0 && p[0] <= 2.0);
                    assert!(p[1] >= -2.0 && p[1] <= 2.0);
                }
            }
        }
        assert_eq!(set.normalize(set.range().0), 0.0);
        assert_eq!(set.normalize(set.range().1), 1.0);
    }

    #[test]
    fn default_levels_skip_the_floor_and_the_plateau() {
        let config = Config::default();
        let grid = SampleGrid::from_config(&config);
        let field = EscapeRenderer::new(grid.clone(), config.max_iterations).field_single();
        assert_eq!(field.range(), Some((0, 50)));
        let set = ContourSet::extract(&field, &grid.real, &grid.imag, config.levels).unwrap();
        assert_eq!(set.levels().len(), 50);
        for level in set.levels() {
            assert!(level.value > 0.0 && level.value < 50.0, "level {}", level.value);
            assert!(!level.segments.is_empty(), "level {} is empty", level.value);
        }
    }
}

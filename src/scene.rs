// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Composes frames.  A `Scene` owns everything that stays fixed for the
//! life of the animation: the escape field, its level curves and their
//! colors, and the data box.  Drawing a frame only chooses a camera
//! angle and repaints; the field is never recomputed.

use log::{debug, info};
use std::time::Instant;

use crate::camera::{Bounds, Projection, View};
use crate::canvas::{Canvas, Color};
use crate::config::Config;
use crate::contour::{ContourSet, Point3};
use crate::error::Error;
use crate::escape::{EscapeField, EscapeRenderer};
use crate::planes::{Axis, SampleGrid};

const BACKGROUND: Color = [0xff, 0xff, 0xff];
const INK: Color = [0x00, 0x00, 0x00];
const FRAME_EDGE: Color = [0xb0, 0xb0, 0xb0];

const TICKS: usize = 5;
const TICK_OFFSET: f64 = 14.0;
const LABEL_OFFSET: f64 = 34.0;

/// The fixed contents of the animation.
pub struct Scene {
    field: EscapeField,
    contours: ContourSet,
    colors: Vec<Color>,
    bounds: Bounds,
    frames: usize,
    elevation: f64,
}

impl Scene {
    /// Runs the whole pipeline: samples the grid, computes the escape
    /// field, and traces its level curves.
    pub fn build(config: &Config) -> Result<Scene, Error> {
        info!(
            "sampling a {}x{} grid from {} to {}",
            config.width, config.height, config.leftlower, config.rightupper
        );
        let grid = SampleGrid::from_config(config);
        let renderer = EscapeRenderer::new(grid, config.max_iterations);
        let started = Instant::now();
        let field = if config.threads > 1 {
            renderer.field(config.threads)
        } else {
            renderer.field_single()
        };
        info!(
            "escape field computed in {:?} on {} thread(s)",
            started.elapsed(),
            config.threads
        );
        Scene::new(config, renderer.grid(), field)
    }

    /// Wraps an already computed field.  Fails if the field was not
    /// computed over `grid`.
    pub fn new(config: &Config, grid: &SampleGrid, field: EscapeField) -> Result<Scene, Error> {
        let started = Instant::now();
        let contours = ContourSet::extract(&field, &grid.real, &grid.imag, config.levels)?;
        info!(
            "traced {} segments over {} levels in {:?}, colored by {}",
            contours.segment_count(),
            contours.levels().len(),
            started.elapsed(),
            config.colormap
        );
        let colors = contours
            .levels()
            .iter()
            .map(|level| config.colormap.sample(contours.normalize(level.value)))
            .collect();
        let bounds = Bounds {
            x: grid.real.bounds().unwrap_or((0.0, 0.0)),
            y: grid.imag.bounds().unwrap_or((0.0, 0.0)),
            z: (0.0, config.max_iterations as f64),
        };
        Ok(Scene {
            field,
            contours,
            colors,
            bounds,
            frames: config.frames.max(1),
            elevation: config.elevation,
        })
    }

    /// The escape field on display.
    pub fn field(&self) -> &EscapeField {
        &self.field
    }

    /// The traced level curves.
    pub fn contours(&self) -> &ContourSet {
        &self.contours
    }

    /// Frames in one sweep.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// The camera for a frame.
    pub fn view(&self, frame: usize) -> View {
        View::for_frame(frame, self.frames, self.elevation)
    }

    /// The caption for a frame, counting from 1.
    pub fn title(&self, frame: usize) -> String {
        format!("Frame {}/{}", frame + 1, self.frames)
    }

    /// Paints frame `frame` over whatever the canvas held before.
    pub fn draw(&self, frame: usize, canvas: &mut Canvas) {
        let view = self.view(frame);
        debug!(
            "drawing frame {}/{} at azimuth {:.1}",
            frame + 1,
            self.frames,
            view.azimuth
        );
        let projection = Projection::new(view, self.bounds, canvas.width(), canvas.height());
        canvas.clear(BACKGROUND);
        self.draw_box(&projection, canvas);
        self.draw_contours(&projection, canvas);
        self.draw_axes(&projection, canvas);
        let middle = f64::from(canvas.width()) / 2.0;
        canvas.text_centered(middle, 12.0, &self.title(frame), INK);
    }

    fn corner(&self, index: usize) -> Point3 {
        let pick = |bit: usize, (lo, hi): (f64, f64)| if index & (1 << bit) == 0 { lo } else { hi };
        [
            pick(0, self.bounds.x),
            pick(1, self.bounds.y),
            pick(2, self.bounds.z),
        ]
    }

    fn draw_box(&self, projection: &Projection, canvas: &mut Canvas) {
        for index in 0..8 {
            for bit in 0..3 {
                if index & (1 << bit) == 0 {
                    let from = projection.project(self.corner(index));
                    let to = projection.project(self.corner(index | (1 << bit)));
                    canvas.line(from, to, FRAME_EDGE);
                }
            }
        }
    }

    // Back to front, so nearer curves are painted over farther ones.
    fn draw_contours(&self, projection: &Projection, canvas: &mut Canvas) {
        let mut strokes: Vec<(f64, usize, Point3, Point3)> =
            Vec::with_capacity(self.contours.segment_count());
        for (index, level) in self.contours.levels().iter().enumerate() {
            for segment in &level.segments {
                let middle = [
                    (segment.0[0] + segment.1[0]) / 2.0,
                    (segment.0[1] + segment.1[1]) / 2.0,
                    level.value,
                ];
                strokes.push((projection.depth(middle), index, segment.0, segment.1));
            }
        }
        strokes.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        for (_, index, from, to) in strokes {
            canvas.line(projection.project(from), projection.project(to), self.colors[index]);
        }
    }

    fn draw_axes(&self, projection: &Projection, canvas: &mut Canvas) {
        let Bounds { x, y, z } = self.bounds;
        let ticks = |(lo, hi): (f64, f64)| Axis::linspace(lo, hi, TICKS).values().to_vec();

        for re in ticks(x) {
            label(projection, canvas, [re, y.0, z.0], &format!("{:.1}", re), TICK_OFFSET);
        }
        for im in ticks(y) {
            label(projection, canvas, [x.1, im, z.0], &format!("{:.1}", im), TICK_OFFSET);
        }
        for height in ticks(z) {
            label(projection, canvas, [x.0, y.0, height], &format!("{:.0}", height), TICK_OFFSET);
        }

        let middle = |(lo, hi): (f64, f64)| (lo + hi) / 2.0;
        label(projection, canvas, [middle(x), y.0, z.0], "Re(c)", LABEL_OFFSET);
        label(projection, canvas, [x.1, middle(y), z.0], "Im(c)", LABEL_OFFSET);
        label(projection, canvas, [x.0, y.0, middle(z)], "Iterations", LABEL_OFFSET);
    }
}

/// Writes `text` next to a point of the data box, pushed `offset`
/// pixels away from the middle of the box so it clears the frame.
fn label(projection: &Projection, canvas: &mut Canvas, at: Point3, text: &str, offset: f64) {
    let (ax, ay) = projection.project(at);
    let (ox, oy) = projection.origin();
    let (dx, dy) = (ax - ox, ay - oy);
    let length = (dx * dx + dy * dy).sqrt();
    let (ux, uy) = if length > 1e-9 {
        (dx / length, dy / length)
    } else {
        (0.0, -1.0)
    };
    canvas.text_centered(ax + ux * offset, ay + uy * offset, text, INK);
}

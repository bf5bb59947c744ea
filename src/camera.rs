//! Where the camera sits for a frame, and how a point in data space lands
//! on the screen.
//!
//! The data box is squashed into the cube `[-1, 1]³` first, so the three
//! axes get equal room whatever their units.  The camera then looks at
//! the origin from azimuth `a` and elevation `e`, i.e. from the direction
//! `(cos e cos a, cos e sin a, sin e)`, with no perspective.

use crate::contour::Point3;

/// Camera angles for one frame, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct View {
    /// Rotation about the vertical axis.
    pub azimuth: f64,
    /// Angle above the horizontal plane.
    pub elevation: f64,
}

impl View {
    /// The view for frame `frame` of a sweep of `frames`: a full turn in
    /// equal steps, starting from azimuth 0.
    pub fn for_frame(frame: usize, frames: usize, elevation: f64) -> View {
        View {
            azimuth: (frame as f64) * (360.0 / (frames as f64)),
            elevation,
        }
    }
}

/// The visible extent of each data axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// Real part.
    pub x: (f64, f64),
    /// Imaginary part.
    pub y: (f64, f64),
    /// Iteration count.
    pub z: (f64, f64),
}

fn unit(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        2.0 * (value - lo) / (hi - lo) - 1.0
    } else {
        0.0
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// An orthographic camera fitted to a raster of a given size.  Parallel
/// edges of the box stay parallel on screen; there is no perspective.
#[derive(Clone, Debug)]
pub struct Projection {
    bounds: Bounds,
    eye: [f64; 3],
    right: [f64; 3],
    up: [f64; 3],
    center: (f64, f64),
    scale: f64,
}

impl Projection {
    /// Looks at `bounds` from `view`, scaled so the whole box fits a
    /// `width` by `height` raster with room left for labels.
    pub fn new(view: View, bounds: Bounds, width: u32, height: u32) -> Projection {
        let (a, e) = (view.azimuth.to_radians(), view.elevation.to_radians());
        let (sa, ca) = a.sin_cos();
        let (se, ce) = e.sin_cos();
        let (w, h) = (f64::from(width), f64::from(height));
        Projection {
            bounds,
            eye: [ce * ca, ce * sa, se],
            right: [-sa, ca, 0.0],
            up: [-se * ca, -se * sa, ce],
            center: (w / 2.0, h / 2.0 + h * 0.03),
            scale: 0.28 * w.min(h),
        }
    }

    /// A data-space point mapped into the unit cube.
    pub fn normalize(&self, p: Point3) -> [f64; 3] {
        [
            unit(p[0], self.bounds.x),
            unit(p[1], self.bounds.y),
            unit(p[2], self.bounds.z),
        ]
    }

    /// Screen position of a data-space point; y grows downward.
    pub fn project(&self, p: Point3) -> (f64, f64) {
        let n = self.normalize(p);
        (
            self.center.0 + self.scale * dot(n, self.right),
            self.center.1 - self.scale * dot(n, self.up),
        )
    }

    /// Distance toward the camera.  Larger is nearer.
    pub fn depth(&self, p: Point3) -> f64 {
        dot(self.normalize(p), self.eye)
    }

    /// Screen position of the middle of the data box.
    pub fn origin(&self) -> (f64, f64) {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds {
        x: (-2.0, 2.0),
        y: (-2.0, 2.0),
        z: (0.0, 50.0),
    };

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn azimuth_sweeps_a_full_turn() {
        assert_eq!(View::for_frame(0, 60, 30.0).azimuth, 0.0);
        assert_eq!(View::for_frame(15, 60, 30.0).azimuth, 90.0);
        assert_eq!(View::for_frame(59, 60, 30.0).azimuth, 354.0);
        assert_eq!(View::for_frame(7, 60, 30.0).elevation, 30.0);
    }

    #[test]
    fn normalize_fills_the_unit_cube() {
        let p = Projection::new(View::for_frame(0, 1, 30.0), BOX, 100, 100);
        assert_eq!(p.normalize([-2.0, 2.0, 25.0]), [-1.0, 1.0, 0.0]);
        assert_eq!(p.normalize([0.0, 0.0, 50.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn side_view_puts_imaginary_right_and_height_up() {
        let p = Projection::new(View { azimuth: 0.0, elevation: 0.0 }, BOX, 200, 200);
        let o = p.origin();
        assert!(close(p.project([0.0, 0.0, 25.0]), o));
        let right = p.project([0.0, 2.0, 25.0]);
        assert!(right.0 > o.0 && (right.1 - o.1).abs() < 1e-9);
        let top = p.project([0.0, 0.0, 50.0]);
        assert!(top.1 < o.1 && (top.0 - o.0).abs() < 1e-9);
        // Looking down the real axis, the real part only changes depth.
        assert!(close(p.project([2.0, 0.0, 25.0]), o));
        assert!(p.depth([2.0, 0.0, 25.0]) > p.depth([-2.0, 0.0, 25.0]));
    }

    #[test]
    fn quarter_turn_swaps_the_axes() {
        let p = Projection::new(View { azimuth: 90.0, elevation: 0.0 }, BOX, 200, 200);
        let o = p.origin();
        let far_re = p.project([-2.0, 0.0, 25.0]);
        assert!(far_re.0 > o.0);
        assert!(p.depth([0.0, 2.0, 25.0]) > p.depth([0.0, -2.0, 25.0]));
    }

    #[test]
    fn box_fits_the_raster() {
        for frame in 0..60 {
            let p = Projection::new(View::for_frame(frame, 60, 30.0), BOX, 640, 480);
            for &x in &[-2.0, 2.0] {
                for &y in &[-2.0, 2.0] {
                    for &z in &[0.0, 50.0] {
                        let (sx, sy) = p.project([x, y, z]);
                        assert!(sx >= 0.0 && sx < 640.0 && sy >= 0.0 && sy < 480.0);
                    }
                }
            }
        }
    }
}

//! The color mapping for contour levels.  There is exactly one.

use std::fmt;

// Evenly spaced stops of the viridis map, t = 0.0, 0.1, ..., 1.0.
const VIRIDIS: [[u8; 3]; 11] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x24, 0x75],
    [0x41, 0x44, 0x87],
    [0x35, 0x5f, 0x8d],
    [0x2a, 0x78, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x22, 0xa8, 0x84],
    [0x44, 0xbf, 0x70],
    [0x7a, 0xd1, 0x51],
    [0xbd, 0xdf, 0x26],
    [0xfd, 0xe7, 0x25],
];

/// A named mapping from `[0, 1]` to RGB.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Colormap {
    /// Perceptually uniform dark blue to yellow.
    Viridis,
}

impl Colormap {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => &VIRIDIS,
        }
    }

    /// The color at `t`, clamped into `[0, 1]` and interpolated linearly
    /// between neighbouring stops.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        let position = t * ((stops.len() - 1) as f64);
        let index = (position.floor() as usize).min(stops.len() - 2);
        let frac = position - (index as f64);
        let (a, b) = (stops[index], stops[index + 1]);
        let mut rgb = [0u8; 3];
        for i in 0..3 {
            let v = f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * frac;
            rgb[i] = v.round() as u8;
        }
        rgb
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Colormap::Viridis => write!(f, "viridis"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_the_first_and_last_stop() {
        assert_eq!(Colormap::Viridis.sample(0.0), [0x44, 0x01, 0x54]);
        assert_eq!(Colormap::Viridis.sample(1.0), [0xfd, 0xe7, 0x25]);
        assert_eq!(Colormap::Viridis.sample(0.5), [0x21, 0x91, 0x8c]);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(Colormap::Viridis.sample(-3.0), Colormap::Viridis.sample(0.0));
        assert_eq!(Colormap::Viridis.sample(7.5), Colormap::Viridis.sample(1.0));
        assert_eq!(Colormap::Viridis.sample(std::f64::NAN), Colormap::Viridis.sample(0.0));
    }

    #[test]
    fn midway_between_stops() {
        // Halfway between 0x41,0x44,0x87 and 0x35,0x5f,0x8d.
        assert_eq!(Colormap::Viridis.sample(0.25), [0x3b, 0x52, 0x8a]);
    }

    #[test]
    fn named_in_logs() {
        assert_eq!(Colormap::Viridis.to_string(), "viridis");
    }
}

use crate::{Point2, Result, SamplingError, Uniform};

use float_extras::f64::nextafter;
use rand::Rng;

/// Axis-aligned rectangle covering the half-open area `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds, failing if they have no area or contain non-finite coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let bounds = Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks the invariants `new` enforces, for bounds built from public fields.
    pub fn validate(&self) -> Result<()> {
        let finite = self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite();

        // NaN fails both comparisons, extents can overflow to infinity
        if finite
            && self.max_x > self.min_x
            && self.max_y > self.min_y
            && self.width().is_finite()
            && self.height().is_finite()
        {
            Ok(())
        } else {
            Err(SamplingError::DegenerateBounds {
                min_x: self.min_x,
                min_y: self.min_y,
                max_x: self.max_x,
                max_y: self.max_y,
            })
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Minimum coordinates are inclusive, maximum coordinates exclusive.
    pub fn contains(&self, point: Point2) -> bool {
        point.x >= self.min_x && point.x < self.max_x && point.y >= self.min_y && point.y < self.max_y
    }
}

impl Uniform for Bounds {
    fn uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2 {
        let u: f64 = rng.gen();
        let v: f64 = rng.gen();

        // u * width may round up to the full width, pull those back inside
        let x = (self.min_x + u * self.width()).min(nextafter(self.max_x, self.min_x));
        let y = (self.min_y + v * self.height()).min(nextafter(self.max_y, self.min_y));

        Point2::new(x, y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_reject_degenerate_bounds() {
        assert!(Bounds::new(0.0, 0.0, 0.0, 1.0).is_err());
        assert!(Bounds::new(0.0, 0.0, 1.0, 0.0).is_err());
        assert!(Bounds::new(5.0, 0.0, -5.0, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::NAN, 1.0, 1.0).is_err());
        assert!(Bounds::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(Bounds::new(-1.0e308, 0.0, 1.0e308, 1.0).is_err(), "Width overflows");
        assert!(Bounds::new(0.0, -1.0e308, 1.0, 1.0e308).is_err(), "Height overflows");
        assert!(Bounds::new(-1.0e307, 0.0, 1.0e307, 1.0).is_ok());

        assert_eq!(
            Err(SamplingError::DegenerateBounds {
                min_x: 2.0,
                min_y: 0.0,
                max_x: 1.0,
                max_y: 1.0
            }),
            Bounds::new(2.0, 0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_dimensions() {
        let bounds = Bounds::new(-50.0, -50.0, 25.0, 75.0).unwrap();
        assert_ulps_eq!(75.0, bounds.width());
        assert_ulps_eq!(125.0, bounds.height());
        assert_ulps_eq!(9375.0, bounds.area());
    }

    #[test]
    fn test_contains_is_half_open() {
        let bounds = Bounds::new(-1.0, -1.0, 1.0, 1.0).unwrap();

        assert!(bounds.contains(Point2::new(-1.0, -1.0)));
        assert!(bounds.contains(Point2::new(nextafter(1.0, 0.0), nextafter(1.0, 0.0))));
        assert!(!bounds.contains(Point2::new(1.0, 0.0)));
        assert!(!bounds.contains(Point2::new(0.0, 1.0)));
        assert!(!bounds.contains(Point2::new(nextafter(-1.0, -2.0), 0.0)));
        assert!(!bounds.contains(Point2::new(0.0, f64::NAN)));
    }

    #[test]
    fn test_uniform_stays_inside() {
        let mut rng = Pcg64Mcg::seed_from_u64(943050168);
        let tiny = Bounds::new(1.0e8, 1.0e8, 1.0e8 + 1.0e-7, 1.0e8 + 1.0e-7).unwrap();
        let wide = Bounds::new(-50.0, -50.0, 25.0, 75.0).unwrap();

        for _ in 0..1000 {
            assert!(tiny.contains(tiny.uniform(&mut rng)));
            assert!(wide.contains(wide.uniform(&mut rng)));
        }
    }
}

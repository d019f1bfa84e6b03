use crate::{Point2, Uniform};
use rand::Rng;
use std::f64::consts::PI;

/// A ring around `center` containing all points with a distance to the center
/// in `[inner, outer)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    pub center: Point2,
    pub inner: f64,
    pub outer: f64,
}

impl Annulus {
    pub fn new(center: Point2, inner: f64, outer: f64) -> Self {
        Annulus {
            center,
            inner,
            outer,
        }
    }

    /// The ring Bridson's algorithm draws candidates from, `[d, 2d)` around the center.
    pub fn around(center: Point2, min_distance: f64) -> Self {
        Annulus::new(center, min_distance, 2.0 * min_distance)
    }
}

impl Uniform for Annulus {
    /// Samples a random angle first and then a radius.
    ///
    /// The radius is linear in `[inner, outer)` rather than weighted by area, which
    /// biases candidates slightly towards the inner edge and thus towards a denser set.
    fn uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2 {
        let theta = rng.gen::<f64>() * 2.0 * PI;
        let radius = self.inner + rng.gen::<f64>() * (self.outer - self.inner);

        self.center + Point2::new(radius * theta.cos(), radius * theta.sin())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_samples_inside_ring() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let ring = Annulus::around(Point2::new(-3.0, 12.0), 10.0);

        for _ in 0..1000 {
            let dist = ring.center.distance(ring.uniform(&mut rng));
            // allow for rounding in sin/cos
            assert!(dist >= 10.0 - 1.0e-9, "too close: {}", dist);
            assert!(dist < 20.0 + 1.0e-9, "too far: {}", dist);
        }
    }

    #[test]
    fn test_covers_all_directions() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let ring = Annulus::new(Point2::default(), 1.0, 2.0);
        let mut quadrants = [0_usize; 4];

        for _ in 0..400 {
            let p = ring.uniform(&mut rng);
            let idx = match (p.x >= 0.0, p.y >= 0.0) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            quadrants[idx] += 1;
        }

        for &count in quadrants.iter() {
            assert!(count > 50, "Unexpectedly skewed angles {:?}", quadrants);
        }
    }

    #[test]
    fn test_degenerate_ring_is_circle() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let circle = Annulus::new(Point2::new(1.0, 1.0), 2.0, 2.0);

        for _ in 0..100 {
            assert_relative_eq!(2.0, circle.center.distance(circle.uniform(&mut rng)), epsilon = 1.0e-12);
        }
    }
}

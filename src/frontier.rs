use crate::Point2;
use rand::Rng;

/// Accepted points that may still spawn new candidates around them.
///
/// Order carries no meaning, eviction swaps the last point into the freed slot.
#[derive(Debug, Default)]
pub struct Frontier {
    active: Vec<Point2>,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier { active: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            active: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Point2) {
        self.active.push(point)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Picks a random active point, returning its index for a later `evict`.
    ///
    /// Returns `None` and draws nothing from `rng` if the frontier is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, Point2)> {
        if self.active.is_empty() {
            None
        } else {
            let idx = rng.gen_range(0..self.active.len());
            Some((idx, self.active[idx]))
        }
    }

    /// Removes the point at the index in constant time, the point is not
    /// considered for candidate generation anymore.
    pub fn evict(&mut self, idx: usize) -> Point2 {
        self.active.swap_remove(idx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn test_evict_swaps_last_into_slot() {
        let mut frontier = Frontier::new();
        frontier.push(Point2::new(0.0, 0.0));
        frontier.push(Point2::new(1.0, 0.0));
        frontier.push(Point2::new(2.0, 0.0));

        assert_eq!(Point2::new(0.0, 0.0), frontier.evict(0));
        assert_eq!(2, frontier.len());

        let mut rng = Pcg64Mcg::seed_from_u64(1);
        for _ in 0..50 {
            let (idx, point) = frontier.choose(&mut rng).unwrap();
            match idx {
                0 => assert_eq!(Point2::new(2.0, 0.0), point),
                1 => assert_eq!(Point2::new(1.0, 0.0), point),
                _ => panic!("Index {} out of range", idx),
            }
        }
    }

    #[test]
    fn test_choose_from_empty() {
        let mut rng = Pcg64Mcg::seed_from_u64(1);
        let mut frontier = Frontier::with_capacity(4);
        assert!(frontier.choose(&mut rng).is_none());

        frontier.push(Point2::new(4.0, 2.0));
        assert_eq!(Some((0, Point2::new(4.0, 2.0))), frontier.choose(&mut rng));

        frontier.evict(0);
        assert!(frontier.is_empty());
        assert!(frontier.choose(&mut rng).is_none());
    }
}

use crate::Point2;
use rand::Rng;

/// Samples any point inside the implementer.
/// All possible points have approximately equal probability.
pub trait Uniform {
    fn uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2;
}

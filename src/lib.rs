//! Provides two-dimensional Poisson-disc sampling, for instance:
//! * Generating a blue-noise point set inside a rectangle with [`sample`](sequence/fn.sample.html)
//!   or a reusable [`PoissonConfig`](sequence/struct.PoissonConfig.html),
//! * uniformly sampling a point in [`Bounds`](struct.Bounds.html) or an [`Annulus`](struct.Annulus.html)
//!   with the [`Uniform`](trait.Uniform.html) trait,
//! * answering minimum-distance queries in constant time with the acceleration [`Grid`](struct.Grid.html).
//!
//! All randomness is drawn from a caller-supplied `rand::Rng`, so seeding it identically
//! reproduces the exact same point sequence.

#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate float_extras;
#[macro_use]
extern crate log;
extern crate rand;
extern crate thiserror;

mod annulus;
mod bounds;
mod error;
mod frontier;
mod grid;
mod point;
mod uniform;
pub mod sequence;

pub use self::annulus::Annulus;
pub use self::bounds::Bounds;
pub use self::error::{Result, SamplingError};
pub use self::frontier::Frontier;
pub use self::grid::Grid;
pub use self::point::Point2;
pub use self::uniform::Uniform;
pub use self::sequence::{sample, PoissonConfig};

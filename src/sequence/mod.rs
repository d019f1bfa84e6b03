//! Sequences of sampled points, currently Poisson disc sets, see [`sample`](fn.sample.html).

mod poisson;

pub use self::poisson::{sample, PoissonConfig};

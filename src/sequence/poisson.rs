use crate::{Annulus, Bounds, Frontier, Grid, Point2, Result, SamplingError, Uniform};

use rand::Rng;

/// Candidate attempts per active point if not configured otherwise.
const DEFAULT_TRIES: usize = 30;

/// Parameters of a Poisson-disc sampling run, independent of the random source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonConfig {
    /// No two generated points are closer than this
    pub min_distance: f64,
    /// Candidates tried around an active point before it is retired
    pub tries: usize,
    /// Seed point of the run, drawn from the bounds if `None`
    pub start: Option<Point2>,
}

impl Default for PoissonConfig {
    fn default() -> Self {
        PoissonConfig {
            min_distance: 1.0,
            tries: DEFAULT_TRIES,
            start: None,
        }
    }
}

impl PoissonConfig {
    pub fn new(min_distance: f64) -> Self {
        PoissonConfig {
            min_distance,
            ..Default::default()
        }
    }

    pub fn with_tries(self, tries: usize) -> Self {
        PoissonConfig { tries, ..self }
    }

    pub fn with_start(self, start: Point2) -> Self {
        PoissonConfig {
            start: Some(start),
            ..self
        }
    }

    /// Checks the parameters against the given bounds without sampling anything.
    pub fn validate(&self, bounds: &Bounds) -> Result<()> {
        if !(self.min_distance > 0.0 && self.min_distance.is_finite()) {
            return Err(SamplingError::NonPositiveDistance(self.min_distance));
        }

        if self.tries == 0 {
            return Err(SamplingError::NoTries);
        }

        bounds.validate()?;
        Grid::dimensions_for(bounds, self.min_distance).map(|_| ())
    }

    /// Generates a Poisson disc set inside the bounds, see [`sample`](fn.sample.html).
    pub fn sample<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> Result<Vec<Point2>> {
        self.validate(bounds)?;
        run(self, bounds, rng)
    }
}

/// Generates points inside `bounds` with no two points closer than `min_distance`
/// using Bridson's algorithm.
///
/// Starting from `start`, or from a uniformly drawn point if `None`, random active
/// points get up to `tries` candidates placed in the ring of `[min_distance, 2 * min_distance)`
/// around them. The first candidate that keeps its distance to all previous points
/// is accepted and becomes active itself. Active points that fail `tries` times in a
/// row are retired. The run ends once no point is active.
///
/// Points are returned in the order they were accepted. A `start` outside of the
/// bounds yields an empty set. Invalid parameters are reported before anything is
/// drawn from `rng`.
///
/// # Examples
/// ```
/// extern crate bridson_sampling;
/// extern crate rand;
///
/// use bridson_sampling::{sample, Bounds};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let bounds = Bounds::new(-50.0, -50.0, 25.0, 75.0).unwrap();
/// let mut rng = StdRng::seed_from_u64(943050168);
/// let points = sample(10.0, 10, &bounds, None, &mut rng).unwrap();
///
/// assert!(!points.is_empty());
/// assert!(points.iter().all(|&p| bounds.contains(p)));
/// ```
pub fn sample<R: Rng + ?Sized>(
    min_distance: f64,
    tries: usize,
    bounds: &Bounds,
    start: Option<Point2>,
    rng: &mut R,
) -> Result<Vec<Point2>> {
    PoissonConfig {
        min_distance,
        tries,
        start,
    }
    .sample(bounds, rng)
}

/// Initial capacities for the output and the frontier.
///
/// Dense sets hold fewer than one point per squared min distance, the frontier
/// mostly tracks the boundary of the sampled region.
fn capacity_hints(bounds: &Bounds, min_distance: f64, grid: &Grid) -> (usize, usize) {
    let points = (bounds.area() / (min_distance * min_distance)).ceil() as usize;
    let frontier = (grid.capacity() as f64).sqrt() as usize * 4;

    (points.min(grid.capacity()), frontier.min(grid.capacity()))
}

/// The sampling loop, expects validated parameters.
fn run<R: Rng + ?Sized>(config: &PoissonConfig, bounds: &Bounds, rng: &mut R) -> Result<Vec<Point2>> {
    let min_distance = config.min_distance;
    let mut grid = Grid::new(*bounds, min_distance)?;

    debug!(
        "Poisson disc sampling with min distance {} in {:?}, {:?} grid cells of size {}, {} tries",
        min_distance,
        bounds,
        grid.dimensions(),
        grid.cell_size(),
        config.tries
    );

    let seed = match config.start {
        Some(start) => start,
        None => bounds.uniform(rng),
    };

    if !grid.try_insert(seed) {
        debug!("Start point {:?} outside of {:?}, no points generated", seed, bounds);
        return Ok(Vec::new());
    }

    let (point_hint, frontier_hint) = capacity_hints(bounds, min_distance, &grid);
    let mut points = Vec::with_capacity(point_hint);
    let mut frontier = Frontier::with_capacity(frontier_hint);
    points.push(seed);
    frontier.push(seed);

    let mut candidate_count = 0_usize;

    while let Some((active_idx, active)) = frontier.choose(rng) {
        let ring = Annulus::around(active, min_distance);
        let mut accepted = None;

        for _ in 0..config.tries {
            candidate_count += 1;
            let candidate = ring.uniform(rng);
            if grid.try_insert(candidate) {
                accepted = Some(candidate);
                break;
            }
        }

        match accepted {
            Some(point) => {
                points.push(point);
                frontier.push(point);
            }
            None => {
                frontier.evict(active_idx);
                trace!("Retired {:?}, {} points remain active", active, frontier.len());
            }
        }
    }

    debug!(
        "Accepted {} points out of {} candidates",
        points.len(),
        candidate_count
    );

    Ok(points)
}

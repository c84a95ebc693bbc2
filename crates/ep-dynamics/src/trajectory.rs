//! Annotated saddle-path trajectory.

use ep_core::numeric::Real;

/// One time sample of the solved transition path with its derived
/// economic quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub t: Real,
    pub q: Real,
    pub capital: Real,
    /// Market-clearing energy price at this capital level.
    pub price: Real,
    pub output_non_renewable: Real,
    pub output_renewable: Real,
    /// Costs per unit of non-renewable output.
    pub cost_non_renewable: Real,
    /// Costs per unit of renewable output.
    pub cost_renewable: Real,
    /// Profit per unit of non-renewable output; equals `price` less the
    /// per-unit cost.
    pub profit_non_renewable: Real,
    /// Profit per unit of renewable output; equals the subsidised price
    /// less the per-unit cost.
    pub profit_renewable: Real,
}

/// A solved transition path, samples ordered by ascending time, running
/// from the initial capital stock towards the saddle point.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn new(points: Vec<TrajectoryPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }
}

//! Running minimum over (index, distance) candidates, used by the brute-force scan.

use num_traits::Float;

/// A training row's index paired with its distance to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<F> {
    pub index: usize,
    pub distance: F,
}

/// Keeps the single best candidate offered so far.
///
/// A candidate replaces the current best only when it is strictly closer, so
/// candidates offered in ascending index order resolve ties to the lowest
/// index. A NaN distance counts as the minimum and the first one sticks,
/// which matches a NumPy `argmin` over the same distances.
#[derive(Debug, Clone)]
pub struct NearestSoFar<F> {
    best: Option<Neighbor<F>>,
}

impl<F: Float> NearestSoFar<F> {
    pub fn new() -> Self {
        NearestSoFar { best: None }
    }

    pub fn offer(&mut self, index: usize, distance: F) {
        let replace = match &self.best {
            None => true,
            Some(best) if best.distance.is_nan() => false,
            Some(best) => distance.is_nan() || distance < best.distance,
        };
        if replace {
            self.best = Some(Neighbor { index, distance });
        }
    }

    /// `None` if nothing was offered.
    pub fn into_nearest(self) -> Option<Neighbor<F>> {
        self.best
    }
}

impl<F: Float> Default for NearestSoFar<F> {
    fn default() -> Self {
        Self::new()
    }
}

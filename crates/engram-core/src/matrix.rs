//! Symmetric correlation weights.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::Serialize;

/// An N×N real matrix.
///
/// Invariants maintained by [`AssociativeMemory`](crate::memory::AssociativeMemory):
/// `W[i][j] == W[j][i]` and `W[i][i] == 0`. The matrix itself only exposes
/// read access outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightMatrix {
    weights: Array2<f64>,
}

impl WeightMatrix {
    /// All-zero matrix of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            weights: Array2::zeros((dim, dim)),
        }
    }

    pub fn dim(&self) -> usize {
        self.weights.nrows()
    }

    /// Entry (i, j). Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[[i, j]]
    }

    /// Row `i`. Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.weights.row(i)
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.weights.rows().into_iter()
    }

    /// The underlying array.
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    pub fn is_symmetric(&self) -> bool {
        self.weights == self.weights.t()
    }

    pub fn has_zero_diagonal(&self) -> bool {
        self.weights.diag().iter().all(|&w| w == 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    /// Smallest and largest entries, `None` for a zero-dimension matrix.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.weights.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), w| (lo.min(w), hi.max(w))))
    }

    /// Matrix-vector product `W · x`. `x.len()` must equal `dim`.
    pub(crate) fn mul_vec(&self, x: &Array1<f64>) -> Array1<f64> {
        self.weights.dot(x)
    }

    /// Add the outer product `p ⊗ p`, then zero the diagonal.
    pub(crate) fn add_outer_product(&mut self, p: &Array1<f64>) {
        let column = p.view().insert_axis(Axis(1));
        let row = p.view().insert_axis(Axis(0));
        self.weights += &column.dot(&row);
        self.weights.diag_mut().fill(0.0);
    }
}

//! Pairwise distance computation, collision and loss-of-separation checks.

use vp_core::Vec3;

/// Sentinel distance for self-pairs and non-finite values.
///
/// Self-distances are forced to this value so a drone never registers a
/// collision with itself, and any non-finite pairwise distance is clamped to
/// it before the matrix reaches a caller — the controller must always
/// receive a well-formed snapshot.
pub const DISTANCE_SENTINEL: f64 = 1_000.0;

/// A dense N×N matrix of pairwise drone distances.
///
/// Symmetric by construction; the diagonal holds [`DISTANCE_SENTINEL`].
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute all pairwise Euclidean distances.
    pub fn compute(positions: &[Vec3]) -> Self {
        let n = positions.len();
        let mut data = vec![DISTANCE_SENTINEL; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = positions[i].distance(positions[j]);
                let d = if d.is_finite() { d } else { DISTANCE_SENTINEL };
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Self { n, data }
    }

    /// Distance between drones `i` and `j`; the sentinel when `i == j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// `true` iff any off-diagonal distance is below `threshold`.
    ///
    /// The diagonal cannot trip this: it holds the sentinel.
    pub fn any_below(&self, threshold: f64) -> bool {
        self.data.iter().any(|&d| d < threshold)
    }

    /// Unordered pairs `(i, j, distance)` with `i < j` and distance below
    /// `threshold` — the loss-of-separation set for `threshold =
    /// min_separation`.
    pub fn pairs_below(&self, threshold: f64) -> Vec<(usize, usize, f64)> {
        let mut pairs = Vec::new();
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let d = self.get(i, j);
                if d < threshold {
                    pairs.push((i, j, d));
                }
            }
        }
        pairs
    }

    /// Collision test: any pair closer than `2 × drone_radius`.
    #[inline]
    pub fn any_collision(&self, drone_radius: f64) -> bool {
        self.any_below(2.0 * drone_radius)
    }

    /// Row `i` as a slice — all distances from drone `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

// src/generator.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::AdjacencyMatrix;

/// Random adjacency-matrix source. The generator owns its RNG so callers
/// pick between reproducible (seeded) and per-run (entropy) behavior.
pub struct MatrixGenerator {
    rng: StdRng,
}

impl MatrixGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    // A uniform draw in [0, 1) scaled by 3k decides cell absence. The
    // inequality is kept literal: k = 0 always satisfies it, so every
    // cell stays 0 and the graph comes out empty.
    fn draw_cell(&mut self, k: f64) -> u8 {
        if self.rng.gen::<f64>() * 3.0 * k < 1.0 {
            0
        } else {
            1
        }
    }

    /// Symmetric matrix with a zero diagonal: one draw per unordered pair,
    /// mirrored into both triangles.
    pub fn undirected(&mut self, n: usize, k: f64) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::zeroed(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let value = self.draw_cell(k);
                matrix.set(i, j, value);
                matrix.set(j, i, value);
            }
        }
        matrix
    }

    /// Independent draw per ordered pair (i, j), i != j; zero diagonal.
    pub fn directed(&mut self, n: usize, k: f64) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::zeroed(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let value = self.draw_cell(k);
                    matrix.set(i, j, value);
                }
            }
        }
        matrix
    }
}

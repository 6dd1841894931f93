// src/graph.rs

use crate::error::GraphError;
use crate::geometry::Point2;
use crate::matrix::AdjacencyMatrix;

/// An adjacency matrix paired with one position per vertex and a
/// directedness flag. The position count must match the matrix dimension;
/// that is checked here, before anything can try to render.
#[derive(Clone, Debug)]
pub struct Graph {
    matrix: AdjacencyMatrix,
    positions: Vec<Point2>,
    directed: bool,
}

impl Graph {
    pub fn new(
        matrix: AdjacencyMatrix,
        positions: Vec<Point2>,
        directed: bool,
    ) -> Result<Self, GraphError> {
        if positions.len() != matrix.size() {
            return Err(GraphError::PositionCountMismatch {
                expected: matrix.size(),
                actual: positions.len(),
            });
        }
        Ok(Self {
            matrix,
            positions,
            directed,
        })
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn positions(&self) -> &[Point2] {
        &self.positions
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.matrix.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_checks_position_count() {
        let matrix = AdjacencyMatrix::zeroed(3);
        let short = vec![Point2::new(0.0, 0.0); 2];
        assert_eq!(
            Graph::new(matrix, short, false).unwrap_err(),
            GraphError::PositionCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn matching_position_count_constructs() {
        let matrix = AdjacencyMatrix::zeroed(2);
        let positions = vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)];
        let graph = Graph::new(matrix, positions, true).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.directed());
    }
}

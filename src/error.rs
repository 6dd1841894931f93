// src/error.rs

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("graph has {actual} positions for a {expected}-vertex matrix")]
    PositionCountMismatch { expected: usize, actual: usize },

    #[error("no layout template for {0} vertices")]
    UnsupportedLayoutSize(usize),

    #[error("edge endpoints coincide at ({x}, {y})")]
    DegenerateEdge { x: f32, y: f32 },
}

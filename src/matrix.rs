// src/matrix.rs

use std::fmt;

/// Square 0/1 adjacency grid, stored row-major. A 1 at (i, j) is an edge
/// from vertex i to vertex j; a 1 on the diagonal is a self-loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    pub fn zeroed(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        let mut matrix = Self::zeroed(size);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "row {} is not {} cells wide", i, size);
            for (j, &value) in row.iter().enumerate() {
                matrix.set(i, j, value);
            }
        }
        matrix
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.cells[i * self.size + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: u8) {
        self.cells[i * self.size + j] = value;
    }

    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }
}

// One row per line, every cell followed by a single space.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            for j in 0..self.size {
                write!(f, "{} ", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

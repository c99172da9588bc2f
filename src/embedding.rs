//! Lifting a small local code into the global parity-check matrix of a
//! square code or an edge (expander) code.
//!
//! Grounded on `graph_codes/on_square_code.py` and
//! `graph_codes/on_edge_code.py`.

use crate::complex::LeftRightComplex;
use crate::error::{CayleyCodeError, Result};
use crate::graph::CayleyGraph;
use std::collections::HashMap;

/// A sparse `(row, col) -> value` parity-check matrix plus its row count.
/// The column count is the number of squares (or edges) in the underlying
/// complex/graph, i.e. the codeword length.
#[derive(Debug, Clone)]
pub struct SparseParity {
    entries: HashMap<(usize, usize), u64>,
    rows: usize,
    cols: usize,
}

impl SparseParity {
    /// Number of constraint rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Codeword length.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Nonzero entries, `(row, col) -> value`.
    pub fn entries(&self) -> &HashMap<(usize, usize), u64> {
        &self.entries
    }

    /// Materialize as a dense matrix, for handing to a [`crate::row_reduce::RowReducer`].
    pub fn to_dense(&self) -> Vec<Vec<u64>> {
        let mut dense = vec![vec![0u64; self.cols]; self.rows];
        for (&(r, c), &v) in &self.entries {
            dense[r][c] = v;
        }
        dense
    }
}

/// Embed the local A/B parity constraints of a left-right complex into a
/// single global parity-check matrix over the complex's squares.
///
/// Each A-edge contributes `|parity_b rows|` constraints, one per row of
/// `parity_b`, applied to the row of squares sharing that A-edge. Each
/// B-edge symmetrically contributes `|parity_a rows|` constraints over the
/// column of squares sharing that B-edge.
///
/// Grounded on `graph_codes/on_square_code.py::embedding_local_parity_constraints_on_squares`.
pub fn embed_square_constraints(
    complex: &LeftRightComplex,
    parity_a: &[Vec<u64>],
    parity_b: &[Vec<u64>],
) -> Result<SparseParity> {
    log::debug!("start constraints resolution");
    let rows_a = parity_a.len();
    let rows_b = parity_b.len();
    let mut entries = HashMap::new();
    let mut row_count = 0usize;

    for (&(v, _), &k) in complex.edges_a() {
        let row_of_squares = &complex.vertex_to_squares()[v][k];
        for local_row in parity_b.iter().take(rows_b) {
            for (j, &square) in row_of_squares.iter().enumerate() {
                entries.insert((row_count, square), local_row[j]);
            }
            row_count += 1;
        }
    }
    for (&(v, _), &k) in complex.edges_b() {
        let na = complex.vertex_to_neighbors_left()[v].len();
        let column_of_squares: Vec<usize> = (0..na)
            .map(|ka| complex.vertex_to_squares()[v][ka][k])
            .collect();
        for local_row in parity_a.iter().take(rows_a) {
            for (j, &square) in column_of_squares.iter().enumerate() {
                entries.insert((row_count, square), local_row[j]);
            }
            row_count += 1;
        }
    }

    let expected = complex.edges_b().len() * rows_a + complex.edges_a().len() * rows_b;
    if row_count != expected {
        return Err(CayleyCodeError::Degenerate(format!(
            "expected {expected} constraint rows, produced {row_count}"
        )));
    }
    log::debug!("end constraints resolution, {row_count} rows");

    Ok(SparseParity {
        entries,
        rows: row_count,
        cols: complex.num_squares(),
    })
}

/// Embed a single local code's parity constraints around every vertex of a
/// Cayley graph, producing the global parity-check matrix of an expander
/// code.
///
/// Grounded on `graph_codes/on_edge_code.py::embedding_local_parity_constraints_on_edges`.
pub fn embed_edge_constraints(graph: &CayleyGraph, local_parity: &[Vec<u64>]) -> Result<SparseParity> {
    log::debug!("start constraints resolution");
    let rows_per_vertex = local_parity.len();
    let mut entries = HashMap::new();
    let mut row_count = 0usize;

    for outgoing_edges in graph.vertex_to_edges() {
        for local_row in local_parity.iter().take(rows_per_vertex) {
            for (j, &edge) in outgoing_edges.iter().enumerate() {
                entries.insert((row_count, edge), local_row[j]);
            }
            row_count += 1;
        }
    }

    let expected = graph.vertex_to_edges().len() * rows_per_vertex;
    if row_count != expected {
        return Err(CayleyCodeError::Degenerate(format!(
            "expected {expected} constraint rows, produced {row_count}"
        )));
    }
    log::debug!("end constraints resolution, {row_count} rows");

    Ok(SparseParity {
        entries,
        rows: row_count,
        cols: graph.num_edges(),
    })
}

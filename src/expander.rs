//! Expander codes on a plain Cayley graph: one small code embedded around
//! every vertex's outgoing edges. Construction only; no decoder, mirroring
//! the spec's Non-goal of a graph-only sibling used mainly as a distance/rate
//! baseline against the square code.
//!
//! Grounded on `codes/expander_code.py::ExpanderCode`.

use crate::codes::SmallCode;
use crate::embedding::embed_edge_constraints;
use crate::error::Result;
use crate::graph::CayleyGraph;
use crate::row_reduce::{DenseGaussianReducer, RowReducer};

/// A constructed expander code: its generator/parity matrices over the
/// edges of a Cayley graph, derived from a single small code applied at
/// every vertex.
#[derive(Debug, Clone)]
pub struct ExpanderCode {
    generator: Vec<Vec<u64>>,
    parity: Vec<Vec<u64>>,
    prime: u64,
    n: usize,
    k: usize,
    lambda2: f64,
}

impl ExpanderCode {
    /// Build the expander code of `graph` under `small_code`'s parity check.
    pub fn build(graph: &CayleyGraph, small_code: &dyn SmallCode) -> Result<Self> {
        log::debug!("started generating expander code");
        let embedded = embed_edge_constraints(graph, small_code.parity())?;
        let dense = embedded.to_dense();
        let reducer = DenseGaussianReducer;
        let parity = dense;
        let generator = reducer.null_space(&parity, small_code.prime());
        let n = graph.num_edges();
        let k = generator.len();
        log::debug!("finished generating expander code: k={k}, n={n}");
        Ok(ExpanderCode {
            generator,
            parity,
            prime: small_code.prime(),
            n,
            k,
            lambda2: graph.lambda2(),
        })
    }

    /// Generator matrix, shape `k x n`.
    pub fn generator(&self) -> &[Vec<u64>] {
        &self.generator
    }

    /// Parity-check matrix.
    pub fn parity(&self) -> &[Vec<u64>] {
        &self.parity
    }

    /// Field characteristic.
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Codeword length (number of edges in the graph).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Message length.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Code rate `k/n`.
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }

    /// The underlying graph's second eigenvalue.
    pub fn lambda2(&self) -> f64 {
        self.lambda2
    }
}

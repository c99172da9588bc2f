//! Cayley graphs on a single generator set.

use crate::error::{CayleyCodeError, Result};
use crate::group::{Group, GroupElement};
use nalgebra::DMatrix;

/// Index of the inverse of `gens[k]` within `gens`, assuming the paired layout
/// invariant (order-2 generators are their own inverse; others occupy
/// consecutive `(2i, 2i+1)` slots).
pub fn index_of_inverse<E: GroupElement>(gens: &[E], k: usize) -> usize {
    if gens[k].is_order_two_non_identity() {
        k
    } else if k % 2 == 1 {
        k - 1
    } else {
        k + 1
    }
}

/// A Cayley graph: vertices are group-element indices, edges come from a
/// single inverse-closed generator set `S`.
#[derive(Debug, Clone)]
pub struct CayleyGraph {
    vertex_to_edges: Vec<Vec<usize>>,
    vertex_to_neighbors: Vec<Vec<usize>>,
    num_edges: usize,
    eigenvalues: Vec<f64>,
    lambda2: f64,
}

impl CayleyGraph {
    /// Build the Cayley graph of `group` under generator set `gens`.
    ///
    /// Grounded on `graphs/cayley_utils.py::create_cayley_graph`.
    pub fn build<E: GroupElement>(group: &Group<E>, gens: &[E]) -> Result<Self> {
        log::debug!("building Cayley graph over {} generators", gens.len());
        let n = group.len();
        let s = gens.len();
        let mut vertex_to_edges = vec![vec![0usize; s]; n];
        let mut vertex_to_neighbors = vec![vec![0usize; s]; n];
        let mut edge_ids: std::collections::HashMap<(usize, usize), usize> =
            std::collections::HashMap::new();
        let mut next_id = 0usize;

        for v in 0..n {
            let g = group.element(v);
            for k in 0..s {
                let neighbor = gens[k].mul(g);
                let av = group.index_of(&neighbor).ok_or_else(|| {
                    CayleyCodeError::Degenerate("generator image not in group".to_string())
                })?;
                vertex_to_neighbors[v][k] = av;

                let (rep_k, rep_v) = if v <= av {
                    (k, v)
                } else {
                    (index_of_inverse(gens, k), av)
                };
                let key = (rep_k, rep_v);
                let id = *edge_ids.entry(key).or_insert_with(|| {
                    let id = next_id;
                    next_id += 1;
                    id
                });
                vertex_to_edges[v][k] = id;
            }
        }

        if next_id != n * s / 2 {
            return Err(CayleyCodeError::Degenerate(format!(
                "expected {} edges, got {next_id}",
                n * s / 2
            )));
        }

        let adjacency = neighbors_to_adjacency(&vertex_to_neighbors);
        let eigenvalues = normalized_eigenvalues(&adjacency);
        let lambda2 = expansion(&eigenvalues)?;

        Ok(CayleyGraph {
            vertex_to_edges,
            vertex_to_neighbors,
            num_edges: next_id,
            eigenvalues,
            lambda2,
        })
    }

    /// `vertex_to_edges[v][k]`: the edge id seen from `v` along generator `k`.
    pub fn vertex_to_edges(&self) -> &[Vec<usize>] {
        &self.vertex_to_edges
    }

    /// `vertex_to_neighbors[v][k] = S[k]·v`.
    pub fn vertex_to_neighbors(&self) -> &[Vec<usize>] {
        &self.vertex_to_neighbors
    }

    /// Total number of distinct edges, `|G|·|S|/2`.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Second-largest-magnitude normalized eigenvalue of the adjacency matrix.
    pub fn lambda2(&self) -> f64 {
        self.lambda2
    }

    /// Sorted normalized eigenvalues of the adjacency matrix.
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Whether the graph is bipartite, i.e. `-1` is an eigenvalue.
    pub fn is_bipartite(&self) -> bool {
        is_bipartite(&self.eigenvalues)
    }
}

/// Build a dense adjacency matrix from a vertex->neighbors table.
pub(crate) fn neighbors_to_adjacency(vertex_to_neighbors: &[Vec<usize>]) -> DMatrix<f64> {
    let n = vertex_to_neighbors.len();
    let mut adj = DMatrix::zeros(n, n);
    for (v, neighbors) in vertex_to_neighbors.iter().enumerate() {
        for &u in neighbors {
            adj[(v, u)] += 1.0;
        }
    }
    adj
}

/// Eigenvalues of the adjacency matrix, normalized by the largest eigenvalue
/// and sorted ascending. The adjacency matrix of a Cayley graph on an
/// inverse-closed generator set is symmetric.
pub(crate) fn normalized_eigenvalues(adjacency: &DMatrix<f64>) -> Vec<f64> {
    let eig = adjacency.clone().symmetric_eigen();
    let mut values: Vec<f64> = eig.eigenvalues.iter().copied().collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let top = *values.last().unwrap();
    values.iter().map(|v| v / top).collect()
}

/// Second-largest-magnitude eigenvalue among a sorted (ascending), normalized
/// spectrum, treating the sign of `-1` specially so bipartite graphs report
/// `λ₂ = 1`.
///
/// Grounded on `graphs/graph_utils.py::Graphs.get_expansion`.
pub(crate) fn expansion(sorted_eigenvalues: &[f64]) -> Result<f64> {
    let n = sorted_eigenvalues.len();
    if n < 2 {
        return Err(CayleyCodeError::Degenerate(
            "need at least two eigenvalues to measure expansion".to_string(),
        ));
    }
    if (sorted_eigenvalues[n - 1] - 1.0).abs() > 1e-6 {
        return Err(CayleyCodeError::Degenerate(
            "largest normalized eigenvalue is not 1".to_string(),
        ));
    }
    let mut gap = sorted_eigenvalues[n - 2]
        .abs()
        .max(sorted_eigenvalues[1].abs());
    if (sorted_eigenvalues[0] + 1.0).abs() > 1e-6 {
        gap = gap.max(sorted_eigenvalues[0].abs());
    }
    Ok(gap)
}

pub(crate) fn is_bipartite(sorted_eigenvalues: &[f64]) -> bool {
    sorted_eigenvalues
        .first()
        .map(|&v| (1.0 - v.abs()).abs() < 1e-6)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::fqm::Fqm;
    use rand::thread_rng;

    #[test]
    fn edge_count_matches_spec() {
        let g = Fqm::generate(2, 3);
        let mut rng = thread_rng();
        let gens = crate::group::generators::random_generators(&g, 2, 0, &mut rng).unwrap();
        let graph = CayleyGraph::build(&g, &gens).unwrap();
        assert_eq!(graph.num_edges(), g.len() * gens.len() / 2);
    }

    #[test]
    fn lambda2_in_unit_range() {
        let g = Fqm::generate(2, 3);
        let mut rng = thread_rng();
        let gens = crate::group::generators::random_generators(&g, 2, 0, &mut rng).unwrap();
        let graph = CayleyGraph::build(&g, &gens).unwrap();
        assert!(graph.lambda2() <= 1.0 + 1e-6);
    }
}

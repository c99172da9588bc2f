//! The left-right Cayley complex: vertices = G, edges labeled by A and B,
//! squares = Klein-four orbits of triples `(a, g, b)`.

use crate::error::{CayleyCodeError, Result};
use crate::graph::{expansion, is_bipartite, neighbors_to_adjacency, normalized_eigenvalues};
use crate::group::{Group, GroupElement};
use rayon::prelude::*;
use std::collections::HashMap;

/// One vertex's candidate square for a fixed `(ka, kb)`: its canonicalized
/// triple, the alternate triple to check when TNC is violated, and its four
/// vertices. Computed independently per `(v, ka, kb)` so the resolution loop
/// can run in parallel; only the shared `squares` map is filled sequentially.
struct SquareCandidate {
    v: usize,
    ka: usize,
    kb: usize,
    key: (usize, usize, usize),
    alt_key: Option<(usize, usize, usize)>,
    vertices: [usize; 4],
}

/// The left-right Cayley complex built from a group and two inverse-closed
/// generator sets `A`, `B`.
///
/// Grounded on `graphs/lr_cayley_utils.py::create_lr_cayley_graph_new`.
#[derive(Debug, Clone)]
pub struct LeftRightComplex {
    vertex_to_squares: Vec<Vec<Vec<usize>>>,
    square_to_vertices: Vec<[usize; 4]>,
    vertex_to_neighbors_left: Vec<Vec<usize>>,
    vertex_to_neighbors_right: Vec<Vec<usize>>,
    edges_a: HashMap<(usize, usize), usize>,
    edges_b: HashMap<(usize, usize), usize>,
    tnc_held: bool,
    lambda2_a: f64,
    lambda2_b: f64,
    eigenvalues_a: Vec<f64>,
    eigenvalues_b: Vec<f64>,
}

impl LeftRightComplex {
    /// Build the complex for `group` under generator sets `gens_a`, `gens_b`.
    pub fn build<E: GroupElement>(group: &Group<E>, gens_a: &[E], gens_b: &[E]) -> Result<Self> {
        log::debug!(
            "building left-right complex: |G|={}, |A|={}, |B|={}",
            group.len(),
            gens_a.len(),
            gens_b.len()
        );
        let n = group.len();
        let na = gens_a.len();
        let nb = gens_b.len();

        let gens_a_index: HashMap<&E, usize> =
            gens_a.iter().enumerate().map(|(i, e)| (e, i)).collect();
        let gens_b_index: HashMap<&E, usize> =
            gens_b.iter().enumerate().map(|(i, e)| (e, i)).collect();

        let mut vertex_to_squares = vec![vec![vec![0usize; nb]; na]; n];
        let mut vertex_to_neighbors_left = vec![vec![0usize; na]; n];
        let mut vertex_to_neighbors_right = vec![vec![0usize; nb]; n];
        let mut edges_a = HashMap::new();
        let mut edges_b = HashMap::new();
        let mut squares: HashMap<(usize, usize, usize), usize> = HashMap::new();
        let mut square_to_vertices = Vec::new();

        for v in 0..n {
            let g = group.element(v);

            for ka in 0..na {
                let ag = gens_a[ka].mul(g);
                let av = group
                    .index_of(&ag)
                    .ok_or_else(|| CayleyCodeError::Degenerate("A-neighbor not in G".into()))?;
                vertex_to_neighbors_left[v][ka] = av;
                if v < av {
                    edges_a.insert((v, av), ka);
                }
            }
            for kb in 0..nb {
                let gb = g.mul(&gens_b[kb]);
                let vb = group
                    .index_of(&gb)
                    .ok_or_else(|| CayleyCodeError::Degenerate("B-neighbor not in G".into()))?;
                vertex_to_neighbors_right[v][kb] = vb;
                if v < vb {
                    edges_b.insert((v, vb), kb);
                }
            }

        }

        // The per-(v, ka, kb) canonicalization only reads the group and its
        // generators, so it runs in parallel; the result order matches the
        // sequential nested loop, which the squares-map merge below depends on.
        let gens_a_index = &gens_a_index;
        let gens_b_index = &gens_b_index;
        let candidates: Vec<Result<SquareCandidate>> = (0..n)
            .into_par_iter()
            .flat_map(|v| {
                let g = group.element(v);
                (0..na).into_par_iter().flat_map(move |ka| {
                    (0..nb).into_par_iter().map(move |kb| {
                        let (a1, g1, b1) = canonical_square(ka, g, kb, gens_a, gens_b, group)?;
                        let v1 = group.index_of(&g1).unwrap();
                        let a1v1 = group.index_of(&gens_a[a1].mul(&g1)).unwrap();
                        let a1v1b1 = group
                            .index_of(&gens_a[a1].mul(&g1).mul(&gens_b[b1]))
                            .unwrap();
                        let v1b1 = group.index_of(&g1.mul(&gens_b[b1])).unwrap();
                        let vertices = [v1, a1v1, a1v1b1, v1b1];
                        let key = (a1, v1, b1);

                        // TNC violation: the 4-cycle degenerates (v1 == a1v1b1); the
                        // orbit may already be recorded under the alternate triple.
                        let alt_key = if v1 == a1v1b1 {
                            let alt_a = g1.mul(&gens_b[b1]).mul(&g1.inverse());
                            let alt_b = g1.inverse().mul(&gens_a[a1]).mul(&g1);
                            match (gens_a_index.get(&alt_a), gens_b_index.get(&alt_b)) {
                                (Some(&alt_a_idx), Some(&alt_b_idx)) => {
                                    Some((alt_a_idx, v1, alt_b_idx))
                                }
                                _ => None,
                            }
                        } else {
                            None
                        };

                        Ok(SquareCandidate {
                            v,
                            ka,
                            kb,
                            key,
                            alt_key,
                            vertices,
                        })
                    })
                })
            })
            .collect();

        for candidate in candidates {
            let candidate = candidate?;
            let mut square_id = squares.get(&candidate.key).copied();
            if square_id.is_none() {
                if let Some(alt_key) = candidate.alt_key {
                    square_id = squares.get(&alt_key).copied();
                }
            }

            let square_id = square_id.unwrap_or_else(|| {
                let id = square_to_vertices.len();
                squares.insert(candidate.key, id);
                square_to_vertices.push(candidate.vertices);
                id
            });

            vertex_to_squares[candidate.v][candidate.ka][candidate.kb] = square_id;
        }

        let expected_edges_a = n * na / 2;
        let expected_edges_b = n * nb / 2;
        if edges_a.len() != expected_edges_a || edges_b.len() != expected_edges_b {
            return Err(CayleyCodeError::Degenerate(format!(
                "expected {expected_edges_a} A-edges and {expected_edges_b} B-edges, got {} and {}",
                edges_a.len(),
                edges_b.len()
            )));
        }

        let expected_squares = na * nb * n / 4;
        let actual_squares = square_to_vertices.len();
        if actual_squares > expected_squares {
            return Err(CayleyCodeError::Degenerate(format!(
                "expected at most {expected_squares} squares, got {actual_squares}"
            )));
        }
        let tnc_held = actual_squares == expected_squares;

        let adj_a = neighbors_to_adjacency(&vertex_to_neighbors_left);
        let adj_b = neighbors_to_adjacency(&vertex_to_neighbors_right);
        let eigenvalues_a = normalized_eigenvalues(&adj_a);
        let eigenvalues_b = normalized_eigenvalues(&adj_b);
        let lambda2_a = expansion(&eigenvalues_a)?;
        let lambda2_b = expansion(&eigenvalues_b)?;

        log::debug!(
            "finished left-right complex: {} squares (TNC held = {tnc_held})",
            square_to_vertices.len()
        );

        Ok(LeftRightComplex {
            vertex_to_squares,
            square_to_vertices,
            vertex_to_neighbors_left,
            vertex_to_neighbors_right,
            edges_a,
            edges_b,
            tnc_held,
            lambda2_a,
            lambda2_b,
            eigenvalues_a,
            eigenvalues_b,
        })
    }

    /// `vertex_to_squares[v][i][j]`: id of the canonical square containing
    /// `(A[i], g_v, B[j])`.
    pub fn vertex_to_squares(&self) -> &[Vec<Vec<usize>>] {
        &self.vertex_to_squares
    }

    /// `square_to_vertices[s] = (v, av, avb, vb)` for the canonical representative.
    pub fn square_to_vertices(&self) -> &[[usize; 4]] {
        &self.square_to_vertices
    }

    /// Length-`|A|` array of A-neighbors of each vertex.
    pub fn vertex_to_neighbors_left(&self) -> &[Vec<usize>] {
        &self.vertex_to_neighbors_left
    }

    /// Length-`|B|` array of B-neighbors of each vertex.
    pub fn vertex_to_neighbors_right(&self) -> &[Vec<usize>] {
        &self.vertex_to_neighbors_right
    }

    /// `(v_low, v_high) -> k` such that `A[k]·v_low = v_high`.
    pub fn edges_a(&self) -> &HashMap<(usize, usize), usize> {
        &self.edges_a
    }

    /// `(v_low, v_high) -> k` such that `v_low·B[k] = v_high`.
    pub fn edges_b(&self) -> &HashMap<(usize, usize), usize> {
        &self.edges_b
    }

    /// Total number of squares. Equals `|A|·|B|·|G|/4` iff TNC held.
    pub fn num_squares(&self) -> usize {
        self.square_to_vertices.len()
    }

    /// Number of vertices (= `|G|`).
    pub fn num_vertices(&self) -> usize {
        self.vertex_to_squares.len()
    }

    /// Whether the construction hit no TNC-violating (degenerate) square.
    pub fn tnc_held(&self) -> bool {
        self.tnc_held
    }

    /// `max(λ₂_A, λ₂_B)`.
    pub fn lambda2(&self) -> f64 {
        self.lambda2_a.max(self.lambda2_b)
    }

    /// Expansion of the A-neighbor adjacency matrix.
    pub fn lambda2_a(&self) -> f64 {
        self.lambda2_a
    }

    /// Expansion of the B-neighbor adjacency matrix.
    pub fn lambda2_b(&self) -> f64 {
        self.lambda2_b
    }

    /// Whether the A-side neighbor graph is bipartite.
    pub fn is_bipartite_a(&self) -> bool {
        is_bipartite(&self.eigenvalues_a)
    }

    /// Whether the B-side neighbor graph is bipartite.
    pub fn is_bipartite_b(&self) -> bool {
        is_bipartite(&self.eigenvalues_b)
    }

    /// Gather the `|A|x|B|` local view of `word` around vertex `v`.
    pub fn local_view(&self, v: usize, word: &[u64]) -> Vec<Vec<u64>> {
        self.vertex_to_squares[v]
            .iter()
            .map(|row| row.iter().map(|&s| word[s]).collect())
            .collect()
    }

    /// The two A-edges and two B-edges surrounding a square, derived from its
    /// four vertices `(v, av, avb, vb)`.
    ///
    /// Grounded on `codes/c3ltc_utils.py::get_edges_around_square`.
    pub fn edges_around_square(
        &self,
        square_id: usize,
    ) -> ([(usize, usize); 2], [(usize, usize); 2]) {
        let [v, av, avb, vb] = self.square_to_vertices[square_id];
        let edges_a = [
            (v.min(av), v.max(av)),
            (vb.min(avb), vb.max(avb)),
        ];
        let edges_b = [
            (av.min(avb), av.max(avb)),
            (v.min(vb), v.max(vb)),
        ];
        (edges_a, edges_b)
    }
}

/// Pick the canonical `(a, g, b)` triple representing a square's Klein-four
/// orbit: the representative whose middle vertex has minimal index among the
/// four vertices of the 4-cycle.
///
/// Grounded on `graphs/lr_cayley_utils.py::get_square_unique_representation`.
fn canonical_square<E: GroupElement>(
    ka: usize,
    g: &E,
    kb: usize,
    gens_a: &[E],
    gens_b: &[E],
    group: &Group<E>,
) -> Result<(usize, E, usize)> {
    let a = &gens_a[ka];
    let b = &gens_b[kb];
    let ka_inv = crate::graph::index_of_inverse(gens_a, ka);
    let kb_inv = crate::graph::index_of_inverse(gens_b, kb);
    let ag = a.mul(g);
    let agb = ag.mul(b);
    let gb = g.mul(b);

    let not_found = || CayleyCodeError::Degenerate("square vertex not in group".to_string());
    let v_g = group.index_of(g).ok_or_else(not_found)?;
    let v_ag = group.index_of(&ag).ok_or_else(not_found)?;
    let v_agb = group.index_of(&agb).ok_or_else(not_found)?;
    let v_gb = group.index_of(&gb).ok_or_else(not_found)?;

    let min_v = v_g.min(v_ag).min(v_agb).min(v_gb);
    if min_v == v_g {
        Ok((ka, g.clone(), kb))
    } else if min_v == v_ag {
        Ok((ka_inv, ag, kb))
    } else if min_v == v_agb {
        Ok((ka_inv, agb, kb_inv))
    } else {
        Ok((ka, gb, kb_inv))
    }
}

//! Global decoders over a full square-code word: correct by propagating
//! local corrections either along the edges or around each vertex's tensor
//! view, until a fixed point or a repeated state is reached.
//!
//! Grounded on `codes/c3ltc_utils.py::decode_along_the_edges` and
//! `decode_along_the_vertices`. Both loops there decode an A-edge's row of
//! squares (length `n_B`) against `local_parity_check_A` and a B-edge's
//! column (length `n_A`) against `local_parity_check_B`, which is
//! transposed from the convention the embedding and `is_matrix_in_tensor_code`
//! actually use; this port decodes A-edges against `code_b` and B-edges
//! against `code_a` to match. The B-edge loop there also tests a stale
//! `e_a` left over from the preceding `for e_a in e_A` loop instead of the
//! current edge `e`, which silently drops a legitimate suspect edge; fixed
//! here to compare against `e`.

use super::tensor::tensor_code_decoding;
use crate::codes::SmallCode;
use crate::complex::LeftRightComplex;
use rayon::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_word(word: &[u64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    word.hash(&mut hasher);
    hasher.finish()
}

/// Correct `noisy_word` (one value per square) by propagating local
/// corrections along the edges of the complex: each A-edge's row of squares
/// is decoded against `code_b`, each B-edge's column against `code_a`.
pub fn decode_along_the_edges(
    noisy_word: &[u64],
    complex: &LeftRightComplex,
    code_a: &dyn SmallCode,
    code_b: &dyn SmallCode,
) -> Vec<u64> {
    let mut word = noisy_word.to_vec();
    let mut suspect_edges_a: HashSet<(usize, usize)> = complex.edges_a().keys().copied().collect();
    let mut suspect_edges_b: HashSet<(usize, usize)> = complex.edges_b().keys().copied().collect();
    let mut past_states: HashSet<u64> = HashSet::new();
    let mut state = hash_word(&word);

    while (!suspect_edges_a.is_empty() || !suspect_edges_b.is_empty())
        && !past_states.contains(&state)
    {
        log::trace!("edge decoding, nonzero entries = {}", word.iter().filter(|&&x| x != 0).count());
        past_states.insert(state);
        let mut new_suspect_a: HashSet<(usize, usize)> = HashSet::new();
        let mut new_suspect_b: HashSet<(usize, usize)> = HashSet::new();

        for &edge in &suspect_edges_a {
            let v = edge.0;
            let k = complex.edges_a()[&edge];
            let local_square_ids = complex.vertex_to_squares()[v][k].clone();
            let local_values: Vec<u64> = local_square_ids.iter().map(|&s| word[s]).collect();
            let Ok(corrected) = code_b.decode(&local_values) else {
                continue;
            };
            for (i, &square_id) in local_square_ids.iter().enumerate() {
                if word[square_id] != corrected[i] {
                    let (edges_a_sq, edges_b_sq) = complex.edges_around_square(square_id);
                    for e_a in edges_a_sq {
                        if e_a != edge {
                            new_suspect_a.insert(e_a);
                        }
                    }
                    for e_b in edges_b_sq {
                        new_suspect_b.insert(e_b);
                    }
                }
                word[square_id] = corrected[i];
            }
        }
        for &edge in &suspect_edges_b {
            let v = edge.0;
            let k = complex.edges_b()[&edge];
            let na = complex.vertex_to_neighbors_left()[v].len();
            let local_square_ids: Vec<usize> = (0..na)
                .map(|ka| complex.vertex_to_squares()[v][ka][k])
                .collect();
            let local_values: Vec<u64> = local_square_ids.iter().map(|&s| word[s]).collect();
            let Ok(corrected) = code_a.decode(&local_values) else {
                continue;
            };
            for (i, &square_id) in local_square_ids.iter().enumerate() {
                if word[square_id] != corrected[i] {
                    let (edges_a_sq, edges_b_sq) = complex.edges_around_square(square_id);
                    for e_a in edges_a_sq {
                        new_suspect_a.insert(e_a);
                    }
                    for e_b in edges_b_sq {
                        if e_b != edge {
                            new_suspect_b.insert(e_b);
                        }
                    }
                }
                word[square_id] = corrected[i];
            }
        }

        suspect_edges_a = new_suspect_a;
        suspect_edges_b = new_suspect_b;
        state = hash_word(&word);
    }
    word
}

/// Correct `noisy_word` by visiting each vertex's full `|A| x |B|` tensor
/// view, running [`tensor_code_decoding`] there, and re-queuing every vertex
/// touched by a changed square.
pub fn decode_along_the_vertices(
    noisy_word: &[u64],
    complex: &LeftRightComplex,
    code_a: &dyn SmallCode,
    code_b: &dyn SmallCode,
) -> Vec<u64> {
    let mut word = noisy_word.to_vec();
    let mut suspect_vertices: HashSet<usize> = (0..complex.num_vertices()).collect();
    let mut past_states: HashSet<u64> = HashSet::new();
    let mut state = hash_word(&word);

    while !suspect_vertices.is_empty() && !past_states.contains(&state) {
        log::trace!("vertex decoding, nonzero entries = {}", word.iter().filter(|&&x| x != 0).count());
        past_states.insert(state);
        let mut new_suspect_vertices: HashSet<usize> = HashSet::new();

        // Every vertex's local decode only reads `word`, so the sweep runs in
        // parallel; writes back into `word` are merged sequentially below to
        // keep the per-sweep fixed point deterministic.
        let corrections: Vec<(usize, &[Vec<usize>], Vec<Vec<u64>>)> = suspect_vertices
            .par_iter()
            .map(|&v| {
                let local_view = complex.local_view(v, &word);
                let corrected = tensor_code_decoding(&local_view, code_a, code_b);
                (v, complex.vertex_to_squares()[v].as_slice(), corrected)
            })
            .collect();

        for (v, local_square_ids, corrected) in corrections {
            for (i, row) in local_square_ids.iter().enumerate() {
                for (j, &square_id) in row.iter().enumerate() {
                    if word[square_id] != corrected[i][j] {
                        for &touched in &complex.square_to_vertices()[square_id] {
                            if touched != v {
                                new_suspect_vertices.insert(touched);
                            }
                        }
                    }
                    word[square_id] = corrected[i][j];
                }
            }
        }

        suspect_vertices = new_suspect_vertices;
        state = hash_word(&word);
    }
    word
}

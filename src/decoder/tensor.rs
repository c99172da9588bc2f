//! Tensor-code decoding of a local `n_A x n_B` view: alternate decoding rows
//! against `C_B` and columns against `C_A`, tracking only the rows/columns a
//! change might have invalidated.
//!
//! Grounded on `codes/tensor_code_utils.py::tensor_code_decoding` and
//! `is_matrix_in_tensor_code`. The column-decode loop there indexes the
//! decoded column by the outer column variable instead of the row index,
//! which both compares against the wrong entry and replays a column index
//! into the suspect-row set; this port indexes by row throughout.

use crate::codes::SmallCode;
use crate::field::reduce;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn parity_satisfied(parity: &[Vec<u64>], vector: &[u64], prime: u64) -> bool {
    parity.iter().all(|row| {
        let acc: i64 = row
            .iter()
            .zip(vector)
            .map(|(&c, &v)| c as i64 * v as i64)
            .sum();
        reduce(acc, prime) == 0
    })
}

/// Whether `matrix` lies in `C_A ⊗ C_B`: every row satisfies `C_B`'s parity
/// check and every column satisfies `C_A`'s.
pub fn is_matrix_in_tensor_code(
    matrix: &[Vec<u64>],
    code_a: &dyn SmallCode,
    code_b: &dyn SmallCode,
) -> bool {
    let prime = code_a.prime();
    if matrix.iter().any(|row| !parity_satisfied(code_b.parity(), row, prime)) {
        return false;
    }
    let cols = matrix.first().map_or(0, |r| r.len());
    (0..cols).all(|j| {
        let column: Vec<u64> = matrix.iter().map(|row| row[j]).collect();
        parity_satisfied(code_a.parity(), &column, prime)
    })
}

fn hash_matrix(matrix: &[Vec<u64>]) -> u64 {
    let mut hasher = DefaultHasher::new();
    matrix.hash(&mut hasher);
    hasher.finish()
}

/// Alternately decode rows (via `code_b`) and columns (via `code_a`) of a
/// local view until a fixed point, a repeated state, or the matrix is
/// already a tensor codeword. A local decoding failure leaves that row or
/// column untouched rather than aborting the whole pass.
pub fn tensor_code_decoding(
    noisy_word: &[Vec<u64>],
    code_a: &dyn SmallCode,
    code_b: &dyn SmallCode,
) -> Vec<Vec<u64>> {
    let mut word = noisy_word.to_vec();
    if is_matrix_in_tensor_code(&word, code_a, code_b) {
        return word;
    }
    let n_a = word.len();
    let n_b = word.first().map_or(0, |r| r.len());

    for row in word.iter_mut() {
        if let Ok(decoded) = code_b.decode(row) {
            *row = decoded;
        }
    }

    let mut suspect_rows: HashSet<usize> = HashSet::new();
    let mut suspect_columns: HashSet<usize> = (0..n_b).collect();
    let mut past_states: HashSet<u64> = HashSet::new();
    let mut state = hash_matrix(&word);

    while (!suspect_rows.is_empty() || !suspect_columns.is_empty()) && !past_states.contains(&state)
    {
        past_states.insert(state);

        let mut new_suspect_rows = HashSet::new();
        for &j in &suspect_columns {
            let column: Vec<u64> = (0..n_a).map(|i| word[i][j]).collect();
            if let Ok(decoded_column) = code_a.decode(&column) {
                for i in 0..n_a {
                    if word[i][j] != decoded_column[i] {
                        new_suspect_rows.insert(i);
                    }
                    word[i][j] = decoded_column[i];
                }
            }
        }
        suspect_rows = new_suspect_rows;

        let mut new_suspect_columns = HashSet::new();
        for &i in &suspect_rows {
            let row = word[i].clone();
            if let Ok(decoded_row) = code_b.decode(&row) {
                for j in 0..n_b {
                    if word[i][j] != decoded_row[j] {
                        new_suspect_columns.insert(j);
                    }
                    word[i][j] = decoded_row[j];
                }
            }
        }
        suspect_columns = new_suspect_columns;
        state = hash_matrix(&word);
    }

    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::reed_solomon::reed_solomon_code;

    /// Build a genuine `C_A ⊗ C_B` codeword from a `k_a x k_b` message: encode
    /// each column with `code_a`, then each resulting row with `code_b`.
    fn tensor_codeword(
        code_a: &crate::codes::LinearCode,
        code_b: &crate::codes::LinearCode,
        data: &[Vec<u64>],
    ) -> Vec<Vec<u64>> {
        let k_b = data[0].len();
        let n_a = code_a.n();
        let mut intermediate = vec![vec![0u64; k_b]; n_a];
        for c in 0..k_b {
            let column: Vec<u64> = data.iter().map(|row| row[c]).collect();
            let encoded = code_a.encode(&column);
            for i in 0..n_a {
                intermediate[i][c] = encoded[i];
            }
        }
        intermediate
            .iter()
            .map(|row| code_b.encode(row))
            .collect()
    }

    #[test]
    fn already_valid_matrix_is_returned_unchanged() {
        let code_a = reed_solomon_code(5, 3, 7).unwrap();
        let code_b = reed_solomon_code(5, 3, 7).unwrap();
        let data = vec![vec![1, 2, 3], vec![4, 5, 6], vec![0, 1, 2]];
        let matrix = tensor_codeword(&code_a, &code_b, &data);
        assert!(is_matrix_in_tensor_code(&matrix, &code_a, &code_b));
        let decoded = tensor_code_decoding(&matrix, &code_a, &code_b);
        assert_eq!(decoded, matrix);
    }

    #[test]
    fn single_entry_error_is_corrected() {
        let code_a = reed_solomon_code(5, 2, 7).unwrap();
        let code_b = reed_solomon_code(5, 2, 7).unwrap();
        let data = vec![vec![1, 2], vec![3, 4]];
        let matrix = tensor_codeword(&code_a, &code_b, &data);
        let mut noisy = matrix.clone();
        noisy[0][0] = (noisy[0][0] + 1) % 7;
        let decoded = tensor_code_decoding(&noisy, &code_a, &code_b);
        assert_eq!(decoded, matrix);
    }
}

//! Row-reduction oracle over a prime field: reduced row-echelon form and
//! null-space bases, plus the sparse-matrix text format used to hand matrices
//! to and from that oracle.
//!
//! The original implementation treats row reduction as an external call into
//! `galois.GF(prime)(...).null_space()`. Here the oracle is a real trait with
//! one concrete dense Gaussian-elimination backing, so the rest of the crate
//! never depends on anything outside this module.

use crate::error::{CayleyCodeError, Result};
use crate::field::{inv_mod, mul_mod, reduce};
use std::io::{BufRead, Write};

/// A matrix over F_p, reducible to row-echelon form and with an extractable
/// null space. Implementors may back this with a dense or sparse scheme.
pub trait RowReducer {
    /// Reduced row-echelon form of `matrix` over `F_p`, and the indices of
    /// its pivot columns in order.
    fn row_echelon(&self, matrix: &[Vec<u64>], prime: u64) -> (Vec<Vec<u64>>, Vec<usize>);

    /// A basis for the right null space of `matrix` over `F_p`: each row of
    /// the result `v` satisfies `matrix · v^T ≡ 0 (mod p)`.
    fn null_space(&self, matrix: &[Vec<u64>], prime: u64) -> Vec<Vec<u64>>;
}

/// Dense Gaussian elimination over `F_p`, for matrices small enough that a
/// full `Vec<Vec<u64>>` representation is practical.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenseGaussianReducer;

impl RowReducer for DenseGaussianReducer {
    fn row_echelon(&self, matrix: &[Vec<u64>], prime: u64) -> (Vec<Vec<u64>>, Vec<usize>) {
        let mut m: Vec<Vec<i64>> = matrix
            .iter()
            .map(|row| row.iter().map(|&x| x as i64).collect())
            .collect();
        if m.is_empty() {
            return (Vec::new(), Vec::new());
        }
        let rows = m.len();
        let cols = m[0].len();
        let mut pivots = Vec::new();
        let mut pivot_row = 0;

        for col in 0..cols {
            if pivot_row >= rows {
                break;
            }
            let chosen = (pivot_row..rows).find(|&r| reduce(m[r][col], prime) != 0);
            let Some(chosen) = chosen else { continue };
            m.swap(pivot_row, chosen);

            let inv = inv_mod(reduce(m[pivot_row][col], prime), prime);
            for c in 0..cols {
                m[pivot_row][c] = mul_mod(m[pivot_row][c], inv as i64, prime) as i64;
            }
            for r in 0..rows {
                if r == pivot_row {
                    continue;
                }
                let factor = reduce(m[r][col], prime);
                if factor == 0 {
                    continue;
                }
                for c in 0..cols {
                    let sub = mul_mod(factor as i64, m[pivot_row][c], prime);
                    m[r][c] = reduce(m[r][c] - sub as i64, prime) as i64;
                }
            }
            pivots.push(col);
            pivot_row += 1;
        }

        let echelon: Vec<Vec<u64>> = m
            .into_iter()
            .map(|row| row.into_iter().map(|x| reduce(x, prime)).collect())
            .collect();
        (echelon, pivots)
    }

    fn null_space(&self, matrix: &[Vec<u64>], prime: u64) -> Vec<Vec<u64>> {
        if matrix.is_empty() {
            return Vec::new();
        }
        let cols = matrix[0].len();
        let (echelon, pivots) = self.row_echelon(matrix, prime);
        let pivot_set: std::collections::HashSet<usize> = pivots.iter().copied().collect();
        let free_cols: Vec<usize> = (0..cols).filter(|c| !pivot_set.contains(c)).collect();

        let mut basis = Vec::with_capacity(free_cols.len());
        for &free in &free_cols {
            let mut vector = vec![0u64; cols];
            vector[free] = 1;
            for (row_idx, &pivot_col) in pivots.iter().enumerate() {
                let coeff = echelon[row_idx][free];
                if coeff != 0 {
                    vector[pivot_col] = reduce(-(coeff as i64), prime);
                }
            }
            basis.push(vector);
        }
        basis
    }
}

/// Write a matrix to the sparse text format: a `rows cols nonzeros` header,
/// one 1-based `row col value` triple per nonzero entry, and a `0 0 0`
/// trailer.
pub fn write_sparse_matrix<W: Write>(mut out: W, matrix: &[Vec<u64>]) -> Result<()> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, |r| r.len());
    let nonzeros: usize = matrix.iter().flatten().filter(|&&x| x != 0).count();
    writeln!(out, "{rows} {cols} {nonzeros}")?;
    for (r, row) in matrix.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v != 0 {
                writeln!(out, "{} {} {v}", r + 1, c + 1)?;
            }
        }
    }
    writeln!(out, "0 0 0")?;
    Ok(())
}

/// Read the sparse text format written by [`write_sparse_matrix`] back into a
/// dense matrix.
pub fn read_sparse_matrix<R: BufRead>(input: R) -> Result<Vec<Vec<u64>>> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| CayleyCodeError::SerializationError("missing header line".to_string()))??;
    let mut parts = header.split_whitespace();
    let parse_usize = |s: Option<&str>| -> Result<usize> {
        s.and_then(|v| v.parse().ok()).ok_or_else(|| {
            CayleyCodeError::SerializationError("malformed sparse matrix header".to_string())
        })
    };
    let rows = parse_usize(parts.next())?;
    let cols = parse_usize(parts.next())?;
    let _nonzeros = parse_usize(parts.next())?;

    let mut matrix = vec![vec![0u64; cols]; rows];
    for line in lines {
        let line = line?;
        let mut parts = line.split_whitespace();
        let r: i64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| CayleyCodeError::SerializationError("malformed triple".to_string()))?;
        let c: i64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| CayleyCodeError::SerializationError("malformed triple".to_string()))?;
        let v: u64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| CayleyCodeError::SerializationError("malformed triple".to_string()))?;
        if r == 0 && c == 0 && v == 0 {
            break;
        }
        matrix[(r - 1) as usize][(c - 1) as usize] = v;
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_space_vectors_are_annihilated() {
        let reducer = DenseGaussianReducer;
        let matrix = vec![vec![1, 1, 0], vec![0, 1, 1]];
        let basis = reducer.null_space(&matrix, 2);
        assert_eq!(basis.len(), 1);
        for vector in &basis {
            for row in &matrix {
                let dot: i64 = row.iter().zip(vector).map(|(&a, &b)| a as i64 * b as i64).sum();
                assert_eq!(reduce(dot, 2), 0);
            }
        }
    }

    #[test]
    fn sparse_round_trip_preserves_values() {
        let matrix = vec![vec![0, 3, 0], vec![5, 0, 0]];
        let mut buf = Vec::new();
        write_sparse_matrix(&mut buf, &matrix).unwrap();
        let parsed = read_sparse_matrix(&buf[..]).unwrap();
        assert_eq!(parsed, matrix);
    }
}

//! Reed-Solomon codes over `F_p`, built from a Vandermonde-style generator
//! matrix and its null space.
//!
//! Grounded on `local_codes/rs_code.py::ReedSolomonCode`.

use super::LinearCode;
use crate::error::{CayleyCodeError, Result};
use crate::field::pow_mod;
use crate::row_reduce::{DenseGaussianReducer, RowReducer};

/// Build the `[n, k]` Reed-Solomon code over `F_p`: generator row `i`,
/// column `j` is `j^i mod p`; the parity matrix is the null space of the
/// generator.
pub fn reed_solomon_code(n: usize, k: usize, prime: u64) -> Result<LinearCode> {
    if k == 0 || k > n {
        return Err(CayleyCodeError::InvalidParameters(format!(
            "Reed-Solomon code needs 0 < k <= n, got k={k}, n={n}"
        )));
    }
    let generator: Vec<Vec<u64>> = (0..k)
        .map(|i| (0..n).map(|j| pow_mod(j as u64, i as u64, prime)).collect())
        .collect();
    let parity = DenseGaussianReducer.null_space(&generator, prime);
    let name = format!("RS_q_{prime}_n_{n}_k_{k}");
    Ok(LinearCode::new(
        generator,
        parity,
        prime,
        None,
        Some(n - k + 1),
        name,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::SmallCode;

    #[test]
    fn generator_rows_are_orthogonal_to_parity() {
        let code = reed_solomon_code(7, 4, 7).unwrap();
        for message_row in code.generator() {
            for parity_row in code.parity() {
                let dot: i64 = message_row
                    .iter()
                    .zip(parity_row)
                    .map(|(&a, &b)| a as i64 * b as i64)
                    .sum();
                assert_eq!(crate::field::reduce(dot, 7), 0);
            }
        }
    }

    #[test]
    fn rejects_k_larger_than_n() {
        assert!(reed_solomon_code(3, 5, 7).is_err());
    }
}

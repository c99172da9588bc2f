//! The general binary Hamming code: columns of the parity matrix are every
//! nonzero bit pattern of a fixed length.
//!
//! Grounded on `local_codes/ghc.py::GeneralHammingCode`.

use super::LinearCode;
use crate::error::{CayleyCodeError, Result};
use crate::row_reduce::{DenseGaussianReducer, RowReducer};

/// Build the general Hamming code with `n` parity bits: block length
/// `2^n - 1`, one column per nonzero bit pattern of length `n`, generator
/// taken as the null space of that parity matrix.
pub fn general_hamming_code(n: usize) -> Result<LinearCode> {
    if n == 0 || n > 20 {
        return Err(CayleyCodeError::InvalidParameters(
            "general Hamming code parity width must be in 1..=20".to_string(),
        ));
    }
    let cols = (1usize << n) - 1;
    let mut parity = vec![vec![0u64; cols]; n];
    for m in 1..=cols {
        for row in 0..n {
            let bit = (m >> (n - 1 - row)) & 1;
            parity[row][m - 1] = bit as u64;
        }
    }
    let generator = DenseGaussianReducer.null_space(&parity, 2);
    let name = format!("GHC_n_{n}");
    Ok(LinearCode::new(generator, parity, 2, None, Some(3), name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::SmallCode;

    #[test]
    fn block_length_matches_two_to_the_n_minus_one() {
        let code = general_hamming_code(3).unwrap();
        assert_eq!(code.n(), 7);
        assert_eq!(code.k(), 4);
    }
}

//! Random linear codes over `F_p`, resampled until a minimum distance of at
//! least 3 is achieved.
//!
//! Grounded on `local_codes/rlc.py::RandomLinearCode`.

use super::{LinearCode, SmallCode};
use crate::error::{CayleyCodeError, Result};
use crate::row_reduce::{DenseGaussianReducer, RowReducer};
use rand::Rng;

const MAX_ATTEMPTS: usize = 1_000;

/// Sample a random `(n-k) x n` parity matrix over `F_p`, take its null space
/// as the generator, and retry until the resulting code has minimum distance
/// at least 3 and the generator has the expected `k x n` shape.
pub fn random_linear_code<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    prime: u64,
    rng: &mut R,
) -> Result<LinearCode> {
    if k == 0 || k > n {
        return Err(CayleyCodeError::InvalidParameters(format!(
            "random linear code needs 0 < k <= n, got k={k}, n={n}"
        )));
    }
    let name = format!("RLC_q_{prime}_n_{n}_k_{k}");
    for _ in 0..MAX_ATTEMPTS {
        let parity: Vec<Vec<u64>> = (0..(n - k))
            .map(|_| (0..n).map(|_| rng.gen_range(0..prime)).collect())
            .collect();
        let generator = DenseGaussianReducer.null_space(&parity, prime);
        if generator.len() != k {
            continue;
        }
        let candidate = LinearCode::new(generator, parity, prime, None, None, name.clone());
        let min_dist = match candidate.min_distance() {
            Ok(d) => d,
            Err(_) => continue,
        };
        if min_dist < 3 {
            continue;
        }
        let (generator, parity) = (candidate.generator().to_vec(), candidate.parity().to_vec());
        let mut code = LinearCode::new(generator, parity, prime, None, Some(min_dist), name.clone());
        code.build_syndrome_table()?;
        return Ok(code);
    }
    Err(CayleyCodeError::InvalidParameters(format!(
        "could not find a distance-3 random linear [{n},{k}] code over F_{prime} in {MAX_ATTEMPTS} attempts"
    )))
}

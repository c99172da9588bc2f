//! Shared helpers for the integration tests in this directory: sparse random
//! errors and noisy codewords, built over any code's generator matrix.
//!
//! Grounded on `testing/errors.py::get_random_error`,
//! `get_noisy_zero_codeword`, `get_noisy_codeword`.

use cayley_codes::field::reduce;
use cayley_codes::{LinearCode, SmallCode};
use rand::Rng;

/// A length-`n` vector over `F_p`, mostly zero: each entry is nonzero only
/// when three independent coin flips all land heads, the same density the
/// original's `get_random_error` produces via a product of `randint(0,1)`s.
pub fn random_sparse_error<R: Rng + ?Sized>(n: usize, prime: u64, rng: &mut R) -> Vec<u64> {
    (0..n)
        .map(|_| {
            let value = rng.gen_range(0..prime);
            let bits = rng.gen_bool(0.5) as u64 * rng.gen_bool(0.5) as u64 * rng.gen_bool(0.5) as u64;
            reduce((value * bits) as i64, prime)
        })
        .collect()
}

/// The zero codeword perturbed by a sparse `{0,1}`-valued error.
pub fn noisy_zero_codeword<R: Rng + ?Sized>(n: usize, prime: u64, rng: &mut R) -> Vec<u64> {
    (0..n)
        .map(|_| {
            let bit = rng.gen_bool(0.5) as u64 * rng.gen_bool(0.5) as u64 * rng.gen_bool(0.5) as u64;
            reduce(-(bit as i64), prime)
        })
        .collect()
}

/// A random message encoded by `generator` over `F_p`.
pub fn random_codeword_from_generator<R: Rng + ?Sized>(
    generator: &[Vec<u64>],
    n: usize,
    prime: u64,
    rng: &mut R,
) -> Vec<u64> {
    let message: Vec<u64> = (0..generator.len()).map(|_| rng.gen_range(0..prime)).collect();
    (0..n)
        .map(|j| {
            let acc: i64 = generator
                .iter()
                .zip(&message)
                .map(|(row, &m)| row[j] as i64 * m as i64)
                .sum();
            reduce(acc, prime)
        })
        .collect()
}

/// A random codeword of `code` alongside the same word perturbed by a sparse
/// `{0,1}`-valued error, matching `get_noisy_codeword`'s denser five-flip error.
pub fn noisy_random_codeword<R: Rng + ?Sized>(code: &LinearCode, rng: &mut R) -> (Vec<u64>, Vec<u64>) {
    let word = code.random_codeword(rng);
    let prime = code.prime();
    let noisy = word
        .iter()
        .map(|&w| {
            let bit = (0..5).fold(1u64, |acc, _| acc * rng.gen_bool(0.5) as u64);
            reduce(w as i64 - bit as i64, prime)
        })
        .collect();
    (word, noisy)
}

/// A `[3,1,3]` repetition code over `F_2`, used as the small code on both
/// sides of the plain binary-complex test scenario.
pub fn repetition_3_1_3() -> LinearCode {
    LinearCode::new(
        vec![vec![1, 1, 1]],
        vec![vec![1, 1, 0], vec![0, 1, 1]],
        2,
        None,
        Some(3),
        "rep_3_1_3",
    )
}

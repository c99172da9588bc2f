//! The cubical, locally-testable square code built on the squares of a
//! left-right Cayley complex, from two small codes `C_A`, `C_B`.
//!
//! Grounded on `codes/c3ltc.py::c3LTC`.

use crate::codes::SmallCode;
use crate::complex::LeftRightComplex;
use crate::decoder::global::{decode_along_the_edges, decode_along_the_vertices};
use crate::embedding::embed_square_constraints;
use crate::error::Result;
use crate::field::reduce;
use crate::row_reduce::{DenseGaussianReducer, RowReducer};

/// A constructed cubical square code: generator/parity matrices over the
/// squares of a left-right complex, plus the complex and small codes needed
/// to decode.
#[derive(Debug, Clone)]
pub struct CubicalCode<A, B> {
    complex: LeftRightComplex,
    code_a: A,
    code_b: B,
    generator: Vec<Vec<u64>>,
    parity: Vec<Vec<u64>>,
    prime: u64,
    n: usize,
    k: usize,
}

impl<A: SmallCode, B: SmallCode> CubicalCode<A, B> {
    /// Build the square code on `complex` using `code_a` on the B-edges and
    /// `code_b` on the A-edges, per [`embed_square_constraints`].
    pub fn build(complex: LeftRightComplex, code_a: A, code_b: B) -> Result<Self> {
        log::debug!("started generating square code");
        let embedded = embed_square_constraints(&complex, code_a.parity(), code_b.parity())?;
        let parity = embedded.to_dense();
        let prime = code_a.prime();
        let generator = DenseGaussianReducer.null_space(&parity, prime);
        let n = complex.num_squares();
        let k = generator.len();
        log::debug!("finished generating square code: k={k}, n={n}");
        Ok(CubicalCode {
            complex,
            code_a,
            code_b,
            generator,
            parity,
            prime,
            n,
            k,
        })
    }

    /// The underlying left-right complex.
    pub fn complex(&self) -> &LeftRightComplex {
        &self.complex
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

    /// Codeword length (number of squares).
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

    /// Whether `word` satisfies every row of the parity-check matrix.
    pub fn is_word_in_code(&self, word: &[u64]) -> bool {
        self.parity.iter().all(|row| {
            let acc: i64 = row
                .iter()
                .zip(word)
                .map(|(&c, &w)| c as i64 * w as i64)
                .sum();
            reduce(acc, self.prime) == 0
        })
    }

    /// Decode by propagating corrections along the A/B edges of the complex.
    pub fn decode_along_the_edges(&self, noisy_word: &[u64]) -> Vec<u64> {
        decode_along_the_edges(noisy_word, &self.complex, &self.code_a, &self.code_b)
    }

    /// Decode by repeatedly tensor-decoding each vertex's local view.
    pub fn decode_along_the_vertices(&self, noisy_word: &[u64]) -> Vec<u64> {
        decode_along_the_vertices(noisy_word, &self.complex, &self.code_a, &self.code_b)
    }

    /// The `|A| x |B|` local view a vertex sees of `word`.
    pub fn local_view(&self, vertex: usize, word: &[u64]) -> Vec<Vec<u64>> {
        self.complex.local_view(vertex, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::reed_solomon::reed_solomon_code;
    use crate::group::fqm::Fqm;
    use crate::group::generators::random_generators_with_tnc;
    use rand::thread_rng;

    #[test]
    fn generator_rows_are_codewords() {
        let group = Fqm::generate(7, 1);
        let mut rng = thread_rng();
        let (a, b) = random_generators_with_tnc(&group, 4, 0, 200, &mut rng).unwrap();
        let complex = LeftRightComplex::build(&group, &a, &b).unwrap();
        let code_a = reed_solomon_code(4, 2, 7).unwrap();
        let code_b = reed_solomon_code(4, 2, 7).unwrap();
        let square_code = CubicalCode::build(complex, code_a, code_b).unwrap();
        for row in square_code.generator() {
            assert!(square_code.is_word_in_code(row));
        }
    }

    #[test]
    fn single_error_on_a_generator_row_is_recovered() {
        let group = Fqm::generate(7, 1);
        let mut rng = thread_rng();
        let (a, b) = random_generators_with_tnc(&group, 4, 0, 200, &mut rng).unwrap();
        let complex = LeftRightComplex::build(&group, &a, &b).unwrap();
        let code_a = reed_solomon_code(4, 2, 7).unwrap();
        let code_b = reed_solomon_code(4, 2, 7).unwrap();
        let square_code = CubicalCode::build(complex, code_a, code_b).unwrap();
        let Some(word) = square_code.generator().first().cloned() else {
            return;
        };
        let mut noisy = word.clone();
        noisy[0] = reduce(noisy[0] as i64 + 1, square_code.prime());
        let decoded = square_code.decode_along_the_edges(&noisy);
        assert_eq!(decoded, word);
    }
}

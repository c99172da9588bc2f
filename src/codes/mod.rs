//! Small linear codes over F_p: the interface the global decoders consume,
//! plus three concrete families (Reed-Solomon, random linear, general Hamming).

pub mod hamming;
pub mod random_linear;
pub mod reed_solomon;

use crate::error::{CayleyCodeError, Result};
use crate::field::{base_to_number, mul_mod, number_to_base, reduce};
use rand::Rng;
use std::collections::HashMap;

/// Capability set a small code must provide: encode, decode-or-fail, and its
/// defining matrices. `Sync` so a code can be shared across the decoder's
/// parallel per-vertex sweep.
pub trait SmallCode: Sync {
    /// Encode a length-`k` message into a length-`n` codeword.
    fn encode(&self, message: &[u64]) -> Vec<u64>;

    /// Decode a possibly-noisy word, or fail if no correction could be found.
    fn decode(&self, noisy_word: &[u64]) -> Result<Vec<u64>>;

    /// Generator matrix, shape `k x n`.
    fn generator(&self) -> &[Vec<u64>];

    /// Parity-check matrix, shape `(n-k) x n`.
    fn parity(&self) -> &[Vec<u64>];

    /// The field characteristic.
    fn prime(&self) -> u64;

    /// Minimum distance, if known.
    fn distance(&self) -> Option<usize>;

    /// Block length `n`.
    fn n(&self) -> usize {
        self.parity().first().map_or(0, |row| row.len())
    }

    /// Message length `k`.
    fn k(&self) -> usize {
        self.generator().len()
    }
}

/// A concrete linear code: a generator/parity matrix pair over F_p, with an
/// optional precomputed syndrome table for fast decoding.
///
/// Grounded on `local_codes/linear_code.py::LinearCode` and
/// `local_codes/linear_code_utils.py`.
#[derive(Debug, Clone)]
pub struct LinearCode {
    generator: Vec<Vec<u64>>,
    parity: Vec<Vec<u64>>,
    prime: u64,
    syndromes: Option<HashMap<u64, Vec<u64>>>,
    distance: Option<usize>,
    name: String,
}

/// Above this message-space size, brute-force decoding and syndrome-table
/// construction refuse to run rather than enumerate `prime^k` words.
const EXHAUSTIVE_SEARCH_CEILING: u64 = 1 << 24;

impl LinearCode {
    /// Build a code from its matrices; `syndromes` and `distance` are
    /// optional accelerants for decoding.
    pub fn new(
        generator: Vec<Vec<u64>>,
        parity: Vec<Vec<u64>>,
        prime: u64,
        syndromes: Option<HashMap<u64, Vec<u64>>>,
        distance: Option<usize>,
        name: impl Into<String>,
    ) -> Self {
        LinearCode {
            generator,
            parity,
            prime,
            syndromes,
            distance,
            name: name.into(),
        }
    }

    /// Human-readable code name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn syndrome_of(&self, word: &[u64]) -> u64 {
        let r = self.parity.len();
        let mut s = vec![0i64; r];
        for (i, row) in self.parity.iter().enumerate() {
            let mut acc = 0i64;
            for (j, &coeff) in row.iter().enumerate() {
                acc += coeff as i64 * word[j] as i64;
            }
            s[i] = reduce(acc, self.prime) as i64;
        }
        base_to_number(&s.iter().map(|&x| x as u64).collect::<Vec<_>>(), self.prime)
    }

    /// Precompute the syndrome -> error-vector table for all error patterns
    /// of weight strictly less than `distance/2`.
    ///
    /// Grounded on `local_codes/linear_code_utils.py::get_syndromes`.
    pub fn build_syndrome_table(&mut self) -> Result<()> {
        let min_dist = self.min_distance()?;
        let n = self.n();
        let space = self.prime.checked_pow(n as u32).ok_or_else(|| {
            CayleyCodeError::InvalidParameters("syndrome table space overflowed".into())
        })?;
        if space > EXHAUSTIVE_SEARCH_CEILING {
            return Err(CayleyCodeError::InvalidParameters(format!(
                "syndrome table would enumerate {space} error vectors, above the ceiling"
            )));
        }
        let mut table = HashMap::new();
        for m in 0..space {
            let error = number_to_base(m, self.prime, n);
            if error.iter().filter(|&&x| x != 0).count() < min_dist / 2 {
                let h = self.syndrome_of(&error);
                table.insert(h, error);
            }
        }
        self.syndromes = Some(table);
        Ok(())
    }

    /// Exhaustive minimum Hamming weight among nonzero codewords.
    ///
    /// Grounded on `local_codes/linear_code_utils.py::get_min_dist`.
    pub fn min_distance(&self) -> Result<usize> {
        if let Some(d) = self.distance {
            return Ok(d);
        }
        self.extremal_distance(true)
    }

    /// Exhaustive maximum Hamming weight among nonzero codewords.
    pub fn max_distance(&self) -> Result<usize> {
        self.extremal_distance(false)
    }

    fn extremal_distance(&self, minimize: bool) -> Result<usize> {
        let k = self.k();
        let n = self.n();
        let space = self.prime.checked_pow(k as u32).ok_or_else(|| {
            CayleyCodeError::InvalidParameters("distance search space overflowed".into())
        })?;
        if space > EXHAUSTIVE_SEARCH_CEILING {
            return Err(CayleyCodeError::InvalidParameters(format!(
                "exhaustive distance search would enumerate {space} messages, above the ceiling"
            )));
        }
        let mut best = if minimize { n } else { 0 };
        for m in 1..space {
            let message = number_to_base(m, self.prime, k);
            let word = self.encode(&message);
            let weight = word.iter().filter(|&&x| x != 0).count();
            if weight == 0 {
                continue;
            }
            if minimize {
                best = best.min(weight);
            } else {
                best = best.max(weight);
            }
        }
        Ok(best)
    }

    /// Encode a uniformly random message.
    pub fn random_codeword<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u64> {
        let message: Vec<u64> = (0..self.k())
            .map(|_| rng.gen_range(0..self.prime))
            .collect();
        self.encode(&message)
    }
}

impl SmallCode for LinearCode {
    fn encode(&self, message: &[u64]) -> Vec<u64> {
        let n = self.n();
        (0..n)
            .map(|j| {
                let acc: i64 = self
                    .generator
                    .iter()
                    .zip(message)
                    .map(|(row, &m)| mul_mod(row[j] as i64, m as i64, self.prime) as i64)
                    .sum();
                reduce(acc, self.prime)
            })
            .collect()
    }

    fn decode(&self, noisy_word: &[u64]) -> Result<Vec<u64>> {
        let in_code = self
            .parity
            .iter()
            .all(|row| {
                let acc: i64 = row
                    .iter()
                    .zip(noisy_word)
                    .map(|(&c, &w)| c as i64 * w as i64)
                    .sum();
                reduce(acc, self.prime) == 0
            });
        if in_code {
            return Ok(noisy_word.to_vec());
        }
        if let Some(table) = &self.syndromes {
            let h = self.syndrome_of(noisy_word);
            return match table.get(&h) {
                Some(error) => Ok(noisy_word
                    .iter()
                    .zip(error)
                    .map(|(&w, &e)| reduce(w as i64 - e as i64, self.prime))
                    .collect()),
                None => Err(CayleyCodeError::LocalDecoderFailed {
                    len: noisy_word.len(),
                }),
            };
        }
        self.brute_force_decode(noisy_word)
    }

    fn generator(&self) -> &[Vec<u64>] {
        &self.generator
    }

    fn parity(&self) -> &[Vec<u64>] {
        &self.parity
    }

    fn prime(&self) -> u64 {
        self.prime
    }

    fn distance(&self) -> Option<usize> {
        self.distance
    }
}

impl LinearCode {
    /// Find the closest codeword by exhaustive search over all messages.
    ///
    /// Grounded on `local_codes/linear_code_utils.py::brute_force_decoding`.
    fn brute_force_decode(&self, noisy_word: &[u64]) -> Result<Vec<u64>> {
        let k = self.k();
        let space = self.prime.checked_pow(k as u32).ok_or_else(|| {
            CayleyCodeError::InvalidParameters("brute force space overflowed".into())
        })?;
        if space > EXHAUSTIVE_SEARCH_CEILING {
            return Err(CayleyCodeError::LocalDecoderFailed {
                len: noisy_word.len(),
            });
        }
        let mut best: Option<(usize, Vec<u64>)> = None;
        for m in 0..space {
            let message = number_to_base(m, self.prime, k);
            let word = self.encode(&message);
            let dist = word
                .iter()
                .zip(noisy_word)
                .filter(|(&a, &b)| a != b)
                .count();
            if best.as_ref().map_or(true, |(d, _)| dist < *d) {
                best = Some((dist, word));
            }
        }
        match best {
            Some((_, word)) => Ok(word),
            None => Err(CayleyCodeError::LocalDecoderFailed {
                len: noisy_word.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repetition_3_1_3() -> LinearCode {
        // [3,1,3] repetition code over F_2.
        LinearCode::new(
            vec![vec![1, 1, 1]],
            vec![vec![1, 1, 0], vec![0, 1, 1]],
            2,
            None,
            Some(3),
            "rep_3_1_3",
        )
    }

    #[test]
    fn encode_then_decode_is_identity_on_clean_words() {
        let code = repetition_3_1_3();
        let word = code.encode(&[1]);
        assert_eq!(code.decode(&word).unwrap(), word);
    }

    #[test]
    fn brute_force_corrects_single_error() {
        let code = repetition_3_1_3();
        let word = code.encode(&[1]);
        let mut noisy = word.clone();
        noisy[0] = (noisy[0] + 1) % 2;
        assert_eq!(code.decode(&noisy).unwrap(), word);
    }
}

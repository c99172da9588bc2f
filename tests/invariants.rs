//! Property-based checks for the invariants that hold for every vertex, edge,
//! or square of a constructed complex/code, rather than one fixed instance.

mod support;

use cayley_codes::codes::reed_solomon::reed_solomon_code;
use cayley_codes::codes::SmallCode;
use cayley_codes::field::reduce;
use cayley_codes::group::fqm::Fqm;
use cayley_codes::group::generators::random_generators_with_tnc;
use cayley_codes::{CubicalCode, LeftRightComplex};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn build_square_code(seed: u64) -> CubicalCode<cayley_codes::LinearCode, cayley_codes::LinearCode> {
    let group = Fqm::generate(7, 1);
    let mut rng = StdRng::seed_from_u64(seed);
    let (a, b) = random_generators_with_tnc(&group, 4, 0, 200, &mut rng).unwrap();
    let complex = LeftRightComplex::build(&group, &a, &b).unwrap();
    let code_a = reed_solomon_code(4, 2, 7).unwrap();
    let code_b = reed_solomon_code(4, 2, 7).unwrap();
    CubicalCode::build(complex, code_a, code_b).unwrap()
}

proptest! {
    /// Every square belongs to exactly one vertex's row-of-squares and one
    /// vertex's column-of-squares per A/B edge it touches; in particular the
    /// local view gathered at any vertex has exactly `|A|x|B|` entries.
    #[test]
    fn every_vertex_local_view_has_the_expected_shape(seed in 0u64..64) {
        let square = build_square_code(seed);
        let complex = square.complex();
        for v in 0..complex.num_vertices() {
            let view = complex.local_view(v, &vec![0u64; complex.num_squares()]);
            prop_assert_eq!(view.len(), complex.vertex_to_neighbors_left()[v].len());
            prop_assert!(view.iter().all(|row| row.len() == complex.vertex_to_neighbors_right()[v].len()));
        }
    }

    /// Every generator row of the square code is accepted by every parity row,
    /// for every seed that produces a valid complex.
    #[test]
    fn every_generator_row_is_a_codeword(seed in 0u64..64) {
        let square = build_square_code(seed);
        for row in square.generator() {
            prop_assert!(square.is_word_in_code(row));
        }
    }

    /// A single-entry error on any generator-row coordinate is corrected back
    /// to that exact row by the edge decoder.
    #[test]
    fn single_coordinate_error_recovers_on_any_generator_row(seed in 0u64..32, row_idx in 0usize..4, coord in 0usize..16) {
        let square = build_square_code(seed);
        if square.generator().is_empty() {
            return Ok(());
        }
        let row_idx = row_idx % square.generator().len();
        let word = square.generator()[row_idx].clone();
        let coord = coord % word.len();
        let mut noisy = word.clone();
        noisy[coord] = reduce(noisy[coord] as i64 + 1, square.prime());
        prop_assert_eq!(square.decode_along_the_edges(&noisy), word);
    }
}

#[test]
fn random_sparse_errors_never_panic_the_edge_decoder() {
    let square = build_square_code(1);
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..20 {
        let error = support::random_sparse_error(square.n(), square.prime(), &mut rng);
        let zero = vec![0u64; square.n()];
        let noisy: Vec<u64> = zero
            .iter()
            .zip(&error)
            .map(|(&w, &e)| reduce(w as i64 - e as i64, square.prime()))
            .collect();
        let _ = square.decode_along_the_edges(&noisy);
    }
}

#[test]
fn noisy_zero_codeword_decodes_back_to_zero_most_of_the_time() {
    let square = build_square_code(3);
    let mut rng = StdRng::seed_from_u64(4);
    let zero = vec![0u64; square.n()];
    let mut recovered = 0;
    for _ in 0..30 {
        let noisy = support::noisy_zero_codeword(square.n(), square.prime(), &mut rng);
        if square.decode_along_the_edges(&noisy) == zero {
            recovered += 1;
        }
    }
    assert!(recovered > 0);
}

#[test]
fn noisy_random_codeword_on_a_small_code_still_decodes() {
    let code = reed_solomon_code(5, 2, 7).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let (word, noisy) = support::noisy_random_codeword(&code, &mut rng);
    if noisy == word {
        return;
    }
    if let Ok(decoded) = code.decode(&noisy) {
        assert_eq!(decoded, word);
    }
}

#[test]
fn random_codeword_from_generator_satisfies_the_parity_check() {
    let code = reed_solomon_code(5, 2, 7).unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    let word = support::random_codeword_from_generator(code.generator(), code.n(), code.prime(), &mut rng);
    for row in code.parity() {
        let dot: i64 = row.iter().zip(&word).map(|(&c, &w)| c as i64 * w as i64).sum();
        assert_eq!(reduce(dot, code.prime()), 0);
    }
}

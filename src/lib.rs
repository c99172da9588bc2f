//! Expander and cubical codes on left-right Cayley complexes
//!
//! This library constructs and decodes classical error-correcting codes
//! placed on the edges and squares of Cayley graphs and left-right Cayley
//! complexes over a finite group. It includes:
//!
//! - **Group elements**: `F_q^m` (additive tuples) and `PSL(2,q)` (projective
//!   special linear group), both satisfying a common `GroupElement` trait.
//! - **Cayley graphs**: vertex/edge maps for a single inverse-closed
//!   generator set, with spectral expansion and bipartiteness.
//! - **Left-right complexes**: the square structure underlying the c3LTC
//!   code, built from two generator sets A and B.
//! - **Small codes**: Reed-Solomon, random linear, and general Hamming
//!   codes over a prime field, with syndrome and brute-force decoding.
//! - **Global codes**: `ExpanderCode` (edges of a Cayley graph) and
//!   `CubicalCode` (squares of a left-right complex), with row reduction
//!   over F_p supplied by a pluggable oracle.
//! - **Decoders**: a tensor decoder over a single vertex's local view, and
//!   two global propagation decoders (edge-wise and vertex-wise).
//!
//! # Theory background
//!
//! ## Left-right Cayley complexes
//!
//! Given a group G and two inverse-closed generator sets A, B, a square is a
//! 4-cycle `(g, a·g, a·g·b, g·b)`. Four triples `(a,g,b)` describe the same
//! square under the Klein-four identification
//! `(a,g,b) ~ (a⁻¹,ag,b) ~ (a,gb,b⁻¹) ~ (a⁻¹,agb,b⁻¹)`, so squares are
//! counted once by picking the representative whose middle vertex has
//! minimal index.
//!
//! ## The c3LTC square code
//!
//! One coordinate is assigned to every square. Around each A-edge, the row
//! of squares sharing it must lie in `C_B`; around each B-edge, the column
//! of squares sharing it must lie in `C_A`. Stacking both sets of local
//! parity checks gives the global parity-check matrix.
//!
//! ## Tensor decoding
//!
//! A vertex's local view is an `|A| x |B|` matrix of square values. Decoding
//! alternates row corrections (against `C_B`) and column corrections
//! (against `C_A`), tracking only the rows/columns a prior correction may
//! have invalidated, until a fixed point or a repeated state is reached.
//!
//! # Examples
//!
//! ## Building and decoding an expander code
//!
//! ```rust
//! use cayley_codes::codes::reed_solomon::reed_solomon_code;
//! use cayley_codes::expander::ExpanderCode;
//! use cayley_codes::graph::CayleyGraph;
//! use cayley_codes::group::fqm::Fqm;
//! use cayley_codes::group::generators::random_generators;
//!
//! let group = Fqm::generate(2, 4);
//! let mut rng = rand::thread_rng();
//! let gens = random_generators(&group, 4, 0, &mut rng).unwrap();
//! let graph = CayleyGraph::build(&group, &gens).unwrap();
//! let code = reed_solomon_code(4, 2, 3).unwrap();
//!
//! let expander = ExpanderCode::build(&graph, &code).unwrap();
//! println!("rate = {}", expander.rate());
//! ```
//!
//! ## Building a square code and decoding a single error
//!
//! ```rust
//! use cayley_codes::codes::reed_solomon::reed_solomon_code;
//! use cayley_codes::complex::LeftRightComplex;
//! use cayley_codes::group::fqm::Fqm;
//! use cayley_codes::group::generators::random_generators_with_tnc;
//! use cayley_codes::square_code::CubicalCode;
//!
//! let group = Fqm::generate(7, 1);
//! let mut rng = rand::thread_rng();
//! let (a, b) = random_generators_with_tnc(&group, 4, 0, 200, &mut rng).unwrap();
//! let complex = LeftRightComplex::build(&group, &a, &b).unwrap();
//! let code_a = reed_solomon_code(4, 2, 7).unwrap();
//! let code_b = reed_solomon_code(4, 2, 7).unwrap();
//!
//! let square_code = CubicalCode::build(complex, code_a, code_b).unwrap();
//! if let Some(word) = square_code.generator().first().cloned() {
//!     let mut noisy = word.clone();
//!     noisy[0] = (noisy[0] + 1) % square_code.prime();
//!     let decoded = square_code.decode_along_the_edges(&noisy);
//!     assert_eq!(decoded, word);
//! }
//! ```

pub mod codes;
pub mod complex;
pub mod config;
pub mod decoder;
pub mod embedding;
pub mod error;
pub mod expander;
pub mod field;
pub mod graph;
pub mod group;
#[cfg(feature = "persist")]
pub mod persist;
pub mod row_reduce;
pub mod square_code;

pub use error::{CayleyCodeError, Result};

pub use codes::{LinearCode, SmallCode};

pub use complex::LeftRightComplex;

pub use config::{build_group, ConstructionParams, GroupDescriptor, GroupInstance, SmallCodeDescriptor};

pub use expander::ExpanderCode;

pub use graph::CayleyGraph;

pub use group::{Group, GroupElement};

pub use row_reduce::{DenseGaussianReducer, RowReducer};

pub use square_code::CubicalCode;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::codes::reed_solomon::reed_solomon_code;
    pub use crate::codes::{LinearCode, SmallCode};
    pub use crate::complex::LeftRightComplex;
    pub use crate::config::{GroupDescriptor, SmallCodeDescriptor};
    pub use crate::error::{CayleyCodeError, Result};
    pub use crate::expander::ExpanderCode;
    pub use crate::graph::CayleyGraph;
    pub use crate::group::fqm::Fqm;
    pub use crate::group::generators::random_generators_with_tnc;
    pub use crate::group::psl::Psl2;
    pub use crate::group::{Group, GroupElement};
    pub use crate::square_code::CubicalCode;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::reed_solomon::reed_solomon_code;
    use crate::group::fqm::Fqm;
    use crate::group::generators::random_generators;

    #[test]
    fn expander_code_round_trips_through_the_public_api() {
        let group = Fqm::generate(2, 4);
        let mut rng = rand::thread_rng();
        let gens = random_generators(&group, 4, 0, &mut rng).unwrap();
        let graph = CayleyGraph::build(&group, &gens).unwrap();
        let code = reed_solomon_code(4, 2, 3).unwrap();

        let expander = ExpanderCode::build(&graph, &code).unwrap();
        assert_eq!(expander.n(), graph.num_edges());
        assert!(expander.rate() > 0.0 && expander.rate() <= 1.0);
    }

    #[test]
    fn square_code_generator_rows_are_valid_codewords() {
        use crate::group::generators::random_generators_with_tnc;
        use crate::square_code::CubicalCode;

        let group = Fqm::generate(7, 1);
        let mut rng = rand::thread_rng();
        let (a, b) = random_generators_with_tnc(&group, 4, 0, 200, &mut rng).unwrap();
        let complex = LeftRightComplex::build(&group, &a, &b).unwrap();
        let code_a = reed_solomon_code(4, 2, 7).unwrap();
        let code_b = reed_solomon_code(4, 2, 7).unwrap();

        let square_code = CubicalCode::build(complex, code_a, code_b).unwrap();
        for row in square_code.generator() {
            assert!(square_code.is_word_in_code(row));
        }
    }
}

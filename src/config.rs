//! Construction-time configuration: descriptors for the group, the small
//! codes, and the overall set of parameters used to build a complex or a
//! code, round-trippable as JSON under the `persist` feature.

#[cfg(feature = "persist")]
use serde::{Deserialize, Serialize};

use crate::codes::hamming::general_hamming_code;
use crate::codes::random_linear::random_linear_code;
use crate::codes::reed_solomon::reed_solomon_code;
use crate::codes::LinearCode;
use crate::error::Result;
use crate::group::fqm::Fqm;
use crate::group::psl::Psl2;
use crate::group::Group;
use rand::Rng;

/// Which finite group to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "persist", derive(Serialize, Deserialize))]
pub enum GroupDescriptor {
    /// The additive group `F_q^m`.
    Fqm { q: u64, m: usize },
    /// `PSL(2,q)`.
    Psl2 { q: u64 },
}

impl GroupDescriptor {
    /// Human-readable group name, matching the concrete groups' own naming.
    pub fn name(&self) -> String {
        match self {
            GroupDescriptor::Fqm { q, m } => format!("F_{q}^{m}"),
            GroupDescriptor::Psl2 { q } => format!("PSL(2,{q})"),
        }
    }
}

/// Which small code family to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "persist", derive(Serialize, Deserialize))]
pub enum SmallCodeDescriptor {
    ReedSolomon { n: usize, k: usize },
    RandomLinearCode { n: usize, k: usize },
    GeneralHammingCode { n: usize },
}

impl SmallCodeDescriptor {
    /// Build the described code over `prime`.
    pub fn build<R: Rng + ?Sized>(&self, prime: u64, rng: &mut R) -> Result<LinearCode> {
        match *self {
            SmallCodeDescriptor::ReedSolomon { n, k } => reed_solomon_code(n, k, prime),
            SmallCodeDescriptor::RandomLinearCode { n, k } => random_linear_code(n, k, prime, rng),
            SmallCodeDescriptor::GeneralHammingCode { n } => general_hamming_code(n),
        }
    }
}

/// Build the group named by a [`GroupDescriptor`].
pub fn build_group(descriptor: GroupDescriptor) -> GroupInstance {
    match descriptor {
        GroupDescriptor::Fqm { q, m } => GroupInstance::Fqm(Fqm::generate(q, m)),
        GroupDescriptor::Psl2 { q } => GroupInstance::Psl2(Psl2::generate(q)),
    }
}

/// A concrete group produced from a [`GroupDescriptor`]; callers that need a
/// single `E: GroupElement` type parameter should match on this and
/// continue with the contained `Group<E>`.
pub enum GroupInstance {
    Fqm(Group<crate::group::fqm::FqmElement>),
    Psl2(Group<crate::group::psl::Psl2Element>),
}

impl GroupInstance {
    /// Number of elements in the group.
    pub fn len(&self) -> usize {
        match self {
            GroupInstance::Fqm(g) => g.len(),
            GroupInstance::Psl2(g) => g.len(),
        }
    }

    /// Whether the group is empty (never true for a well-formed descriptor).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Full set of parameters used to construct a square code or an expander
/// code, kept for reproducibility in the persisted-artifact metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "persist", derive(Serialize, Deserialize))]
pub struct ConstructionParams {
    pub prime: u64,
    pub group: GroupDescriptor,
    pub generator_count_a: usize,
    pub generator_count_b: usize,
    pub n_order_two_a: usize,
    pub n_order_two_b: usize,
    pub code_a: SmallCodeDescriptor,
    pub code_b: SmallCodeDescriptor,
    pub enforce_tnc: bool,
    pub tnc_resample_trials: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_descriptor_names_match_the_concrete_groups() {
        assert_eq!(GroupDescriptor::Fqm { q: 2, m: 3 }.name(), "F_2^3");
        assert_eq!(GroupDescriptor::Psl2 { q: 5 }.name(), "PSL(2,5)");
    }

    #[test]
    fn build_group_reports_the_expected_size() {
        let fqm = build_group(GroupDescriptor::Fqm { q: 2, m: 3 });
        assert_eq!(fqm.len(), 8);
        let psl = build_group(GroupDescriptor::Psl2 { q: 5 });
        assert_eq!(psl.len(), 60);
    }
}

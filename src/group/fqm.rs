//! The additive group `F_q^m`: tuples of `m` entries in `[0, q)` under
//! coordinatewise addition mod `q`.

use super::{Group, GroupElement};
use itertools::Itertools;

/// An element of `F_q^m`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FqmElement {
    value: Vec<u64>,
    q: u64,
}

impl FqmElement {
    /// The underlying coordinate tuple.
    pub fn value(&self) -> &[u64] {
        &self.value
    }
}

impl GroupElement for FqmElement {
    fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.q, other.q);
        FqmElement {
            value: self
                .value
                .iter()
                .zip(&other.value)
                .map(|(a, b)| (a + b) % self.q)
                .collect(),
            q: self.q,
        }
    }

    fn inverse(&self) -> Self {
        FqmElement {
            value: self
                .value
                .iter()
                .map(|a| (self.q - a % self.q) % self.q)
                .collect(),
            q: self.q,
        }
    }

    fn is_identity(&self) -> bool {
        self.value.iter().all(|&v| v == 0)
    }

    fn is_order_two_non_identity(&self) -> bool {
        !self.is_identity() && self.mul(self).is_identity()
    }
}

/// `F_q^m` as a finite group: generate every `(0..q)^m` tuple.
pub struct Fqm;

impl Fqm {
    /// Enumerate all `q^m` elements in lexicographic tuple order.
    pub fn generate(q: u64, m: usize) -> Group<FqmElement> {
        log::debug!("generating F_{q}^{m}");
        let elements: Vec<FqmElement> = (0..m)
            .map(|_| 0..q)
            .multi_cartesian_product()
            .map(|value| FqmElement { value, q })
            .collect();
        log::debug!("finished generating F_{q}^{m}, |G| = {}", elements.len());
        Group::new(format!("F_{q}^{m}"), elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_identity_and_inverse() {
        let g = Fqm::generate(3, 2);
        assert_eq!(g.len(), 9);
        let e = g.element(0).clone();
        assert!(e.is_identity());
        for el in g.elements() {
            let inv = el.inverse();
            assert!(el.mul(&inv).is_identity());
        }
    }

    #[test]
    fn order_two_in_f2() {
        let g = Fqm::generate(2, 3);
        for el in g.elements() {
            if !el.is_identity() {
                assert!(el.is_order_two_non_identity());
            }
        }
    }

    #[test]
    fn index_lookup_round_trips() {
        let g = Fqm::generate(2, 3);
        for (i, e) in g.elements().iter().enumerate() {
            assert_eq!(g.index_of(e), Some(i));
        }
    }
}

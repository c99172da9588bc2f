//! `PSL(2,q)`: 2x2 matrices over `F_q` with determinant 1, modulo the
//! identification of a matrix with its negation.

use super::{Group, GroupElement};
use std::hash::{Hash, Hasher};

/// An element of `PSL(2,q)`, stored as one matrix of the pair `{M, -M}`.
///
/// Equality and hashing both go through [`Psl2Element::canonical`], so either
/// representative of the pair compares and hashes identically.
#[derive(Debug, Clone)]
pub struct Psl2Element {
    value: [u64; 4],
    q: u64,
}

impl Psl2Element {
    fn new(value: [u64; 4], q: u64) -> Self {
        Psl2Element { value, q }
    }

    /// Lexicographically-minimal representative of `{M, -M}`, used for both
    /// hashing and equality.
    fn canonical(&self) -> [u64; 4] {
        let neg = [
            (self.q - self.value[0] % self.q) % self.q,
            (self.q - self.value[1] % self.q) % self.q,
            (self.q - self.value[2] % self.q) % self.q,
            (self.q - self.value[3] % self.q) % self.q,
        ];
        if self.value <= neg {
            self.value
        } else {
            neg
        }
    }

    /// The raw matrix entries `[a, b, c, d]` for `[[a,b],[c,d]]`.
    pub fn value(&self) -> [u64; 4] {
        self.value
    }
}

impl PartialEq for Psl2Element {
    fn eq(&self, other: &Self) -> bool {
        self.q == other.q && self.canonical() == other.canonical()
    }
}
impl Eq for Psl2Element {}

impl Hash for Psl2Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl GroupElement for Psl2Element {
    fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.q, other.q);
        let q = self.q as i64;
        let [a1, b1, c1, d1] = self.value.map(|x| x as i64);
        let [a2, b2, c2, d2] = other.value.map(|x| x as i64);
        let a = ((a1 * a2 + b1 * c2) % q + q) % q;
        let b = ((a1 * b2 + b1 * d2) % q + q) % q;
        let c = ((c1 * a2 + d1 * c2) % q + q) % q;
        let d = ((c1 * b2 + d1 * d2) % q + q) % q;
        Psl2Element::new([a as u64, b as u64, c as u64, d as u64], self.q)
    }

    fn inverse(&self) -> Self {
        // determinant is 1, so the inverse is the adjugate [[d,-b],[-c,a]].
        let [a, b, c, d] = self.value;
        let q = self.q;
        Psl2Element::new([d, (q - b % q) % q, (q - c % q) % q, a], q)
    }

    fn is_identity(&self) -> bool {
        self.canonical() == Psl2Element::new([1, 0, 0, 1], self.q).canonical()
    }

    fn is_order_two_non_identity(&self) -> bool {
        !self.is_identity() && self.mul(self).is_identity()
    }
}

/// `PSL(2,q)` as a finite group.
pub struct Psl2;

impl Psl2 {
    /// Enumerate all matrices `(a,b,c,d)` over `F_q` with `det ≡ 1 (mod q)`,
    /// deduplicated under `M ~ -M`.
    pub fn generate(q: u64) -> Group<Psl2Element> {
        log::debug!("generating PSL(2,{q})");
        let mut seen = std::collections::HashSet::new();
        let mut elements = Vec::new();
        for a in 0..q {
            for b in 0..q {
                for c in 0..q {
                    for d in 0..q {
                        let det = ((a * d) as i64 - (b * c) as i64).rem_euclid(q as i64) as u64;
                        if det != 1 {
                            continue;
                        }
                        let el = Psl2Element::new([a, b, c, d], q);
                        if seen.insert(el.canonical()) {
                            elements.push(el);
                        }
                    }
                }
            }
        }
        log::debug!("finished generating PSL(2,{q}), |G| = {}", elements.len());
        Group::new(format!("PSL(2,{q})"), elements)
    }
}

//! Random inverse-closed generator-set sampling, with optional TNC enforcement.

use super::{Group, GroupElement};
use crate::error::{CayleyCodeError, Result};
use rand::Rng;

/// Draw `n` distinct non-identity elements, paired `(s, s⁻¹)` at consecutive
/// indices, plus `n_order_two` unpaired non-identity order-2 elements.
///
/// Mirrors `groups/generators.py::get_random_generators`.
pub fn random_generators<E: GroupElement, R: Rng + ?Sized>(
    group: &Group<E>,
    n: usize,
    n_order_two: usize,
    rng: &mut R,
) -> Result<Vec<E>> {
    if n % 2 != 0 {
        return Err(CayleyCodeError::InvalidParameters(
            "non-order-2 generator count must be even".to_string(),
        ));
    }
    const TRIES_PER_SLOT: usize = 10_000;
    let mut generators = Vec::with_capacity(n + n_order_two);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..(n / 2) {
        let mut found = false;
        for _ in 0..TRIES_PER_SLOT {
            let cand = &group.elements()[rng.gen_range(0..group.len())];
            if cand.is_identity() || cand.is_order_two_non_identity() || seen.contains(cand) {
                continue;
            }
            let inv = cand.inverse();
            if seen.contains(&inv) {
                continue;
            }
            seen.insert(cand.clone());
            seen.insert(inv.clone());
            generators.push(cand.clone());
            generators.push(inv);
            found = true;
            break;
        }
        if !found {
            return Err(CayleyCodeError::NoGenerator {
                trials: TRIES_PER_SLOT,
            });
        }
    }

    for _ in 0..n_order_two {
        let mut found = false;
        for _ in 0..TRIES_PER_SLOT {
            let cand = &group.elements()[rng.gen_range(0..group.len())];
            if cand.is_identity() || !cand.is_order_two_non_identity() || seen.contains(cand) {
                continue;
            }
            seen.insert(cand.clone());
            generators.push(cand.clone());
            found = true;
            break;
        }
        if !found {
            return Err(CayleyCodeError::NoGenerator {
                trials: TRIES_PER_SLOT,
            });
        }
    }

    Ok(generators)
}

/// Whether no `g, a in A, b in B` satisfy `a*g == g*b` (the Total-No-Conjugacy
/// predicate), checked by exhaustive scan over the group.
pub fn check_tnc<E: GroupElement>(group: &Group<E>, a_gens: &[E], b_gens: &[E]) -> bool {
    group.elements().iter().all(|g| {
        a_gens
            .iter()
            .all(|a| b_gens.iter().all(|b| a.mul(g) != g.mul(b)))
    })
}

/// Sample a TNC-satisfying pair `(A, B)`, retrying up to `trials` times.
///
/// Mirrors `groups/generators.py::get_AB_with_TNC`.
pub fn random_generators_with_tnc<E: GroupElement, R: Rng + ?Sized>(
    group: &Group<E>,
    n: usize,
    n_order_two: usize,
    trials: usize,
    rng: &mut R,
) -> Result<(Vec<E>, Vec<E>)> {
    for _ in 0..trials {
        let a = random_generators(group, n, n_order_two, rng)?;
        let b = random_generators(group, n, n_order_two, rng)?;
        if check_tnc(group, &a, &b) {
            return Ok((a, b));
        }
    }
    Err(CayleyCodeError::NoGenerator { trials })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::fqm::Fqm;

    #[test]
    fn pairs_are_inverse_closed() {
        let g = Fqm::generate(5, 2);
        let mut rng = rand::thread_rng();
        let gens = random_generators(&g, 4, 0, &mut rng).unwrap();
        assert_eq!(gens.len(), 4);
        for chunk in gens.chunks(2) {
            assert_eq!(chunk[0].inverse(), chunk[1]);
        }
    }

    #[test]
    fn odd_count_is_rejected() {
        let g = Fqm::generate(5, 2);
        let mut rng = rand::thread_rng();
        assert!(random_generators(&g, 3, 0, &mut rng).is_err());
    }
}

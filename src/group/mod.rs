//! Finite groups and their elements.
//!
//! A [`GroupElement`] is a pure value type with the capability set the rest of
//! the crate needs: multiplication, inversion, equality, a deterministic hash,
//! and the two predicates the complex construction branches on. Concrete
//! groups ([`fqm::Fqm`], [`psl::Psl2`]) are tagged variants rather than trait
//! objects — the hot loops in [`crate::graph`] and [`crate::complex`] are
//! monomorphized per group kind.

pub mod fqm;
pub mod generators;
pub mod psl;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Capability set required of a group element.
pub trait GroupElement: Clone + Eq + Hash + Debug + Send + Sync {
    /// Group multiplication. Not assumed commutative.
    fn mul(&self, other: &Self) -> Self;

    /// The inverse element.
    fn inverse(&self) -> Self;

    /// Whether this is the identity element.
    fn is_identity(&self) -> bool;

    /// Whether `self * self` is the identity and `self` is not itself the identity.
    fn is_order_two_non_identity(&self) -> bool;
}

/// A finite group: an ordered enumeration of elements with O(1) index lookup.
///
/// The index of an element is its canonical vertex id in every graph and
/// complex built over this group.
#[derive(Debug, Clone)]
pub struct Group<E: GroupElement> {
    name: String,
    elements: Vec<E>,
    index_of: HashMap<E, usize>,
}

impl<E: GroupElement> Group<E> {
    /// Build a group from an already-enumerated, deduplicated element list.
    pub fn new(name: impl Into<String>, elements: Vec<E>) -> Self {
        let index_of = elements
            .iter()
            .enumerate()
            .map(|(i, e)| (e.clone(), i))
            .collect();
        Group {
            name: name.into(),
            elements,
            index_of,
        }
    }

    /// Human-readable group name, e.g. `"F_2^3"` or `"PSL(2,5)"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the group has no elements (never true for a well-formed group).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at vertex index `i`.
    pub fn element(&self, i: usize) -> &E {
        &self.elements[i]
    }

    /// All elements in enumeration order.
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// O(1) lookup of an element's canonical vertex index.
    pub fn index_of(&self, e: &E) -> Option<usize> {
        self.index_of.get(e).copied()
    }
}

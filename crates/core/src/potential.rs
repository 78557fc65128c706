use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use common::types::{Arrow, Vertex};

use crate::cycle::DetachedCycle;
use crate::linear_combination::LinearCombination;
use crate::path::Path;

/// A formal integer linear combination of cycles, `W = Σ cᵢ·Cᵢ`.
///
/// Like every other value in this crate a potential is immutable: adding a cycle or
/// another potential produces a new potential.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Potential<V: Vertex> {
    cycles: LinearCombination<DetachedCycle<V>>,
}

/// Cycles of a potential grouped by length and coefficient sign.
///
/// Two potentials whose quivers are isomorphic have identical class counts, which
/// makes this a cheap first check before a full isomorphism search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleClass {
    pub length: usize,
    /// `-1` or `+1`.
    pub sign: i64,
}

impl<V: Vertex> Potential<V> {
    /// The zero potential.
    pub fn new() -> Self {
        Self {
            cycles: LinearCombination::new(),
        }
    }

    /// The potential `coefficient·cycle`.
    pub fn from_cycle(coefficient: i64, cycle: DetachedCycle<V>) -> Self {
        Self {
            cycles: LinearCombination::singleton(coefficient, cycle),
        }
    }

    /// Builds a potential from `(cycle, coefficient)` pairs; repeated cycles are summed.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (DetachedCycle<V>, i64)>,
    {
        Self {
            cycles: LinearCombination::from_terms(terms),
        }
    }

    /// Returns `self + coefficient·cycle`.
    pub fn add_cycle(&self, coefficient: i64, cycle: DetachedCycle<V>) -> Self {
        Self {
            cycles: self.cycles.add_singleton(coefficient, cycle),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            cycles: self.cycles.add(&other.cycles),
        }
    }

    pub fn scale(&self, scalar: i64) -> Self {
        Self {
            cycles: self.cycles.scale(scalar),
        }
    }

    pub fn as_linear_combination(&self) -> &LinearCombination<DetachedCycle<V>> {
        &self.cycles
    }

    /// Cycles with nonzero coefficient, in unspecified order.
    pub fn cycles(&self) -> impl Iterator<Item = &DetachedCycle<V>> {
        self.cycles.elements()
    }

    /// Coefficient of `cycle`, 0 if absent.
    pub fn coefficient(&self, cycle: &DetachedCycle<V>) -> i64 {
        self.cycles.coefficient(cycle)
    }

    pub fn terms(&self) -> impl Iterator<Item = (&DetachedCycle<V>, i64)> {
        self.cycles.terms()
    }

    /// Terms ordered by canonical cycle.
    pub fn sorted_terms(&self) -> Vec<(&DetachedCycle<V>, i64)> {
        self.cycles.sorted_terms()
    }

    /// Number of cycles with nonzero coefficient.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Distinct arrows used by the cycles, in ascending order.
    pub fn arrows(&self) -> BTreeSet<Arrow<V>> {
        self.cycles()
            .flat_map(|cycle| cycle.arrows().iter().cloned())
            .collect()
    }

    /// Distinct vertices visited by the cycles, in ascending order.
    pub fn vertices(&self) -> BTreeSet<V> {
        self.cycles()
            .flat_map(|cycle| cycle.canonical_path().vertices())
            .collect()
    }

    /// Number of cycles in each `(length, sign)` class.
    pub fn cycle_classes(&self) -> BTreeMap<CycleClass, usize> {
        let mut classes = BTreeMap::new();
        for (cycle, coefficient) in self.terms() {
            let class = CycleClass {
                length: cycle.len(),
                sign: coefficient.signum(),
            };
            *classes.entry(class).or_insert(0) += 1;
        }
        classes
    }

    /// Cyclic derivative `∂ₐW = Σ cᵢ·∂ₐCᵢ`.
    ///
    /// Cycles not containing `arrow` contribute nothing. The result is linear in the
    /// potential: the derivative of a sum is the sum of the derivatives.
    pub fn differentiate_cyclically(&self, arrow: &Arrow<V>) -> LinearCombination<Path<V>> {
        self.terms()
            .map(|(cycle, coefficient)| cycle.differentiate_cyclically(arrow).scale(coefficient))
            .fold(LinearCombination::new(), |sum, derivative| sum.add(&derivative))
    }
}

impl<V: Vertex> Default for Potential<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> FromIterator<(DetachedCycle<V>, i64)> for Potential<V> {
    fn from_iter<I: IntoIterator<Item = (DetachedCycle<V>, i64)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<V: Vertex> fmt::Debug for Potential<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted_terms()).finish()
    }
}

/// Formats as `c₁·C₁ + c₂·C₂ …` with cycles in canonical order.
impl<V: Vertex + fmt::Display> fmt::Display for Potential<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cycles)
    }
}

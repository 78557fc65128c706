use std::collections::HashSet;
use std::fmt;

use common::error::{Error, Result};
use common::types::{Arrow, Vertex};
use log::{debug, trace};

use crate::cycle::DetachedCycle;
use crate::linear_combination::LinearCombination;
use crate::path::Path;
use crate::potential::Potential;
use crate::traits::IdealFactory;

/// The binomial relation `minuend - subtrahend` between two parallel paths.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DifferenceOfPaths<V> {
    minuend: Path<V>,
    subtrahend: Path<V>,
}

impl<V: Vertex> DifferenceOfPaths<V> {
    /// # Errors
    /// `Error::EndpointMismatch` unless both paths share their starting and ending points.
    pub fn new(minuend: Path<V>, subtrahend: Path<V>) -> Result<Self> {
        if minuend.starting_point() != subtrahend.starting_point() {
            return Err(Error::EndpointMismatch {
                expected: format!("{:?}", minuend.starting_point()),
                actual: format!("{:?}", subtrahend.starting_point()),
            });
        }
        if minuend.ending_point() != subtrahend.ending_point() {
            return Err(Error::EndpointMismatch {
                expected: format!("{:?}", minuend.ending_point()),
                actual: format!("{:?}", subtrahend.ending_point()),
            });
        }

        Ok(Self {
            minuend,
            subtrahend,
        })
    }

    pub fn minuend(&self) -> &Path<V> {
        &self.minuend
    }

    pub fn subtrahend(&self) -> &Path<V> {
        &self.subtrahend
    }

    /// The relation as the formal sum `1·minuend - 1·subtrahend`.
    pub fn to_linear_combination(&self) -> LinearCombination<Path<V>> {
        LinearCombination::singleton(1, self.minuend.clone()).add_singleton(-1, self.subtrahend.clone())
    }
}

impl<V: fmt::Debug> fmt::Debug for DifferenceOfPaths<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} - {:?}", self.minuend, self.subtrahend)
    }
}

impl<V: fmt::Display> fmt::Display for DifferenceOfPaths<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.minuend, self.subtrahend)
    }
}

/// One generator of a semimonomial ideal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Generator<V> {
    Monomial(Path<V>),
    Binomial(DifferenceOfPaths<V>),
}

impl<V: fmt::Display> fmt::Display for Generator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Monomial(path) => write!(f, "{}", path),
            Generator::Binomial(difference) => write!(f, "{}", difference),
        }
    }
}

/// An ideal generated by paths (monomials) and differences of paths (binomials).
///
/// Generators are kept together with the arrow whose cyclic derivative produced them,
/// in ascending arrow order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemimonomialIdeal<V> {
    generators: Vec<(Arrow<V>, Generator<V>)>,
}

impl<V: Vertex> SemimonomialIdeal<V> {
    pub fn monomial_generators(&self) -> Vec<&Path<V>> {
        self.generators
            .iter()
            .filter_map(|(_, generator)| match generator {
                Generator::Monomial(path) => Some(path),
                Generator::Binomial(_) => None,
            })
            .collect()
    }

    pub fn binomial_generators(&self) -> Vec<&DifferenceOfPaths<V>> {
        self.generators
            .iter()
            .filter_map(|(_, generator)| match generator {
                Generator::Binomial(difference) => Some(difference),
                Generator::Monomial(_) => None,
            })
            .collect()
    }

    /// The generator derived from `arrow`, if the arrow occurs in the potential.
    pub fn generator(&self, arrow: &Arrow<V>) -> Option<&Generator<V>> {
        self.generators
            .iter()
            .find(|(candidate, _)| candidate == arrow)
            .map(|(_, generator)| generator)
    }

    /// `(arrow, generator)` pairs in ascending arrow order.
    pub fn generators(&self) -> impl Iterator<Item = (&Arrow<V>, &Generator<V>)> {
        self.generators.iter().map(|(arrow, generator)| (arrow, generator))
    }

    /// Total number of generators, one per arrow of the potential.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

/// Derives the semimonomial ideal `⟨∂ₐW : a an arrow of W⟩` of a potential `W`.
///
/// Supported potentials have coefficients in {-1, +1} and no cycle through the same
/// arrow twice. Under those conditions each derivative has one term (a monomial) or
/// two terms (a binomial), provided no arrow occurs with the same sign in two cycles.
#[derive(Debug, Default, Clone, Copy)]
pub struct SemimonomialIdealFactory;

impl SemimonomialIdealFactory {
    pub fn new() -> Self {
        Self
    }

    /// Validates `potential` and derives one generator per distinct arrow.
    ///
    /// # Errors
    /// - `Error::NonUnitCoefficient` / `Error::RepeatedArrowInCycle` when the potential
    ///   is outside what this derivation supports.
    /// - `Error::RepeatedArrowSign` when two cycles carry the same arrow with the same
    ///   sign, i.e. the potential is not semimonomial.
    /// - `Error::InternalInvariant` if a derivative of a validated potential is not a
    ///   monomial or a binomial.
    pub fn create_semimonomial_ideal_from_potential<V: Vertex>(
        &self,
        potential: &Potential<V>,
    ) -> Result<SemimonomialIdeal<V>> {
        debug!(
            "Deriving semimonomial ideal from a potential with {} cycles",
            potential.len()
        );

        let terms = potential.sorted_terms();
        if let Err(e) = check_supported(&terms).and_then(|_| check_semimonomial(&terms)) {
            debug!("Potential rejected: {}", e);
            return Err(e);
        }

        let mut generators = Vec::new();
        for arrow in potential.arrows() {
            let derivative = potential.differentiate_cyclically(&arrow);
            let generator = generator_from_derivative(&arrow, &derivative)?;
            trace!("Generator for arrow {:?}: {:?}", arrow, generator);
            generators.push((arrow, generator));
        }

        let ideal = SemimonomialIdeal { generators };
        debug!(
            "Semimonomial ideal has {} monomial and {} binomial generators",
            ideal.monomial_generators().len(),
            ideal.binomial_generators().len()
        );
        Ok(ideal)
    }
}

impl<V: Vertex> IdealFactory<V> for SemimonomialIdealFactory {
    fn create_ideal(&self, potential: &Potential<V>) -> Result<SemimonomialIdeal<V>> {
        self.create_semimonomial_ideal_from_potential(potential)
    }
}

/// Rejects potentials the derivation cannot handle yet: non-unit coefficients and
/// cycles through the same arrow more than once.
fn check_supported<V: Vertex>(terms: &[(&DetachedCycle<V>, i64)]) -> Result<()> {
    for &(cycle, coefficient) in terms {
        if coefficient != 1 && coefficient != -1 {
            return Err(Error::NonUnitCoefficient {
                cycle: format!("{:?}", cycle),
                coefficient,
            });
        }
        if let Some(arrow) = cycle.repeated_arrow() {
            return Err(Error::RepeatedArrowInCycle {
                cycle: format!("{:?}", cycle),
                arrow: format!("{:?}", arrow),
            });
        }
    }
    Ok(())
}

/// Each `(arrow, sign)` pair may come from at most one cycle.
fn check_semimonomial<V: Vertex>(terms: &[(&DetachedCycle<V>, i64)]) -> Result<()> {
    let mut seen = HashSet::new();
    for &(cycle, sign) in terms {
        for arrow in cycle.arrows() {
            if !seen.insert((arrow, sign)) {
                return Err(Error::RepeatedArrowSign {
                    arrow: format!("{:?}", arrow),
                    sign,
                });
            }
        }
    }
    Ok(())
}

/// Turns `∂ₐW` into a generator. The `+1` term of a binomial comes from the positive
/// cycle and becomes the minuend.
fn generator_from_derivative<V: Vertex>(
    arrow: &Arrow<V>,
    derivative: &LinearCombination<Path<V>>,
) -> Result<Generator<V>> {
    let terms = derivative.sorted_terms();

    match terms.as_slice() {
        [(path, coefficient)] if coefficient.abs() == 1 => Ok(Generator::Monomial((*path).clone())),
        [(first, 1), (second, -1)] => binomial(arrow, first, second),
        [(first, -1), (second, 1)] => binomial(arrow, second, first),
        _ => Err(Error::InternalInvariant(format!(
            "derivative by arrow {:?} is {:?}; expected one unit term or a +1/-1 pair",
            arrow, derivative
        ))),
    }
}

/// Two derivative terms of one arrow always run from its target to its source, so a
/// failure here is a fault in the derivation rather than in the potential.
fn binomial<V: Vertex>(
    arrow: &Arrow<V>,
    minuend: &Path<V>,
    subtrahend: &Path<V>,
) -> Result<Generator<V>> {
    DifferenceOfPaths::new(minuend.clone(), subtrahend.clone())
        .map(Generator::Binomial)
        .map_err(|e| {
            Error::InternalInvariant(format!(
                "derivative terms for arrow {:?} are not parallel: {}",
                arrow, e
            ))
        })
}

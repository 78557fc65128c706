use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use common::error::{Error, Result};

/// A formal sum `Σ cᵢ·xᵢ` with integer coefficients over elements of type `T`.
///
/// Zero coefficients are never stored, so two combinations are equal exactly when
/// they hold the same `(element, coefficient)` pairs, whatever the order in which
/// terms were added. `Hash` agrees with that equality.
///
/// Every operation returns a new combination; the receiver is never modified.
///
/// Coefficients are `i64`. The plain arithmetic methods assume results stay in range;
/// the `checked_*` variants report `Error::CoefficientOverflow` instead.
#[derive(Clone)]
pub struct LinearCombination<T> {
    terms: HashMap<T, i64>,
}

impl<T: Eq + Hash + Clone> LinearCombination<T> {
    /// The empty combination (the zero element).
    pub fn new() -> Self {
        Self {
            terms: HashMap::new(),
        }
    }

    /// The one-term combination `coefficient·element`; empty when `coefficient == 0`.
    pub fn singleton(coefficient: i64, element: T) -> Self {
        let mut terms = HashMap::with_capacity(1);
        if coefficient != 0 {
            terms.insert(element, coefficient);
        }
        Self { terms }
    }

    /// Collects `(element, coefficient)` pairs, summing repeated elements and
    /// dropping whatever cancels to zero.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (T, i64)>,
    {
        let mut combination = Self::new();
        for (element, coefficient) in terms {
            combination.accumulate(element, coefficient);
        }
        combination
    }

    /// Coefficient of `element`, 0 if it does not occur.
    pub fn coefficient(&self, element: &T) -> i64 {
        self.terms.get(element).copied().unwrap_or(0)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.terms.contains_key(element)
    }

    /// Iterates over the nonzero terms in unspecified order.
    pub fn terms(&self) -> impl Iterator<Item = (&T, i64)> {
        self.terms.iter().map(|(element, &coefficient)| (element, coefficient))
    }

    /// Iterates over the elements with nonzero coefficient in unspecified order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.terms.keys()
    }

    /// Number of nonzero terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Multiplies every coefficient by `scalar`. Scaling by zero yields the empty combination.
    pub fn scale(&self, scalar: i64) -> Self {
        if scalar == 0 {
            return Self::new();
        }

        let terms = self
            .terms
            .iter()
            .map(|(element, &coefficient)| (element.clone(), coefficient * scalar))
            .collect();
        Self { terms }
    }

    /// Coefficient-wise sum; terms that cancel are removed.
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        for (element, &coefficient) in &other.terms {
            sum.accumulate(element.clone(), coefficient);
        }
        sum
    }

    /// Shorthand for `self.add(&LinearCombination::singleton(coefficient, element))`.
    pub fn add_singleton(&self, coefficient: i64, element: T) -> Self {
        let mut sum = self.clone();
        sum.accumulate(element, coefficient);
        sum
    }

    /// Like [`Self::scale`], but fails instead of overflowing.
    ///
    /// # Errors
    /// `Error::CoefficientOverflow` if some `coefficient * scalar` leaves the `i64` range.
    pub fn checked_scale(&self, scalar: i64) -> Result<Self> {
        if scalar == 0 {
            return Ok(Self::new());
        }

        let terms = self
            .terms
            .iter()
            .map(|(element, &coefficient)| {
                coefficient
                    .checked_mul(scalar)
                    .map(|scaled| (element.clone(), scaled))
                    .ok_or(Error::CoefficientOverflow)
            })
            .collect::<Result<HashMap<T, i64>>>()?;
        Ok(Self { terms })
    }

    /// Like [`Self::add`], but fails instead of overflowing.
    ///
    /// # Errors
    /// `Error::CoefficientOverflow` if a summed coefficient leaves the `i64` range.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let mut sum = self.clone();
        for (element, &coefficient) in &other.terms {
            let total = sum
                .coefficient(element)
                .checked_add(coefficient)
                .ok_or(Error::CoefficientOverflow)?;
            sum.set(element.clone(), total);
        }
        Ok(sum)
    }

    /// The additive inverse, `-self`.
    pub fn negate(&self) -> Self {
        self.scale(-1)
    }

    /// `self - other`.
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Order-independent equality of the term multisets. Same as `==`.
    pub fn equal_up_to_order(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self
                .terms
                .iter()
                .all(|(element, coefficient)| other.terms.get(element) == Some(coefficient))
    }

    /// Terms sorted by element, for reproducible output.
    pub fn sorted_terms(&self) -> Vec<(&T, i64)>
    where
        T: Ord,
    {
        let mut terms: Vec<_> = self.terms().collect();
        terms.sort_by(|(a, _), (b, _)| a.cmp(b));
        terms
    }

    // Only ever called on a value still owned by the builder, never on a shared one.
    fn accumulate(&mut self, element: T, coefficient: i64) {
        if coefficient == 0 {
            return;
        }

        let sum = self.coefficient(&element) + coefficient;
        self.set(element, sum);
    }

    fn set(&mut self, element: T, coefficient: i64) {
        if coefficient == 0 {
            self.terms.remove(&element);
        } else {
            self.terms.insert(element, coefficient);
        }
    }
}

impl<T: Eq + Hash + Clone> Default for LinearCombination<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> PartialEq for LinearCombination<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal_up_to_order(other)
    }
}

impl<T: Eq + Hash + Clone> Eq for LinearCombination<T> {}

/// Wrapping sum of per-term hashes. Addition is commutative, so the result does not
/// depend on the iteration order of the underlying map.
impl<T: Eq + Hash + Clone> Hash for LinearCombination<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .terms
            .iter()
            .map(|(element, coefficient)| {
                // DefaultHasher::new() uses fixed keys, so term hashes are stable.
                let mut term_hasher = DefaultHasher::new();
                element.hash(&mut term_hasher);
                coefficient.hash(&mut term_hasher);
                term_hasher.finish()
            })
            .fold(0u64, u64::wrapping_add);

        self.terms.len().hash(state);
        combined.hash(state);
    }
}

impl<T: Eq + Hash + Clone> FromIterator<(T, i64)> for LinearCombination<T> {
    fn from_iter<I: IntoIterator<Item = (T, i64)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinearCombination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.terms.iter()).finish()
    }
}

/// Formats as `c₁·x₁ + c₂·x₂ - …` with terms sorted by element; `0` when empty.
impl<T: Eq + Hash + Clone + Ord + fmt::Display> fmt::Display for LinearCombination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = self.sorted_terms();
        if terms.is_empty() {
            return write!(f, "0");
        }

        for (position, (element, coefficient)) in terms.into_iter().enumerate() {
            match (position, coefficient < 0) {
                (0, false) => write!(f, "{}·{}", coefficient, element)?,
                (0, true) => write!(f, "-{}·{}", coefficient.unsigned_abs(), element)?,
                (_, false) => write!(f, " + {}·{}", coefficient, element)?,
                (_, true) => write!(f, " - {}·{}", coefficient.unsigned_abs(), element)?,
            }
        }
        Ok(())
    }
}

use std::fmt;
use std::ops::Deref;

use common::error::{Error, Result};
use common::types::{Arrow, Vertex};

use crate::linear_combination::LinearCombination;
use crate::path::{Path, rotated};
use crate::rotation::tournament_minimal_rotation;

/// A closed path considered up to cyclic rotation.
///
/// The wrapped path is the canonical representative: the rotation whose sequence of
/// arrow sources is lexicographically smallest. Equality, ordering and hashing are
/// those of that canonical path, so any two rotations of the same closed walk give
/// equal cycles.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DetachedCycle<V> {
    canonical: Path<V>,
}

impl<V: Vertex> DetachedCycle<V> {
    /// Detaches a closed path from its starting point.
    ///
    /// # Errors
    /// `Error::NotClosed` if `path` does not end where it starts.
    pub fn new(path: Path<V>) -> Result<Self> {
        if !path.is_closed() {
            return Err(Error::NotClosed(format!("{:?}", path)));
        }

        Ok(Self {
            canonical: canonicalize(path),
        })
    }

    /// Builds the cycle through `vertices`, which must repeat the first vertex at the end,
    /// e.g. `[1, 2, 4, 5, 1]`.
    pub fn from_vertices(vertices: &[V]) -> Result<Self> {
        Self::new(Path::from_vertices(vertices)?)
    }

    pub fn from_arrows(arrows: Vec<Arrow<V>>) -> Result<Self> {
        Self::new(Path::from_arrows(arrows)?)
    }

    /// The canonical closed path representing this cycle.
    pub fn canonical_path(&self) -> &Path<V> {
        &self.canonical
    }

    pub fn into_path(self) -> Path<V> {
        self.canonical
    }

    pub fn arrows(&self) -> &[Arrow<V>] {
        self.canonical.arrows()
    }

    /// Number of arrows in the cycle.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Number of times `arrow` occurs in the cycle.
    pub fn occurrences(&self, arrow: &Arrow<V>) -> usize {
        self.arrows().iter().filter(|a| *a == arrow).count()
    }

    /// The first arrow occurring more than once, if any.
    pub fn repeated_arrow(&self) -> Option<&Arrow<V>> {
        let arrows = self.arrows();
        arrows
            .iter()
            .enumerate()
            .find(|(i, arrow)| arrows[i + 1..].contains(*arrow))
            .map(|(_, arrow)| arrow)
    }

    /// Cyclic derivative with respect to `arrow`.
    ///
    /// Each occurrence of `arrow` at position `i` contributes `+1` times the path that
    /// starts at `arrow.target`, reads the arrows after position `i`, wraps around and
    /// stops just before position `i`, ending at `arrow.source`. The result is empty
    /// if `arrow` does not occur in the cycle.
    pub fn differentiate_cyclically(&self, arrow: &Arrow<V>) -> LinearCombination<Path<V>> {
        let arrows = self.arrows();
        let n = arrows.len();

        arrows
            .iter()
            .enumerate()
            .filter(|(_, candidate)| *candidate == arrow)
            .map(|(i, _)| {
                let remainder: Vec<Arrow<V>> =
                    (1..n).map(|offset| arrows[(i + offset) % n].clone()).collect();
                let path = Path::from_parts_unchecked(arrow.target().clone(), remainder);
                (path, 1)
            })
            .collect()
    }
}

/// Rotates a closed path to its canonical starting point.
fn canonicalize<V: Vertex>(path: Path<V>) -> Path<V> {
    if path.len() <= 1 {
        return path;
    }

    let start = {
        let sources: Vec<&V> = path.arrows().iter().map(|arrow| arrow.source()).collect();
        tournament_minimal_rotation(&sources)
    };
    match start {
        0 => path,
        start => rotated(path.arrows(), start),
    }
}

impl<V: fmt::Debug> fmt::Debug for DetachedCycle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.canonical)
    }
}

impl<V: fmt::Display> fmt::Display for DetachedCycle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

/// A cycle that visits no vertex twice.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimpleCycle<V> {
    cycle: DetachedCycle<V>,
}

impl<V: Vertex> SimpleCycle<V> {
    /// # Errors
    /// `Error::NotClosed` if `path` is not closed, `Error::NotSimple` if it repeats a vertex.
    pub fn new(path: Path<V>) -> Result<Self> {
        if !path.is_simple() {
            return Err(Error::NotSimple(format!("{:?}", path)));
        }

        Ok(Self {
            cycle: DetachedCycle::new(path)?,
        })
    }

    pub fn from_vertices(vertices: &[V]) -> Result<Self> {
        Self::new(Path::from_vertices(vertices)?)
    }

    pub fn from_arrows(arrows: Vec<Arrow<V>>) -> Result<Self> {
        Self::new(Path::from_arrows(arrows)?)
    }

    pub fn into_detached(self) -> DetachedCycle<V> {
        self.cycle
    }
}

impl<V> Deref for SimpleCycle<V> {
    type Target = DetachedCycle<V>;

    fn deref(&self) -> &Self::Target {
        &self.cycle
    }
}

impl<V> From<SimpleCycle<V>> for DetachedCycle<V> {
    fn from(simple: SimpleCycle<V>) -> Self {
        simple.cycle
    }
}

impl<V: fmt::Debug> fmt::Debug for SimpleCycle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.cycle)
    }
}

impl<V: fmt::Display> fmt::Display for SimpleCycle<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cycle)
    }
}

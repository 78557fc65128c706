use std::collections::{BTreeMap, BTreeSet};

use common::error::{Error, Result};
use common::types::Vertex;

/// A permutation of a finite set of vertices.
///
/// For a self-injective algebra it records which vertex's projective has its socle
/// at which vertex's simple. Only the permutation itself lives here: its orbits,
/// order and the usual group operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NakayamaPermutation<V> {
    map: BTreeMap<V, V>,
}

impl<V: Vertex> NakayamaPermutation<V> {
    /// Creates the permutation sending each key of `map` to its value.
    ///
    /// # Errors
    /// `Error::InvalidPermutation` unless `map` is a bijection of its key set.
    pub fn new(map: BTreeMap<V, V>) -> Result<Self> {
        let mut images = BTreeSet::new();
        for (vertex, image) in &map {
            if !map.contains_key(image) {
                return Err(Error::InvalidPermutation(format!(
                    "{:?} is sent to {:?}, which is outside the domain",
                    vertex, image
                )));
            }
            if !images.insert(image) {
                return Err(Error::InvalidPermutation(format!(
                    "{:?} is the image of more than one vertex",
                    image
                )));
            }
        }

        Ok(Self { map })
    }

    /// Builds a permutation from `(vertex, image)` pairs.
    ///
    /// # Errors
    /// `Error::DuplicateVertex` if a vertex is given two images, otherwise as [`Self::new`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut map = BTreeMap::new();
        for (vertex, image) in pairs {
            if map.contains_key(&vertex) {
                return Err(Error::DuplicateVertex(format!("{:?}", vertex)));
            }
            map.insert(vertex, image);
        }
        Self::new(map)
    }

    pub fn identity<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let map = vertices.into_iter().map(|v| (v.clone(), v)).collect();
        Self { map }
    }

    /// Image of `vertex`, or `None` outside the domain.
    pub fn apply(&self, vertex: &V) -> Option<&V> {
        self.map.get(vertex)
    }

    pub fn domain(&self) -> impl Iterator<Item = &V> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The orbit `v, σ(v), σ²(v), …` up to the return to `v`; empty outside the domain.
    pub fn orbit(&self, vertex: &V) -> Vec<V> {
        let mut orbit = Vec::new();
        let mut current = vertex;
        while let Some(image) = self.map.get(current) {
            orbit.push(current.clone());
            if image == vertex {
                break;
            }
            current = image;
        }
        orbit
    }

    /// All orbits, each starting at its smallest vertex, ordered by that vertex.
    pub fn orbits(&self) -> Vec<Vec<V>> {
        let mut visited = BTreeSet::new();
        let mut orbits = Vec::new();

        for vertex in self.map.keys() {
            if visited.contains(vertex) {
                continue;
            }
            let orbit = self.orbit(vertex);
            visited.extend(orbit.iter().cloned());
            orbits.push(orbit);
        }
        orbits
    }

    /// Smallest `k >= 1` with `σᵏ = id`: the lcm of the orbit lengths.
    pub fn order(&self) -> usize {
        self.orbits()
            .iter()
            .map(Vec::len)
            .fold(1, |acc, length| acc / gcd(acc, length) * length)
    }

    pub fn fixed_points(&self) -> Vec<&V> {
        self.map
            .iter()
            .filter(|(vertex, image)| vertex == image)
            .map(|(vertex, _)| vertex)
            .collect()
    }

    pub fn is_identity(&self) -> bool {
        self.map.iter().all(|(vertex, image)| vertex == image)
    }

    pub fn inverse(&self) -> Self {
        let map = self
            .map
            .iter()
            .map(|(vertex, image)| (image.clone(), vertex.clone()))
            .collect();
        Self { map }
    }

    /// The composite `self ∘ other`: apply `other` first, then `self`.
    ///
    /// # Errors
    /// `Error::InvalidPermutation` if the two domains differ.
    pub fn compose(&self, other: &Self) -> Result<Self> {
        if !self.map.keys().eq(other.map.keys()) {
            return Err(Error::InvalidPermutation(
                "cannot compose permutations of different vertex sets".to_string(),
            ));
        }

        let mut map = BTreeMap::new();
        for (vertex, middle) in &other.map {
            let image = self.map.get(middle).ok_or_else(|| {
                Error::InvalidPermutation(format!("{:?} is outside the domain", middle))
            })?;
            map.insert(vertex.clone(), image.clone());
        }
        Ok(Self { map })
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

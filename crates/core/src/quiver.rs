use std::collections::BTreeSet;

use common::error::{Error, Result};
use common::types::{Arrow, Vertex};

use crate::path::Path;
use crate::potential::Potential;
use crate::semimonomial::SemimonomialIdeal;
use crate::traits::IdealFactory;

/// A finite quiver without parallel arrows.
///
/// Vertices and arrows are kept in ordered sets, so every enumeration below is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiver<V> {
    vertices: BTreeSet<V>,
    arrows: BTreeSet<Arrow<V>>,
}

impl<V: Vertex> Quiver<V> {
    /// # Errors
    /// - `Error::DuplicateVertex` / `Error::DuplicateArrow` for repeated input.
    /// - `Error::VertexNotInQuiver` if an arrow has an endpoint outside `vertices`.
    pub fn new<I, J>(vertices: I, arrows: J) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = Arrow<V>>,
    {
        let mut vertex_set = BTreeSet::new();
        for vertex in vertices {
            let description = format!("{:?}", vertex);
            if !vertex_set.insert(vertex) {
                return Err(Error::DuplicateVertex(description));
            }
        }

        let mut arrow_set = BTreeSet::new();
        for arrow in arrows {
            for endpoint in [arrow.source(), arrow.target()] {
                if !vertex_set.contains(endpoint) {
                    return Err(Error::VertexNotInQuiver(format!("{:?}", endpoint)));
                }
            }
            let description = format!("{:?}", arrow);
            if !arrow_set.insert(arrow) {
                return Err(Error::DuplicateArrow(description));
            }
        }

        Ok(Self {
            vertices: vertex_set,
            arrows: arrow_set,
        })
    }

    /// The smallest quiver containing every vertex and arrow of `potential`.
    pub fn from_potential(potential: &Potential<V>) -> Self {
        Self {
            vertices: potential.vertices(),
            arrows: potential.arrows(),
        }
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    pub fn arrows(&self) -> impl Iterator<Item = &Arrow<V>> {
        self.arrows.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn arrow_count(&self) -> usize {
        self.arrows.len()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn contains_arrow(&self, arrow: &Arrow<V>) -> bool {
        self.arrows.contains(arrow)
    }

    /// True when the path's starting point and all its arrows lie in the quiver.
    pub fn contains_path(&self, path: &Path<V>) -> bool {
        self.contains_vertex(path.starting_point())
            && path.arrows().iter().all(|arrow| self.contains_arrow(arrow))
    }

    /// The unique arrow from `source` to `target`, if there is one.
    pub fn arrow_between(&self, source: &V, target: &V) -> Option<&Arrow<V>> {
        self.arrows
            .get(&Arrow::new(source.clone(), target.clone()))
    }

    /// Arrows leaving `vertex`, ordered by target.
    pub fn outgoing_arrows<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a Arrow<V>> + 'a {
        self.arrows
            .iter()
            .skip_while(move |arrow| arrow.source() < vertex)
            .take_while(move |arrow| arrow.source() == vertex)
    }

    /// Arrows entering `vertex`, ordered by source.
    pub fn incoming_arrows<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a Arrow<V>> + 'a {
        self.arrows
            .iter()
            .filter(move |arrow| arrow.target() == vertex)
    }

    pub fn successors<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a V> + 'a {
        self.outgoing_arrows(vertex).map(Arrow::target)
    }

    pub fn predecessors<'a>(&'a self, vertex: &'a V) -> impl Iterator<Item = &'a V> + 'a {
        self.incoming_arrows(vertex).map(Arrow::source)
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.outgoing_arrows(vertex).count()
    }

    pub fn in_degree(&self, vertex: &V) -> usize {
        self.incoming_arrows(vertex).count()
    }
}

/// A quiver together with a potential whose cycles run inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuiverWithPotential<V: Vertex> {
    quiver: Quiver<V>,
    potential: Potential<V>,
}

impl<V: Vertex> QuiverWithPotential<V> {
    /// # Errors
    /// - `Error::VertexNotInQuiver` if a cycle's starting vertex or an arrow's source is
    ///   not a vertex of the quiver.
    /// - `Error::ArrowNotInQuiver` if a cycle uses an arrow the quiver does not have.
    pub fn new(quiver: Quiver<V>, potential: Potential<V>) -> Result<Self> {
        for (cycle, _) in potential.sorted_terms() {
            let path = cycle.canonical_path();
            let sources = path.arrows().iter().map(Arrow::source);
            for vertex in std::iter::once(path.starting_point()).chain(sources) {
                if !quiver.contains_vertex(vertex) {
                    return Err(Error::VertexNotInQuiver(format!("{:?}", vertex)));
                }
            }
            for arrow in path.arrows() {
                if !quiver.contains_arrow(arrow) {
                    return Err(Error::ArrowNotInQuiver(format!("{:?}", arrow)));
                }
            }
        }

        Ok(Self { quiver, potential })
    }

    pub fn quiver(&self) -> &Quiver<V> {
        &self.quiver
    }

    pub fn potential(&self) -> &Potential<V> {
        &self.potential
    }

    /// Derives the ideal of relations of this QP with `factory`.
    pub fn semimonomial_ideal<F: IdealFactory<V>>(&self, factory: &F) -> Result<SemimonomialIdeal<V>> {
        factory.create_ideal(&self.potential)
    }
}

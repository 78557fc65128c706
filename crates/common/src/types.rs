use std::fmt;
use std::hash::Hash;

/// Capability required of a quiver vertex: totally ordered, hashable and printable.
///
/// Every type meeting the bounds is a vertex; in practice vertices are small integers.
pub trait Vertex: Clone + Ord + Hash + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Ord + Hash + fmt::Debug {}

/// A directed edge of a quiver, from `source` to `target`.
///
/// Arrows are identified by their endpoints, so a quiver can hold at most one
/// arrow per ordered pair of vertices (no parallel arrows).
///
/// Ordering is lexicographic on `(source, target)`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Arrow<V> {
    source: V,
    target: V,
}

impl<V> Arrow<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn target(&self) -> &V {
        &self.target
    }
}

impl<V: Vertex> Arrow<V> {
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    /// The arrow with source and target swapped.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// True for a loop, i.e. an arrow whose source equals its target.
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// True when `next` can follow this arrow in a path.
    pub fn is_followed_by(&self, next: &Arrow<V>) -> bool {
        self.target == next.source
    }
}

impl<V: fmt::Debug> fmt::Debug for Arrow<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.source, self.target)
    }
}

impl<V: fmt::Display> fmt::Display for Arrow<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

impl<V: Vertex> From<(V, V)> for Arrow<V> {
    fn from((source, target): (V, V)) -> Self {
        Arrow::new(source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_order_by_source_then_target() {
        let mut arrows = vec![Arrow::new(2, 1), Arrow::new(1, 3), Arrow::new(1, 2)];
        arrows.sort();

        assert_eq!(
            arrows,
            vec![Arrow::new(1, 2), Arrow::new(1, 3), Arrow::new(2, 1)]
        );
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let arrow = Arrow::new(4, 5);
        assert_eq!(arrow.reversed(), Arrow::new(5, 4));
        assert_eq!(arrow.reversed().reversed(), arrow);
    }

    #[test]
    fn adjacency_and_loops() {
        assert!(Arrow::new(1, 2).is_followed_by(&Arrow::new(2, 3)));
        assert!(!Arrow::new(1, 2).is_followed_by(&Arrow::new(3, 4)));
        assert!(Arrow::new(7, 7).is_loop());
        assert!(!Arrow::new(7, 8).is_loop());
    }

    #[test]
    fn endpoints_need_no_vertex_bound() {
        fn describe<V: fmt::Display>(arrow: &Arrow<V>) -> String {
            format!("{} -> {}", arrow.source(), arrow.target())
        }

        assert_eq!(describe(&Arrow::new(3u32, 4u32)), "3 -> 4");
    }

    #[test]
    fn formats_as_pair() {
        let arrow: Arrow<u32> = (1, 2).into();
        assert_eq!(format!("{}", arrow), "(1, 2)");
        assert_eq!(format!("{:?}", arrow), "(1, 2)");
    }
}

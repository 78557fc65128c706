use std::collections::HashSet;
use std::fmt;

use common::error::{Error, Result};
use common::types::{Arrow, Vertex};

/// A walk in a quiver: a starting vertex followed by a sequence of arrows.
///
/// Invariants, checked by every constructor:
/// - `arrows[i].target == arrows[i + 1].source` for consecutive arrows;
/// - `arrows[0].source == starting_point` when the path is non-empty.
///
/// The empty path at `v` (a "trivial" or "stationary" path) is a valid path of length 0.
///
/// Paths are immutable; operations such as [`Path::append_arrow`] return new paths.
/// Ordering compares starting points first, then arrow sequences.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<V> {
    starting_point: V,
    arrows: Vec<Arrow<V>>,
}

impl<V: Vertex> Path<V> {
    /// Creates a path from an explicit starting point and arrow sequence.
    ///
    /// # Errors
    /// - `Error::EndpointMismatch` if the first arrow does not leave `starting_point`.
    /// - `Error::NonAdjacentArrows` if two consecutive arrows do not meet.
    pub fn new(starting_point: V, arrows: Vec<Arrow<V>>) -> Result<Self> {
        if let Some(first) = arrows.first() {
            if *first.source() != starting_point {
                return Err(Error::EndpointMismatch {
                    expected: format!("{:?}", starting_point),
                    actual: format!("{:?}", first.source()),
                });
            }
        }
        check_adjacency(&arrows)?;

        Ok(Self {
            starting_point,
            arrows,
        })
    }

    /// Creates a path from a non-empty arrow sequence; the start is the first arrow's source.
    ///
    /// # Errors
    /// `Error::EmptyArrowSequence` for an empty sequence, since no starting point can be
    /// inferred, and `Error::NonAdjacentArrows` if two consecutive arrows do not meet.
    pub fn from_arrows(arrows: Vec<Arrow<V>>) -> Result<Self> {
        let starting_point = arrows
            .first()
            .map(|arrow| arrow.source().clone())
            .ok_or(Error::EmptyArrowSequence)?;

        Self::new(starting_point, arrows)
    }

    /// Creates a path visiting `vertices` in order. A single vertex gives the trivial path.
    ///
    /// # Errors
    /// `Error::EmptyVertexSequence` if `vertices` is empty.
    pub fn from_vertices(vertices: &[V]) -> Result<Self> {
        let starting_point = vertices.first().cloned().ok_or(Error::EmptyVertexSequence)?;
        let arrows = vertices
            .windows(2)
            .map(|pair| Arrow::new(pair[0].clone(), pair[1].clone()))
            .collect();

        Ok(Self {
            starting_point,
            arrows,
        })
    }

    /// The path of length zero at `vertex`.
    pub fn trivial(vertex: V) -> Self {
        Self {
            starting_point: vertex,
            arrows: Vec::new(),
        }
    }

    /// Builds a path whose adjacency is already guaranteed by the caller.
    pub(crate) fn from_parts_unchecked(starting_point: V, arrows: Vec<Arrow<V>>) -> Self {
        Self {
            starting_point,
            arrows,
        }
    }

    pub fn starting_point(&self) -> &V {
        &self.starting_point
    }

    /// The target of the last arrow, or the starting point of an empty path.
    pub fn ending_point(&self) -> &V {
        self.arrows
            .last()
            .map(|arrow| arrow.target())
            .unwrap_or(&self.starting_point)
    }

    pub fn arrows(&self) -> &[Arrow<V>] {
        &self.arrows
    }

    /// Number of arrows.
    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.starting_point == *self.ending_point()
    }

    /// True when no vertex repeats, except that a closed path may return to its start.
    pub fn is_simple(&self) -> bool {
        let vertices = self.vertices();
        let interior = if self.is_closed() && !self.is_empty() {
            &vertices[..vertices.len() - 1]
        } else {
            &vertices[..]
        };

        let mut seen = HashSet::with_capacity(interior.len());
        interior.iter().all(|vertex| seen.insert(vertex))
    }

    /// The `len() + 1` vertices visited by the path, in order.
    pub fn vertices(&self) -> Vec<V> {
        std::iter::once(self.starting_point.clone())
            .chain(self.arrows.iter().map(|arrow| arrow.target().clone()))
            .collect()
    }

    /// The vertex reached after `index` arrows; `vertex_at(len())` is the ending point.
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        match index {
            0 => Some(&self.starting_point),
            i => self.arrows.get(i - 1).map(|arrow| arrow.target()),
        }
    }

    /// Returns the subpath made of `count` arrows starting at arrow `index`.
    ///
    /// With `count == 0` the result is the trivial path at the vertex reached after
    /// `index` arrows, so `extract_subpath(len(), 0)` is the trivial path at the end.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if `index + count > len()`.
    pub fn extract_subpath(&self, index: usize, count: usize) -> Result<Self> {
        let end = self.checked_segment_end(index, count)?;
        let starting_point = self.vertex_at(index).cloned().ok_or(Error::IndexOutOfRange {
            index,
            count,
            length: self.len(),
        })?;

        Ok(Self::from_parts_unchecked(
            starting_point,
            self.arrows[index..end].to_vec(),
        ))
    }

    /// Returns a new path starting with `arrow` followed by this path.
    ///
    /// # Errors
    /// `Error::EndpointMismatch` if `arrow` does not end at this path's starting point.
    pub fn prepend_arrow(&self, arrow: Arrow<V>) -> Result<Self> {
        if *arrow.target() != self.starting_point {
            return Err(Error::EndpointMismatch {
                expected: format!("{:?}", self.starting_point),
                actual: format!("{:?}", arrow.target()),
            });
        }

        let starting_point = arrow.source().clone();
        let mut arrows = Vec::with_capacity(self.arrows.len() + 1);
        arrows.push(arrow);
        arrows.extend_from_slice(&self.arrows);

        Ok(Self::from_parts_unchecked(starting_point, arrows))
    }

    /// Returns a new path made of this path followed by `arrow`.
    ///
    /// # Errors
    /// `Error::EndpointMismatch` if `arrow` does not leave this path's ending point.
    pub fn append_arrow(&self, arrow: Arrow<V>) -> Result<Self> {
        if arrow.source() != self.ending_point() {
            return Err(Error::EndpointMismatch {
                expected: format!("{:?}", self.ending_point()),
                actual: format!("{:?}", arrow.source()),
            });
        }

        let mut arrows = self.arrows.clone();
        arrows.push(arrow);

        Ok(Self::from_parts_unchecked(self.starting_point.clone(), arrows))
    }

    /// Concatenates `other` after this path.
    ///
    /// # Errors
    /// `Error::EndpointMismatch` if `other` does not start where this path ends.
    pub fn append_path(&self, other: &Path<V>) -> Result<Self> {
        if other.starting_point() != self.ending_point() {
            return Err(Error::EndpointMismatch {
                expected: format!("{:?}", self.ending_point()),
                actual: format!("{:?}", other.starting_point()),
            });
        }

        let mut arrows = Vec::with_capacity(self.len() + other.len());
        arrows.extend_from_slice(&self.arrows);
        arrows.extend_from_slice(&other.arrows);

        Ok(Self::from_parts_unchecked(self.starting_point.clone(), arrows))
    }

    /// Replaces the `count` arrows starting at `index` with `replacement`.
    ///
    /// The replacement must run between the same two vertices as the segment it replaces.
    ///
    /// # Errors
    /// - `Error::IndexOutOfRange` if `index + count > len()`.
    /// - `Error::EndpointMismatch` if the replacement's endpoints differ from the segment's.
    pub fn replace_subpath(&self, index: usize, count: usize, replacement: &Path<V>) -> Result<Self> {
        let segment = self.extract_subpath(index, count)?;

        if segment.starting_point() != replacement.starting_point() {
            return Err(Error::EndpointMismatch {
                expected: format!("{:?}", segment.starting_point()),
                actual: format!("{:?}", replacement.starting_point()),
            });
        }
        if segment.ending_point() != replacement.ending_point() {
            return Err(Error::EndpointMismatch {
                expected: format!("{:?}", segment.ending_point()),
                actual: format!("{:?}", replacement.ending_point()),
            });
        }

        let end = index + count;
        let mut arrows = Vec::with_capacity(self.len() - count + replacement.len());
        arrows.extend_from_slice(&self.arrows[..index]);
        arrows.extend_from_slice(&replacement.arrows);
        arrows.extend_from_slice(&self.arrows[end..]);

        Ok(Self::from_parts_unchecked(self.starting_point.clone(), arrows))
    }

    /// The same walk traversed backwards: arrows in reverse order, each one reversed.
    pub fn reverse(&self) -> Self {
        let arrows = self.arrows.iter().rev().map(Arrow::reversed).collect();
        Self::from_parts_unchecked(self.ending_point().clone(), arrows)
    }

    /// Rotates a closed path so that it starts after its first `shift` arrows.
    ///
    /// # Errors
    /// `Error::NotClosed` if the path is not closed.
    pub fn rotate(&self, shift: usize) -> Result<Self> {
        if !self.is_closed() {
            return Err(Error::NotClosed(format!("{:?}", self)));
        }
        if self.is_empty() {
            return Ok(self.clone());
        }

        Ok(rotated(&self.arrows, shift % self.len()))
    }

    fn checked_segment_end(&self, index: usize, count: usize) -> Result<usize> {
        index
            .checked_add(count)
            .filter(|&end| end <= self.len())
            .ok_or(Error::IndexOutOfRange {
                index,
                count,
                length: self.len(),
            })
    }
}

/// The closed path reading `arrows` from position `start`, wrapping around.
///
/// `arrows` must be a non-empty closed walk and `start < arrows.len()`.
pub(crate) fn rotated<V: Vertex>(arrows: &[Arrow<V>], start: usize) -> Path<V> {
    let mut sequence = Vec::with_capacity(arrows.len());
    sequence.extend_from_slice(&arrows[start..]);
    sequence.extend_from_slice(&arrows[..start]);

    Path::from_parts_unchecked(arrows[start].source().clone(), sequence)
}

fn check_adjacency<V: Vertex>(arrows: &[Arrow<V>]) -> Result<()> {
    for (index, pair) in arrows.windows(2).enumerate() {
        if !pair[0].is_followed_by(&pair[1]) {
            return Err(Error::NonAdjacentArrows {
                index,
                previous: format!("{:?}", pair[0]),
                next: format!("{:?}", pair[1]),
            });
        }
    }
    Ok(())
}

fn write_vertices<V>(
    f: &mut fmt::Formatter<'_>,
    path: &Path<V>,
    write_vertex: impl Fn(&mut fmt::Formatter<'_>, &V) -> fmt::Result,
) -> fmt::Result {
    write!(f, "(")?;
    write_vertex(f, &path.starting_point)?;
    for arrow in &path.arrows {
        write!(f, ", ")?;
        write_vertex(f, arrow.target())?;
    }
    write!(f, ")")
}

impl<V: fmt::Debug> fmt::Debug for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vertices(f, self, |f, v| write!(f, "{:?}", v))
    }
}

/// Formats the path as its vertex sequence, e.g. `(1, 2, 4)`.
impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vertices(f, self, |f, v| write!(f, "{}", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::ErrorKind;

    fn path(vertices: &[u32]) -> Path<u32> {
        Path::from_vertices(vertices).unwrap()
    }

    #[test]
    fn constructors_agree() {
        let from_vertices = path(&[1, 2, 4]);
        let from_arrows = Path::from_arrows(vec![Arrow::new(1, 2), Arrow::new(2, 4)]).unwrap();
        let explicit = Path::new(1, vec![Arrow::new(1, 2), Arrow::new(2, 4)]).unwrap();

        assert_eq!(from_vertices, from_arrows);
        assert_eq!(from_arrows, explicit);
        assert_eq!(from_vertices.len(), 2);
        assert_eq!(*from_vertices.ending_point(), 4);
    }

    #[test]
    fn non_adjacent_arrows_are_rejected() {
        let err = Path::from_arrows(vec![Arrow::new(1, 2), Arrow::new(3, 4)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert!(matches!(err, Error::NonAdjacentArrows { index: 0, .. }));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(
            Path::<u32>::from_arrows(vec![]).unwrap_err(),
            Error::EmptyArrowSequence
        );
        assert_eq!(
            Path::<u32>::from_vertices(&[]).unwrap_err(),
            Error::EmptyVertexSequence
        );
    }

    #[test]
    fn starting_point_must_match_first_arrow() {
        let err = Path::new(3, vec![Arrow::new(1, 2)]).unwrap_err();
        assert!(matches!(err, Error::EndpointMismatch { .. }));
    }

    #[test]
    fn trivial_path_is_closed_and_simple() {
        let trivial = Path::trivial(7u32);
        assert!(trivial.is_empty());
        assert!(trivial.is_closed());
        assert!(trivial.is_simple());
        assert_eq!(*trivial.ending_point(), 7);
        assert_eq!(trivial.vertices(), vec![7]);
    }

    #[test]
    fn simplicity() {
        assert!(path(&[1, 2, 3]).is_simple());
        assert!(path(&[1, 2, 3, 1]).is_simple());
        assert!(!path(&[1, 2, 1, 3]).is_simple());
        assert!(!path(&[1, 2, 1, 3, 1]).is_simple());
        assert!(path(&[5, 5]).is_simple());
    }

    #[test]
    fn extract_subpath_slices_arrows() {
        let p = path(&[1, 2, 4, 5, 1]);

        assert_eq!(p.extract_subpath(1, 2).unwrap(), path(&[2, 4, 5]));
        assert_eq!(p.extract_subpath(0, 4).unwrap(), p);
        assert_eq!(p.extract_subpath(2, 0).unwrap(), Path::trivial(4));
        assert_eq!(p.extract_subpath(4, 0).unwrap(), Path::trivial(1));
    }

    #[test]
    fn extract_subpath_bounds() {
        let p = path(&[1, 2, 4]);

        let err = p.extract_subpath(1, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(p.extract_subpath(3, 0).is_err());
        assert!(p.extract_subpath(usize::MAX, 2).is_err());
    }

    #[test]
    fn prepend_and_append_arrows() {
        let p = path(&[2, 4]);

        assert_eq!(p.prepend_arrow(Arrow::new(1, 2)).unwrap(), path(&[1, 2, 4]));
        assert_eq!(p.append_arrow(Arrow::new(4, 5)).unwrap(), path(&[2, 4, 5]));
        assert!(p.prepend_arrow(Arrow::new(1, 3)).is_err());
        assert!(p.append_arrow(Arrow::new(2, 5)).is_err());

        // The receiver is untouched.
        assert_eq!(p, path(&[2, 4]));
    }

    #[test]
    fn append_path_requires_matching_endpoints() {
        let first = path(&[1, 2, 4]);
        let second = path(&[4, 5, 1]);

        assert_eq!(first.append_path(&second).unwrap(), path(&[1, 2, 4, 5, 1]));
        assert!(second.append_path(&path(&[2, 3])).is_err());
        assert_eq!(first.append_path(&Path::trivial(4)).unwrap(), first);
    }

    #[test]
    fn replace_subpath_keeps_endpoints() {
        let p = path(&[1, 2, 4, 5, 1]);

        let replaced = p.replace_subpath(0, 2, &path(&[1, 3, 4])).unwrap();
        assert_eq!(replaced, path(&[1, 3, 4, 5, 1]));

        let shortened = p.replace_subpath(1, 2, &path(&[2, 5])).unwrap();
        assert_eq!(shortened, path(&[1, 2, 5, 1]));

        let inserted = p.replace_subpath(2, 0, &path(&[4, 6, 4])).unwrap();
        assert_eq!(inserted, path(&[1, 2, 4, 6, 4, 5, 1]));
    }

    #[test]
    fn replace_subpath_errors() {
        let p = path(&[1, 2, 4, 5, 1]);

        assert!(matches!(
            p.replace_subpath(0, 2, &path(&[1, 3])).unwrap_err(),
            Error::EndpointMismatch { .. }
        ));
        assert!(matches!(
            p.replace_subpath(0, 2, &path(&[3, 4])).unwrap_err(),
            Error::EndpointMismatch { .. }
        ));
        assert_eq!(
            p.replace_subpath(3, 2, &path(&[5, 1])).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn reverse_flips_arrows() {
        let p = path(&[1, 2, 4]);
        let reversed = p.reverse();

        assert_eq!(reversed, path(&[4, 2, 1]));
        assert_eq!(reversed.arrows()[0], Arrow::new(4, 2));
        assert_eq!(reversed.reverse(), p);
        assert_eq!(Path::trivial(3u32).reverse(), Path::trivial(3));
    }

    #[test]
    fn rotate_closed_paths_only() {
        let cycle = path(&[1, 2, 4, 5, 1]);

        assert_eq!(cycle.rotate(1).unwrap(), path(&[2, 4, 5, 1, 2]));
        assert_eq!(cycle.rotate(4).unwrap(), cycle);
        assert_eq!(cycle.rotate(6).unwrap(), path(&[4, 5, 1, 2, 4]));
        assert_eq!(
            path(&[1, 2]).rotate(1).unwrap_err().kind(),
            ErrorKind::Structural
        );
    }

    #[test]
    fn equality_is_order_sensitive() {
        assert_ne!(path(&[1, 2, 3]), path(&[1, 3, 2]));
        assert_ne!(Path::trivial(1u32), Path::trivial(2));
    }

    #[test]
    fn formatting() {
        assert_eq!(path(&[1, 2, 4]).to_string(), "(1, 2, 4)");
        assert_eq!(format!("{:?}", Path::trivial(3u32)), "(3)");
    }

    #[test]
    fn formatting_needs_only_the_format_bound() {
        fn render<V: fmt::Display + fmt::Debug>(path: &Path<V>) -> (String, String) {
            (format!("{}", path), format!("{:?}", path))
        }

        let labelled = Path::from_vertices(&["a", "b", "c"]).unwrap();
        assert_eq!(
            render(&labelled),
            ("(a, b, c)".to_string(), "(\"a\", \"b\", \"c\")".to_string())
        );
    }
}

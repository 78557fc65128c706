//! Lexicographically minimal rotation of a cyclic sequence.
//!
//! A closed path is determined by the source vertices of its arrows, so the
//! canonical rotation of a cycle is the minimal rotation of that vertex sequence.
//! Two algorithms are provided; both return the first index at which a minimal
//! rotation starts, so they pick the same canonical form.

/// Tournament selection: the current best start index is challenged by every
/// other index in turn, comparing the two rotations position by position.
///
/// The first differing position decides the match: a strictly smaller challenger
/// replaces the best, a strictly larger one is abandoned. O(n²) in the worst case,
/// which is fine for cycles of a few dozen arrows.
pub fn tournament_minimal_rotation<T: Ord>(sequence: &[T]) -> usize {
    let n = sequence.len();
    if n <= 1 {
        return 0;
    }

    let mut best = 0;
    for candidate in 1..n {
        for offset in 0..n {
            let challenger = &sequence[(candidate + offset) % n];
            let incumbent = &sequence[(best + offset) % n];

            if challenger < incumbent {
                best = candidate;
                break;
            }
            if challenger > incumbent {
                break;
            }
        }
    }

    best
}

/// Booth's linear-time least rotation, using a KMP-style failure function over the
/// doubled sequence.
///
/// # Citations
/// - Booth, K. S. "Lexicographically least circular substrings" (1980)
pub fn booth_minimal_rotation<T: Ord>(sequence: &[T]) -> usize {
    let n = sequence.len();
    if n <= 1 {
        return 0;
    }

    let at = |i: usize| &sequence[i % n];
    let mut failure: Vec<isize> = vec![-1; 2 * n];
    let mut k: usize = 0;

    for j in 1..2 * n {
        let current = at(j);
        let mut i = failure[j - k - 1];

        while i != -1 && current != at(k + i as usize + 1) {
            if current < at(k + i as usize + 1) {
                k = j - i as usize - 1;
            }
            i = failure[i as usize];
        }

        // Here either i == -1 or the sequence extends the current match.
        if i == -1 && current != at(k) {
            if current < at(k) {
                k = j;
            }
            failure[j - k] = -1;
        } else {
            failure[j - k] = i + 1;
        }
    }

    k % n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation_of<T: Clone>(sequence: &[T], start: usize) -> Vec<T> {
        sequence[start..]
            .iter()
            .chain(&sequence[..start])
            .cloned()
            .collect()
    }

    #[test]
    fn short_sequences_are_fixed_points() {
        assert_eq!(tournament_minimal_rotation::<u32>(&[]), 0);
        assert_eq!(tournament_minimal_rotation(&[9]), 0);
        assert_eq!(booth_minimal_rotation::<u32>(&[]), 0);
        assert_eq!(booth_minimal_rotation(&[9]), 0);
    }

    #[test]
    fn finds_smallest_start() {
        let sequence = [4, 5, 1, 2];
        assert_eq!(tournament_minimal_rotation(&sequence), 2);
        assert_eq!(booth_minimal_rotation(&sequence), 2);
    }

    #[test]
    fn ties_are_broken_by_later_positions() {
        // Rotations starting at 1 and 3 both start with 1; the one at 3 continues with 2.
        let sequence = [5, 1, 3, 1, 2];
        assert_eq!(tournament_minimal_rotation(&sequence), 3);
        assert_eq!(booth_minimal_rotation(&sequence), 3);
        assert_eq!(rotation_of(&sequence, 3), vec![1, 2, 5, 1, 3]);
    }

    #[test]
    fn periodic_sequences_pick_the_first_minimum() {
        let sequence = [2, 1, 2, 1];
        assert_eq!(tournament_minimal_rotation(&sequence), 1);
        assert_eq!(
            rotation_of(&sequence, booth_minimal_rotation(&sequence)),
            vec![1, 2, 1, 2]
        );
    }

    #[test]
    fn constant_sequence() {
        let sequence = [3, 3, 3];
        assert_eq!(tournament_minimal_rotation(&sequence), 0);
        assert_eq!(
            rotation_of(&sequence, booth_minimal_rotation(&sequence)),
            vec![3, 3, 3]
        );
    }
}

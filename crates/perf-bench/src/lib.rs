use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use qp_core::DetachedCycle;

pub const NUM_SEQUENCES: usize = 20_000;
pub const SEQUENCE_LENGTH: usize = 64;

/// Small alphabet, so that rotations tie often and both algorithms do real work.
pub const ALPHABET_SIZE: u32 = 4;

pub const SEED: u64 = 0x5eed;

/// Generates the source-vertex sequences of random closed walks.
///
/// The seed is fixed so both benchmark binaries measure the same input.
pub fn generate_benchmark_sequences() -> Vec<Vec<u32>> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    (0..NUM_SEQUENCES)
        .map(|_| {
            (0..SEQUENCE_LENGTH)
                .map(|_| rng.random_range(0..ALPHABET_SIZE))
                .collect()
        })
        .collect()
}

/// The cycle visiting `sources` in order and returning to the first one.
pub fn cycle_from_sources(sources: &[u32]) -> Option<DetachedCycle<u32>> {
    let first = *sources.first()?;
    let mut vertices = sources.to_vec();
    vertices.push(first);
    DetachedCycle::from_vertices(&vertices).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qp_core::rotation::{booth_minimal_rotation, tournament_minimal_rotation};

    #[test]
    fn sequences_are_reproducible() {
        let a = generate_benchmark_sequences();
        let b = generate_benchmark_sequences();
        assert_eq!(a.len(), NUM_SEQUENCES);
        assert_eq!(a[0].len(), SEQUENCE_LENGTH);
        assert_eq!(a[..10], b[..10]);
    }

    #[test]
    fn algorithms_agree_on_benchmark_input() {
        for sequence in generate_benchmark_sequences().iter().take(500) {
            assert_eq!(
                booth_minimal_rotation(sequence),
                tournament_minimal_rotation(sequence)
            );
        }
    }

    #[test]
    fn cycle_from_sources_closes_the_walk() {
        let cycle = cycle_from_sources(&[2, 0, 1]).unwrap();
        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle.canonical_path().starting_point(), &0);
        assert!(cycle_from_sources(&[]).is_none());
    }
}

use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use qp_core::rotation::tournament_minimal_rotation;

fn main() {
    let sequences = generate_benchmark_sequences();

    let start_time = Instant::now();
    let mut checksum: usize = 0;

    // Each start index challenges the current best in turn.
    for sequence in &sequences {
        checksum = checksum.wrapping_add(tournament_minimal_rotation(black_box(sequence)));
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!(
        "--- Tournament Benchmark Results ({} cycles of length {}) ---",
        NUM_SEQUENCES, SEQUENCE_LENGTH
    );
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);

    let detach_start = Instant::now();
    let detached = sequences
        .iter()
        .filter_map(|sequence| cycle_from_sources(sequence))
        .count();
    println!("Detached {} cycles in {:?}", black_box(detached), detach_start.elapsed());
}

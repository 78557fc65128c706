use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use qp_core::rotation::booth_minimal_rotation;

fn main() {
    let sequences = generate_benchmark_sequences();

    let start_time = Instant::now();
    let mut checksum: usize = 0;

    // A single linear scan over the doubled sequence per cycle.
    for sequence in &sequences {
        checksum = checksum.wrapping_add(booth_minimal_rotation(black_box(sequence)));
    }

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!(
        "--- Booth Benchmark Results ({} cycles of length {}) ---",
        NUM_SEQUENCES, SEQUENCE_LENGTH
    );
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}

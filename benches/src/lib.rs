//! Shared fixtures for the RC5 benchmarks.

use rc5_cipher::{Rc5, Word};

/// Key used consistently across all benchmarks.
pub const BENCH_KEY: &[u8] = b"BenchmarkKey2024";

/// Parameter sets benchmarked, as `(w, r, b)`.
pub const PARAMETER_SETS: [(u32, u32, usize); 3] = [(16, 16, 8), (32, 12, 16), (64, 24, 24)];

/// Builds an expanded context for `rounds` over a key of `key_length` bytes
/// taken cyclically from [`BENCH_KEY`].
pub fn expanded<W: Word>(rounds: u32, key_length: usize) -> Rc5<W> {
    let key: Vec<u8> = BENCH_KEY.iter().copied().cycle().take(key_length).collect();

    Rc5::with_key(rounds, &key).expect("benchmark parameters must be valid")
}

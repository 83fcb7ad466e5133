//! Input pattern generators shared by the correctness tests and benchmarks.
//!
//! All generators are deterministic for a given process and length. The seed
//! is picked once per process and can be pinned via the `OVERRIDE_SEED`
//! environment variable to reproduce a failing run.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    if let Ok(val) = env::var("OVERRIDE_SEED") {
        val.parse().expect("OVERRIDE_SEED must be a valid u64")
    } else {
        rand::thread_rng().gen()
    }
});

/// Process-wide seed used by all random generators.
pub fn random_init_seed() -> u64 {
    *SEED
}

fn rng_for(len: usize) -> StdRng {
    // Mix in the length so differently sized inputs of the same pattern do
    // not share a common prefix.
    StdRng::seed_from_u64(random_init_seed().wrapping_add(len as u64))
}

/// Uniformly random values over the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng_for(len);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random values drawn from `range`. Narrow ranges produce heavy
/// duplication.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = rng_for(len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipf-distributed values in `1..=len`. Low values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = rng_for(len);
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending runs of `saw_length` alternating with descending ones.
pub fn saw_mixed(len: usize, saw_length: usize) -> Vec<i32> {
    let saw_length = saw_length.max(2);
    let mut v = Vec::with_capacity(len);
    let mut up = true;

    while v.len() < len {
        let chunk = saw_length.min(len - v.len()) as i32;
        if up {
            v.extend(0..chunk);
        } else {
            v.extend((0..chunk).rev());
        }
        up = !up;
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v: Vec<i32> = (0..(len / 2) as i32).collect();
    v.extend((0..((len + 1) / 2) as i32).rev());
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_respect_len() {
        for len in [0, 1, 2, 7, 100] {
            assert_eq!(random(len).len(), len);
            assert_eq!(random_uniform(len, -5..5).len(), len);
            assert_eq!(random_zipf(len, 1.0).len(), len);
            assert_eq!(saw_mixed(len, 20).len(), len);
            assert_eq!(pipe_organ(len).len(), len);
        }
    }

    #[test]
    fn generators_are_deterministic_per_process() {
        assert_eq!(random(100), random(100));
        assert_eq!(random_zipf(100, 1.0), random_zipf(100, 1.0));
    }
}

//! Benchmark driver. Reads integer datasets from a text file and reports the
//! wall-clock time of each sort on an independent copy of each dataset.

use std::env;
use std::hint::black_box;
use std::process;
use std::time::Instant;

use sort_bench_rs::dataset::{self, DatasetError};
use sort_bench_rs::{stable, unstable};
use sort_test_tools::Sort;

fn measure<S: Sort>(data: &[i32]) {
    let mut copy = data.to_vec();

    let start = Instant::now();
    S::sort(black_box(&mut copy));
    let elapsed = start.elapsed();

    println!("{} Time: {} ms", S::name(), elapsed.as_secs_f64() * 1e3);
}

fn run(path: &str) -> Result<(), DatasetError> {
    let datasets = dataset::load_file(path)?;

    for data in &datasets {
        println!("Sorting {} elements...", data.len());

        measure::<unstable::rahmani::SortImpl>(data);
        measure::<stable::insertion_sequential::SortImpl>(data);
        measure::<unstable::insertion_binary::SortImpl>(data);
        measure::<stable::mergesort::SortImpl>(data);
        measure::<unstable::quicksort::SortImpl>(data);

        println!();
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("input.txt");

    if let Err(err) = run(path) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

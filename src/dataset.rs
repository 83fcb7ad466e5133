//! Loading integer datasets from text files.
//!
//! One dataset per line, tokens separated by whitespace. A blank line yields
//! an empty dataset. The first malformed token aborts the whole load, there
//! is no partial-result handling.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {token:?} is not a valid integer")]
    Parse {
        line: usize,
        token: String,
        source: ParseIntError,
    },
}

/// Parses one dataset per line from `reader`, in input order.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Vec<Vec<i32>>, DatasetError> {
    let mut datasets = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let data = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i32>().map_err(|source| DatasetError::Parse {
                    line: idx + 1,
                    token: token.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<i32>, _>>()?;
        datasets.push(data);
    }

    Ok(datasets)
}

/// Reads all datasets from the file at `path`.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i32>>, DatasetError> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

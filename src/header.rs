//! Solution file header detection.
//!
//! Solution files start with an arbitrary number of `%` metadata lines,
//! the last one being the column description. Data rows start with the
//! date of the epoch, which is how we detect the end of the header.
use crate::{reader::BufferedReader, Error};
use std::io::BufRead;
use std::path::Path;

#[cfg(feature = "log")]
use log::debug;

/// First column of any data row starts with the year (e.g. "2024/05/28").
const DATA_MARKER: &str = "202";

/// Returns true if this line is a data row
pub(crate) fn is_data_line(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map(|first| first.contains(DATA_MARKER))
        .unwrap_or(false)
}

/// Returns the number of lines to skip, before the column description
/// line of the solution file. In other words: index of the first data row
/// minus one, which is -1 when the file starts with a data row.
/// Fails with [Error::NoDataStart] when not a single data row exists.
pub fn find_data_start(path: &Path) -> Result<isize, Error> {
    let reader = BufferedReader::new(path)?;
    let skip = data_start(reader)?;
    #[cfg(feature = "log")]
    debug!("\"{}\": {} header lines", path.display(), skip + 1);
    Ok(skip)
}

/// See [find_data_start]
pub(crate) fn data_start<R: BufRead>(reader: R) -> Result<isize, Error> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if is_data_line(&line) {
            return Ok(index as isize - 1);
        }
    }
    Err(Error::NoDataStart)
}

/// Index of the first data row, from the header skip count
pub(crate) fn first_data_index(skip: isize) -> usize {
    (skip + 1) as usize
}

//! Fix quality statistics
use crate::{
    solution::{data_rows, quality_flag, FIXED, FLOAT},
    Error,
};
use std::path::Path;

/// Fix quality statistics, over all data rows of a solution file,
/// whatever their quality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitySummary {
    /// Total number of data rows
    pub total: usize,
    /// Number of fixed solutions
    pub q1: usize,
    /// Number of float solutions
    pub q2: usize,
    /// Percentage of fixed solutions
    pub q1_percent: f64,
    /// Percentage of float solutions
    pub q2_percent: f64,
}

impl QualitySummary {
    /// Builds [QualitySummary] from a serie of quality flags.
    /// Fails on empty series.
    pub fn from_flags<I: IntoIterator<Item = u8>>(flags: I) -> Result<Self, Error> {
        let (mut total, mut q1, mut q2) = (0, 0, 0);
        for flag in flags {
            match flag {
                FIXED => q1 += 1,
                FLOAT => q2 += 1,
                _ => {},
            }
            total += 1;
        }
        if total == 0 {
            return Err(Error::EmptyDataset);
        }
        Ok(Self {
            total,
            q1,
            q2,
            q1_percent: q1 as f64 * 100.0 / total as f64,
            q2_percent: q2 as f64 * 100.0 / total as f64,
        })
    }
    /// Counts fix qualities in given solution file.
    /// Only the quality column is interpreted.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let flags = data_rows(path)?
            .rows
            .iter()
            .map(|(line, content)| {
                quality_flag(content).map_err(|error| Error::Parsing { line: *line, error })
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Self::from_flags(flags)
    }
    /// Percentage of rows that are neither fixed nor float
    pub fn other_percent(&self) -> f64 {
        let others = self.total - self.q1 - self.q2;
        others as f64 * 100.0 / self.total as f64
    }
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * rtkpos: RTKLIB solution files comparison.
 * This crate is shipped under both Apache-2.0 and MIT License.
 */

pub mod alignment;
pub mod difference;
pub mod header;
pub mod pipeline;
pub mod quality;
pub mod solution;
pub mod solver;

mod reader;

#[cfg(test)]
mod tests;

use thiserror::Error;

pub mod prelude {
    pub use crate::{
        alignment::{Alignment, DuplicatePolicy},
        difference::HeightDifference,
        header::find_data_start,
        pipeline::Comparison,
        quality::QualitySummary,
        solution::{FilteredRecord, SolutionRecord},
        solver::{Config, ProcessError, Rnx2Rtkp},
        Error, ParsingError,
    };
    // Pub re-export
    pub use hifitime::{Epoch, TimeScale};
}

/// Errors that may rise when parsing a single solution row
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsingError {
    #[error("missing column #{0}")]
    MissingColumn(usize),
    #[error("invalid quality flag \"{0}\"")]
    Quality(String),
    #[error("invalid longitude \"{0}\"")]
    Longitude(String),
    #[error("invalid altitude \"{0}\"")]
    Altitude(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("file i/o error")]
    IoError(#[from] std::io::Error),
    #[error("no data: not a single line starting with a \"202\" year prefix")]
    NoDataStart,
    #[error("line {line}: {error}")]
    Parsing { line: usize, error: ParsingError },
    #[error("no data rows")]
    EmptyDataset,
    #[error("not a single matching epoch between both solutions")]
    NoMatchingEpochs,
    #[error("duplicate timestamp \"{0}\"")]
    DuplicateTimestamp(String),
    #[error("rnx2rtkp error")]
    Process(#[from] solver::ProcessError),
}

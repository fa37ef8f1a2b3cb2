//! Complete comparison of two solution files
use crate::{
    alignment::{Alignment, DuplicatePolicy},
    difference::HeightDifference,
    quality::QualitySummary,
    solution::{load, FilteredRecord},
    solver::{Config, Rnx2Rtkp},
    Error,
};
use std::path::Path;

#[cfg(feature = "log")]
use log::info;

/// Emlid solutions compared to RTK (reference) solutions
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Fixed emlid solutions
    pub emlid: Vec<FilteredRecord>,
    /// Fixed rtk solutions
    pub rtk: Vec<FilteredRecord>,
    /// Emlid fix quality statistics
    pub emlid_quality: QualitySummary,
    /// RTK fix quality statistics
    pub rtk_quality: QualitySummary,
    /// Matched epochs
    pub alignment: Alignment,
    /// Altitude differences over matched epochs
    pub difference: HeightDifference,
}

impl Comparison {
    /// Compares two solution files. Any failure aborts the comparison.
    pub fn from_files(emlid: &Path, rtk: &Path, policy: DuplicatePolicy) -> Result<Self, Error> {
        let emlid_quality = QualitySummary::from_path(emlid)?;
        let rtk_quality = QualitySummary::from_path(rtk)?;

        let emlid = load(emlid)?;
        let rtk = load(rtk)?;

        let alignment = Alignment::new(&emlid, &rtk, policy)?;
        let difference = HeightDifference::from_alignment(&alignment)?;

        #[cfg(feature = "log")]
        info!(
            "{} matched epochs - mean altitude difference {:.4} m",
            alignment.len(),
            difference.mean
        );

        Ok(Self {
            emlid,
            rtk,
            emlid_quality,
            rtk_quality,
            alignment,
            difference,
        })
    }
    /// Resolves the emlid solutions with rnx2rtkp first, then compares
    /// them to the rtk solution file.
    pub fn from_config(cfg: &Config, rtk: &Path, policy: DuplicatePolicy) -> Result<Self, Error> {
        let emlid = Rnx2Rtkp::new(cfg).run()?;
        Self::from_files(&emlid, rtk, policy)
    }
}

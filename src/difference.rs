//! Altitude discrepancy between both receivers
use crate::{
    alignment::{Alignment, DuplicatePolicy},
    solution::FilteredRecord,
    Error,
};

#[cfg(feature = "log")]
use log::debug;

/// Absolute altitude differences, over matched epochs
#[derive(Debug, Clone, PartialEq)]
pub struct HeightDifference {
    /// (emlid longitude, |emlid altitude - rtk altitude|), in emlid order
    pub points: Vec<(f64, f64)>,
    /// Average absolute difference
    pub mean: f64,
}

impl HeightDifference {
    /// Aligns both series and evaluates the altitude differences.
    pub fn new(
        emlid: &[FilteredRecord],
        rtk: &[FilteredRecord],
        policy: DuplicatePolicy,
    ) -> Result<Self, Error> {
        let alignment = Alignment::new(emlid, rtk, policy)?;
        Self::from_alignment(&alignment)
    }
    /// Evaluates the altitude differences of previously aligned series.
    /// Fails with [Error::NoMatchingEpochs] when nothing was matched:
    /// the mean of an empty set is not defined.
    pub fn from_alignment(alignment: &Alignment) -> Result<Self, Error> {
        if alignment.is_empty() {
            return Err(Error::NoMatchingEpochs);
        }
        let points = alignment
            .emlid_positions
            .iter()
            .zip(alignment.emlid_altitudes.iter())
            .zip(alignment.rtk_altitudes.iter())
            .map(|(((lon, _), emlid), rtk)| (*lon, (emlid - rtk).abs()))
            .collect::<Vec<_>>();

        let mean = points.iter().map(|(_, dh)| dh).sum::<f64>() / points.len() as f64;

        #[cfg(feature = "log")]
        debug!("mean altitude difference: {:.4} m ({} epochs)", mean, points.len());

        Ok(Self { points, mean })
    }
    /// Largest absolute difference
    pub fn max(&self) -> f64 {
        self.points
            .iter()
            .map(|(_, dh)| *dh)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

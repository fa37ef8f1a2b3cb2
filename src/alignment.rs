//! Time alignment of two solution series.
//!
//! Both series are joined on their timestamp, using strict equality:
//! there is no tolerance window, epochs that are not described
//! identically by both receivers are not compared.
use crate::{solution::FilteredRecord, Error};
use hifitime::Epoch;
use std::collections::{hash_map::Entry, HashMap};
use std::str::FromStr;

#[cfg(feature = "log")]
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes how repeated timestamps in the reference serie are handled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicatePolicy {
    /// Latest occurrence is retained
    #[default]
    KeepLast,
    /// First occurrence is retained
    KeepFirst,
    /// Repeated timestamps are considered invalid
    Reject,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::KeepLast => f.write_str("last"),
            Self::KeepFirst => f.write_str("first"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last" => Ok(Self::KeepLast),
            "first" => Ok(Self::KeepFirst),
            "reject" => Ok(Self::Reject),
            _ => Err(format!("unknown duplicate policy \"{}\"", s)),
        }
    }
}

/// Fixed solutions of both receivers, matched per timestamp.
/// All series are parallel, sorted in emlid order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Alignment {
    /// Matched timestamps
    pub timestamps: Vec<String>,
    /// Emlid [Epoch]s, when they could be interpreted
    pub epochs: Vec<Option<Epoch>>,
    /// (longitude, altitude) of the emlid receiver
    pub emlid_positions: Vec<(f64, f64)>,
    /// (longitude, altitude) of the rtk receiver
    pub rtk_positions: Vec<(f64, f64)>,
    /// Altitudes of the emlid receiver
    pub emlid_altitudes: Vec<f64>,
    /// Altitudes of the rtk receiver
    pub rtk_altitudes: Vec<f64>,
}

/// Indexes the reference serie per timestamp
fn lookup<'a>(
    records: &'a [FilteredRecord],
    policy: DuplicatePolicy,
) -> Result<HashMap<&'a str, &'a FilteredRecord>, Error> {
    let mut lookup = HashMap::with_capacity(records.len());
    for record in records {
        match lookup.entry(record.timestamp.as_str()) {
            Entry::Vacant(entry) => {
                entry.insert(record);
            },
            Entry::Occupied(mut entry) => match policy {
                DuplicatePolicy::KeepLast => {
                    #[cfg(feature = "log")]
                    warn!("{}: repeated timestamp, overwritten", record.timestamp);
                    entry.insert(record);
                },
                DuplicatePolicy::KeepFirst => {
                    #[cfg(feature = "log")]
                    warn!("{}: repeated timestamp, ignored", record.timestamp);
                },
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateTimestamp(record.timestamp.clone()));
                },
            },
        }
    }
    Ok(lookup)
}

impl Alignment {
    /// Matches emlid solutions to rtk solutions. Emlid solutions that
    /// do not have a counterpart are dropped.
    /// Only fails when duplicates are rejected by [DuplicatePolicy].
    pub fn new(
        emlid: &[FilteredRecord],
        rtk: &[FilteredRecord],
        policy: DuplicatePolicy,
    ) -> Result<Self, Error> {
        let rtk = lookup(rtk, policy)?;
        let mut s = Self::default();

        for record in emlid {
            if let Some(matched) = rtk.get(record.timestamp.as_str()) {
                s.timestamps.push(record.timestamp.clone());
                s.epochs.push(record.epoch);
                s.emlid_positions.push((record.longitude, record.altitude));
                s.rtk_positions.push((matched.longitude, matched.altitude));
                s.emlid_altitudes.push(record.altitude);
                s.rtk_altitudes.push(matched.altitude);
            }
        }

        #[cfg(feature = "log")]
        debug!("{}/{} emlid epochs matched", s.len(), emlid.len());

        Ok(s)
    }
    /// Number of matched epochs
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }
    /// True if not a single epoch matched
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
    /// First and last interpreted [Epoch]s
    pub fn time_span(&self) -> Option<(Epoch, Epoch)> {
        let mut epochs = self.epochs.iter().flatten();
        let first = *epochs.next()?;
        let last = epochs.last().copied().unwrap_or(first);
        Some((first, last))
    }
}

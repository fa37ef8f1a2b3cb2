//! Solution rows parsing and quality filtering
use crate::{
    header::{find_data_start, first_data_index},
    reader::BufferedReader,
    Error, ParsingError,
};

use hifitime::{Epoch, TimeScale};
use std::{io::BufRead, path::Path, str::FromStr};

#[cfg(feature = "log")]
use log::{debug, trace};

/// Carrier phase ambiguities resolved
pub const FIXED: u8 = 1;
/// Carrier phase ambiguities not resolved
pub const FLOAT: u8 = 2;

const DATE_COLUMN: usize = 0;
const TIMESTAMP_COLUMN: usize = 1;
const LONGITUDE_COLUMN: usize = 3;
const ALTITUDE_COLUMN: usize = 4;
const QUALITY_COLUMN: usize = 5;

/// One data row of a solution file
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionRecord {
    /// Date, as is
    pub date: String,
    /// Time of day, as is. This is our matching key.
    pub timestamp: String,
    /// Longitude (ddeg)
    pub longitude: f64,
    /// Altitude (m)
    pub altitude: f64,
    /// Fix quality flag
    pub quality: u8,
    /// Complete [Epoch], when date and time could be interpreted
    pub epoch: Option<Epoch>,
}

/// [SolutionRecord] projection, for fixed solutions only
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRecord {
    pub timestamp: String,
    pub longitude: f64,
    pub altitude: f64,
    pub epoch: Option<Epoch>,
}

impl FilteredRecord {
    /// Builds a new [FilteredRecord], with unknown [Epoch]
    pub fn new(timestamp: &str, longitude: f64, altitude: f64) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            longitude,
            altitude,
            epoch: None,
        }
    }
}

impl From<SolutionRecord> for FilteredRecord {
    fn from(record: SolutionRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            longitude: record.longitude,
            altitude: record.altitude,
            epoch: record.epoch,
        }
    }
}

fn column<'a>(columns: &[&'a str], index: usize) -> Result<&'a str, ParsingError> {
    columns
        .get(index)
        .copied()
        .ok_or(ParsingError::MissingColumn(index))
}

/// Parses the fix quality flag of a data row
pub(crate) fn quality_flag(line: &str) -> Result<u8, ParsingError> {
    let columns = line.split_whitespace().collect::<Vec<_>>();
    let quality = column(&columns, QUALITY_COLUMN)?;
    u8::from_str(quality).or(Err(ParsingError::Quality(quality.to_string())))
}

fn parse_epoch(date: &str, time: &str, ts: TimeScale) -> Option<Epoch> {
    Epoch::from_str(&format!("{}T{} {}", date.replace('/', "-"), time, ts)).ok()
}

impl SolutionRecord {
    /// True if this solution has resolved ambiguities
    pub fn is_fixed(&self) -> bool {
        self.quality == FIXED
    }
    /// Parses [SolutionRecord] from data row, dated in [TimeScale]
    pub fn parse(line: &str, time_scale: TimeScale) -> Result<Self, ParsingError> {
        let columns = line.split_whitespace().collect::<Vec<_>>();

        let date = column(&columns, DATE_COLUMN)?;
        let timestamp = column(&columns, TIMESTAMP_COLUMN)?;

        let quality = column(&columns, QUALITY_COLUMN)?;
        let quality = u8::from_str(quality).or(Err(ParsingError::Quality(quality.to_string())))?;

        let longitude = column(&columns, LONGITUDE_COLUMN)?;
        let longitude =
            f64::from_str(longitude).or(Err(ParsingError::Longitude(longitude.to_string())))?;

        let altitude = column(&columns, ALTITUDE_COLUMN)?;
        let altitude =
            f64::from_str(altitude).or(Err(ParsingError::Altitude(altitude.to_string())))?;

        Ok(Self {
            date: date.to_string(),
            timestamp: timestamp.to_string(),
            longitude,
            altitude,
            quality,
            epoch: parse_epoch(date, timestamp, time_scale),
        })
    }
}

impl FromStr for SolutionRecord {
    type Err = ParsingError;
    /// Parses a data row expressed in GPST
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line, TimeScale::GPST)
    }
}

/// Data rows of a solution file
pub(crate) struct DataRows {
    /// [TimeScale] described by the header
    pub time_scale: TimeScale,
    /// Data rows, with their line number (1-based)
    pub rows: Vec<(usize, String)>,
}

/*
 * RTKLIB column description, for example:
 * "%  GPST                  latitude(deg) longitude(deg)  height(m)   Q  ns"
 */
fn description_time_scale(line: &str) -> Option<TimeScale> {
    if !line.starts_with('%') {
        return None;
    }
    let token = line.split_whitespace().nth(1)?;
    TimeScale::from_str(token).ok()
}

/// Collects all data rows of given solution file.
/// Blank lines are ignored. The [TimeScale] is described by the last
/// header line, defaults to GPST.
pub(crate) fn data_rows(path: &Path) -> Result<DataRows, Error> {
    let first = first_data_index(find_data_start(path)?);
    let reader = BufferedReader::new(path)?;

    let mut time_scale = TimeScale::GPST;
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index < first {
            // last % line is the column description
            if line.starts_with('%') {
                time_scale = description_time_scale(&line).unwrap_or(TimeScale::GPST);
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        rows.push((index + 1, line));
    }

    Ok(DataRows { time_scale, rows })
}

/// Parses all data rows of given solution file, whatever their quality.
pub fn load_records(path: &Path) -> Result<Vec<SolutionRecord>, Error> {
    let DataRows { time_scale, rows } = data_rows(path)?;
    rows.iter()
        .map(|(line, content)| {
            SolutionRecord::parse(content, time_scale).map_err(|error| Error::Parsing {
                line: *line,
                error,
            })
        })
        .collect()
}

/// Loads given solution file and retains fixed solutions only,
/// in file order.
pub fn load(path: &Path) -> Result<Vec<FilteredRecord>, Error> {
    let records = load_records(path)?;

    #[cfg(feature = "log")]
    let total = records.len();

    let filtered = records
        .into_iter()
        .filter_map(|record| {
            if record.is_fixed() {
                Some(FilteredRecord::from(record))
            } else {
                #[cfg(feature = "log")]
                trace!("{} {}: dropped (Q={})", record.date, record.timestamp, record.quality);
                None
            }
        })
        .collect::<Vec<_>>();

    #[cfg(feature = "log")]
    debug!(
        "\"{}\": {}/{} fixed solutions",
        path.display(),
        filtered.len(),
        total
    );

    Ok(filtered)
}

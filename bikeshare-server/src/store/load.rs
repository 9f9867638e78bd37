//! Bulk ingestion of the bike-share CSV export.
//!
//! The export has a header row followed by positional columns. Only the
//! columns below are read; the rest (timestamps, station ids, bike id, user
//! type) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::domain::{Coordinate, Sex, TripRecord};

use super::error::{MalformedRecord, StoreError};

const DURATION: usize = 0;
const START_NAME: usize = 4;
const START_LAT: usize = 5;
const START_LNG: usize = 6;
const END_NAME: usize = 8;
const END_LAT: usize = 9;
const END_LNG: usize = 10;
const BIRTH_YEAR: usize = 13;
const SEX: usize = 14;

/// Result of a bulk load.
#[derive(Debug, Clone, Default)]
pub struct LoadedTrips {
    /// Accepted records, in file order.
    pub records: Vec<TripRecord>,

    /// Rows skipped because a required field was missing or malformed.
    pub skipped: usize,
}

/// Load trip records from any CSV reader.
///
/// Rows with a blank required field (duration, start, end, birth year, sex,
/// or any of the four coordinates) or a malformed duration are skipped and
/// counted. Optional data that is present but unusable (an out-of-range
/// coordinate, an unknown sex code) is stored as missing instead.
///
/// Fails only if the stream itself cannot be read.
pub fn load_trips<R: Read>(reader: R) -> Result<LoadedTrips, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut loaded = LoadedTrips::default();

    for row in csv_reader.records() {
        let row = row?;
        match parse_row(&row) {
            Ok(record) => loaded.records.push(record),
            Err(reason) => {
                loaded.skipped += 1;
                debug!(
                    line = row.position().map(|p| p.line()),
                    %reason,
                    "skipping bad trip row"
                );
            }
        }
    }

    info!(
        loaded = loaded.records.len(),
        skipped = loaded.skipped,
        "loaded trip records"
    );

    Ok(loaded)
}

/// Load trip records from a CSV file on disk.
pub fn load_trips_from_path(path: impl AsRef<Path>) -> Result<LoadedTrips, StoreError> {
    let file = File::open(path.as_ref())?;
    load_trips(file)
}

/// Convert one CSV row into a record.
///
/// Every required field is checked for presence before any is parsed, so a
/// row is either fully accepted or fully rejected.
fn parse_row(row: &StringRecord) -> Result<TripRecord, MalformedRecord> {
    let field = |idx: usize, name: &'static str| match row.get(idx).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(MalformedRecord::MissingField(name)),
    };

    let duration = field(DURATION, "duration")?;
    let start = field(START_NAME, "start_location")?;
    let end = field(END_NAME, "end_location")?;
    let birth_year = field(BIRTH_YEAR, "birth_year")?;
    let sex = field(SEX, "sex")?;
    let start_lat = field(START_LAT, "start_lat")?;
    let start_lng = field(START_LNG, "start_lng")?;
    let end_lat = field(END_LAT, "end_lat")?;
    let end_lng = field(END_LNG, "end_lng")?;

    let duration_secs = parse_whole(duration)
        .and_then(|secs| u32::try_from(secs).ok())
        .ok_or_else(|| MalformedRecord::InvalidDuration(duration.to_string()))?;

    Ok(TripRecord {
        duration_secs,
        start_location: start.to_string(),
        end_location: end.to_string(),
        rider_birth_year: parse_whole(birth_year).and_then(|y| u16::try_from(y).ok()),
        sex: parse_whole(sex).and_then(|code| {
            i64::try_from(code)
                .ok()
                .and_then(|code| Sex::from_code(code).ok())
        }),
        start_coordinate: parse_coordinate(start_lat, start_lng),
        end_coordinate: parse_coordinate(end_lat, end_lng),
    })
}

/// Parse a non-negative whole number, accepting a zero fraction ("300.0").
fn parse_whole(s: &str) -> Option<u64> {
    if let Ok(n) = s.parse::<u64>() {
        return Some(n);
    }
    let f: f64 = s.parse().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn parse_coordinate(lat: &str, lng: &str) -> Option<Coordinate> {
    Coordinate::new(lat.parse().ok()?, lng.parse().ok()?).ok()
}

//! Airport reference directory.
//!
//! Loads identifier → coordinate mappings from an ourairports.com CSV
//! export and answers case-insensitive lookups. Loaded once per run and
//! read-only afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use common::{Error, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Columns the ourairports export must carry for a load to make sense.
const REQUIRED_COLUMNS: [&str; 3] = ["gps_code", "latitude_deg", "longitude_deg"];

/// Location of a single airport, keyed by its GPS code.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    /// Uppercased identifier (e.g. "CYOW").
    pub ident: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Raw CSV row as exported by ourairports.com. The export carries many
/// more columns; serde ignores the ones not named here.
#[derive(Debug, Deserialize)]
struct RawAirportRow {
    #[serde(default)]
    gps_code: String,
    #[serde(default)]
    latitude_deg: String,
    #[serde(default)]
    longitude_deg: String,
}

/// Identifier → location mapping, built once at startup.
#[derive(Debug, Default)]
pub struct AirportDirectory {
    airports: HashMap<String, AirportRecord>,
}

impl AirportDirectory {
    /// Load the directory from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::DataUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        let directory = Self::from_reader(file)?;
        info!(
            "Loaded {} airports from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// Load the directory from any CSV source.
    ///
    /// Rows that cannot be decoded, or whose coordinates do not parse, are
    /// skipped with a warning rather than failing the whole load; the
    /// upstream export is sparse. Only an unreadable source or a header row
    /// missing a required column is fatal.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| Error::DataUnavailable(format!("unreadable CSV header: {}", e)))?
            .clone();
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(Error::DataUnavailable(format!(
                    "airport dataset is missing the {} column",
                    required
                )));
            }
        }

        let mut airports = HashMap::new();
        let mut skipped = 0usize;

        for (idx, row) in rdr.deserialize::<RawAirportRow>().enumerate() {
            // Line 1 is the header row.
            let line = idx as u64 + 2;
            let row = match row {
                Ok(r) => r,
                Err(e) => {
                    warn!(
                        "{}",
                        Error::MalformedRecord {
                            line,
                            reason: e.to_string(),
                        }
                    );
                    skipped += 1;
                    continue;
                }
            };
            match parse_row(line, &row) {
                Ok(Some(record)) => {
                    airports.insert(record.ident.clone(), record);
                }
                Ok(None) => {
                    debug!("line {}: no gps_code, skipping", line);
                }
                Err(e) => {
                    warn!("{}", e);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {} malformed airport rows", skipped);
        }

        Ok(Self { airports })
    }

    /// Look up an airport by identifier. Comparison is case-insensitive and
    /// surrounding whitespace is trimmed before lookup.
    pub fn resolve(&self, ident: &str) -> Option<&AirportRecord> {
        self.airports.get(&ident.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

fn parse_row(line: u64, row: &RawAirportRow) -> Result<Option<AirportRecord>> {
    let ident = row.gps_code.trim().to_uppercase();
    if ident.is_empty() {
        return Ok(None);
    }

    let latitude = row.latitude_deg.trim().parse::<f64>().map_err(|_| {
        Error::MalformedRecord {
            line,
            reason: format!("latitude_deg {:?} is not a number", row.latitude_deg),
        }
    })?;
    let longitude = row.longitude_deg.trim().parse::<f64>().map_err(|_| {
        Error::MalformedRecord {
            line,
            reason: format!("longitude_deg {:?} is not a number", row.longitude_deg),
        }
    })?;

    Ok(Some(AirportRecord {
        ident,
        latitude,
        longitude,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
id,ident,name,latitude_deg,longitude_deg,gps_code
1,CYOW,Ottawa Macdonald-Cartier,45.3225,-75.6692,CYOW
2,CYYZ,Toronto Pearson,43.6772,-79.6306,CYYZ
3,CA-0001,Unnamed field,49.1,-120.4,
";

    #[test]
    fn loads_airports_from_csv() {
        let directory =
            AirportDirectory::from_reader(SAMPLE_CSV.as_bytes()).expect("sample should load");

        assert_eq!(directory.len(), 2);
        let cyow = directory.resolve("CYOW").expect("CYOW should resolve");
        assert_eq!(cyow.latitude, 45.3225);
        assert_eq!(cyow.longitude, -75.6692);
    }

    #[test]
    fn resolve_is_case_insensitive_and_trims() {
        let directory =
            AirportDirectory::from_reader(SAMPLE_CSV.as_bytes()).expect("sample should load");

        assert_eq!(directory.resolve(" cyow "), directory.resolve("CYOW"));
        assert!(directory.resolve("cyyz").is_some());
    }

    #[test]
    fn rows_without_gps_code_are_skipped() {
        let directory =
            AirportDirectory::from_reader(SAMPLE_CSV.as_bytes()).expect("sample should load");

        assert!(directory.resolve("CA-0001").is_none());
    }

    #[test]
    fn malformed_coordinates_are_skipped_not_fatal() {
        let csv = "\
id,latitude_deg,longitude_deg,gps_code
1,45.3225,-75.6692,CYOW
2,not-a-number,-79.6306,CYYZ
";
        let directory = AirportDirectory::from_reader(csv.as_bytes()).expect("load should succeed");

        assert_eq!(directory.len(), 1);
        assert!(directory.resolve("CYOW").is_some());
        assert!(directory.resolve("CYYZ").is_none());
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "\
id,latitude_deg,longitude_deg
1,45.3225,-75.6692
";
        let err = AirportDirectory::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::DataUnavailable(_)));
    }

    #[test]
    fn unreadable_file_is_data_unavailable() {
        let err = AirportDirectory::load(Path::new("/no/such/ca-airports.csv")).unwrap_err();
        assert!(matches!(err, Error::DataUnavailable(_)));
    }
}

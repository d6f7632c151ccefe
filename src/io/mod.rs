//! File I/O for the NEO catalog, close-approach feed, and query results.
//!
//! Input:
//!
//! - [`load_neos`] / [`read_neos`] – CSV catalog with `pdes`, `name`,
//!   `diameter`, `pha` columns (matched by header name).
//! - [`load_approaches`] / [`read_approaches`] – JSON document whose `data`
//!   array holds positional close-approach records.
//!
//! Output:
//!
//! - [`write_to_csv`] / [`write_csv`] – seven-column CSV with a header row.
//! - [`write_to_json`] / [`write_json`] – a single indented JSON array.
//!
//! The path-based functions create or truncate their destination. A failure
//! part-way through a write leaves whatever was already flushed in place;
//! no cleanup of the partial file is attempted.

use crate::model::{approach::CloseApproach, approach::LinkedApproach, neo::NearEarthObject};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

pub mod error;
pub mod util;

mod csv {
    pub mod reader;
    pub mod writer;
}

mod json {
    pub mod reader;
    pub mod writer;
}

pub use self::csv::reader::REQUIRED_COLUMNS as NEO_COLUMNS;
pub use self::csv::writer::HEADER as CSV_HEADER;
pub use self::json::reader::{DESIGNATION_POS, DISTANCE_POS, TIME_POS, VELOCITY_POS};
pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Csv,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "CSV"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

/// Parses a NEO catalog from any CSV source, preserving row order.
pub fn read_neos<R: Read>(reader: R) -> Result<Vec<NearEarthObject>, Error> {
    self::csv::reader::read(reader)
}

/// Parses a close-approach document from any JSON source, preserving record order.
pub fn read_approaches<R: Read>(reader: R) -> Result<Vec<CloseApproach>, Error> {
    self::json::reader::read(reader)
}

pub fn load_neos(path: impl AsRef<Path>) -> Result<Vec<NearEarthObject>, Error> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading NEO catalog");

    let file = File::open(path)?;
    let neos = read_neos(BufReader::new(file))?;

    debug!(count = neos.len(), "loaded near-Earth objects");
    Ok(neos)
}

pub fn load_approaches(path: impl AsRef<Path>) -> Result<Vec<CloseApproach>, Error> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading close-approach data");

    let file = File::open(path)?;
    let approaches = read_approaches(BufReader::new(file))?;

    debug!(count = approaches.len(), "loaded close approaches");
    Ok(approaches)
}

/// Writes `results` as CSV to any sink. Returns the number of data rows.
pub fn write_csv<'a, W, I>(writer: W, results: I) -> Result<usize, Error>
where
    W: Write,
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    self::csv::writer::write(writer, results)
}

/// Writes `results` as one indented JSON array to any sink. Returns the
/// number of records.
pub fn write_json<'a, W, I>(writer: W, results: I) -> Result<usize, Error>
where
    W: Write,
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    self::json::writer::write(writer, results)
}

pub fn write_to_csv<'a, I>(results: I, path: impl AsRef<Path>) -> Result<usize, Error>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_csv(BufWriter::new(file), results)?;

    debug!(path = %path.display(), rows, "wrote CSV results");
    Ok(rows)
}

pub fn write_to_json<'a, I>(results: I, path: impl AsRef<Path>) -> Result<usize, Error>
where
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    let records = write_json(BufWriter::new(file), results)?;

    debug!(path = %path.display(), records, "wrote JSON results");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const NEOS: &str = "pdes,name,pha,diameter\n433,Eros,Y,16.84\n2020 AB,,N,\n";
    const CAD: &str = r#"{"data": [
        ["433", "1", "2", "2020-Jan-01 06:00", "0.09", "", "", "5.6"],
        ["2020 AB", "1", "2", "2020-Jan-02 07:30", "0.5", "", "", "12.0"]
    ]}"#;

    #[test]
    fn load_neos_from_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("neos.csv");
        fs::write(&path, NEOS).expect("write fixture");

        let neos = load_neos(&path).expect("load neos");
        assert_eq!(neos.len(), 2);
        assert_eq!(
            neos[0],
            NearEarthObject::new("433", Some("Eros".into()), Some(16.84), true)
        );
    }

    #[test]
    fn load_approaches_from_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("cad.json");
        fs::write(&path, CAD).expect("write fixture");

        let approaches = load_approaches(&path).expect("load approaches");
        assert_eq!(approaches.len(), 2);
        assert_eq!(approaches[1].time_str(), "2020-01-02 07:30");
    }

    #[test]
    fn missing_file_propagates_io_error() {
        let dir = tempdir().expect("tempdir");
        let err = load_neos(dir.path().join("absent.csv")).unwrap_err();
        match err {
            Error::Io { source } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = load_approaches(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn write_to_files_overwrites_destination() {
        let dir = tempdir().expect("tempdir");
        let neos = read_neos(NEOS.as_bytes()).expect("read neos");
        let approaches = read_approaches(CAD.as_bytes()).expect("read approaches");
        let linked: Vec<_> = approaches
            .iter()
            .zip(neos.iter())
            .map(|(ca, neo)| LinkedApproach::new(ca, Some(neo)))
            .collect();

        let csv_path = dir.path().join("out.csv");
        fs::write(&csv_path, "stale contents that must disappear\n".repeat(20)).unwrap();
        assert_eq!(write_to_csv(linked.iter().copied(), &csv_path).unwrap(), 2);
        let csv_out = fs::read_to_string(&csv_path).unwrap();
        assert!(!csv_out.contains("stale"));
        assert_eq!(csv_out.lines().count(), 3);
        assert_eq!(
            csv_out.lines().nth(2).unwrap(),
            "2020-01-02 07:30,0.5,12.0,2020 AB,,nan,False"
        );

        let json_path = dir.path().join("out.json");
        assert_eq!(write_to_json(linked.iter().copied(), &json_path).unwrap(), 2);
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(2));
        assert_eq!(parsed[1]["neo"]["diameter_km"], serde_json::Value::Null);
    }

    #[test]
    fn format_display() {
        assert_eq!(Format::Csv.to_string(), "CSV");
        assert_eq!(Format::Json.to_string(), "JSON");
    }
}

use crate::io::{Format, error::Error, util};
use crate::model::neo::NearEarthObject;
use serde::Deserialize;
use std::io::Read;

/// Columns consumed from the NEO catalog; every other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["pdes", "name", "diameter", "pha"];

#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    name: String,
    diameter: String,
    pha: String,
}

pub fn read<R: Read>(reader: R) -> Result<Vec<NearEarthObject>, Error> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingField {
                format: Format::Csv,
                field: column,
            });
        }
    }

    let mut neos = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or_default();
        let row: NeoRow = record.deserialize(Some(&headers))?;
        neos.push(to_neo(row, line)?);
    }

    Ok(neos)
}

fn to_neo(row: NeoRow, line: usize) -> Result<NearEarthObject, Error> {
    let diameter = util::parse_diameter(&row.diameter, line)?;
    Ok(NearEarthObject::new(
        row.pdes,
        util::normalize_name(&row.name),
        diameter,
        util::is_hazardous(&row.pha),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
id,spkid,full_name,pdes,name,prefix,neo,pha,H,diameter,albedo
a0000433,2000433,\"   433 Eros (A898 PA)\",433,Eros,,Y,Y,10.4,16.84,0.25
a0000719,2000719,\"   719 Albert (A911 TB)\",719,Albert,,Y,N,15.5,,
bK20A00B,3843100,\"       (2020 AB)\",2020 AB,,,Y,,24.1,,
";

    #[test]
    fn reads_rows_in_order() {
        let neos = read(Cursor::new(SAMPLE)).expect("read neos");
        assert_eq!(neos.len(), 3);
        let designations: Vec<_> = neos.iter().map(|n| n.designation.as_str()).collect();
        assert_eq!(designations, ["433", "719", "2020 AB"]);
    }

    #[test]
    fn normalizes_fields() {
        let neos = read(Cursor::new(SAMPLE)).expect("read neos");

        let eros = &neos[0];
        assert_eq!(eros.designation, "433");
        assert_eq!(eros.name.as_deref(), Some("Eros"));
        assert_eq!(eros.diameter, Some(16.84));
        assert!(eros.hazardous);
        assert!(eros.approaches.is_empty());

        let albert = &neos[1];
        assert_eq!(albert.diameter, None);
        assert!(!albert.hazardous);

        let unnamed = &neos[2];
        assert_eq!(unnamed.name, None);
        assert_eq!(unnamed.diameter, None);
        assert!(!unnamed.hazardous);
    }

    #[test]
    fn columns_matched_by_name() {
        let shuffled = "pha,diameter,name,pdes\nY,16.84,Eros,433\n";
        let neos = read(Cursor::new(shuffled)).expect("read neos");
        assert_eq!(
            neos[0],
            NearEarthObject::new("433", Some("Eros".into()), Some(16.84), true)
        );
    }

    #[test]
    fn header_only_yields_empty() {
        let neos = read(Cursor::new("pdes,name,diameter,pha\n")).expect("read neos");
        assert!(neos.is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let err = read(Cursor::new("pdes,name,pha\n433,Eros,Y\n")).unwrap_err();
        match err {
            Error::MissingField { format, field } => {
                assert_eq!(format, Format::Csv);
                assert_eq!(field, "diameter");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn bad_diameter_reports_line() {
        let data = "pdes,name,diameter,pha\n433,Eros,16.84,Y\n719,Albert,huge,N\n";
        match read(Cursor::new(data)).unwrap_err() {
            Error::Parse { format, line, .. } => {
                assert_eq!(format, Format::Csv);
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let data = "pdes,name,diameter,pha\n433,Eros\n";
        assert!(matches!(
            read(Cursor::new(data)),
            Err(Error::Parse { format: Format::Csv, .. })
        ));
    }
}

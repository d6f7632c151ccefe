use crate::io::error::Error;
use crate::model::approach::LinkedApproach;
use crate::model::types::Timestamp;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Record<'a> {
    datetime_utc: Timestamp,
    distance_au: f64,
    velocity_km_s: f64,
    neo: NeoRecord<'a>,
}

/// An unknown diameter is written as `null`; an unknown name as `""`.
#[derive(Debug, Serialize)]
struct NeoRecord<'a> {
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

impl<'a> From<LinkedApproach<'a>> for Record<'a> {
    fn from(linked: LinkedApproach<'a>) -> Self {
        let approach = linked.approach;
        Self {
            datetime_utc: approach.time,
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            neo: NeoRecord {
                designation: &approach.designation,
                name: linked.name().unwrap_or_default(),
                diameter_km: linked.diameter(),
                potentially_hazardous: linked.hazardous().unwrap_or(false),
            },
        }
    }
}

/// Collects every approach, then writes them as one indented JSON array.
pub fn write<'a, W, I>(mut writer: W, results: I) -> Result<usize, Error>
where
    W: Write,
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    let records: Vec<Record<'a>> = results.into_iter().map(Record::from).collect();

    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{approach::CloseApproach, neo::NearEarthObject};
    use serde_json::{Value, json};
    use std::str::FromStr;

    fn approach(designation: &str, time: &str, distance: f64, velocity: f64) -> CloseApproach {
        CloseApproach::new(
            designation,
            Timestamp::from_str(time).unwrap(),
            distance,
            velocity,
        )
    }

    fn render(rows: &[LinkedApproach<'_>]) -> String {
        let mut buf = Vec::new();
        let n = write(&mut buf, rows.iter().copied()).expect("write json");
        assert_eq!(n, rows.len());
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn empty_results_write_empty_array() {
        assert_eq!(render(&[]), "[]\n");
    }

    #[test]
    fn writes_nested_neo_record() {
        let ca = approach("433", "2020-Jan-01 06:00", 0.09, 5.6);
        let neo = NearEarthObject::new("433", Some("Eros".into()), Some(16.84), true);
        let out = render(&[LinkedApproach::new(&ca, Some(&neo))]);

        let parsed: Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(
            parsed,
            json!([{
                "datetime_utc": "2020-01-01 06:00",
                "distance_au": 0.09,
                "velocity_km_s": 5.6,
                "neo": {
                    "designation": "433",
                    "name": "Eros",
                    "diameter_km": 16.84,
                    "potentially_hazardous": true
                }
            }])
        );
    }

    #[test]
    fn absent_diameter_is_null() {
        let ca = approach("2020 AB", "2020-Jan-01 12:00", 0.5, 12.0);
        let neo = NearEarthObject::new("2020 AB", None, None, false);
        let out = render(&[LinkedApproach::new(&ca, Some(&neo))]);

        let parsed: Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed[0]["neo"]["diameter_km"], Value::Null);
        assert_eq!(parsed[0]["neo"]["name"], json!(""));
        assert_eq!(parsed[0]["neo"]["potentially_hazardous"], json!(false));
    }

    #[test]
    fn unresolved_neo_falls_back() {
        let ca = approach("99942", "2029-Apr-13 21:46", 0.000254, 7.42);
        let out = render(&[LinkedApproach::new(&ca, None)]);

        let parsed: Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed[0]["neo"]["designation"], json!("99942"));
        assert_eq!(parsed[0]["neo"]["diameter_km"], Value::Null);
        assert_eq!(parsed[0]["neo"]["potentially_hazardous"], json!(false));
    }

    #[test]
    fn uses_two_space_indentation() {
        let ca = approach("433", "2020-Jan-01 06:00", 0.09, 5.6);
        let out = render(&[LinkedApproach::new(&ca, None)]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "[");
        assert_eq!(lines[1], "  {");
        assert_eq!(lines[2], "    \"datetime_utc\": \"2020-01-01 06:00\",");
        assert!(out.contains("\n    \"neo\": {\n      \"designation\": \"433\","));
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn sink_failure_surfaces_as_io_error() {
        let ca = approach("433", "2020-Jan-01 06:00", 0.09, 5.6);
        match write(FullDisk, [LinkedApproach::new(&ca, None)]).unwrap_err() {
            Error::Io { source } => assert_eq!(source.to_string(), "disk full"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_results_still_hit_the_sink() {
        assert!(matches!(
            write(FullDisk, std::iter::empty::<LinkedApproach<'_>>()),
            Err(Error::Io { .. })
        ));
    }
}

use crate::io::{error::Error, util};
use crate::model::approach::LinkedApproach;
use crate::model::types::Timestamp;
use serde::{Serialize, Serializer};
use std::io::Write;

pub const HEADER: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

#[derive(Serialize)]
struct Row<'a> {
    datetime_utc: Timestamp,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: Diameter,
    potentially_hazardous: &'static str,
}

struct Diameter(Option<f64>);

impl Serialize for Diameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(d) => serializer.serialize_f64(d),
            None => serializer.serialize_str(util::MISSING_DIAMETER),
        }
    }
}

impl<'a> From<LinkedApproach<'a>> for Row<'a> {
    fn from(linked: LinkedApproach<'a>) -> Self {
        let approach = linked.approach;
        Self {
            datetime_utc: approach.time,
            distance_au: approach.distance,
            velocity_km_s: approach.velocity,
            designation: &approach.designation,
            name: linked.name().unwrap_or_default(),
            diameter_km: Diameter(linked.diameter()),
            potentially_hazardous: if linked.hazardous().unwrap_or(false) {
                "True"
            } else {
                "False"
            },
        }
    }
}

/// Writes the header and one row per approach, returning the row count.
pub fn write<'a, W, I>(writer: W, results: I) -> Result<usize, Error>
where
    W: Write,
    I: IntoIterator<Item = LinkedApproach<'a>>,
{
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;

    let mut rows = 0;
    for linked in results {
        wtr.serialize(Row::from(linked))?;
        rows += 1;
    }

    wtr.flush()?;
    Ok(rows)
}

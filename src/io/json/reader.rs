use crate::io::{Format, error::Error, util};
use crate::model::approach::CloseApproach;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

pub const DESIGNATION_POS: usize = 0;
pub const TIME_POS: usize = 3;
pub const DISTANCE_POS: usize = 4;
pub const VELOCITY_POS: usize = 7;

const MIN_RECORD_LEN: usize = VELOCITY_POS + 1;

#[derive(Debug, Deserialize)]
struct CadDocument {
    data: Option<Vec<Vec<Value>>>,
}

pub fn read<R: Read>(reader: R) -> Result<Vec<CloseApproach>, Error> {
    let document: CadDocument = serde_json::from_reader(reader)?;
    let records = document.data.ok_or(Error::MissingField {
        format: Format::Json,
        field: "data",
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, fields)| parse_record(index, fields))
        .collect()
}

fn parse_record(index: usize, fields: &[Value]) -> Result<CloseApproach, Error> {
    if fields.len() < MIN_RECORD_LEN {
        return Err(Error::invalid_record(
            Format::Json,
            index,
            format!(
                "record has {} fields, expected at least {}",
                fields.len(),
                MIN_RECORD_LEN
            ),
        ));
    }

    let designation = util::record_str(fields, DESIGNATION_POS, index, "designation")?;
    let time = util::record_timestamp(fields, TIME_POS, index)?;
    let distance = util::record_f64_or_zero(fields, DISTANCE_POS, index, "distance")?;
    let velocity = util::record_f64_or_zero(fields, VELOCITY_POS, index, "velocity")?;

    Ok(CloseApproach::new(designation, time, distance, velocity))
}

use super::types::ApproachId;
use std::fmt;

/// A near-Earth object as listed in the NEO catalog.
///
/// `approaches` holds back-references into the owning
/// [`NeoDatabase`](crate::NeoDatabase); it is empty until the database links
/// its close approaches.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    pub designation: String,
    pub name: Option<String>,
    pub diameter: Option<f64>,
    pub hazardous: bool,
    pub approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// `"433 (Eros)"` for named objects, the bare designation otherwise.
    pub fn full_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    #[inline]
    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} has ", self.full_name())?;
        match self.diameter {
            Some(d) => write!(f, "a diameter of {d:.3} km")?,
            None => write!(f, "an unknown diameter")?,
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous.")
        } else {
            write!(f, " and is not potentially hazardous.")
        }
    }
}

use super::neo::NearEarthObject;
use super::types::{NeoId, Timestamp};
use std::fmt;

/// A single close approach of a NEO to Earth.
///
/// `designation` is the foreign key into the NEO catalog; `neo` stays `None`
/// until a [`NeoDatabase`](crate::NeoDatabase) resolves it, and remains
/// `None` when no NEO carries that designation.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    pub designation: String,
    pub time: Timestamp,
    pub distance: f64,
    pub velocity: f64,
    pub neo: Option<NeoId>,
}

impl CloseApproach {
    pub fn new(
        designation: impl Into<String>,
        time: Timestamp,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Approach time as `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        self.time.to_string()
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.neo.is_some()
    }
}

/// A close approach paired with the NEO it was linked to, if any.
///
/// This is the unit that flows through the query pipeline and into the
/// serializers.
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'a> {
    pub approach: &'a CloseApproach,
    pub neo: Option<&'a NearEarthObject>,
}

impl<'a> LinkedApproach<'a> {
    pub fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self { approach, neo }
    }

    pub fn full_name(&self) -> String {
        match self.neo {
            Some(neo) => neo.full_name(),
            None => self.approach.designation.clone(),
        }
    }

    pub fn name(&self) -> Option<&'a str> {
        self.neo.and_then(|neo| neo.name.as_deref())
    }

    pub fn diameter(&self) -> Option<f64> {
        self.neo.and_then(|neo| neo.diameter)
    }

    pub fn hazardous(&self) -> Option<bool> {
        self.neo.map(|neo| neo.hazardous)
    }
}

impl fmt::Display for LinkedApproach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time,
            self.full_name(),
            self.approach.distance,
            self.approach.velocity
        )
    }
}

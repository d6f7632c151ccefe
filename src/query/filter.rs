use crate::model::approach::LinkedApproach;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Lt,
    Le,
    Eq,
    Ge,
    Gt,
}

impl Comparison {
    pub fn holds<T: PartialOrd>(self, value: &T, bound: &T) -> bool {
        match self {
            Comparison::Lt => value < bound,
            Comparison::Le => value <= bound,
            Comparison::Eq => value == bound,
            Comparison::Ge => value >= bound,
            Comparison::Gt => value > bound,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Eq => "==",
            Comparison::Ge => ">=",
            Comparison::Gt => ">",
        }
    }
}

/// A single predicate over a [`LinkedApproach`].
///
/// Diameter and hazard filters read the linked NEO; an approach with no
/// linked NEO, or whose NEO has no diameter, never satisfies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Date(Comparison, NaiveDate),
    Distance(Comparison, f64),
    Velocity(Comparison, f64),
    Diameter(Comparison, f64),
    Hazardous(bool),
}

impl Filter {
    pub fn matches(&self, linked: &LinkedApproach<'_>) -> bool {
        let approach = linked.approach;
        match *self {
            Filter::Date(op, bound) => op.holds(&approach.time.date(), &bound),
            Filter::Distance(op, bound) => op.holds(&approach.distance, &bound),
            Filter::Velocity(op, bound) => op.holds(&approach.velocity, &bound),
            Filter::Diameter(op, bound) => linked
                .diameter()
                .is_some_and(|diameter| op.holds(&diameter, &bound)),
            Filter::Hazardous(wanted) => linked.hazardous() == Some(wanted),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Date(op, bound) => write!(f, "date {} {}", op.symbol(), bound),
            Filter::Distance(op, bound) => write!(f, "distance {} {} au", op.symbol(), bound),
            Filter::Velocity(op, bound) => write!(f, "velocity {} {} km/s", op.symbol(), bound),
            Filter::Diameter(op, bound) => write!(f, "diameter {} {} km", op.symbol(), bound),
            Filter::Hazardous(true) => write!(f, "potentially hazardous"),
            Filter::Hazardous(false) => write!(f, "not potentially hazardous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{approach::CloseApproach, neo::NearEarthObject, types::Timestamp};
    use std::str::FromStr;

    fn approach(time: &str, distance: f64, velocity: f64) -> CloseApproach {
        CloseApproach::new("433", Timestamp::from_str(time).unwrap(), distance, velocity)
    }

    #[test]
    fn comparison_operators() {
        assert!(Comparison::Lt.holds(&1, &2));
        assert!(!Comparison::Lt.holds(&2, &2));
        assert!(Comparison::Le.holds(&2, &2));
        assert!(Comparison::Eq.holds(&2, &2));
        assert!(Comparison::Ge.holds(&2, &2));
        assert!(!Comparison::Gt.holds(&2, &2));
        assert!(Comparison::Gt.holds(&3.5, &2.0));
    }

    #[test]
    fn date_filter_ignores_time_of_day() {
        let ca = approach("2020-Jan-01 23:59", 0.1, 1.0);
        let linked = LinkedApproach::new(&ca, None);
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(Filter::Date(Comparison::Eq, day).matches(&linked));
        assert!(Filter::Date(Comparison::Ge, day).matches(&linked));
        assert!(!Filter::Date(Comparison::Gt, day).matches(&linked));
    }

    #[test]
    fn distance_and_velocity_filters() {
        let ca = approach("2020-Jan-01 00:00", 0.25, 12.5);
        let linked = LinkedApproach::new(&ca, None);
        assert!(Filter::Distance(Comparison::Le, 0.25).matches(&linked));
        assert!(!Filter::Distance(Comparison::Lt, 0.25).matches(&linked));
        assert!(Filter::Velocity(Comparison::Ge, 10.0).matches(&linked));
        assert!(!Filter::Velocity(Comparison::Ge, 15.0).matches(&linked));
    }

    #[test]
    fn diameter_filter_needs_known_diameter() {
        let ca = approach("2020-Jan-01 00:00", 0.25, 12.5);
        let sized = NearEarthObject::new("433", None, Some(1.5), false);
        let unsized_neo = NearEarthObject::new("433", None, None, false);

        let filter = Filter::Diameter(Comparison::Ge, 1.0);
        assert!(filter.matches(&LinkedApproach::new(&ca, Some(&sized))));
        assert!(!filter.matches(&LinkedApproach::new(&ca, Some(&unsized_neo))));
        assert!(!filter.matches(&LinkedApproach::new(&ca, None)));

        let upper = Filter::Diameter(Comparison::Le, 1.0);
        assert!(!upper.matches(&LinkedApproach::new(&ca, Some(&unsized_neo))));
    }

    #[test]
    fn hazard_filter_needs_linked_neo() {
        let ca = approach("2020-Jan-01 00:00", 0.25, 12.5);
        let hazardous = NearEarthObject::new("433", None, None, true);
        let safe = NearEarthObject::new("433", None, None, false);

        assert!(Filter::Hazardous(true).matches(&LinkedApproach::new(&ca, Some(&hazardous))));
        assert!(!Filter::Hazardous(true).matches(&LinkedApproach::new(&ca, Some(&safe))));
        assert!(Filter::Hazardous(false).matches(&LinkedApproach::new(&ca, Some(&safe))));
        assert!(!Filter::Hazardous(false).matches(&LinkedApproach::new(&ca, None)));
    }

    #[test]
    fn display() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(Filter::Date(Comparison::Ge, day).to_string(), "date >= 2020-01-01");
        assert_eq!(
            Filter::Distance(Comparison::Le, 0.1).to_string(),
            "distance <= 0.1 au"
        );
        assert_eq!(Filter::Hazardous(false).to_string(), "not potentially hazardous");
    }
}

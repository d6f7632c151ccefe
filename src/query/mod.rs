//! Selection of close approaches: filters built from user criteria and a
//! result limit.
//!
//! The pipeline is lazy. [`NeoDatabase::query`](crate::NeoDatabase::query)
//! yields the linked approaches matching every [`Filter`] in file order, and
//! [`limit`] bounds that stream before it reaches a writer.

mod filter;

pub use filter::{Comparison, Filter};

use crate::model::approach::LinkedApproach;
use chrono::NaiveDate;

/// User-facing query bounds. Every field left as `None` is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

/// Translates `criteria` into one [`Filter`] per bound that is set.
pub fn create_filters(criteria: &Criteria) -> Vec<Filter> {
    use Comparison::{Eq, Ge, Le};

    let mut filters = Vec::new();

    if let Some(date) = criteria.date {
        filters.push(Filter::Date(Eq, date));
    }
    if let Some(date) = criteria.start_date {
        filters.push(Filter::Date(Ge, date));
    }
    if let Some(date) = criteria.end_date {
        filters.push(Filter::Date(Le, date));
    }
    if let Some(d) = criteria.distance_min {
        filters.push(Filter::Distance(Ge, d));
    }
    if let Some(d) = criteria.distance_max {
        filters.push(Filter::Distance(Le, d));
    }
    if let Some(v) = criteria.velocity_min {
        filters.push(Filter::Velocity(Ge, v));
    }
    if let Some(v) = criteria.velocity_max {
        filters.push(Filter::Velocity(Le, v));
    }
    if let Some(d) = criteria.diameter_min {
        filters.push(Filter::Diameter(Ge, d));
    }
    if let Some(d) = criteria.diameter_max {
        filters.push(Filter::Diameter(Le, d));
    }
    if let Some(hazardous) = criteria.hazardous {
        filters.push(Filter::Hazardous(hazardous));
    }

    filters
}

pub fn matches_all(filters: &[Filter], linked: &LinkedApproach<'_>) -> bool {
    filters.iter().all(|filter| filter.matches(linked))
}

/// Yields at most `n` items. `None` and `Some(0)` leave the stream unbounded.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> std::iter::Take<I> {
    match n {
        Some(n) if n > 0 => iter.take(n),
        _ => iter.take(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_yield_no_filters() {
        assert!(create_filters(&Criteria::default()).is_empty());
    }

    #[test]
    fn each_bound_becomes_one_filter() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let criteria = Criteria {
            start_date: Some(day),
            end_date: Some(end),
            distance_max: Some(0.1),
            velocity_min: Some(5.0),
            diameter_min: Some(0.5),
            hazardous: Some(true),
            ..Default::default()
        };

        let filters = create_filters(&criteria);
        assert_eq!(
            filters,
            vec![
                Filter::Date(Comparison::Ge, day),
                Filter::Date(Comparison::Le, end),
                Filter::Distance(Comparison::Le, 0.1),
                Filter::Velocity(Comparison::Ge, 5.0),
                Filter::Diameter(Comparison::Ge, 0.5),
                Filter::Hazardous(true),
            ]
        );
    }

    #[test]
    fn exact_date_uses_equality() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let criteria = Criteria {
            date: Some(day),
            ..Default::default()
        };
        assert_eq!(
            create_filters(&criteria),
            vec![Filter::Date(Comparison::Eq, day)]
        );
    }

    #[test]
    fn limit_bounds_stream() {
        let taken: Vec<_> = limit(1..=10, Some(3)).collect();
        assert_eq!(taken, vec![1, 2, 3]);
    }

    #[test]
    fn limit_zero_or_none_is_unbounded() {
        assert_eq!(limit(1..=10, None).count(), 10);
        assert_eq!(limit(1..=10, Some(0)).count(), 10);
    }

    #[test]
    fn limit_larger_than_stream() {
        assert_eq!(limit(1..=3, Some(50)).count(), 3);
    }
}

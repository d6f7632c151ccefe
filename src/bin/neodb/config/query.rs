use neo_db::query::Criteria;

use crate::cli::QueryArgs;

pub fn build_criteria(args: &QueryArgs) -> Criteria {
    let dates = &args.dates;
    let bounds = &args.bounds;

    let hazardous = match (bounds.hazardous, bounds.not_hazardous) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    };

    Criteria {
        date: dates.date,
        start_date: dates.start_date,
        end_date: dates.end_date,
        distance_min: bounds.min_distance,
        distance_max: bounds.max_distance,
        velocity_min: bounds.min_velocity,
        velocity_max: bounds.max_velocity,
        diameter_min: bounds.min_diameter,
        diameter_max: bounds.max_diameter,
        hazardous,
    }
}

/// `--limit 0` disables the limit.
pub fn build_limit(args: &QueryArgs) -> Option<usize> {
    (args.limit > 0).then_some(args.limit)
}

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use hover_chart::core::{DataPoint, PriceSeries, nearest_point, utc_midnight};
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    utc_midnight(2000, 1, 1).expect("valid base date")
}

fn series_from_hours(hours: &BTreeSet<i64>) -> PriceSeries {
    PriceSeries::new(
        hours
            .iter()
            .map(|h| DataPoint::new(base() + Duration::hours(*h), *h as f64))
            .collect(),
    )
}

proptest! {
    #[test]
    fn nearest_point_minimizes_distance(
        hours in prop::collection::btree_set(0i64..50_000, 1..120),
        target_hours in -5_000i64..55_000,
        target_minutes in 0i64..60
    ) {
        let series = series_from_hours(&hours);
        let target = base() + Duration::hours(target_hours) + Duration::minutes(target_minutes);

        let found = nearest_point(series.points(), target).expect("non-empty lookup");
        let best = (found.date - target).num_milliseconds().abs();
        for point in series.iter() {
            let distance = (point.date - target).num_milliseconds().abs();
            prop_assert!(best <= distance);
            if distance == best {
                // Ties resolve to the later point.
                prop_assert!(found.date >= point.date);
            }
        }
    }

    #[test]
    fn nearest_point_is_a_member_of_the_series(
        hours in prop::collection::btree_set(0i64..10_000, 1..60),
        target_hours in -1_000i64..11_000
    ) {
        let series = series_from_hours(&hours);
        let target = base() + Duration::hours(target_hours);

        let found = nearest_point(series.points(), target).expect("non-empty lookup");
        prop_assert!(series.points().contains(&found));
    }

    #[test]
    fn midpoints_between_neighbours_pick_the_later_one(
        start in 0i64..10_000,
        gap in 1i64..500
    ) {
        let hours: BTreeSet<i64> = [start, start + 2 * gap].into_iter().collect();
        let series = series_from_hours(&hours);
        let target = base() + Duration::hours(start + gap);

        let found = nearest_point(series.points(), target).expect("lookup");
        prop_assert_eq!(found.date, base() + Duration::hours(start + 2 * gap));
    }
}

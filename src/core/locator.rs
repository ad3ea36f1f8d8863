//! Nearest-point lookup over a date-ascending series.
//!
//! The bisector runs with a descending comparator over the series viewed
//! latest-first. The insertion index `i` is the first position whose date is
//! not after the target, so `view[i - 1]` is the later neighbour and `view[i]`
//! the earlier one. The earlier neighbour only wins when it is strictly
//! closer; an exact midpoint resolves to the later point.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use smallvec::SmallVec;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Descending-order comparator: `Less` when `a` sorts before `b`, i.e. when
/// `a` is the later of the two.
#[must_use]
pub fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Left bisector over `len` positions.
///
/// `compare_at(mid)` compares the element at `mid` against the target.
/// Returns the first position where the comparison is not `Less`.
pub fn bisect_left_by(len: usize, mut compare_at: impl FnMut(usize) -> Ordering) -> usize {
    let mut lo = 0;
    let mut hi = len;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if compare_at(mid) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Insertion index of `target` in the latest-first view of `points`.
#[must_use]
pub fn bisect_date_descending(points: &[DataPoint], target: DateTime<Utc>) -> usize {
    let len = points.len();
    bisect_left_by(len, |k| descending(&points[len - 1 - k].date, &target))
}

/// Returns the point whose date is closest to `target`.
pub fn nearest_point(points: &[DataPoint], target: DateTime<Utc>) -> ChartResult<DataPoint> {
    if points.is_empty() {
        return Err(ChartError::OutOfRange(
            "nearest-point lookup on an empty series".to_owned(),
        ));
    }

    let len = points.len();
    let latest_first = |k: usize| points[len - 1 - k];
    let i = bisect_date_descending(points, target);

    // [later, earlier]; either side may be missing at the series edges.
    let mut candidates: SmallVec<[Option<DataPoint>; 2]> = SmallVec::new();
    candidates.push(i.checked_sub(1).map(latest_first));
    candidates.push((i < len).then(|| latest_first(i)));

    match (candidates[0], candidates[1]) {
        (Some(later), Some(earlier)) => {
            let to_later = target.signed_duration_since(later.date);
            let from_earlier = earlier.date.signed_duration_since(target);
            Ok(if to_later < from_earlier { earlier } else { later })
        }
        (Some(only), None) | (None, Some(only)) => Ok(only),
        (None, None) => Err(ChartError::OutOfRange(format!(
            "bisector index {i} has no neighbours in a series of {len}"
        ))),
    }
}

/// Predict a single salary figure from a possibly partial range.
///
/// A range with both bounds yields its midpoint. A lone lower bound is
/// scaled up by 20%, a lone upper bound scaled down by 20%. All results are
/// floored.
///
/// Absence is decided by `None` only, a zero bound is a real bound here.
/// Providers that encode a missing bound as `0` must map it to `None`
/// before calling this.
pub fn estimate(salary_from: Option<u64>, salary_to: Option<u64>) -> Option<u64> {
    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some(from / 2 + to / 2 + (from % 2 + to % 2) / 2),
        (Some(from), None) => Some(from.saturating_mul(6) / 5),
        (None, Some(to)) => Some(to.saturating_mul(4) / 5),
        (None, None) => None,
    }
}

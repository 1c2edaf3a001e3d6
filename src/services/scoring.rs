//! Rating to points mapping

use crate::constants::{RATING_BANDS, TOP_RATING_FLOOR, TOP_RATING_POINTS};

/// Points earned for solving a problem of the given rating.
///
/// Follows the fixed band table in [`crate::constants::RATING_BANDS`];
/// anything outside a band, including a missing rating, is worth nothing.
pub fn score(rating: Option<i32>) -> u32 {
    let Some(rating) = rating else {
        return 0;
    };

    if rating >= TOP_RATING_FLOOR {
        return TOP_RATING_POINTS;
    }

    RATING_BANDS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&rating))
        .map(|(_, _, points)| *points)
        .unwrap_or(0)
}

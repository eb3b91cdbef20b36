use hifitime::{Epoch, Unit};

use crate::constants::{Day, SECONDS_PER_DAY};

/// Expand the two-digit epoch year of a TLE into a four-digit year.
///
/// Every year is mapped into the 2000s, so objects with an epoch between 1957 and 1999
/// are mishandled.
pub fn expand_two_digit_year(yy: u32) -> i32 {
    2000 + yy as i32
}

/// Reconstruct the epoch instant of an element set.
///
/// Argument
/// --------
/// * `year`: four-digit epoch year
/// * `day`: fractional day of year, 1-based (`1.0` is January 1st at 00:00 UTC)
///
/// Return
/// ------
/// * the epoch as a UTC [`Epoch`]
pub fn tle_epoch(year: i32, day: Day) -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(year, 1, 1) + Unit::Day * (day - 1.0)
}

/// Elapsed time between two instants, in days.
///
/// The difference is taken on Unix seconds, i.e. civil UTC seconds without leap-second
/// insertion. The result is negative when `to` precedes `from`.
pub fn elapsed_days(from: Epoch, to: Epoch) -> Day {
    (to.to_unix_seconds() - from.to_unix_seconds()) / SECONDS_PER_DAY
}

/// Fractional 1-based day of year of an instant, in the convention of the TLE epoch field.
pub fn day_of_year(epoch: Epoch) -> Day {
    let (year, ..) = epoch.to_gregorian_utc();
    elapsed_days(Epoch::from_gregorian_utc_at_midnight(year, 1, 1), epoch) + 1.0
}

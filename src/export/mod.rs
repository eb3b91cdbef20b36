//! Reports of located satellites: KML placemarks for globe viewers and CSV tables.
pub mod csv_report;
pub mod kml;

use hifitime::Epoch;

/// RFC 3339 rendering of an instant in UTC, whole seconds, `Z` suffix.
///
/// Sub-second digits are truncated.
pub fn rfc3339_utc(epoch: Epoch) -> String {
    let (y, m, d, h, min, s, _) = epoch.to_gregorian_utc();
    format!("{y:04}-{m:02}-{d:02}T{h:02}:{min:02}:{s:02}Z")
}

#[cfg(test)]
mod export_test {
    use super::*;

    #[test]
    fn test_rfc3339_utc() {
        let epoch = Epoch::from_gregorian_utc(2025, 4, 27, 10, 18, 6, 500_000_000);
        assert_eq!(rfc3339_utc(epoch), "2025-04-27T10:18:06Z");
    }
}

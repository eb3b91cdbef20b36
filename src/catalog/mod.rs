//! # TLE catalogs
//!
//! A TLE catalog is plain text where each satellite takes three lines: a name line followed by
//! the two data lines.
//!
//! ```text
//! STARLINK-1008
//! 1 44714U 19074B   25117.42924319 -.00001157  00000+0 -58773-4 0  9990
//! 2 44714  53.0517 166.3609 0001116  99.1558 260.9557 15.06400606301084
//! ```
//!
//! [`TleCatalog::parse`] isolates the `(name, line1, line2)` triplets, [`TleCatalog::find`]
//! and [`TleCatalog::matching`] select satellites by name. Decoding is left to
//! [`TleDecoder`](crate::tle::TleDecoder) through [`CatalogEntry::decode`].
//!
//! Retrieval of the text itself lives in [`fetcher`] (HTTP, feature `download`) and
//! [`read_catalog_file`] (local file).
use std::path::Path;

use itertools::Itertools;
use regex::Regex;

use crate::{
    satloc_errors::SatlocError,
    tle::{Tle, TleDecoder},
};

#[cfg(feature = "download")]
pub mod fetcher;

/// One satellite of a catalog, lines kept verbatim (trailing whitespace removed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl CatalogEntry {
    /// Decode the two data lines, keeping the entry name.
    pub fn decode(&self, decoder: &TleDecoder) -> Result<Tle, SatlocError> {
        decoder.decode_tle(Some(&self.name), &self.line1, &self.line2)
    }
}

/// Satellites of a catalog text, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TleCatalog {
    entries: Vec<CatalogEntry>,
}

impl TleCatalog {
    /// Isolate the `(name, line1, line2)` triplets of a catalog text.
    ///
    /// A triplet is a non-empty line followed by a line starting with `"1 "` and a line starting
    /// with `"2 "`. The optional `"0 "` prefix of three-line element files is dropped from the
    /// name. Lines that do not fit the pattern are skipped.
    pub fn parse(text: &str) -> Self {
        let lines = text.lines().map(str::trim_end).collect_vec();

        let mut entries = Vec::new();
        let mut next_free = 0;
        for (i, (name, line1, line2)) in lines.iter().tuple_windows().enumerate() {
            if i < next_free {
                continue;
            }
            let name = name.trim();
            let name = name.strip_prefix("0 ").unwrap_or(name);
            if !name.is_empty() && line1.starts_with("1 ") && line2.starts_with("2 ") {
                entries.push(CatalogEntry {
                    name: name.to_string(),
                    line1: line1.to_string(),
                    line2: line2.to_string(),
                });
                next_free = i + 3;
            }
        }
        TleCatalog { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Names of every satellite, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Find a satellite by name.
    ///
    /// An exact name match wins; otherwise the first entry whose name contains `name` is
    /// returned.
    ///
    /// Errors
    /// ----------
    /// * [`SatlocError::SatelliteNotFound`] when no name matches.
    pub fn find(&self, name: &str) -> Result<&CatalogEntry, SatlocError> {
        let name = name.trim();
        self.entries
            .iter()
            .find(|e| e.name == name)
            .or_else(|| self.entries.iter().find(|e| e.name.contains(name)))
            .ok_or_else(|| SatlocError::SatelliteNotFound(name.to_string()))
    }

    /// Entries whose name matches a regular expression.
    ///
    /// Errors
    /// ----------
    /// * [`SatlocError::InvalidPattern`] when `pattern` is not a valid regex.
    pub fn matching(&self, pattern: &str) -> Result<Vec<&CatalogEntry>, SatlocError> {
        let re = Regex::new(pattern)?;
        Ok(self.entries.iter().filter(|e| re.is_match(&e.name)).collect())
    }

    /// Find a satellite and decode its element set.
    pub fn decode(&self, name: &str, decoder: &TleDecoder) -> Result<Tle, SatlocError> {
        self.find(name)?.decode(decoder)
    }
}

impl<'a> IntoIterator for &'a TleCatalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Read and parse a catalog stored on disk.
pub fn read_catalog_file<P: AsRef<Path>>(path: P) -> Result<TleCatalog, SatlocError> {
    let text = std::fs::read_to_string(path)?;
    Ok(TleCatalog::parse(&text))
}

#[cfg(test)]
mod catalog_test {
    use super::*;

    const CATALOG: &str = "STARLINK-1007           \r
1 44713U 19074A   25117.50000000  .00001234  00000+0  10270-3 0  9993\r
2 44713  53.0540 166.0020 0001404  88.4511 271.6612 15.06420000301129\r
STARLINK-1008           \r
1 44714U 19074B   25117.42924319 -.00001157  00000+0 -58773-4 0  9990\r
2 44714  53.0517 166.3609 0001116  99.1558 260.9557 15.06400606301084\r
STARLINK-10080\r
1 44715U 19074C   25117.40000000  .00000500  00000+0  50000-4 0  9995\r
2 44715  53.0530 166.2000 0001200  95.0000 265.0000 15.06410000301094\r
";

    #[test]
    fn test_parse_catalog() {
        let catalog = TleCatalog::parse(CATALOG);
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.names(),
            vec!["STARLINK-1007", "STARLINK-1008", "STARLINK-10080"]
        );
        let entry = catalog.find("STARLINK-1008").unwrap();
        assert!(entry.line1.starts_with("1 44714U"));
        assert!(entry.line2.ends_with("301084"));
    }

    #[test]
    fn test_find_prefers_exact_name() {
        let catalog = TleCatalog::parse(CATALOG);
        assert_eq!(catalog.find("STARLINK-1008").unwrap().line1.len(), 69);
        assert!(catalog.find("STARLINK-1008").unwrap().line1.contains("44714U"));
        assert_eq!(catalog.find("10080").unwrap().name, "STARLINK-10080");
        assert_eq!(
            catalog.find("ISS (ZARYA)").unwrap_err(),
            SatlocError::SatelliteNotFound("ISS (ZARYA)".to_string())
        );
    }

    #[test]
    fn test_matching() {
        let catalog = TleCatalog::parse(CATALOG);
        let names: Vec<_> = catalog
            .matching(r"^STARLINK-100\d$")
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["STARLINK-1007", "STARLINK-1008"]);
        assert!(matches!(
            catalog.matching("STARLINK-(").unwrap_err(),
            SatlocError::InvalidPattern(_)
        ));
    }

    #[test]
    fn test_skips_noise_and_three_line_prefix() {
        let text = "\
garbage line
0 ISS (ZARYA)
1 25544U 98067A   25117.51782528  .00012182  00000+0  22156-3 0  9996
2 25544  51.6363 201.3457 0002492 237.9497 122.1305 15.49487376507534

2 orphan line
";
        let catalog = TleCatalog::parse(text);
        assert_eq!(catalog.names(), vec!["ISS (ZARYA)"]);
    }

    #[test]
    fn test_decode_entry() {
        let catalog = TleCatalog::parse(CATALOG);
        let tle = catalog
            .decode("STARLINK-1008", &TleDecoder::new(true))
            .unwrap();
        assert_eq!(tle.name.as_deref(), Some("STARLINK-1008"));
        assert_eq!(tle.norad_id, 44714);
        assert_eq!(tle.elements.inclination, 53.0517);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = TleCatalog::parse("");
        assert!(catalog.is_empty());
        assert_eq!((&catalog).into_iter().count(), 0);
    }
}

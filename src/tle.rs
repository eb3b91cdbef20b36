//! # Two-Line Element decoder
//!
//! Utilities to decode a **Two-Line Element set** (TLE) into [`OrbitalElements`] usable by the
//! propagation pipeline.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - A small error type [`ParseTleError`] describing TLE decoding failures.
//! - [`TleDecoder`], a fixed-column decoder with optional checksum verification.
//! - [`decode`], a shortcut over the default decoder.
//! - [`Tle`], the decoded element set together with the catalog metadata of both lines.
//!
//! Fields are extracted by **fixed character offsets**, never by whitespace splitting: adjacent
//! fields may touch and some fields carry an embedded sign.
//!
//! ## Field Layout (0-indexed, end-exclusive)
//! -----------------
//! Line 1:
//! * `2..7` – catalog number, `7` – classification, `9..17` – international designator
//! * `18..20` – epoch year (two digits), `20..32` – epoch day of year (fractional)
//! * `33..43` – first time derivative of the mean motion
//! * `64..68` – element set number, `68` – checksum
//!
//! Line 2:
//! * `8..16` – inclination, `17..25` – RAAN
//! * `26..33` – eccentricity digits, decimal point implied before the first digit
//! * `34..42` – argument of perigee, `43..51` – mean anomaly, `52..63` – mean motion
//! * `63..68` – revolution number at epoch, `68` – checksum
//!
//! ## Error Handling
//! -----------------
//! Every numeric field that cannot be parsed yields [`ParseTleError::InvalidField`] carrying
//! the field name and the raw substring. The decoder never substitutes a default value.
use std::ops::Range;
use std::str::FromStr;

use thiserror::Error;

use crate::{
    orbital_elements::OrbitalElements, satloc_errors::SatlocError, time::expand_two_digit_year,
};

/// Length of a TLE data line, checksum included.
pub const TLE_LINE_LENGTH: usize = 69;

/// Line-level decoding errors for TLE data.
///
/// Variants
/// -----------------
/// * `TooShortLine` – The line does not reach 69 characters.
/// * `WrongLineNumber` – The first column is not the expected line number (`1` or `2`).
/// * `InvalidField` – A fixed-column field failed to parse; payload carries the field name and
///   the offending slice.
/// * `ChecksumMismatch` – The modulo-10 checksum in column 68 does not match the line content.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseTleError {
    #[error("TLE line {line} is too short ({len} characters)")]
    TooShortLine { line: u8, len: usize },
    #[error("Expected TLE line {line}, found line marker {found:?}")]
    WrongLineNumber { line: u8, found: char },
    #[error("Invalid TLE field {field}: {raw:?}")]
    InvalidField { field: &'static str, raw: String },
    #[error("Checksum mismatch on TLE line {line}: expected {expected}, computed {computed}")]
    ChecksumMismatch { line: u8, expected: u8, computed: u8 },
}

/// A decoded element set with the catalog metadata found on its two lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Tle {
    pub name: Option<String>,
    pub norad_id: u32,
    pub classification: char,
    pub international_designator: String,
    pub element_set_number: u32,
    pub revolution_number: u32,
    pub elements: OrbitalElements,
}

/// Fixed-column TLE decoder.
///
/// `verify_checksum` is off by default: element sets copied by hand or edited for tests
/// frequently carry stale checksums.
#[derive(Debug, Clone, Copy, Default)]
pub struct TleDecoder {
    pub verify_checksum: bool,
}

/// Decode two TLE data lines with the default [`TleDecoder`].
///
/// Arguments
/// -----------------
/// * `line1`: the first data line (starting with `1 `)
/// * `line2`: the second data line (starting with `2 `)
///
/// Return
/// ----------
/// * The decoded [`OrbitalElements`] or a [`SatlocError::TleParsing`] on failure.
pub fn decode(line1: &str, line2: &str) -> Result<OrbitalElements, SatlocError> {
    TleDecoder::default().decode(line1, line2)
}

impl TleDecoder {
    pub fn new(verify_checksum: bool) -> Self {
        TleDecoder { verify_checksum }
    }

    /// Decode the orbital elements of a TLE.
    ///
    /// See also
    /// ------------
    /// * [`TleDecoder::decode_tle`] – Same decoding, keeping the catalog metadata.
    pub fn decode(&self, line1: &str, line2: &str) -> Result<OrbitalElements, SatlocError> {
        let line1 = self.check_line(line1, 1)?;
        let line2 = self.check_line(line2, 2)?;
        Ok(decode_elements(line1, line2)?)
    }

    /// Decode a TLE and its catalog metadata.
    ///
    /// Arguments
    /// -----------------
    /// * `name`: the optional name line preceding the data lines, stored trimmed
    /// * `line1`, `line2`: the data lines
    pub fn decode_tle(
        &self,
        name: Option<&str>,
        line1: &str,
        line2: &str,
    ) -> Result<Tle, SatlocError> {
        let line1 = self.check_line(line1, 1)?;
        let line2 = self.check_line(line2, 2)?;
        let elements = decode_elements(line1, line2)?;

        let classification = line1
            .get(7..8)
            .and_then(|c| c.chars().next())
            .ok_or_else(|| invalid_field("classification", line1.get(7..8).unwrap_or("")))?;

        Ok(Tle {
            name: name.map(|n| n.trim().to_string()),
            norad_id: parse_field(line1, 2..7, "norad_id")?,
            classification,
            international_designator: raw_field(line1, 9..17, "international_designator")?
                .trim()
                .to_string(),
            element_set_number: parse_field(line1, 64..68, "element_set_number")?,
            revolution_number: parse_field(line2, 63..68, "revolution_number")?,
            elements,
        })
    }

    fn check_line<'a>(&self, line: &'a str, number: u8) -> Result<&'a str, ParseTleError> {
        let line = line.trim_end();
        if line.len() < TLE_LINE_LENGTH {
            return Err(ParseTleError::TooShortLine {
                line: number,
                len: line.len(),
            });
        }

        let marker = line.chars().next().unwrap_or(' ');
        if marker.to_digit(10) != Some(number as u32) {
            return Err(ParseTleError::WrongLineNumber {
                line: number,
                found: marker,
            });
        }

        if self.verify_checksum {
            let expected = raw_field(line, 68..69, "checksum")?;
            let expected = expected
                .parse::<u8>()
                .map_err(|_| invalid_field("checksum", expected))?;
            let computed = line_checksum(line);
            if expected != computed {
                return Err(ParseTleError::ChecksumMismatch {
                    line: number,
                    expected,
                    computed,
                });
            }
        }
        Ok(line)
    }
}

/// Modulo-10 checksum of a TLE line: sum of the digits of the first 68 columns,
/// each minus sign counting as one.
pub fn line_checksum(line: &str) -> u8 {
    let sum: u32 = line
        .chars()
        .take(TLE_LINE_LENGTH - 1)
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum();
    (sum % 10) as u8
}

fn decode_elements(line1: &str, line2: &str) -> Result<OrbitalElements, ParseTleError> {
    let epoch_year = expand_two_digit_year(parse_field(line1, 18..20, "epoch_year")?);

    let ecc_digits = raw_field(line2, 26..33, "eccentricity")?;
    let ecc_trimmed = ecc_digits.trim();
    if ecc_trimmed.is_empty() || !ecc_trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_field("eccentricity", ecc_digits));
    }
    let eccentricity = format!("0.{ecc_trimmed}")
        .parse::<f64>()
        .map_err(|_| invalid_field("eccentricity", ecc_digits))?;

    Ok(OrbitalElements {
        mean_anomaly: parse_field(line2, 43..51, "mean_anomaly")?,
        mean_motion: parse_field(line2, 52..63, "mean_motion")?,
        mean_motion_dot: parse_field(line1, 33..43, "mean_motion_dot")?,
        eccentricity,
        epoch_year,
        epoch_day: parse_field(line1, 20..32, "epoch_day")?,
        inclination: parse_field(line2, 8..16, "inclination")?,
        raan: parse_field(line2, 17..25, "raan")?,
        arg_of_perigee: parse_field(line2, 34..42, "arg_of_perigee")?,
    })
}

fn raw_field<'a>(
    line: &'a str,
    range: Range<usize>,
    field: &'static str,
) -> Result<&'a str, ParseTleError> {
    line.get(range).ok_or_else(|| invalid_field(field, line))
}

fn parse_field<T: FromStr>(
    line: &str,
    range: Range<usize>,
    field: &'static str,
) -> Result<T, ParseTleError> {
    let raw = raw_field(line, range, field)?;
    raw.trim().parse::<T>().map_err(|_| invalid_field(field, raw))
}

fn invalid_field(field: &'static str, raw: &str) -> ParseTleError {
    ParseTleError::InvalidField {
        field,
        raw: raw.to_string(),
    }
}

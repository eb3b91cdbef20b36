use thiserror::Error;

use crate::constants::Day;
use crate::tle::ParseTleError;

#[derive(Error, Debug)]
pub enum SatlocError {
    #[error("Error during the TLE parsing: {0}")]
    TleParsing(#[from] ParseTleError),

    #[error(
        "Target time {target} precedes the element epoch {epoch} ({elapsed_days} days); \
         backward propagation is not supported"
    )]
    TargetBeforeEpoch {
        target: hifitime::Epoch,
        epoch: hifitime::Epoch,
        elapsed_days: Day,
    },

    #[error("Satellite not found in catalog: {0}")]
    SatelliteNotFound(String),

    #[error("Invalid satellite name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid propagator configuration: {0}")]
    InvalidConfig(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[cfg(feature = "download")]
    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[cfg(feature = "download")]
    #[error("Unexpected HTTP status while fetching the catalog: {0}")]
    HttpStatus(u16),
}

impl PartialEq for SatlocError {
    fn eq(&self, other: &Self) -> bool {
        use SatlocError::*;
        match (self, other) {
            (TleParsing(a), TleParsing(b)) => a == b,
            (
                TargetBeforeEpoch {
                    target: t1,
                    epoch: e1,
                    ..
                },
                TargetBeforeEpoch {
                    target: t2,
                    epoch: e2,
                    ..
                },
            ) => t1 == t2 && e1 == e2,
            (SatelliteNotFound(a), SatelliteNotFound(b)) => a == b,
            (InvalidPattern(a), InvalidPattern(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,

            // payloads are not comparable, same variant is enough
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            #[cfg(feature = "download")]
            (ReqwestError(_), ReqwestError(_)) => true,
            #[cfg(feature = "download")]
            (HttpStatus(a), HttpStatus(b)) => a == b,

            _ => false,
        }
    }
}

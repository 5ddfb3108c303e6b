//! Error types for the solar_daylight crate.

/// Error type for every validation failure raised before a year is computed.
///
/// Polar days are not errors; they surface as [`crate::types::Horizon`]
/// outcomes on the individual records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SunTimesError {
    /// A date string did not match its required layout.
    #[error("malformed {param}: {value:?} (expected {expected})")]
    MalformedDate {
        param: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The reference solstice is not within half an orbit before perihelion.
    #[error("solstice {solstice} must precede perihelion {perihelion} within the same half orbit")]
    SolsticeOrder {
        solstice: String,
        perihelion: String,
    },

    /// Elevation feeds a square root and must be non-negative.
    #[error("invalid elevation: {elevation} m (must be finite and >= 0)")]
    InvalidElevation { elevation: f64 },

    /// A numeric parameter is non-finite or outside its allowed range.
    #[error("{param} out of range: {value} (must be {min}..={max})")]
    OutOfRange {
        param: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// DST was only partially configured.
    #[error("incomplete DST configuration: missing {missing}")]
    IncompleteDst { missing: &'static str },

    /// A DST boundary date lies outside the year being computed.
    #[error("{param} is in {year}, expected {expected}")]
    DstYearMismatch {
        param: &'static str,
        year: i32,
        expected: i32,
    },
}

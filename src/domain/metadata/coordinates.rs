// SPDX-License-Identifier: MPL-2.0
//! Sexagesimal (degrees, minutes, seconds) to decimal-degree conversion.
//!
//! Two entry points are provided:
//!
//! - [`to_decimal_degrees`]: best-effort, returns `0.0` for any missing or
//!   invalid input. Note that `0.0` is also a real coordinate (equator or
//!   prime meridian), so callers cannot tell the two apart.
//! - [`try_to_decimal_degrees`]: strict, reports a [`CoordinateError`].
//!
//! Both are pure functions of their inputs.

use super::tags::TagValue;
use std::fmt;

// =============================================================================
// CoordinateError
// =============================================================================

/// Reasons a GPS coordinate cannot be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// A GPS tag required for the conversion is missing.
    MissingTag(&'static str),
    /// The DMS value has fewer than three components.
    MissingComponent(usize),
    /// A DMS component is not a finite number.
    NonNumeric(usize),
    /// The hemisphere reference is not one of N, S, E, W.
    InvalidReference(String),
    /// The hemisphere reference does not belong to the requested axis.
    WrongAxis { reference: Hemisphere, axis: Axis },
    /// The converted value lies outside the valid range for its axis.
    OutOfRange { axis: Axis },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::MissingTag(tag) => write!(f, "GPS tag missing: {tag}"),
            CoordinateError::MissingComponent(index) => {
                write!(f, "DMS component {index} missing")
            }
            CoordinateError::NonNumeric(index) => write!(f, "DMS component {index} is not numeric"),
            CoordinateError::InvalidReference(value) => {
                write!(f, "Invalid hemisphere reference: {value:?}")
            }
            CoordinateError::WrongAxis { reference, axis } => {
                write!(f, "Reference {reference} is not valid for {axis}")
            }
            CoordinateError::OutOfRange { axis } => {
                write!(f, "Converted {axis} exceeds ±{} degrees", axis.limit())
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

// =============================================================================
// Axis / Hemisphere
// =============================================================================

/// Geographic axis a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest valid absolute value in decimal degrees.
    #[must_use]
    pub const fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Hemisphere reference letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses a reference letter. Surrounding whitespace and NUL padding are
    /// ignored and case does not matter.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::InvalidReference`] for anything other than
    /// a single N, S, E or W.
    pub fn parse(reference: &str) -> Result<Self, CoordinateError> {
        let trimmed = reference.trim_matches(|c: char| c == '\0' || c.is_whitespace());
        match trimmed.to_ascii_uppercase().as_str() {
            "N" => Ok(Hemisphere::North),
            "S" => Ok(Hemisphere::South),
            "E" => Ok(Hemisphere::East),
            "W" => Ok(Hemisphere::West),
            _ => Err(CoordinateError::InvalidReference(reference.to_string())),
        }
    }

    /// `-1.0` for the southern and western hemispheres, `1.0` otherwise.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -1.0,
            Hemisphere::North | Hemisphere::East => 1.0,
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
            Hemisphere::East => "E",
            Hemisphere::West => "W",
        };
        f.write_str(letter)
    }
}

// =============================================================================
// Dms
// =============================================================================

/// A coordinate component in degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Dms {
    #[must_use]
    pub const fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Reads the first three numeric components of a tag value.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::MissingComponent`] or
    /// [`CoordinateError::NonNumeric`] naming the first bad component.
    pub fn from_tag_value(value: &TagValue) -> Result<Self, CoordinateError> {
        let component = |index: usize| {
            if index >= value.len() {
                return Err(CoordinateError::MissingComponent(index));
            }
            value
                .number_at(index)
                .ok_or(CoordinateError::NonNumeric(index))
        };
        Ok(Self::new(component(0)?, component(1)?, component(2)?))
    }

    /// Signed decimal degrees: `d + m/60 + s/3600`, negated for S and W.
    #[must_use]
    pub fn to_decimal(self, hemisphere: Hemisphere) -> f64 {
        hemisphere.sign() * (self.degrees + self.minutes / 60.0 + self.seconds / 3600.0)
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Best-effort conversion of a DMS tag value and reference letter.
///
/// Returns `0.0` when the value or reference is missing, a component is
/// missing or non-numeric, or the reference letter is not N, S, E or W.
#[must_use]
pub fn to_decimal_degrees(dms: Option<&TagValue>, reference: Option<&str>) -> f64 {
    let (Some(dms), Some(reference)) = (dms, reference) else {
        return 0.0;
    };
    let Ok(hemisphere) = Hemisphere::parse(reference) else {
        return 0.0;
    };
    Dms::from_tag_value(dms).map_or(0.0, |dms| dms.to_decimal(hemisphere))
}

/// Strict conversion of a DMS tag value and reference letter.
///
/// # Errors
///
/// Returns a [`CoordinateError`] describing the first problem found.
pub fn try_to_decimal_degrees(dms: &TagValue, reference: &str) -> Result<f64, CoordinateError> {
    let hemisphere = Hemisphere::parse(reference)?;
    Ok(Dms::from_tag_value(dms)?.to_decimal(hemisphere))
}

/// Strict conversion that also checks the reference belongs to `axis`.
///
/// # Errors
///
/// Same as [`try_to_decimal_degrees`], plus [`CoordinateError::WrongAxis`]
/// when e.g. a latitude carries an `E` reference and
/// [`CoordinateError::OutOfRange`] when the result exceeds the axis limit.
pub fn try_axis_to_decimal_degrees(
    dms: &TagValue,
    reference: &str,
    axis: Axis,
) -> Result<f64, CoordinateError> {
    let hemisphere = Hemisphere::parse(reference)?;
    if hemisphere.axis() != axis {
        return Err(CoordinateError::WrongAxis {
            reference: hemisphere,
            axis,
        });
    }
    let decimal = Dms::from_tag_value(dms)?.to_decimal(hemisphere);
    if decimal.abs() > axis.limit() {
        return Err(CoordinateError::OutOfRange { axis });
    }
    Ok(decimal)
}

//! Error and diagnostic types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::orb::AspectKind;
use crate::point::BodyCategory;

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// A point's category has no entry in the orb table.
    UnknownCategory(BodyCategory),
    /// A category entry is missing a tolerance it must define.
    IncompleteOrbs {
        category: BodyCategory,
        aspect: AspectKind,
    },
    /// A tolerance is negative or not finite.
    InvalidOrb {
        category: BodyCategory,
        aspect: AspectKind,
    },
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Failure reported by the ephemeris provider.
    Ephemeris(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(c) => write!(f, "unknown category: {}", c.name()),
            Self::IncompleteOrbs { category, aspect } => write!(
                f,
                "orb table entry for {} is missing {} ({} deg)",
                category.name(),
                aspect.name(),
                aspect.angle_deg()
            ),
            Self::InvalidOrb { category, aspect } => write!(
                f,
                "invalid orb for {} {}: must be finite and non-negative",
                category.name(),
                aspect.name()
            ),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Ephemeris(msg) => write!(f, "ephemeris error: {msg}"),
        }
    }
}

impl Error for ChartError {}

/// Non-fatal problems found while assembling a chart.
///
/// The chart is still returned; these let callers spot bad input data.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDiagnostic {
    /// A pair was skipped because a category is absent from the orb table.
    UnknownCategory {
        first: String,
        second: String,
        category: BodyCategory,
    },
    /// A body fell in no house interval and is left unhoused.
    NoHouseMatch { body: String, longitude_deg: f64 },
    /// A house cusp is not a finite longitude.
    InvalidCusp { house: u8, cusp_deg: f64 },
}

impl Display for ChartDiagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory {
                first,
                second,
                category,
            } => write!(
                f,
                "skipped {first}/{second}: category {} not in orb table",
                category.name()
            ),
            Self::NoHouseMatch {
                body,
                longitude_deg,
            } => write!(f, "{body} at {longitude_deg} deg matched no house"),
            Self::InvalidCusp { house, cusp_deg } => {
                write!(f, "house {house} has invalid cusp {cusp_deg}")
            }
        }
    }
}

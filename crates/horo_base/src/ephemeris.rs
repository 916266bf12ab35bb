//! Ephemeris provider seam.
//!
//! Raw body longitudes and house cusps come from outside the crate. A
//! provider implements [`EphemerisProvider`]; [`StaticEphemeris`] serves
//! fixed values and is what the CLI, tests and benches use.

use crate::error::ChartError;
use crate::house_types::HouseSystem;
use crate::point::ChartPoint;

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidLocation(
                "latitude must be within [-90, 90] deg",
            ));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(ChartError::InvalidLocation(
                "longitude must be within [-180, 180] deg",
            ));
        }
        Ok(())
    }
}

/// Cusp answer from a provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HouseCusps {
    /// The 12 cusp longitudes, house 1 first.
    Cusps([f64; 12]),
    /// No location was given; the chart has no houses or axes.
    NoGeoposition,
}

/// Source of raw positions for a chart.
///
/// Implementations must be shareable across threads; each chart request
/// calls the provider independently.
pub trait EphemerisProvider: Send + Sync {
    /// Body positions at `jd_utc`. The returned order is the chart's body order.
    fn body_positions(&self, jd_utc: f64) -> Result<Vec<ChartPoint>, ChartError>;

    /// House cusps at `jd_utc` for `location`.
    ///
    /// Must answer [`HouseCusps::NoGeoposition`] when `location` is `None`.
    fn house_cusps(
        &self,
        jd_utc: f64,
        location: Option<&GeoLocation>,
        system: HouseSystem,
    ) -> Result<HouseCusps, ChartError>;
}

/// Provider returning the same positions for every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticEphemeris {
    bodies: Vec<ChartPoint>,
    cusps: Option<[f64; 12]>,
}

impl StaticEphemeris {
    pub fn new(bodies: Vec<ChartPoint>) -> Self {
        Self {
            bodies,
            cusps: None,
        }
    }

    pub fn with_cusps(mut self, cusps: [f64; 12]) -> Self {
        self.cusps = Some(cusps);
        self
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn body_positions(&self, _jd_utc: f64) -> Result<Vec<ChartPoint>, ChartError> {
        Ok(self.bodies.clone())
    }

    fn house_cusps(
        &self,
        _jd_utc: f64,
        location: Option<&GeoLocation>,
        _system: HouseSystem,
    ) -> Result<HouseCusps, ChartError> {
        match (location, self.cusps) {
            (None, _) => Ok(HouseCusps::NoGeoposition),
            (Some(_), Some(cusps)) => Ok(HouseCusps::Cusps(cusps)),
            (Some(_), None) => Err(ChartError::Ephemeris(
                "static ephemeris has no house cusps".to_string(),
            )),
        }
    }
}

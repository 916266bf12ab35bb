//! Chart assembly: sign and house enrichment, house rulers, sign
//! distribution, and the aspect graph, composed into one [`ChartResult`].
//!
//! Nothing here is fatal to a chart except a provider failure in
//! [`compute_chart`]. Unhoused bodies, unknown categories and bad cusps are
//! logged at warn level and returned as [`ChartDiagnostic`]s.

use tracing::{debug, warn};

use crate::aspect_graph::build_aspects;
use crate::chart_types::{ChartAxes, ChartConfig, ChartResult, EnrichedBody, SignDistribution};
use crate::ephemeris::{EphemerisProvider, GeoLocation, HouseCusps};
use crate::error::{ChartDiagnostic, ChartError};
use crate::house::{build_houses, locate_house};
use crate::house_types::{House, HouseRuler};
use crate::point::ChartPoint;
use crate::ruler::RulerTable;

/// Attach sign, modality, element and house placement to each body.
///
/// Accepts raw points or already-enriched bodies; only the longitude is
/// read, so enriching twice gives the same result.
pub fn enrich_bodies<B: AsRef<ChartPoint>>(bodies: &[B], houses: &[House]) -> Vec<EnrichedBody> {
    bodies
        .iter()
        .map(|b| {
            let point = b.as_ref();
            let sign = point.sign();
            EnrichedBody {
                point: point.clone(),
                sign,
                modality: sign.map(|s| s.modality()),
                element: sign.map(|s| s.element()),
                placement: locate_house(point.longitude_deg, houses),
            }
        })
        .collect()
}

/// Copy of `houses` with each cusp sign's ruler attached.
///
/// A house keeps `ruler: None` when its cusp has no sign or the ruling body
/// is not among `bodies`.
pub fn attach_rulers(houses: &[House], bodies: &[EnrichedBody], rulers: &RulerTable) -> Vec<House> {
    houses
        .iter()
        .map(|house| {
            let ruler = house.sign.and_then(|sign| {
                let id = rulers.ruler_of(sign);
                bodies.iter().find(|b| b.id() == id).map(|b| HouseRuler {
                    id,
                    house: b.house(),
                    sign: b.sign,
                    modality: b.modality,
                    element: b.element,
                })
            });
            House {
                ruler,
                ..house.clone()
            }
        })
        .collect()
}

/// Count bodies per modality and element, skipping bodies with no sign.
pub fn sign_distribution(bodies: &[EnrichedBody]) -> SignDistribution {
    let mut dist = SignDistribution::default();
    for sign in bodies.iter().filter_map(|b| b.sign) {
        dist.add(sign);
    }
    dist
}

/// Assemble a chart from raw positions and optional cusps.
pub fn assemble_chart(
    bodies: &[ChartPoint],
    cusps: Option<&[f64; 12]>,
    config: &ChartConfig,
) -> ChartResult {
    let mut diagnostics = Vec::new();

    let houses = cusps.map(build_houses).unwrap_or_default();
    for h in houses.iter().filter(|h| h.sign.is_none()) {
        warn!(house = h.number, cusp = h.cusp_deg, "house cusp is not a finite longitude");
        diagnostics.push(ChartDiagnostic::InvalidCusp {
            house: h.number,
            cusp_deg: h.cusp_deg,
        });
    }

    let enriched = enrich_bodies(bodies, &houses);
    if !houses.is_empty() {
        for b in enriched.iter().filter(|b| b.placement.is_none()) {
            warn!(body = b.id(), lon = b.point.longitude_deg, "body matched no house");
            diagnostics.push(ChartDiagnostic::NoHouseMatch {
                body: b.id().to_string(),
                longitude_deg: b.point.longitude_deg,
            });
        }
    }

    let houses = attach_rulers(&houses, &enriched, &config.rulers);
    let distribution = sign_distribution(&enriched);
    let axes = ChartAxes::from_houses(&houses);
    let axis_points = axes.as_ref().map(ChartAxes::to_points);
    let axis_slice: &[ChartPoint] = axis_points
        .as_ref()
        .map(|p| p.as_slice())
        .unwrap_or_default();

    let mut aspects = build_aspects(&enriched, axis_slice, &config.orbs, config.orb_mode);
    diagnostics.extend(aspects.take_diagnostics());

    debug!(
        bodies = enriched.len(),
        houses = houses.len(),
        aspects = aspects.pair_count(),
        diagnostics = diagnostics.len(),
        "chart assembled"
    );

    ChartResult {
        bodies: enriched,
        houses,
        axes,
        aspects,
        distribution,
        diagnostics,
    }
}

/// Compute a chart for `jd_utc`, asking `provider` for positions and cusps.
///
/// Without a `location` the chart has no houses or axes and aspects are
/// computed among bodies only.
pub fn compute_chart<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_utc: f64,
    location: Option<&GeoLocation>,
    config: &ChartConfig,
) -> Result<ChartResult, ChartError> {
    config.validate()?;
    if let Some(loc) = location {
        loc.validate()?;
    }

    let bodies = provider.body_positions(jd_utc)?;
    let cusps = match provider.house_cusps(jd_utc, location, config.house_system)? {
        HouseCusps::Cusps(cusps) => Some(cusps),
        HouseCusps::NoGeoposition => {
            debug!(jd_utc, "no geoposition, computing aspects only");
            None
        }
    };

    Ok(assemble_chart(&bodies, cusps.as_ref(), config))
}

//! Configuration and result types for chart assembly.

use crate::aspect_graph::AspectGraph;
use crate::error::{ChartDiagnostic, ChartError};
use crate::house_types::{House, HousePlacement, HouseSystem};
use crate::orb::{OrbMode, OrbTable};
use crate::point::ChartPoint;
use crate::ruler::RulerTable;
use crate::sign::{Element, Modality, Sign};

/// Configuration for chart assembly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartConfig {
    pub orbs: OrbTable,
    pub orb_mode: OrbMode,
    pub rulers: RulerTable,
    /// Passed through to the ephemeris provider untouched.
    pub house_system: HouseSystem,
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        self.orbs.validate()
    }
}

/// A chart point with its derived sign and house data.
///
/// Produced by [`crate::chart::enrich_bodies`]; the source point is copied,
/// never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedBody {
    pub point: ChartPoint,
    pub sign: Option<Sign>,
    pub modality: Option<Modality>,
    pub element: Option<Element>,
    /// `None` when the chart has no houses or the body matched none.
    pub placement: Option<HousePlacement>,
}

impl EnrichedBody {
    pub fn id(&self) -> &str {
        &self.point.id
    }

    pub fn house(&self) -> Option<u8> {
        self.placement.as_ref().map(|p| p.house)
    }

    pub fn is_intercepted_sign(&self) -> bool {
        self.placement
            .as_ref()
            .is_some_and(|p| p.is_intercepted_sign)
    }
}

impl AsRef<ChartPoint> for EnrichedBody {
    fn as_ref(&self) -> &ChartPoint {
        &self.point
    }
}

/// The four chart angles.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartAxes {
    /// Ascendant, cusp of house 1.
    pub asc: ChartPoint,
    /// Descendant, cusp of house 7.
    pub dc: ChartPoint,
    /// Midheaven, cusp of house 10.
    pub mc: ChartPoint,
    /// Imum coeli, cusp of house 4.
    pub ic: ChartPoint,
}

impl ChartAxes {
    /// Derive the axes from a full set of 12 houses.
    pub fn from_houses(houses: &[House]) -> Option<Self> {
        if houses.len() != 12 {
            return None;
        }
        Some(Self {
            asc: ChartPoint::axis("asc", houses[0].cusp_deg),
            dc: ChartPoint::axis("dc", houses[6].cusp_deg),
            mc: ChartPoint::axis("mc", houses[9].cusp_deg),
            ic: ChartPoint::axis("ic", houses[3].cusp_deg),
        })
    }

    /// ASC, DC, MC, IC in that order.
    pub fn to_points(&self) -> [ChartPoint; 4] {
        [
            self.asc.clone(),
            self.dc.clone(),
            self.mc.clone(),
            self.ic.clone(),
        ]
    }
}

/// Count of bodies per modality and per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignDistribution {
    /// Indexed by [`Modality::index`].
    pub modality: [u32; 3],
    /// Indexed by [`Element::index`].
    pub element: [u32; 4],
}

impl SignDistribution {
    pub fn add(&mut self, sign: Sign) {
        self.modality[sign.modality().index() as usize] += 1;
        self.element[sign.element().index() as usize] += 1;
    }

    pub fn modality_count(&self, modality: Modality) -> u32 {
        self.modality[modality.index() as usize]
    }

    pub fn element_count(&self, element: Element) -> u32 {
        self.element[element.index() as usize]
    }

    pub fn modality_total(&self) -> u32 {
        self.modality.iter().sum()
    }

    pub fn element_total(&self) -> u32 {
        self.element.iter().sum()
    }
}

/// Full chart for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResult {
    /// Enriched bodies, in provider order.
    pub bodies: Vec<EnrichedBody>,
    /// 12 houses with rulers, or empty without geoposition.
    pub houses: Vec<House>,
    pub axes: Option<ChartAxes>,
    pub aspects: AspectGraph,
    pub distribution: SignDistribution,
    /// Non-fatal problems found while assembling.
    pub diagnostics: Vec<ChartDiagnostic>,
}

impl ChartResult {
    pub fn body(&self, id: &str) -> Option<&EnrichedBody> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    /// House by 1-based number.
    pub fn house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.number == number)
    }

    pub fn has_houses(&self) -> bool {
        !self.houses.is_empty()
    }
}

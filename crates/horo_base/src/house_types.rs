//! Types for house placement.

use crate::sign::{Element, Modality, Sign};

/// House-system code passed through to the ephemeris provider.
///
/// The core never interprets it; it only travels with the cusp request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HouseSystem(pub char);

impl HouseSystem {
    pub const PLACIDUS: Self = Self('P');
    pub const KOCH: Self = Self('K');
    pub const PORPHYRY: Self = Self('O');
    pub const REGIOMONTANUS: Self = Self('R');
    pub const CAMPANUS: Self = Self('C');
    pub const EQUAL: Self = Self('E');
    pub const WHOLE_SIGN: Self = Self('W');

    pub const fn code(self) -> char {
        self.0
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        Self::PLACIDUS
    }
}

/// The body ruling a house's cusp sign, as placed in this chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseRuler {
    /// Identifier of the ruling body.
    pub id: &'static str,
    /// House the ruler occupies, `None` if it is unhoused.
    pub house: Option<u8>,
    pub sign: Option<Sign>,
    pub modality: Option<Modality>,
    pub element: Option<Element>,
}

/// A single house.
#[derive(Debug, Clone, PartialEq)]
pub struct House {
    /// House number, 1-12.
    pub number: u8,
    /// Ecliptic longitude of the cusp in degrees, [0, 360).
    pub cusp_deg: f64,
    /// Sign on the cusp, `None` if the cusp is not finite.
    pub sign: Option<Sign>,
    /// Signs wholly contained in this house (no cusp falls in them).
    pub intercepted_signs: Vec<Sign>,
    /// Ruler of the cusp sign, attached during chart assembly.
    pub ruler: Option<HouseRuler>,
}

impl House {
    pub fn is_intercepted(&self) -> bool {
        !self.intercepted_signs.is_empty()
    }
}

/// Where a body falls among the houses.
#[derive(Debug, Clone, PartialEq)]
pub struct HousePlacement {
    /// House number, 1-12.
    pub house: u8,
    /// Sign on the house's opening cusp.
    pub start_sign: Sign,
    /// Sign on the following cusp.
    pub end_sign: Sign,
    /// Every sign from `start_sign` to `end_sign` inclusive, in zodiac order.
    pub sign_span: Vec<Sign>,
    /// The house spans more than one sign and the body's own sign is on
    /// neither of its cusps.
    pub is_intercepted_sign: bool,
}

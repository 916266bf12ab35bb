//! Nominal aspects and the per-category orb table.
//!
//! An orb is the tolerance around an aspect's exact angle. Orb width is a
//! property of the observing body's category, so the table is keyed by
//! category first and aspect second.
//!
//! Two readings of a configured orb exist in the wild: the value is the
//! half-width of the window (`[angle - orb, angle + orb]`), or the value is
//! the total width and gets halved first. [`OrbMode::Full`] is the former
//! and the default; [`OrbMode::Strict`] is the latter.

use crate::error::ChartError;
use crate::point::{ALL_CATEGORIES, BodyCategory};

/// The 7 nominal aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AspectKind {
    Conjunction,
    Semisextile,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

/// All 7 aspects in ascending angle order.
pub const ALL_ASPECTS: [AspectKind; 7] = [
    AspectKind::Conjunction,
    AspectKind::Semisextile,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Quincunx,
    AspectKind::Opposition,
];

impl AspectKind {
    /// Exact angle in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Semisextile => 30.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Semisextile => "semisextile",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }

    /// 0-based index into [`ALL_ASPECTS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Conjunction => 0,
            Self::Semisextile => 1,
            Self::Sextile => 2,
            Self::Square => 3,
            Self::Trine => 4,
            Self::Quincunx => 5,
            Self::Opposition => 6,
        }
    }

}

/// How a configured orb maps to the acceptance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrbMode {
    /// The orb is the half-width: `[angle - orb, angle + orb]`.
    #[default]
    Full,
    /// The orb is halved first: `[angle - orb/2, angle + orb/2]`.
    Strict,
}

impl OrbMode {
    /// Half-width of the window for a configured orb.
    pub fn half_width(self, orb_deg: f64) -> f64 {
        match self {
            Self::Full => orb_deg,
            Self::Strict => orb_deg / 2.0,
        }
    }
}

/// Tolerances for one category, indexed by [`AspectKind::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryOrbs {
    orbs: [Option<f64>; 7],
}

impl CategoryOrbs {
    /// Orbs for all 7 aspects, in [`ALL_ASPECTS`] order.
    pub const fn full(orbs: [f64; 7]) -> Self {
        Self {
            orbs: [
                Some(orbs[0]),
                Some(orbs[1]),
                Some(orbs[2]),
                Some(orbs[3]),
                Some(orbs[4]),
                Some(orbs[5]),
                Some(orbs[6]),
            ],
        }
    }

    /// Only the conjunction is defined (the shape axis entries take).
    pub const fn conjunction_only(orb: f64) -> Self {
        Self {
            orbs: [Some(orb), None, None, None, None, None, None],
        }
    }

    /// Tolerance for an aspect, if defined.
    pub const fn get(&self, aspect: AspectKind) -> Option<f64> {
        self.orbs[aspect.index() as usize]
    }

    /// Copy with one tolerance replaced.
    pub const fn with(mut self, aspect: AspectKind, orb: f64) -> Self {
        self.orbs[aspect.index() as usize] = Some(orb);
        self
    }
}

pub const DEFAULT_LUMINARY_ORBS: CategoryOrbs =
    CategoryOrbs::full([10.0, 3.0, 5.0, 6.0, 8.0, 5.0, 10.0]);
pub const DEFAULT_PERSONAL_ORBS: CategoryOrbs =
    CategoryOrbs::full([7.0, 2.0, 4.0, 5.0, 6.0, 2.0, 7.0]);
pub const DEFAULT_SOCIAL_ORBS: CategoryOrbs =
    CategoryOrbs::full([6.0, 1.5, 3.0, 4.0, 5.0, 3.0, 6.0]);
pub const DEFAULT_TRANSPERSONAL_ORBS: CategoryOrbs =
    CategoryOrbs::full([5.0, 1.0, 2.0, 3.0, 4.0, 2.0, 5.0]);
pub const DEFAULT_OTHER_ORBS: CategoryOrbs =
    CategoryOrbs::full([5.0, 1.0, 2.0, 3.0, 4.0, 2.0, 5.0]);
pub const DEFAULT_AXIS_ORBS: CategoryOrbs = CategoryOrbs::conjunction_only(5.0);

/// Category → aspect → tolerance in degrees.
///
/// A category may be absent; resolving an aspect for it then fails with
/// [`ChartError::UnknownCategory`]. Every present entry is validated on
/// insertion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbTable {
    entries: [Option<CategoryOrbs>; 6],
}

impl OrbTable {
    /// A table with no categories.
    pub const fn empty() -> Self {
        Self {
            entries: [None; 6],
        }
    }

    /// Build a table from explicit entries, validating each one.
    pub fn new(entries: &[(BodyCategory, CategoryOrbs)]) -> Result<Self, ChartError> {
        entries
            .iter()
            .try_fold(Self::empty(), |table, (category, orbs)| {
                table.with_category(*category, *orbs)
            })
    }

    /// Copy with one category entry set (or replaced).
    pub fn with_category(
        mut self,
        category: BodyCategory,
        orbs: CategoryOrbs,
    ) -> Result<Self, ChartError> {
        validate_entry(category, &orbs)?;
        self.entries[category.index() as usize] = Some(orbs);
        Ok(self)
    }

    /// Copy with one category entry removed.
    pub fn without_category(mut self, category: BodyCategory) -> Self {
        self.entries[category.index() as usize] = None;
        self
    }

    /// Orbs for a category, `None` if the category is not in the table.
    pub fn category(&self, category: BodyCategory) -> Option<&CategoryOrbs> {
        self.entries[category.index() as usize].as_ref()
    }

    /// Tolerance for a (category, aspect) pair.
    pub fn tolerance(&self, category: BodyCategory, aspect: AspectKind) -> Option<f64> {
        self.category(category).and_then(|o| o.get(aspect))
    }

    /// Re-check every present entry.
    pub fn validate(&self) -> Result<(), ChartError> {
        for category in ALL_CATEGORIES {
            if let Some(orbs) = self.category(category) {
                validate_entry(category, orbs)?;
            }
        }
        Ok(())
    }
}

impl Default for OrbTable {
    fn default() -> Self {
        Self {
            entries: [
                Some(DEFAULT_LUMINARY_ORBS),
                Some(DEFAULT_PERSONAL_ORBS),
                Some(DEFAULT_SOCIAL_ORBS),
                Some(DEFAULT_TRANSPERSONAL_ORBS),
                Some(DEFAULT_AXIS_ORBS),
                Some(DEFAULT_OTHER_ORBS),
            ],
        }
    }
}

/// Axis entries need the conjunction; every other category needs all 7.
fn validate_entry(category: BodyCategory, orbs: &CategoryOrbs) -> Result<(), ChartError> {
    for aspect in ALL_ASPECTS {
        match orbs.get(aspect) {
            Some(orb) if !orb.is_finite() || orb < 0.0 => {
                return Err(ChartError::InvalidOrb { category, aspect });
            }
            Some(_) => {}
            None if category.is_axis() && aspect != AspectKind::Conjunction => {}
            None => return Err(ChartError::IncompleteOrbs { category, aspect }),
        }
    }
    Ok(())
}

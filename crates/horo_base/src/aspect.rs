//! Aspect resolution between two chart points.
//!
//! Each point looks at the pair through its own category's orbs, so the two
//! sides may disagree: Mars may "see" a trine that Jupiter's tighter orb
//! rejects. The resolver keeps both views and reports the chosen aspect as
//! bidirectional only when both sides admit it.
//!
//! Axis points (ASC, DC, MC, IC) only form conjunctions, measured with the
//! axis orb.

use crate::angle::angular_distance;
use crate::error::ChartError;
use crate::orb::{ALL_ASPECTS, AspectKind, CategoryOrbs, OrbMode, OrbTable};
use crate::point::ChartPoint;

/// Whether both sides of a pair admit the chosen aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectDirection {
    Bidirectional,
    Unidirectional,
}

impl AspectDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bidirectional => "bidirectional",
            Self::Unidirectional => "unidirectional",
        }
    }
}

/// A resolved aspect between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aspect {
    pub kind: AspectKind,
    pub direction: AspectDirection,
    /// The first point's own orbs admit `kind`.
    pub first_exists: bool,
    /// The second point's own orbs admit `kind`.
    pub second_exists: bool,
    /// Shortest-arc separation of the pair, [0, 180].
    pub separation_deg: f64,
    /// Deviation from exact: `|separation - kind.angle_deg()|`.
    pub orb_deg: f64,
}

/// Set of aspects whose window contains a separation, as a bitmask over
/// [`AspectKind::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct CandidateSet(u8);

impl CandidateSet {
    /// Aspects admitted by `orbs` at `separation`.
    pub(crate) fn within(separation: f64, orbs: &CategoryOrbs, mode: OrbMode) -> Self {
        let mut set = Self::default();
        for kind in ALL_ASPECTS {
            if admits(separation, kind, orbs, mode) {
                set.0 |= 1 << kind.index();
            }
        }
        set
    }

    /// The conjunction alone, if `orbs` admit it at `separation`.
    pub(crate) fn conjunction_within(separation: f64, orbs: &CategoryOrbs, mode: OrbMode) -> Self {
        if admits(separation, AspectKind::Conjunction, orbs, mode) {
            Self(1 << AspectKind::Conjunction.index())
        } else {
            Self::default()
        }
    }

    pub(crate) fn contains(self, kind: AspectKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    pub(crate) fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Members in ascending angle order.
    pub(crate) fn iter(self) -> impl Iterator<Item = AspectKind> {
        ALL_ASPECTS.into_iter().filter(move |k| self.contains(*k))
    }
}

/// Inclusive window test: `angle - w <= separation <= angle + w`.
fn admits(separation: f64, kind: AspectKind, orbs: &CategoryOrbs, mode: OrbMode) -> bool {
    match orbs.get(kind) {
        Some(orb) => {
            let w = mode.half_width(orb);
            let angle = kind.angle_deg();
            separation >= angle - w && separation <= angle + w
        }
        None => false,
    }
}

/// Resolve the aspect formed by `first` and `second`, if any.
///
/// Returns `Ok(None)` when neither side's orbs admit any aspect, and
/// `Err(ChartError::UnknownCategory)` when either category has no entry in
/// `orbs`.
///
/// When several aspects qualify, the one whose exact angle is closest to
/// the separation wins; on an exact tie the first candidate found wins,
/// scanning the first point's candidates before the second's.
pub fn resolve_aspect(
    first: &ChartPoint,
    second: &ChartPoint,
    orbs: &OrbTable,
    mode: OrbMode,
) -> Result<Option<Aspect>, ChartError> {
    let first_orbs = orbs
        .category(first.category)
        .ok_or(ChartError::UnknownCategory(first.category))?;
    let second_orbs = orbs
        .category(second.category)
        .ok_or(ChartError::UnknownCategory(second.category))?;

    let separation = angular_distance(first.longitude_deg, second.longitude_deg);

    let (first_set, second_set) = if first.category.is_axis() || second.category.is_axis() {
        let axis_orbs = if first.category.is_axis() {
            first_orbs
        } else {
            second_orbs
        };
        let set = CandidateSet::conjunction_within(separation, axis_orbs, mode);
        (set, set)
    } else {
        (
            CandidateSet::within(separation, first_orbs, mode),
            CandidateSet::within(separation, second_orbs, mode),
        )
    };

    let union = first_set
        .iter()
        .chain(second_set.difference(first_set).iter());
    let mut chosen: Option<AspectKind> = None;
    for kind in union {
        let closer = match chosen {
            Some(best) => {
                (kind.angle_deg() - separation).abs() < (best.angle_deg() - separation).abs()
            }
            None => true,
        };
        if closer {
            chosen = Some(kind);
        }
    }

    let Some(kind) = chosen else {
        return Ok(None);
    };

    let first_exists = first_set.contains(kind);
    let second_exists = second_set.contains(kind);
    let direction = if first_exists && second_exists {
        AspectDirection::Bidirectional
    } else {
        AspectDirection::Unidirectional
    };

    Ok(Some(Aspect {
        kind,
        direction,
        first_exists,
        second_exists,
        separation_deg: separation,
        orb_deg: (separation - kind.angle_deg()).abs(),
    }))
}

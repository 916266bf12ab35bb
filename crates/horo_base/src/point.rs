//! Chart points: bodies and axes with a category and an ecliptic longitude.

use crate::angle::normalize_360;
use crate::sign::Sign;

/// Category of a chart point. Orb widths are looked up per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyCategory {
    /// Sun and Moon.
    Luminary,
    /// Mercury, Venus, Mars.
    Personal,
    /// Jupiter, Saturn.
    Social,
    /// Uranus, Neptune, Pluto.
    Transpersonal,
    /// ASC, DC, MC, IC.
    Axis,
    /// Nodes, asteroids and other computed points.
    Other,
}

/// All 6 categories in enum order.
pub const ALL_CATEGORIES: [BodyCategory; 6] = [
    BodyCategory::Luminary,
    BodyCategory::Personal,
    BodyCategory::Social,
    BodyCategory::Transpersonal,
    BodyCategory::Axis,
    BodyCategory::Other,
];

impl BodyCategory {
    /// Lowercase name, as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Luminary => "luminary",
            Self::Personal => "personal",
            Self::Social => "social",
            Self::Transpersonal => "transpersonal",
            Self::Axis => "axis",
            Self::Other => "other",
        }
    }

    /// Parse a category name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// 0-based index into [`ALL_CATEGORIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Luminary => 0,
            Self::Personal => 1,
            Self::Social => 2,
            Self::Transpersonal => 3,
            Self::Axis => 4,
            Self::Other => 5,
        }
    }

    pub const fn is_axis(self) -> bool {
        matches!(self, Self::Axis)
    }
}

/// A body or axis at a given ecliptic longitude.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Lowercase identifier, e.g. `"mars"` or `"asc"`.
    pub id: String,
    pub category: BodyCategory,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
}

impl ChartPoint {
    /// Create a point, normalizing the longitude into [0, 360).
    pub fn new(id: impl Into<String>, category: BodyCategory, longitude_deg: f64) -> Self {
        Self {
            id: id.into(),
            category,
            longitude_deg: normalize_360(longitude_deg),
        }
    }

    /// Create an axis point.
    pub fn axis(id: impl Into<String>, longitude_deg: f64) -> Self {
        Self::new(id, BodyCategory::Axis, longitude_deg)
    }

    /// Zodiac sign of this point, `None` for a non-finite longitude.
    pub fn sign(&self) -> Option<Sign> {
        Sign::from_longitude(self.longitude_deg)
    }
}

impl AsRef<ChartPoint> for ChartPoint {
    fn as_ref(&self) -> &ChartPoint {
        self
    }
}

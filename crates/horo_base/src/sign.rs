//! Zodiac sign, modality and element classification.
//!
//! The ecliptic is divided into 12 signs of 30 degrees each, starting at
//! Aries = 0 deg. Sign indices are 0-based throughout the crate
//! (`floor(lon / 30) mod 12`); use [`Sign::one_based`] when talking to
//! something that numbers signs 1..=12.
//!
//! Modality and element are cyclic over the sign index: modality repeats
//! every 3 signs (cardinal, fixed, mutable), element every 4 (fire, earth,
//! air, water).

use crate::angle::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// 1-based sign number (Aries=1 .. Pisces=12).
    pub const fn one_based(self) -> u8 {
        self.index() + 1
    }

    /// Sign from a 0-based index; `None` for index > 11.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_SIGNS[index as usize])
        } else {
            None
        }
    }

    /// Sign containing an ecliptic longitude.
    ///
    /// The longitude is normalized first. Returns `None` for NaN or infinity.
    pub fn from_longitude(longitude_deg: f64) -> Option<Self> {
        if !longitude_deg.is_finite() {
            return None;
        }
        let idx = (normalize_360(longitude_deg) / 30.0).floor() as u8 % 12;
        Self::from_index(idx)
    }

    /// The following sign, wrapping Pisces to Aries.
    pub const fn next(self) -> Self {
        ALL_SIGNS[((self.index() + 1) % 12) as usize]
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

/// Degrees elapsed within the containing sign, [0, 30).
pub fn degrees_in_sign(longitude_deg: f64) -> f64 {
    normalize_360(longitude_deg) % 30.0
}

/// Sign quality: cardinal, fixed or mutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

pub const ALL_MODALITIES: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

impl Modality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Fixed => "fixed",
            Self::Mutable => "mutable",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Cardinal => 0,
            Self::Fixed => 1,
            Self::Mutable => 2,
        }
    }
}

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

pub const ALL_ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Air => "air",
            Self::Water => "water",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Earth => 1,
            Self::Air => 2,
            Self::Water => 3,
        }
    }
}

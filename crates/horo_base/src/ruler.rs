//! Sign rulership.
//!
//! Each sign is governed by one body. The default table uses modern
//! rulerships, where the three outer planets take Scorpio, Aquarius and
//! Pisces; [`RulerTable::traditional`] keeps Mars, Saturn and Jupiter there.

use crate::sign::{ALL_SIGNS, Sign};

/// Sign → ruling body identifier, indexed by [`Sign::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulerTable {
    rulers: [&'static str; 12],
}

impl RulerTable {
    /// Build a table from 12 body identifiers, Aries first.
    pub const fn new(rulers: [&'static str; 12]) -> Self {
        Self { rulers }
    }

    /// Modern rulerships.
    pub const fn modern() -> Self {
        Self::new([
            "mars", "venus", "mercury", "moon", "sun", "mercury", "venus", "pluto", "jupiter",
            "saturn", "uranus", "neptune",
        ])
    }

    /// Classical seven-planet rulerships.
    pub const fn traditional() -> Self {
        Self::new([
            "mars", "venus", "mercury", "moon", "sun", "mercury", "venus", "mars", "jupiter",
            "saturn", "saturn", "jupiter",
        ])
    }

    /// Identifier of the body ruling `sign`.
    pub const fn ruler_of(&self, sign: Sign) -> &'static str {
        self.rulers[sign.index() as usize]
    }

    /// Signs ruled by the given body, in zodiac order.
    pub fn signs_ruled_by<'a>(&'a self, id: &'a str) -> impl Iterator<Item = Sign> + 'a {
        ALL_SIGNS
            .into_iter()
            .filter(move |s| self.ruler_of(*s) == id)
    }
}

impl Default for RulerTable {
    fn default() -> Self {
        Self::modern()
    }
}

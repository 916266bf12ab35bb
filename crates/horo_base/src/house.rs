//! House construction from cusps and body-to-house location.
//!
//! Houses are the 12 intervals between consecutive cusps, the 12th closing
//! on the 1st. A house may straddle 0 deg, in which case its closing cusp is
//! numerically smaller than its opening one; both the interval and the body
//! longitude are unwrapped by +360 before comparing.

use crate::angle::normalize_360;
use crate::house_types::{House, HousePlacement};
use crate::sign::Sign;

/// Build the 12 houses from raw cusp longitudes (house 1 first).
///
/// Cusps are normalized into [0, 360). A non-finite cusp yields a house
/// with no sign; no body can be placed in the intervals it bounds.
pub fn build_houses(cusps: &[f64; 12]) -> Vec<House> {
    (0..12)
        .map(|i| {
            let cusp_deg = normalize_360(cusps[i]);
            let sign = Sign::from_longitude(cusp_deg);
            let intercepted_signs = match (sign, Sign::from_longitude(cusps[(i + 1) % 12])) {
                (Some(start), Some(end)) => intercepted_signs_between(start, end),
                _ => Vec::new(),
            };
            House {
                number: i as u8 + 1,
                cusp_deg,
                sign,
                intercepted_signs,
                ruler: None,
            }
        })
        .collect()
}

/// Find the house containing `longitude_deg`.
///
/// Returns `None` if no interval matches (malformed cusps) or the longitude
/// is not finite; callers treat the body as unhoused.
///
/// The body is only unwrapped past 0 deg for a house opening after 270 deg.
/// A house crossing 0 deg that opens at or below 270 deg (very wide houses
/// at high latitudes) never matches bodies in its post-seam part.
pub fn locate_house(longitude_deg: f64, houses: &[House]) -> Option<HousePlacement> {
    let lon = normalize_360(longitude_deg);
    let body_sign = Sign::from_longitude(lon)?;
    let n = houses.len();

    for (i, house) in houses.iter().enumerate() {
        let current = house.cusp_deg;
        let mut next = houses[(i + 1) % n].cusp_deg;
        if next < current {
            next += 360.0;
        }

        // A body just past 0 deg belongs to a house opening late in Pisces.
        let mut adjusted = lon;
        if adjusted < current && current > 270.0 {
            adjusted += 360.0;
        }

        if adjusted >= current && adjusted < next {
            let start_sign = Sign::from_longitude(current)?;
            let end_sign = Sign::from_longitude(next)?;
            return Some(HousePlacement {
                house: house.number,
                start_sign,
                end_sign,
                sign_span: sign_span(start_sign, end_sign),
                is_intercepted_sign: is_intercepted_sign(body_sign, start_sign, end_sign),
            });
        }
    }
    None
}

/// Signs from `start` to `end` inclusive, walking forward through the zodiac.
pub fn sign_span(start: Sign, end: Sign) -> Vec<Sign> {
    let mut span = vec![start];
    let mut s = start;
    while s != end {
        s = s.next();
        span.push(s);
    }
    span
}

/// Signs strictly between `start` and `end`, walking forward.
pub fn intercepted_signs_between(start: Sign, end: Sign) -> Vec<Sign> {
    let span = sign_span(start, end);
    if span.len() < 3 {
        return Vec::new();
    }
    span[1..span.len() - 1].to_vec()
}

/// A body's sign is intercepted when its house spans more than one sign
/// and neither cusp sign is the body's.
pub fn is_intercepted_sign(body_sign: Sign, start: Sign, end: Sign) -> bool {
    start != end && body_sign != start && body_sign != end
}

//! Aspect and house-placement engine for natal charts.
//!
//! This crate provides:
//! - Shortest-arc angular distance on the ecliptic
//! - Per-category orb tables and aspect resolution with directionality
//! - An aspect adjacency graph over bodies and chart axes
//! - Sign, modality, element and rulership classification
//! - Body-to-house location with sign interception
//! - Chart assembly on top of an external [`EphemerisProvider`]
//!
//! Raw longitudes are never computed here; they come from the provider.
//! Everything is pure and synchronous, so charts can be computed on any
//! number of threads at once.

pub mod angle;
pub mod aspect;
pub mod aspect_graph;
pub mod chart;
pub mod chart_types;
pub mod ephemeris;
pub mod error;
pub mod house;
pub mod house_types;
pub mod orb;
pub mod point;
pub mod ruler;
pub mod sign;

pub use angle::{angular_distance, normalize_360};
pub use aspect::{Aspect, AspectDirection, resolve_aspect};
pub use aspect_graph::{AspectGraph, AspectRecord, AspectView, build_aspects};
pub use chart::{assemble_chart, attach_rulers, compute_chart, enrich_bodies, sign_distribution};
pub use chart_types::{ChartAxes, ChartConfig, ChartResult, EnrichedBody, SignDistribution};
pub use ephemeris::{EphemerisProvider, GeoLocation, HouseCusps, StaticEphemeris};
pub use error::{ChartDiagnostic, ChartError};
pub use house::{build_houses, intercepted_signs_between, is_intercepted_sign, locate_house, sign_span};
pub use house_types::{House, HousePlacement, HouseRuler, HouseSystem};
pub use orb::{ALL_ASPECTS, AspectKind, CategoryOrbs, OrbMode, OrbTable};
pub use point::{ALL_CATEGORIES, BodyCategory, ChartPoint};
pub use ruler::RulerTable;
pub use sign::{ALL_ELEMENTS, ALL_MODALITIES, ALL_SIGNS, Element, Modality, Sign, degrees_in_sign};

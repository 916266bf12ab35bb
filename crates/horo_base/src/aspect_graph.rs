//! Aspect adjacency over a set of chart points.
//!
//! Storage is a one-directional index: an aspect between `a` and `b` is
//! recorded once, under whichever point came first in the input, tagged
//! with the other's identifier. Use [`AspectGraph::bidirectional`] for a
//! view that lists every aspect under both participants.

use std::collections::BTreeMap;

use tracing::warn;

use crate::aspect::{Aspect, AspectDirection, resolve_aspect};
use crate::error::{ChartDiagnostic, ChartError};
use crate::orb::{AspectKind, OrbMode, OrbTable};
use crate::point::ChartPoint;

/// One stored aspect: the owning point is the map key, `with` the other side.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectRecord {
    pub aspect: Aspect,
    /// Identifier of the second point of the pair.
    pub with: String,
}

/// An aspect as seen from one participant, produced by
/// [`AspectGraph::bidirectional`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectView<'a> {
    pub with: &'a str,
    pub kind: AspectKind,
    pub direction: AspectDirection,
    /// The viewing point's own orbs admit the aspect.
    pub own_exists: bool,
    /// The other point's orbs admit the aspect.
    pub other_exists: bool,
    pub orb_deg: f64,
}

/// Point identifier → aspects stored under it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AspectGraph {
    entries: BTreeMap<String, Vec<AspectRecord>>,
    diagnostics: Vec<ChartDiagnostic>,
}

impl AspectGraph {
    /// Aspects stored under `id`.
    pub fn get(&self, id: &str) -> Option<&[AspectRecord]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AspectRecord])> {
        self.entries
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
    }

    /// Number of points with at least one stored aspect.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored aspects.
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Pairs skipped while building.
    pub fn diagnostics(&self) -> &[ChartDiagnostic] {
        &self.diagnostics
    }

    pub(crate) fn take_diagnostics(&mut self) -> Vec<ChartDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Every aspect listed under both of its participants.
    ///
    /// The stored side keeps its flags; the mirrored side gets them swapped.
    pub fn bidirectional(&self) -> BTreeMap<&str, Vec<AspectView<'_>>> {
        let mut view: BTreeMap<&str, Vec<AspectView<'_>>> = BTreeMap::new();
        for (owner, records) in &self.entries {
            for r in records {
                view.entry(owner.as_str()).or_default().push(AspectView {
                    with: &r.with,
                    kind: r.aspect.kind,
                    direction: r.aspect.direction,
                    own_exists: r.aspect.first_exists,
                    other_exists: r.aspect.second_exists,
                    orb_deg: r.aspect.orb_deg,
                });
                view.entry(r.with.as_str()).or_default().push(AspectView {
                    with: owner,
                    kind: r.aspect.kind,
                    direction: r.aspect.direction,
                    own_exists: r.aspect.second_exists,
                    other_exists: r.aspect.first_exists,
                    orb_deg: r.aspect.orb_deg,
                });
            }
        }
        view
    }

    fn record(&mut self, owner: &str, with: &str, aspect: Aspect) {
        self.entries
            .entry(owner.to_string())
            .or_default()
            .push(AspectRecord {
                aspect,
                with: with.to_string(),
            });
    }

    fn resolve_into(
        &mut self,
        first: &ChartPoint,
        second: &ChartPoint,
        orbs: &OrbTable,
        mode: OrbMode,
    ) {
        match resolve_aspect(first, second, orbs, mode) {
            Ok(Some(aspect)) => self.record(&first.id, &second.id, aspect),
            Ok(None) => {}
            Err(ChartError::UnknownCategory(category)) => {
                warn!(
                    first = %first.id,
                    second = %second.id,
                    category = category.name(),
                    "category missing from orb table, pair skipped"
                );
                self.diagnostics.push(ChartDiagnostic::UnknownCategory {
                    first: first.id.clone(),
                    second: second.id.clone(),
                    category,
                });
            }
            Err(e) => warn!(first = %first.id, second = %second.id, "aspect skipped: {e}"),
        }
    }
}

/// Resolve aspects between every pair of `bodies`, then between every body
/// and every point in `axes`.
///
/// Each unordered body pair is visited once, earlier body first. Axes are
/// never paired with each other. Points with no aspects are absent from the
/// result.
pub fn build_aspects<B: AsRef<ChartPoint>>(
    bodies: &[B],
    axes: &[ChartPoint],
    orbs: &OrbTable,
    mode: OrbMode,
) -> AspectGraph {
    let mut graph = AspectGraph::default();

    for (i, first) in bodies.iter().enumerate() {
        for second in &bodies[i + 1..] {
            graph.resolve_into(first.as_ref(), second.as_ref(), orbs, mode);
        }
    }

    for body in bodies {
        for axis in axes {
            graph.resolve_into(body.as_ref(), axis, orbs, mode);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::BodyCategory;

    fn pt(id: &str, category: BodyCategory, lon: f64) -> ChartPoint {
        ChartPoint::new(id, category, lon)
    }

    fn sample() -> Vec<ChartPoint> {
        vec![
            pt("sun", BodyCategory::Luminary, 10.0),
            pt("moon", BodyCategory::Luminary, 130.0),
            pt("mars", BodyCategory::Personal, 12.0),
            pt("pluto", BodyCategory::Transpersonal, 275.0),
        ]
    }

    #[test]
    fn records_under_first_body_only() {
        let graph = build_aspects(&sample(), &[], &OrbTable::default(), OrbMode::Full);
        let sun = graph.get("sun").unwrap();
        assert!(
            sun.iter()
                .any(|r| r.with == "mars" && r.aspect.kind == AspectKind::Conjunction)
        );
        assert!(
            sun.iter()
                .any(|r| r.with == "moon" && r.aspect.kind == AspectKind::Trine)
        );
        // Mars never stores the sun conjunction.
        if let Some(mars) = graph.get("mars") {
            assert!(mars.iter().all(|r| r.with != "sun"));
        }
    }

    #[test]
    fn empty_entries_pruned() {
        let bodies = vec![
            pt("sun", BodyCategory::Luminary, 0.0),
            pt("uranus", BodyCategory::Transpersonal, 45.0),
        ];
        let graph = build_aspects(&bodies, &[], &OrbTable::default(), OrbMode::Full);
        assert!(graph.is_empty());
        assert_eq!(graph.pair_count(), 0);
    }

    #[test]
    fn each_pair_counted_once() {
        let graph = build_aspects(&sample(), &[], &OrbTable::default(), OrbMode::Full);
        let mut seen = Vec::new();
        for (owner, records) in graph.iter() {
            for r in records {
                let mut key = [owner.to_string(), r.with.clone()];
                key.sort();
                assert!(!seen.contains(&key), "pair {key:?} stored twice");
                seen.push(key);
            }
        }
        assert_eq!(seen.len(), graph.pair_count());
    }

    #[test]
    fn axes_only_conjoin() {
        let axes = vec![
            ChartPoint::axis("asc", 13.0),
            ChartPoint::axis("dc", 193.0),
            ChartPoint::axis("mc", 100.0),
            ChartPoint::axis("ic", 280.0),
        ];
        let graph = build_aspects(&sample(), &axes, &OrbTable::default(), OrbMode::Full);
        for (_, records) in graph.iter() {
            for r in records.iter().filter(|r| axes.iter().any(|a| a.id == r.with)) {
                assert_eq!(r.aspect.kind, AspectKind::Conjunction);
            }
        }
        let pluto = graph.get("pluto").unwrap();
        assert!(pluto.iter().any(|r| r.with == "ic"));
        let sun = graph.get("sun").unwrap();
        assert!(sun.iter().any(|r| r.with == "asc"));
        assert!(sun.iter().all(|r| r.with != "dc"));
        assert!(graph.get("asc").is_none());
    }

    #[test]
    fn order_does_not_change_content() {
        let forward = sample();
        let mut reversed = sample();
        reversed.reverse();
        let a = build_aspects(&forward, &[], &OrbTable::default(), OrbMode::Full);
        let b = build_aspects(&reversed, &[], &OrbTable::default(), OrbMode::Full);
        let mut ka: Vec<_> = a
            .bidirectional()
            .into_iter()
            .flat_map(|(id, v)| v.into_iter().map(move |x| (id, x.with, x.kind)))
            .collect();
        let mut kb: Vec<_> = b
            .bidirectional()
            .into_iter()
            .flat_map(|(id, v)| v.into_iter().map(move |x| (id, x.with, x.kind)))
            .collect();
        ka.sort();
        kb.sort();
        assert_eq!(ka, kb);
    }

    #[test]
    fn bidirectional_mirrors_flags() {
        let bodies = vec![
            pt("sun", BodyCategory::Luminary, 0.0),
            pt("saturn", BodyCategory::Social, 127.0),
        ];
        let graph = build_aspects(&bodies, &[], &OrbTable::default(), OrbMode::Full);
        assert_eq!(graph.pair_count(), 1);
        let view = graph.bidirectional();
        let from_sun = view["sun"][0];
        let from_saturn = view["saturn"][0];
        assert_eq!(from_sun.with, "saturn");
        assert_eq!(from_saturn.with, "sun");
        assert!(from_sun.own_exists && !from_sun.other_exists);
        assert!(!from_saturn.own_exists && from_saturn.other_exists);
        assert_eq!(from_sun.direction, AspectDirection::Unidirectional);
    }

    #[test]
    fn unknown_category_reported_not_dropped() {
        let orbs = OrbTable::default().without_category(BodyCategory::Other);
        let bodies = vec![
            pt("sun", BodyCategory::Luminary, 0.0),
            pt("chiron", BodyCategory::Other, 0.0),
            pt("moon", BodyCategory::Luminary, 2.0),
        ];
        let graph = build_aspects(&bodies, &[], &orbs, OrbMode::Full);
        assert_eq!(graph.diagnostics().len(), 2);
        assert!(graph.diagnostics().iter().all(|d| matches!(
            d,
            ChartDiagnostic::UnknownCategory {
                category: BodyCategory::Other,
                ..
            }
        )));
        // The well-formed pair still resolves.
        assert_eq!(graph.get("sun").unwrap()[0].with, "moon");
    }
}

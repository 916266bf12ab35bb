//! End-to-end chart tests through `compute_chart` with a static provider.

use std::sync::Arc;

use horo_base::{
    AspectDirection, AspectKind, BodyCategory, ChartConfig, ChartDiagnostic, ChartError,
    ChartPoint, Element, EphemerisProvider, GeoLocation, HouseCusps, HouseSystem, Modality,
    OrbMode, OrbTable, RulerTable, Sign, StaticEphemeris, compute_chart,
};

const JD: f64 = 2_447_892.5;

const CUSPS: [f64; 12] = [
    95.0, 118.0, 140.0, 163.0, 195.0, 235.0, 275.0, 298.0, 320.0, 343.0, 15.0, 55.0,
];

fn bodies() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("sun", BodyCategory::Luminary, 295.3),
        ChartPoint::new("moon", BodyCategory::Luminary, 118.7),
        ChartPoint::new("mercury", BodyCategory::Personal, 280.1),
        ChartPoint::new("venus", BodyCategory::Personal, 320.4),
        ChartPoint::new("mars", BodyCategory::Personal, 30.2),
        ChartPoint::new("jupiter", BodyCategory::Social, 175.8),
        ChartPoint::new("saturn", BodyCategory::Social, 271.5),
        ChartPoint::new("uranus", BodyCategory::Transpersonal, 262.5),
        ChartPoint::new("neptune", BodyCategory::Transpersonal, 281.0),
        ChartPoint::new("pluto", BodyCategory::Transpersonal, 226.4),
    ]
}

fn provider() -> StaticEphemeris {
    StaticEphemeris::new(bodies()).with_cusps(CUSPS)
}

fn london() -> GeoLocation {
    GeoLocation::new(51.5, -0.13)
}

fn has_aspect(
    chart: &horo_base::ChartResult,
    owner: &str,
    with: &str,
    kind: AspectKind,
) -> Option<AspectDirection> {
    chart
        .aspects
        .get(owner)?
        .iter()
        .find(|r| r.with == with && r.aspect.kind == kind)
        .map(|r| r.aspect.direction)
}

struct FailingProvider;

impl EphemerisProvider for FailingProvider {
    fn body_positions(&self, _jd_utc: f64) -> Result<Vec<ChartPoint>, ChartError> {
        Err(ChartError::Ephemeris("kernel not loaded".to_string()))
    }

    fn house_cusps(
        &self,
        _jd_utc: f64,
        _location: Option<&GeoLocation>,
        _system: HouseSystem,
    ) -> Result<HouseCusps, ChartError> {
        Ok(HouseCusps::NoGeoposition)
    }
}

#[test]
fn full_chart_houses_and_signs() {
    let chart = compute_chart(&provider(), JD, Some(&london()), &ChartConfig::default()).unwrap();
    assert_eq!(chart.houses.len(), 12);
    assert!(chart.diagnostics.is_empty());

    let expect = [
        ("sun", 7, Sign::Capricorn),
        ("moon", 2, Sign::Cancer),
        ("mercury", 7, Sign::Capricorn),
        ("venus", 9, Sign::Aquarius),
        ("mars", 11, Sign::Taurus),
        ("jupiter", 4, Sign::Virgo),
        ("saturn", 6, Sign::Capricorn),
        ("uranus", 6, Sign::Sagittarius),
        ("neptune", 7, Sign::Capricorn),
        ("pluto", 5, Sign::Scorpio),
    ];
    for (id, house, sign) in expect {
        let b = chart.body(id).unwrap();
        assert_eq!(b.house(), Some(house), "{id}");
        assert_eq!(b.sign, Some(sign), "{id}");
    }

    assert!(chart.body("uranus").unwrap().is_intercepted_sign());
    assert!(!chart.body("saturn").unwrap().is_intercepted_sign());
}

#[test]
fn full_chart_axes() {
    let chart = compute_chart(&provider(), JD, Some(&london()), &ChartConfig::default()).unwrap();
    let axes = chart.axes.as_ref().unwrap();
    assert!((axes.asc.longitude_deg - 95.0).abs() < 1e-10);
    assert!((axes.dc.longitude_deg - 275.0).abs() < 1e-10);
    assert!((axes.mc.longitude_deg - 343.0).abs() < 1e-10);
    assert!((axes.ic.longitude_deg - 163.0).abs() < 1e-10);
    assert_eq!(axes.asc.category, BodyCategory::Axis);
}

#[test]
fn full_chart_aspects() {
    let chart = compute_chart(&provider(), JD, Some(&london()), &ChartConfig::default()).unwrap();
    assert_eq!(
        has_aspect(&chart, "sun", "moon", AspectKind::Opposition),
        Some(AspectDirection::Bidirectional)
    );
    assert_eq!(
        has_aspect(&chart, "moon", "jupiter", AspectKind::Sextile),
        Some(AspectDirection::Bidirectional)
    );
    assert_eq!(
        has_aspect(&chart, "mercury", "neptune", AspectKind::Conjunction),
        Some(AspectDirection::Bidirectional)
    );
    // Luminary semisextile orb 3 admits 32.8 deg; transpersonal orb 1 does not.
    assert_eq!(
        has_aspect(&chart, "sun", "uranus", AspectKind::Semisextile),
        Some(AspectDirection::Unidirectional)
    );
    // Axes only ever conjoin, and always both ways.
    assert_eq!(
        has_aspect(&chart, "saturn", "dc", AspectKind::Conjunction),
        Some(AspectDirection::Bidirectional)
    );
    for (_, records) in chart.aspects.iter() {
        for r in records {
            if ["asc", "dc", "mc", "ic"].contains(&r.with.as_str()) {
                assert_eq!(r.aspect.kind, AspectKind::Conjunction);
            }
        }
    }
    // Axes never own records.
    for axis in ["asc", "dc", "mc", "ic"] {
        assert!(chart.aspects.get(axis).is_none());
    }
}

#[test]
fn full_chart_rulers() {
    let chart = compute_chart(&provider(), JD, Some(&london()), &ChartConfig::default()).unwrap();

    let asc_ruler = chart.house(1).unwrap().ruler.unwrap();
    assert_eq!(asc_ruler.id, "moon");
    assert_eq!(asc_ruler.house, Some(2));
    assert_eq!(asc_ruler.sign, Some(Sign::Cancer));
    assert_eq!(asc_ruler.modality, Some(Modality::Cardinal));
    assert_eq!(asc_ruler.element, Some(Element::Water));

    let dc_ruler = chart.house(7).unwrap().ruler.unwrap();
    assert_eq!(dc_ruler.id, "saturn");
    assert_eq!(dc_ruler.house, Some(6));

    let mc_ruler = chart.house(10).unwrap().ruler.unwrap();
    assert_eq!(mc_ruler.id, "neptune");
    assert_eq!(mc_ruler.house, Some(7));
}

#[test]
fn traditional_rulers_change_pisces() {
    let config = ChartConfig {
        rulers: RulerTable::traditional(),
        ..ChartConfig::default()
    };
    let chart = compute_chart(&provider(), JD, Some(&london()), &config).unwrap();
    let mc_ruler = chart.house(10).unwrap().ruler.unwrap();
    assert_eq!(mc_ruler.id, "jupiter");
    assert_eq!(mc_ruler.house, Some(4));
}

#[test]
fn missing_ruler_left_empty() {
    let without_moon: Vec<_> = bodies().into_iter().filter(|b| b.id != "moon").collect();
    let eph = StaticEphemeris::new(without_moon).with_cusps(CUSPS);
    let chart = compute_chart(&eph, JD, Some(&london()), &ChartConfig::default()).unwrap();
    assert!(chart.house(1).unwrap().ruler.is_none());
    assert!(chart.house(7).unwrap().ruler.is_some());
}

#[test]
fn distribution_totals() {
    let chart = compute_chart(&provider(), JD, Some(&london()), &ChartConfig::default()).unwrap();
    let d = chart.distribution;
    assert_eq!(d.modality_count(Modality::Cardinal), 5);
    assert_eq!(d.modality_count(Modality::Fixed), 3);
    assert_eq!(d.modality_count(Modality::Mutable), 2);
    assert_eq!(d.element_count(Element::Earth), 6);
    assert_eq!(d.element_count(Element::Water), 2);
    assert_eq!(d.element_count(Element::Air), 1);
    assert_eq!(d.element_count(Element::Fire), 1);
    assert_eq!(d.modality_total() as usize, chart.bodies.len());
    assert_eq!(d.element_total() as usize, chart.bodies.len());
}

#[test]
fn no_location_aspects_only() {
    let chart = compute_chart(&provider(), JD, None, &ChartConfig::default()).unwrap();
    assert!(!chart.has_houses());
    assert!(chart.axes.is_none());
    assert!(chart.bodies.iter().all(|b| b.house().is_none()));
    assert!(chart.bodies.iter().all(|b| b.sign.is_some()));
    assert!(has_aspect(&chart, "sun", "moon", AspectKind::Opposition).is_some());
    assert!(has_aspect(&chart, "saturn", "dc", AspectKind::Conjunction).is_none());
    assert_eq!(chart.distribution.modality_total(), 10);
}

#[test]
fn strict_orbs_drop_wide_aspects() {
    let config = ChartConfig {
        orb_mode: OrbMode::Strict,
        ..ChartConfig::default()
    };
    let chart = compute_chart(&provider(), JD, Some(&london()), &config).unwrap();
    assert!(has_aspect(&chart, "sun", "uranus", AspectKind::Semisextile).is_none());
    assert!(has_aspect(&chart, "mercury", "neptune", AspectKind::Conjunction).is_some());
}

#[test]
fn unknown_category_is_diagnostic_not_failure() {
    let mut pts = bodies();
    pts.push(ChartPoint::new("chiron", BodyCategory::Other, 100.0));
    let eph = StaticEphemeris::new(pts).with_cusps(CUSPS);
    let config = ChartConfig {
        orbs: OrbTable::default().without_category(BodyCategory::Other),
        ..ChartConfig::default()
    };
    let chart = compute_chart(&eph, JD, Some(&london()), &config).unwrap();
    assert!(chart.diagnostics.iter().any(|d| matches!(
        d,
        ChartDiagnostic::UnknownCategory { category: BodyCategory::Other, .. }
    )));
    assert!(chart.aspects.get("chiron").is_none());
    assert!(has_aspect(&chart, "sun", "moon", AspectKind::Opposition).is_some());
    assert_eq!(chart.body("chiron").unwrap().house(), Some(1));
}

#[test]
fn invalid_location_rejected() {
    let bad = GeoLocation::new(95.0, 0.0);
    assert!(matches!(
        compute_chart(&provider(), JD, Some(&bad), &ChartConfig::default()),
        Err(ChartError::InvalidLocation(_))
    ));
}

#[test]
fn provider_failure_propagates() {
    assert_eq!(
        compute_chart(&FailingProvider, JD, None, &ChartConfig::default()),
        Err(ChartError::Ephemeris("kernel not loaded".to_string()))
    );
}

#[test]
fn dyn_provider_accepted() {
    let eph: Box<dyn EphemerisProvider> = Box::new(provider());
    let chart = compute_chart(eph.as_ref(), JD, Some(&london()), &ChartConfig::default()).unwrap();
    assert_eq!(chart.bodies.len(), 10);
}

#[test]
fn repeated_computation_is_identical() {
    let config = ChartConfig::default();
    let a = compute_chart(&provider(), JD, Some(&london()), &config).unwrap();
    let b = compute_chart(&provider(), JD, Some(&london()), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn concurrent_charts_agree() {
    let eph = Arc::new(provider());
    let config = ChartConfig::default();
    let expected = compute_chart(eph.as_ref(), JD, Some(&london()), &config).unwrap();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let eph = Arc::clone(&eph);
                s.spawn(move || compute_chart(eph.as_ref(), JD, Some(&london()), &config))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for r in results {
        assert_eq!(r.unwrap(), expected);
    }
}

#[test]
fn bidirectional_view_includes_axes() {
    let chart = compute_chart(&provider(), JD, Some(&london()), &ChartConfig::default()).unwrap();
    let view = chart.aspects.bidirectional();
    let dc = &view["dc"];
    assert!(dc.iter().any(|v| v.with == "saturn" && v.kind == AspectKind::Conjunction));

    let uranus = &view["uranus"];
    let from_sun = uranus.iter().find(|v| v.with == "sun").unwrap();
    assert!(!from_sun.own_exists);
    assert!(from_sun.other_exists);
}

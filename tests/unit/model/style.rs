use super::*;

#[test]
fn degenerate_radius_is_clamped() {
    assert_eq!(StyleParams::with_radius(0.0).geometry_radius(), MIN_POINT_RADIUS);
    assert_eq!(StyleParams::with_radius(-4.0).geometry_radius(), MIN_POINT_RADIUS);
    assert_eq!(
        StyleParams::with_radius(f64::NAN).geometry_radius(),
        MIN_POINT_RADIUS
    );
    assert_eq!(StyleParams::with_radius(3.5).geometry_radius(), 3.5);
    assert!(!StyleParams::with_radius(0.0).radius_in_range());
    assert!(StyleParams::with_radius(MIN_POINT_RADIUS).radius_in_range());
}

#[test]
fn defaults_fill_missing_json_fields() {
    let s: StyleParams = serde_json::from_str("{}").unwrap();
    assert_eq!(s, StyleParams::default());
    let s: StyleParams =
        serde_json::from_str(r##"{"point_radius": 2, "palette": ["#000", "#fff"]}"##).unwrap();
    assert_eq!(s.palette.len(), 2);
    assert_eq!(s.point_radius, 2.0);
}

#[test]
fn empty_palette_fails_validation() {
    let s = StyleParams {
        palette: vec![],
        ..StyleParams::default()
    };
    assert!(s.validate().is_err());
}

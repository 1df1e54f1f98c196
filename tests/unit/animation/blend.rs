use super::*;

fn map(entries: &[(&str, f64, f64)]) -> PositionMap {
    entries
        .iter()
        .map(|&(id, x, y)| (id.to_string(), Point::new(x, y)))
        .collect()
}

#[test]
fn endpoints_reproduce_inputs_exactly() {
    let s = map(&[("a", 0.1, 7.3), ("b", 12.7, -4.4)]);
    let e = map(&[("a", 0.3, 1e-7), ("b", 99.99, 3.3)]);
    for ease in [Ease::InOutCubic, Ease::Linear, Ease::OutQuad] {
        assert_eq!(blend(&s, &e, 0.0, ease), s);
        assert_eq!(blend(&s, &e, 1.0, ease), e);
    }
}

#[test]
fn midpoint_is_the_arithmetic_mean_for_in_out_cubic() {
    let s = map(&[("a", 0.0, 10.0)]);
    let e = map(&[("a", 20.0, 30.0)]);
    let m = blend(&s, &e, 0.5, Ease::InOutCubic);
    assert_eq!(m.get("a").unwrap(), Point::new(10.0, 20.0));
}

#[test]
fn one_sided_ids_hold_their_position() {
    let s = map(&[("a", 0.0, 0.0), ("gone", 5.0, 5.0)]);
    let e = map(&[("a", 10.0, 0.0), ("new", 7.0, 8.0)]);
    let m = blend(&s, &e, 0.25, Ease::Linear);
    assert_eq!(m.len(), 3);
    assert_eq!(m.get("gone").unwrap(), Point::new(5.0, 5.0));
    assert_eq!(m.get("new").unwrap(), Point::new(7.0, 8.0));
    assert_eq!(m.get("a").unwrap(), Point::new(2.5, 0.0));
}

#[test]
fn empty_maps_blend_to_empty() {
    let empty = PositionMap::default();
    assert!(blend(&empty, &empty, 0.3, Ease::default()).is_empty());
}

#[test]
fn progress_outside_unit_range_is_clamped() {
    let s = map(&[("a", 0.0, 0.0)]);
    let e = map(&[("a", 10.0, 10.0)]);
    assert_eq!(blend(&s, &e, -1.0, Ease::Linear), s);
    assert_eq!(blend(&s, &e, 2.0, Ease::Linear), e);
}

#[test]
fn opacity_fades_out_and_back_in() {
    assert_eq!(overlay_opacity(0.0), 1.0);
    assert_eq!(overlay_opacity(0.5), 0.0);
    assert_eq!(overlay_opacity(1.0), 1.0);
    for d in [0.0625, 0.125, 0.25, 0.5] {
        assert_eq!(overlay_opacity(0.5 - d), overlay_opacity(0.5 + d));
    }
    for d in [0.01, 0.1, 0.3] {
        assert!((overlay_opacity(0.5 - d) - overlay_opacity(0.5 + d)).abs() < 1e-12);
    }
    assert!((overlay_opacity(0.4) - 0.3).abs() < 1e-12);
}

#[test]
fn overlay_switches_text_at_the_midpoint() {
    assert_eq!(overlay(1, 4, 0.49).active_step, 1);
    assert_eq!(overlay(1, 4, 0.5).active_step, 2);
    assert_eq!(overlay(3, 4, 0.9).active_step, 3);
    assert_eq!(overlay(0, 0, 0.9).active_step, 0);
}

#[test]
fn transition_frame_combines_blend_and_overlay() {
    let s = map(&[("a", 0.0, 0.0)]);
    let e = map(&[("a", 4.0, 8.0)]);
    let f = transition_frame(&s, &e, 0, 2, 1.0, Ease::InOutCubic);
    assert_eq!(f.positions, e);
    assert_eq!(f.overlay, Overlay { active_step: 1, opacity: 1.0 });
}

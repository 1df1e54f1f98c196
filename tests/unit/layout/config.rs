use super::*;

#[test]
fn defaults_are_the_reference_constants() {
    let c = LayoutConfig::default();
    assert_eq!(c.value_domain, (0.0, 100.0));
    assert_eq!(c.grid_columns, 10);
    assert!(c.violin_bins < c.histogram_bins);
    assert_eq!(c.beeswarm.iterations, 120);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let c: LayoutConfig =
        serde_json::from_str(r#"{"grid_columns": 12, "beeswarm": {"iterations": 60}}"#).unwrap();
    assert_eq!(c.grid_columns, 12);
    assert_eq!(c.histogram_bins, 20);
    assert_eq!(c.beeswarm.iterations, 60);
    assert_eq!(c.beeswarm.y_strength, 0.1);
}

#[test]
fn validate_rejects_bad_tunables() {
    let c = LayoutConfig {
        value_domain: (10.0, 10.0),
        ..LayoutConfig::default()
    };
    assert!(c.validate().is_err());

    let c = LayoutConfig {
        histogram_bins: 0,
        ..LayoutConfig::default()
    };
    assert!(c.validate().unwrap_err().to_string().contains("histogram_bins"));

    let mut c = LayoutConfig::default();
    c.beeswarm.velocity_decay = 1.5;
    assert!(c.validate().is_err());
}

#[test]
fn alpha_reaches_alpha_min_after_decay_ticks() {
    let s = SimulationConfig::default();
    let mut alpha = 1.0f64;
    for _ in 0..s.alpha_decay_ticks {
        alpha *= 1.0 - s.alpha_decay();
    }
    assert!((alpha - s.alpha_min).abs() < 1e-9);
}

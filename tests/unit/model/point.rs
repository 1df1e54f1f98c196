use super::*;

#[test]
fn lenient_fields_soft_fail_to_zero() {
    let json = r#"[
        {"id": "a", "category": "x", "value_a": 12.5, "value_b": "40"},
        {"id": "b", "category": "y", "valueA": "n/a", "valueB": null},
        {"id": "c", "category": "y"}
    ]"#;
    let points: Vec<DataPoint> = serde_json::from_str(json).unwrap();
    assert_eq!(points[0].a(), 12.5);
    assert_eq!(points[0].b(), 40.0);
    assert_eq!(points[1].value_a, None);
    assert_eq!(points[1].a(), 0.0);
    assert_eq!(points[2].b(), 0.0);
    assert_eq!(missing_value_count(&points), 2);
}

#[test]
fn extra_fields_keep_their_scalar_type() {
    let json = r#"{"id": "a", "extra": {"year": 2020, "name": "Lyon", "capital": false}}"#;
    let p: DataPoint = serde_json::from_str(json).unwrap();
    assert_eq!(p.extra["year"], Scalar::Number(2020.0));
    assert_eq!(p.extra["name"], Scalar::Text("Lyon".to_string()));
    assert_eq!(p.extra["capital"], Scalar::Bool(false));
}

#[test]
fn duplicate_ids_are_rejected() {
    let pts = vec![DataPoint::new("a", "x", 1.0, 1.0), DataPoint::new("a", "y", 2.0, 2.0)];
    let err = validate_points(&pts).unwrap_err();
    assert!(err.to_string().contains("duplicate point id 'a'"));
    assert!(validate_points(&[DataPoint::new("", "x", 0.0, 0.0)]).is_err());
    assert!(validate_points(&[]).is_ok());
}

#[test]
fn categories_are_sorted_and_distinct() {
    let pts = vec![
        DataPoint::new("1", "pear", 0.0, 0.0),
        DataPoint::new("2", "apple", 0.0, 0.0),
        DataPoint::new("3", "pear", 0.0, 0.0),
    ];
    assert_eq!(categories(&pts), vec!["apple".to_string(), "pear".to_string()]);
}

#[test]
fn top_level_auxiliary_fields_land_in_extra() {
    let json = r#"{"id": "a", "valueA": 1, "population": 123, "region": "north"}"#;
    let p: DataPoint = serde_json::from_str(json).unwrap();
    assert_eq!(p.a(), 1.0);
    assert_eq!(p.extra.len(), 2);
    assert_eq!(p.extra["population"], Scalar::Number(123.0));
    assert_eq!(p.extra["region"], Scalar::Text("north".to_string()));

    let again: DataPoint = serde_json::from_value(serde_json::to_value(&p).unwrap()).unwrap();
    assert_eq!(again, p);
}

#[test]
fn non_scalar_extra_values_are_dropped_not_fatal() {
    let json = r#"[
        {"id": "a", "valueA": 1, "extra": {"note": null, "tags": ["x"], "year": 2020}},
        {"id": "b", "valueA": 2, "meta": {"k": 1}, "rank": null}
    ]"#;
    let points: Vec<DataPoint> = serde_json::from_str(json).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].extra.len(), 1);
    assert_eq!(points[0].extra["year"], Scalar::Number(2020.0));
    assert!(points[1].extra.is_empty());
    assert_eq!(points[1].a(), 2.0);
}

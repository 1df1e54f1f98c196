use super::*;

#[test]
fn lookups_and_ordering() {
    let map: PositionMap = [
        ("b".to_string(), Point::new(2.0, 3.0)),
        ("a".to_string(), Point::new(0.0, 1.0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(Point::new(0.0, 1.0)));
    assert!(map.get("zz").is_none());
    assert_eq!(map.ids().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn serializes_as_a_plain_object() {
    let map: PositionMap = [("p".to_string(), Point::new(1.5, 2.0))].into_iter().collect();
    let v = serde_json::to_value(&map).unwrap();
    assert!(v.get("p").is_some());
    let back: PositionMap = serde_json::from_value(v).unwrap();
    assert_eq!(back, map);
}

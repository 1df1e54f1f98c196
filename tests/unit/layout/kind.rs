use super::*;

#[test]
fn names_parse_back_to_the_same_kind() {
    for kind in LayoutKind::ALL {
        assert_eq!(kind.as_str().parse::<LayoutKind>().unwrap(), kind);
    }
    assert_eq!(" BeeSwarm ".parse::<LayoutKind>().unwrap(), LayoutKind::Beeswarm);
    assert_eq!("dot-plot".parse::<LayoutKind>().unwrap(), LayoutKind::DotPlot);
}

#[test]
fn unknown_kind_fails_fast_with_config_error() {
    let err = "treemap".parse::<LayoutKind>().unwrap_err();
    assert!(matches!(err, MorphError::Config(_)));
    assert!(err.to_string().contains("unknown layout kind 'treemap'"));
    assert!("".parse::<LayoutKind>().is_err());
}

#[test]
fn json_rejects_unknown_kinds() {
    let k: LayoutKind = serde_json::from_str("\"violin\"").unwrap();
    assert_eq!(k, LayoutKind::Violin);
    assert!(serde_json::from_str::<LayoutKind>("\"pie\"").is_err());
    assert_eq!(serde_json::to_string(&LayoutKind::DotPlot).unwrap(), "\"dotplot\"");
}

#[test]
fn only_radial_and_bar_overflow() {
    let overflowing: Vec<_> = LayoutKind::ALL
        .into_iter()
        .filter(|k| k.allows_overflow())
        .collect();
    assert_eq!(overflowing, vec![LayoutKind::Bar, LayoutKind::Radial]);
}

#[test]
fn tags_are_distinct() {
    let mut tags: Vec<u8> = LayoutKind::ALL.iter().map(|k| k.tag()).collect();
    tags.dedup();
    assert_eq!(tags.len(), 8);
}

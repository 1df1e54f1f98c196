use super::*;

#[test]
fn hex_parsing_accepts_short_long_and_alpha_forms() {
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
    assert_eq!(Rgba8::from_hex("4e79a7").unwrap(), Rgba8::rgb(0x4e, 0x79, 0xa7));
    let c = Rgba8::from_hex("#10203080").unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_string(), "#10203080");
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#gggggg").is_err());
    assert!(Rgba8::from_hex("#é12").is_err());
}

#[test]
fn colors_serialize_as_hex_strings() {
    let json = serde_json::to_string(&TABLEAU10[0]).unwrap();
    assert_eq!(json, "\"#4e79a7\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TABLEAU10[0]);
    assert!(serde_json::from_str::<Rgba8>("\"blue\"").is_err());
}

#[test]
fn assignment_is_independent_of_input_order() {
    let palette = default_palette();
    let a = assign_colors(["north", "east", "south", "west"], &palette).unwrap();
    let b = assign_colors(["west", "south", "north", "east", "north"], &palette).unwrap();
    assert_eq!(a, b);
    assert_eq!(a["east"], palette[0]);
    assert_eq!(a["west"], palette[3]);
}

#[test]
fn palette_wraps_when_categories_outnumber_colors() {
    let palette = [Rgba8::rgb(1, 0, 0), Rgba8::rgb(0, 1, 0)];
    let m = assign_colors(["a", "b", "c"], &palette).unwrap();
    assert_eq!(m["a"], palette[0]);
    assert_eq!(m["b"], palette[1]);
    assert_eq!(m["c"], palette[0]);
}

#[test]
fn empty_palette_is_a_configuration_error() {
    let err = assign_colors(["a"], &[]).unwrap_err();
    assert!(matches!(err, MorphError::Config(_)));
}

use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_color("#ff0000"), Some(Rgba8::rgb(255, 0, 0)));
    assert_eq!(parse_color("#0000FF80"), Some(Rgba8::rgba(0, 0, 255, 128)));
    assert_eq!(parse_color("#f0a"), Some(Rgba8::rgb(255, 0, 170)));
    assert_eq!(parse_color("#f0a8"), Some(Rgba8::rgba(255, 0, 170, 136)));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#zzzzzz"), None);
}

#[test]
fn parses_keywords_case_insensitively() {
    assert_eq!(parse_color("Red"), Some(Rgba8::rgb(255, 0, 0)));
    assert_eq!(parse_color("  navy "), Some(Rgba8::rgb(0, 0, 128)));
    assert_eq!(parse_color("none"), Some(Rgba8::NONE));
    assert_eq!(parse_color("transparent"), Some(Rgba8::NONE));
    assert_eq!(parse_color("not-a-color"), None);
    assert_eq!(parse_color(""), None);
}

#[test]
fn parses_functional_notation() {
    assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Rgba8::rgb(1, 2, 3)));
    assert_eq!(
        parse_color("RGBA(10,20,30,0.5)"),
        Some(Rgba8::rgba(10, 20, 30, 128))
    );
    assert_eq!(parse_color("rgb(1,2)"), None);
    assert_eq!(parse_color("rgba(1,2,3)"), None);
}

#[test]
fn closures_are_resolvers() {
    let only_brand = |name: &str| (name == "brand").then_some(Rgba8::rgb(1, 2, 3));
    assert_eq!(only_brand.resolve("brand"), Some(Rgba8::rgb(1, 2, 3)));
    assert_eq!(only_brand.resolve("red"), None);
    assert_eq!(NamedColors.resolve("red"), Some(Rgba8::rgb(255, 0, 0)));
}

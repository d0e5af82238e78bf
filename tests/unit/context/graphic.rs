use super::*;

#[test]
fn gravity_static_and_undefined_have_no_token() {
    assert_eq!(Gravity::Undefined.as_mvg(), None);
    assert_eq!(Gravity::Static.as_mvg(), None);
    assert_eq!(Gravity::SouthEast.as_mvg(), Some("SouthEast"));
    assert_eq!(Gravity::Center.as_mvg(), Some("Center"));
}

#[test]
fn keyword_spellings() {
    assert_eq!(FillRule::NonZero.as_str(), "nonzero");
    assert_eq!(ClipUnits::ObjectBoundingBox.as_str(), "objectBoundingBox");
    assert_eq!(LineCap::Square.as_str(), "square");
    assert_eq!(LineJoin::Bevel.as_str(), "bevel");
    assert_eq!(FontStretch::SemiCondensed.as_str(), "semi-condensed");
    assert_eq!(TextDecoration::LineThrough.as_str(), "line-through");
    assert_eq!(TextDirection::RightToLeft.as_mvg(), Some("right-to-left"));
    assert_eq!(TextAlignment::Undefined.as_mvg(), None);
}

#[test]
fn default_context_is_opaque_black_fill_with_identity_transform() {
    let ctx = GraphicContext::default();
    assert_eq!(ctx.fill, Rgba8::BLACK);
    assert!(ctx.stroke.is_none());
    assert_eq!(ctx.affine, Affine::IDENTITY);
    assert!((ctx.opacity() - 1.0).abs() < 1e-12);
    assert!((ctx.fill_opacity() - 1.0).abs() < 1e-12);
    assert_eq!(ctx.stroke_opacity(), 0.0);
}

#[test]
fn enums_deserialize_snake_case() {
    let g: Gravity = serde_json::from_str("\"north_west\"").unwrap();
    assert_eq!(g, Gravity::NorthWest);
    let s: FontStretch = serde_json::from_str("\"ultra_expanded\"").unwrap();
    assert_eq!(s, FontStretch::UltraExpanded);
}

#[test]
fn context_snapshot_round_trips_through_json() {
    let mut ctx = GraphicContext {
        fill: Rgba8::rgb(255, 0, 0),
        font_family: Some("Serif".to_owned()),
        gravity: Gravity::South,
        ..GraphicContext::default()
    };
    ctx.affine = Affine::new([2.0, 0.0, 0.0, 2.0, 5.0, 5.0]);
    ctx.bounds = Rect::new(1.0, 2.0, 3.0, 4.0);

    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["gravity"], "south");
    assert_eq!(json["affine"].as_array().map(Vec::len), Some(6));

    let back: GraphicContext = serde_json::from_value(json).unwrap();
    assert_eq!(back, ctx);
}

use super::*;
use crate::foundation::error::Severity;
use crate::target::image::TargetImage;

#[test]
fn redundant_setters_are_elided() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_fill_color("red").unwrap();
    w.set_fill_color("RED").unwrap();
    w.set_stroke_width(2.0).unwrap();
    w.set_stroke_width(2.0 + 1e-14).unwrap();
    w.set_font_size(12.0).unwrap();
    w.set_fill_rule(FillRule::EvenOdd).unwrap();
    assert_eq!(w.vector_graphics(), "fill '#FF0000'\nstroke-width 2\n");
}

#[test]
fn general_opacity_is_adopted_by_later_colors() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_opacity(0.5).unwrap();
    w.set_fill_color("red").unwrap();
    w.set_stroke_color("none").unwrap();
    w.set_stroke_color("blue").unwrap();
    assert_eq!(
        w.vector_graphics(),
        "opacity 0.5\nfill '#FF000080'\nstroke '#0000FF80'\n"
    );
    assert_eq!(w.context().alpha, 128);
    assert_eq!(w.context().fill, Rgba8::rgba(255, 0, 0, 128));
}

#[test]
fn transparent_colors_keep_zero_alpha() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_opacity(0.5).unwrap();
    w.set_fill_color("none").unwrap();
    assert_eq!(w.context().fill, Rgba8::NONE);
    assert!(w.vector_graphics().ends_with("fill 'none'\n"));
}

#[test]
fn fill_and_stroke_opacity_live_in_the_paint_alpha() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_fill_opacity(0.25).unwrap();
    w.set_stroke_opacity(1.0).unwrap();
    assert_eq!(w.vector_graphics(), "fill-opacity 0.25\nstroke-opacity 1\n");
    assert_eq!(w.context().fill.a, 64);
    assert_eq!(w.context().stroke.a, 255);
}

#[test]
fn unknown_color_leaves_state_unchanged() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_fill_color("green").unwrap();
    let before = w.vector_graphics().to_owned();
    let err = w.set_fill_color("mauve-ish").unwrap_err();
    assert!(matches!(err, WandError::UnknownColor(ref n) if n == "mauve-ish"));
    assert_eq!(err.severity(), Severity::Recoverable);
    assert_eq!(w.vector_graphics(), before);
    assert_eq!(w.context().fill, Rgba8::rgb(0, 128, 0));
    assert!(w.last_error().is_some());
}

#[test]
fn empty_names_are_missing_arguments() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    let err = w.set_font("  ").unwrap_err();
    assert!(matches!(err, WandError::MissingArgument("font")));
    assert_eq!(err.severity(), Severity::Contract);
    assert!(matches!(
        w.set_fill_color("").unwrap_err(),
        WandError::MissingArgument("color")
    ));
    assert_eq!(w.vector_graphics(), "");
}

#[test]
fn stroke_attributes() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_stroke_dash_array(&[5.0, 3.5]).unwrap();
    w.set_stroke_dash_array(&[5.0, 3.5]).unwrap();
    w.set_stroke_dash_array(&[]).unwrap();
    w.set_stroke_dash_offset(1.5).unwrap();
    w.set_stroke_line_cap(LineCap::Round).unwrap();
    w.set_stroke_line_join(LineJoin::Bevel).unwrap();
    w.set_stroke_miter_limit(4).unwrap();
    w.set_stroke_antialias(false).unwrap();
    assert_eq!(
        w.vector_graphics(),
        "stroke-dasharray 5,3.5\n\
         stroke-dasharray none\n\
         stroke-dashoffset 1.5\n\
         stroke-linecap round\n\
         stroke-linejoin bevel\n\
         stroke-miterlimit 4\n\
         stroke-antialias 0\n"
    );
    assert!(w.context().dash_array.is_empty());
}

#[test]
fn text_attributes() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_font("O'Neil Sans").unwrap();
    w.set_font_family("Helvetica").unwrap();
    w.set_font_size(18.0).unwrap();
    w.set_font_style(FontStyle::Italic).unwrap();
    w.set_font_weight(700).unwrap();
    w.set_font_stretch(FontStretch::SemiCondensed).unwrap();
    w.set_text_antialias(false).unwrap();
    w.set_text_decoration(TextDecoration::LineThrough).unwrap();
    w.set_text_under_color("white").unwrap();
    w.set_border_color("#00ff00").unwrap();
    w.set_text_encoding("UTF-8").unwrap();
    w.set_text_kerning(0.5).unwrap();
    w.set_text_interline_spacing(2.0).unwrap();
    w.set_text_interword_spacing(-1.0).unwrap();
    assert_eq!(
        w.vector_graphics(),
        "font 'O\\'Neil Sans'\n\
         font-family 'Helvetica'\n\
         font-size 18\n\
         font-style italic\n\
         font-weight 700\n\
         font-stretch semi-condensed\n\
         text-antialias 0\n\
         decorate line-through\n\
         text-undercolor '#FFFFFF'\n\
         border-color '#00FF00'\n\
         encoding 'UTF-8'\n\
         kerning 0.5\n\
         interline-spacing 2\n\
         interword-spacing -1\n"
    );
}

#[test]
fn placement_enums_without_spelling_update_silently() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_gravity(Gravity::Center).unwrap();
    w.set_gravity(Gravity::Static).unwrap();
    w.set_text_alignment(TextAlignment::Right).unwrap();
    w.set_text_direction(TextDirection::RightToLeft).unwrap();
    w.set_text_direction(TextDirection::Undefined).unwrap();
    assert_eq!(
        w.vector_graphics(),
        "gravity Center\ntext-align right\ndirection right-to-left\n"
    );
    assert_eq!(w.context().gravity, Gravity::Static);
    assert_eq!(w.context().direction, TextDirection::Undefined);
}

#[test]
fn pattern_urls_must_be_relative_and_published() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    assert!(matches!(
        w.set_fill_pattern_url("tile").unwrap_err(),
        WandError::NotARelativeUrl(_)
    ));
    assert!(matches!(
        w.set_fill_pattern_url("#tile").unwrap_err(),
        WandError::UndefinedReference(ref id) if id == "tile"
    ));

    w.push_pattern("tile", 0.0, 0.0, 8.0, 8.0).unwrap();
    w.point(1.0, 1.0).unwrap();
    w.pop_pattern().unwrap();
    let start = w.vector_graphics().len();

    w.set_fill_pattern_url("#tile").unwrap();
    w.set_fill_pattern_url("#tile").unwrap();
    w.set_stroke_pattern_url("#tile").unwrap();
    // The pattern counts as a different paint than plain black.
    w.set_fill_color("black").unwrap();
    assert_eq!(
        &w.vector_graphics()[start..],
        "fill url(#tile)\nstroke url(#tile)\nfill '#000000'\n"
    );
    assert_eq!(w.context().fill_pattern, None);
    assert_eq!(w.context().stroke_pattern.as_deref(), Some("tile"));
}

#[test]
fn clip_path_requires_a_completed_definition() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    assert!(matches!(
        w.set_clip_path("c1").unwrap_err(),
        WandError::UndefinedReference(_)
    ));
    w.push_clip_path("c1").unwrap();
    assert!(w.set_clip_path("c1").is_err());
    w.rectangle(0.0, 0.0, 5.0, 5.0).unwrap();
    w.pop_clip_path().unwrap();

    let start = w.vector_graphics().len();
    w.set_clip_path("c1").unwrap();
    w.set_clip_path("c1").unwrap();
    w.set_clip_rule(FillRule::NonZero).unwrap();
    assert_eq!(
        &w.vector_graphics()[start..],
        "clip-path url(#c1)\nclip-rule nonzero\n"
    );
}

#[test]
fn object_bounding_box_units_fold_in_the_bounds() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_object_bounds(Rect::new(10.0, 20.0, 110.0, 220.0));
    assert_eq!(w.vector_graphics(), "");
    w.set_clip_units(ClipUnits::ObjectBoundingBox).unwrap();
    assert_eq!(w.vector_graphics(), "clip-units objectBoundingBox\n");
    assert_eq!(
        w.context().affine.as_coeffs(),
        [110.0, 0.0, 0.0, 220.0, 10.0, 20.0]
    );

    w.set_clip_units(ClipUnits::UserSpace).unwrap();
    assert_eq!(
        w.context().affine.as_coeffs(),
        [110.0, 0.0, 0.0, 220.0, 10.0, 20.0]
    );
}

#[test]
fn object_bounding_box_without_bounds_keeps_the_transform() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.set_clip_units(ClipUnits::ObjectBoundingBox).unwrap();
    assert_eq!(w.context().affine, crate::foundation::core::Affine::IDENTITY);
}

#[test]
fn filtering_is_off_inside_definitions() {
    let mut img = TargetImage::new(10, 10);
    let mut w = DrawingWand::new(&mut img);
    w.push_pattern("p", 0.0, 0.0, 4.0, 4.0).unwrap();
    assert!(!w.is_filtering());
    w.set_fill_color("black").unwrap();
    w.set_stroke_width(1.0).unwrap();
    w.pop_pattern().unwrap();
    assert!(w.is_filtering());
    w.set_stroke_width(1.0).unwrap();
    assert_eq!(
        w.vector_graphics(),
        "push pattern p 0,0 4,4\n fill '#000000'\n stroke-width 1\npop pattern\n"
    );
}

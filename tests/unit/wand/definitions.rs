use super::*;
use crate::{target::image::TargetImage, wand::settings::WandSettings};

#[test]
fn bounds_round_origin_half_up_and_extent_half_down() {
    let b = PatternBounds::from_rect(0.5, -0.5, 2.5, 3.49);
    assert_eq!(
        b,
        PatternBounds {
            x: 0,
            y: -1,
            width: 3,
            height: 3
        }
    );
    assert_eq!(b.to_string(), "3x3+0-1");
    assert_eq!(PatternBounds::from_rect(1.5, 2.0, 10.0, 0.4).to_string(), "10x0+1+2");
    assert_eq!(PatternBounds::from_rect(0.0, 0.0, -4.0, 2.0).width, 0);
}

#[test]
fn pattern_body_and_geometry_are_published() {
    let mut img = TargetImage::new(20, 20);
    let (start, end) = {
        let mut w = DrawingWand::new(&mut img);
        w.push_pattern("p1", 0.0, 0.0, 10.0, 10.0).unwrap();
        let capture = w.pattern_capture().unwrap();
        assert_eq!(capture.id(), "p1");
        assert_eq!(capture.offset(), "push pattern p1 0,0 10,10\n".len());
        let start = capture.offset();
        w.rectangle(0.0, 0.0, 5.0, 5.0).unwrap();
        w.circle(5.0, 5.0, 7.0, 5.0).unwrap();
        let end = w.vector_graphics().len();
        w.pop_pattern().unwrap();
        assert!(w.pattern_capture().is_none());
        assert_eq!(
            w.vector_graphics(),
            "push pattern p1 0,0 10,10\n rectangle 0,0 5,5\n circle 5,5 7,5\npop pattern\n"
        );
        (start, end)
    };
    assert_eq!(end - start, " rectangle 0,0 5,5\n circle 5,5 7,5\n".len());
    assert_eq!(
        img.artifact("[p1]"),
        Some(" rectangle 0,0 5,5\n circle 5,5 7,5\n")
    );
    assert_eq!(img.artifact("[p1]-geometry"), Some("10x10+0+0"));
}

#[test]
fn shared_geometry_key_overwrites_the_body() {
    let mut img = TargetImage::new(20, 20);
    {
        let settings = WandSettings {
            pattern_geometry_key: PatternGeometryKey::Shared,
            ..WandSettings::default()
        };
        let mut w = DrawingWand::with_settings(&mut img, settings);
        w.push_pattern("p1", 0.0, 0.0, 10.0, 10.0).unwrap();
        w.point(1.0, 1.0).unwrap();
        w.pop_pattern().unwrap();
    }
    assert_eq!(img.artifact("[p1]"), Some("10x10+0+0"));
    assert_eq!(img.artifact("[p1]-geometry"), None);
}

#[test]
fn second_open_pattern_is_rejected_without_side_effects() {
    let mut img = TargetImage::new(20, 20);
    let mut w = DrawingWand::new(&mut img);
    w.push_pattern("a", 0.0, 0.0, 4.0, 4.0).unwrap();
    let before = w.vector_graphics().to_owned();
    let capture = w.pattern_capture().cloned();

    let err = w.push_pattern("b", 1.0, 1.0, 2.0, 2.0).unwrap_err();
    assert!(matches!(err, WandError::PatternAlreadyOpen(ref id) if id == "a"));
    assert_eq!(w.vector_graphics(), before);
    assert_eq!(w.pattern_capture().cloned(), capture);
    assert_eq!(w.indent_depth(), 1);
}

#[test]
fn pop_without_open_definition_is_an_error() {
    let mut img = TargetImage::new(20, 20);
    let mut w = DrawingWand::new(&mut img);
    assert!(matches!(
        w.pop_pattern().unwrap_err(),
        WandError::UnbalancedDefinition("pattern")
    ));
    assert!(matches!(
        w.pop_clip_path().unwrap_err(),
        WandError::UnbalancedDefinition("clip-path")
    ));
    assert!(matches!(
        w.pop_defs().unwrap_err(),
        WandError::UnbalancedDefinition("defs")
    ));
    assert_eq!(w.vector_graphics(), "");
    assert_eq!(w.indent_depth(), 0);
}

#[test]
fn clip_paths_bracket_and_register_their_id() {
    let mut img = TargetImage::new(20, 20);
    let mut w = DrawingWand::new(&mut img);
    w.push_defs().unwrap();
    w.push_clip_path("c1").unwrap();
    w.rectangle(0.0, 0.0, 4.0, 4.0).unwrap();
    assert_eq!(w.clip_path_ids().count(), 0);
    w.pop_clip_path().unwrap();
    w.pop_defs().unwrap();

    assert_eq!(
        w.vector_graphics(),
        "push defs\n push clip-path c1\n  rectangle 0,0 4,4\n pop clip-path\npop defs\n"
    );
    assert_eq!(w.clip_path_ids().collect::<Vec<_>>(), vec!["c1"]);
    assert!(w.is_filtering());
}

#[test]
fn filtering_resumes_only_when_every_definition_is_closed() {
    let mut img = TargetImage::new(20, 20);
    let mut w = DrawingWand::new(&mut img);
    w.push_clip_path("c").unwrap();
    w.push_pattern("p", 0.0, 0.0, 1.0, 1.0).unwrap();
    w.pop_pattern().unwrap();
    assert!(!w.is_filtering());
    w.pop_clip_path().unwrap();
    assert!(w.is_filtering());
}

#[test]
fn republishing_an_id_replaces_the_previous_body() {
    let mut img = TargetImage::new(20, 20);
    {
        let mut w = DrawingWand::new(&mut img);
        for x in [1.0, 2.0] {
            w.push_pattern("p", 0.0, 0.0, 3.0, 3.0).unwrap();
            w.point(x, x).unwrap();
            w.pop_pattern().unwrap();
        }
    }
    assert_eq!(img.artifact("[p]"), Some(" point 2,2\n"));
}

#[test]
fn reset_during_capture_restarts_the_body() {
    let mut img = TargetImage::new(20, 20);
    {
        let mut w = DrawingWand::new(&mut img);
        w.push_pattern("p", 0.0, 0.0, 3.0, 3.0).unwrap();
        w.point(1.0, 1.0).unwrap();
        w.reset_vector_graphics();
        assert_eq!(w.pattern_capture().map(PatternCapture::offset), Some(0));
        w.point(2.0, 2.0).unwrap();
        w.pop_pattern().unwrap();
    }
    assert_eq!(img.artifact("[p]"), Some(" point 2,2\n"));
}

use super::*;
use crate::{
    foundation::error::WandError, target::image::TargetImage, wand::settings::WandSettings,
};

fn compile(f: impl FnOnce(&mut DrawingWand<'_>) -> WandResult<()>) -> String {
    let mut img = TargetImage::new(100, 100);
    let mut w = DrawingWand::new(&mut img);
    f(&mut w).unwrap();
    w.vector_graphics().to_owned()
}

#[test]
fn shapes_format_coordinates_with_four_significant_digits() {
    let out = compile(|w| {
        w.point(1.23456, 0.0001)?;
        w.line(0.0, 0.0, 1e-5, -3.0)?;
        w.rectangle(10.0, 10.0, 90.5, 40.25)?;
        w.round_rectangle(0.0, 0.0, 20.0, 10.0, 2.0, 2.0)?;
        w.circle(50.0, 50.0, 60.0, 50.0)?;
        w.ellipse(50.0, 50.0, 30.0, 20.0, 0.0, 360.0)?;
        w.arc(0.0, 0.0, 10.0, 10.0, 45.0, 12346.0)
    });
    assert_eq!(
        out,
        "point 1.235,0.0001\n\
         line 0,0 1e-05,-3\n\
         rectangle 10,10 90.5,40.25\n\
         roundrectangle 0,0 20,10 2,2\n\
         circle 50,50 60,50\n\
         ellipse 50,50 30,20 0,360\n\
         arc 0,0 10,10 45,1.235e+04\n"
    );
}

#[test]
fn point_lists() {
    let tri = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
    ];
    let out = compile(|w| {
        w.polygon(&tri)?;
        w.polyline(&tri[..2])?;
        w.bezier(&tri)
    });
    assert_eq!(
        out,
        "polygon 0,0 10,0 10,10\npolyline 0,0 10,0\nbezier 0,0 10,0 10,10\n"
    );
}

#[test]
fn point_list_that_runs_out_of_room_leaves_no_partial_instruction() {
    let mut img = TargetImage::new(100, 100);
    let settings = WandSettings {
        max_output_bytes: Some(30),
        ..WandSettings::default()
    };
    let mut w = DrawingWand::with_settings(&mut img, settings);
    w.point(1.0, 1.0).unwrap();

    let points: Vec<Point> = (0..10).map(|i| Point::new(f64::from(i) * 100.0, 5.0)).collect();
    let err = w.polygon(&points).unwrap_err();
    assert!(matches!(err, WandError::OutOfMemory));
    assert!(w.is_poisoned());
    assert_eq!(w.vector_graphics(), "point 1,1\n");
}

#[test]
fn long_point_lists_wrap_at_the_configured_column() {
    let mut img = TargetImage::new(100, 100);
    let settings = WandSettings {
        wrap_column: 20,
        ..WandSettings::default()
    };
    let mut w = DrawingWand::with_settings(&mut img, settings);
    w.polyline(&[Point::new(100.0, 100.0); 5]).unwrap();
    assert_eq!(
        w.vector_graphics(),
        "polyline 100,100\n 100,100 100,100\n 100,100 100,100\n"
    );
}

#[test]
fn annotation_text_is_quoted_and_escaped() {
    let out = compile(|w| w.annotation(5.0, 10.0, r"it's a\b"));
    assert_eq!(out, "text 5,10 'it\\'s a\\\\b'\n");
}

#[test]
fn paint_methods_and_viewbox() {
    let out = compile(|w| {
        w.color(1.0, 2.0, PaintMethod::FloodFill)?;
        w.color(1.0, 2.0, PaintMethod::FillToBorder)?;
        w.matte(3.0, 4.0, PaintMethod::Reset)?;
        w.matte(3.0, 4.0, PaintMethod::Replace)?;
        w.set_viewbox(0, 0, 640, -480)
    });
    assert_eq!(
        out,
        "color 1,2 floodfill\n\
         color 1,2 filltoborder\n\
         matte 3,4 reset\n\
         matte 3,4 replace\n\
         viewbox 0 0 640 -480\n"
    );
}

#[test]
fn primitives_are_indented_inside_scopes() {
    let out = compile(|w| {
        w.push_graphic_context()?;
        w.push_graphic_context()?;
        w.point(1.0, 1.0)?;
        w.pop_graphic_context()?;
        w.pop_graphic_context()
    });
    assert_eq!(
        out,
        "push graphic-context\n push graphic-context\n  point 1,1\n pop graphic-context\npop graphic-context\n"
    );
}

use super::*;
use crate::{
    foundation::error::WandError, path::state::PathState, target::image::TargetImage,
    wand::settings::WandSettings,
};

fn compile(f: impl FnOnce(&mut DrawingWand<'_>) -> WandResult<()>) -> String {
    let mut img = TargetImage::new(100, 100);
    let mut w = DrawingWand::new(&mut img);
    w.path_start().unwrap();
    f(&mut w).unwrap();
    w.path_finish().unwrap();
    w.vector_graphics().to_owned()
}

#[test]
fn repeated_operations_share_a_command_letter() {
    let out = compile(|w| {
        w.path_move_to_absolute(0.0, 0.0)?;
        w.path_line_to_absolute(10.0, 0.0)?;
        w.path_line_to_absolute(10.0, 10.0)
    });
    assert_eq!(out, "path 'M0,0 L10,0 10,10'\n");
}

#[test]
fn unset_mode_compacts_with_absolute() {
    let out = compile(|w| {
        w.path_line_to(PathMode::None, 1.0, 1.0)?;
        w.path_line_to(PathMode::Absolute, 2.0, 2.0)
    });
    assert_eq!(out, "path 'L1,1 2,2'\n");
}

#[test]
fn mode_switch_starts_a_new_command() {
    let out = compile(|w| {
        w.path_line_to_absolute(10.0, 0.0)?;
        w.path_line_to_relative(0.0, 10.0)?;
        w.path_line_to_relative(-5.0, 0.0)
    });
    assert_eq!(out, "path 'L10,0 l0,10 -5,0'\n");
}

#[test]
fn close_follows_the_previous_mode() {
    let out = compile(|w| {
        w.path_move_to_relative(1.0, 1.0)?;
        w.path_line_to_horizontal_relative(4.0)?;
        w.path_close()?;
        w.path_move_to_absolute(0.0, 0.0)?;
        w.path_line_to_vertical_absolute(3.0)?;
        w.path_close()?;
        w.path_close()
    });
    assert_eq!(out, "path 'm1,1 h4 z M0,0 V3 Z Z'\n");
}

#[test]
fn close_without_prior_operation_is_absolute() {
    let out = compile(|w| w.path_close());
    assert_eq!(out, "path 'Z'\n");
}

#[test]
fn curves_and_arcs_wrap_past_the_column() {
    let out = compile(|w| {
        w.path_move_to_absolute(0.0, 0.0)?;
        w.path_curve_to_absolute(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)?;
        w.path_curve_to_absolute(7.0, 8.0, 9.0, 10.0, 11.0, 12.0)?;
        w.path_curve_to_smooth_relative(1.0, 1.0, 2.0, 2.0)?;
        w.path_curve_to_quadratic_bezier_absolute(1.0, 1.0, 2.0, 0.0)?;
        w.path_curve_to_quadratic_bezier_smooth_absolute(4.0, 0.0)?;
        w.path_curve_to_quadratic_bezier_smooth_relative(2.0, 0.0)?;
        w.path_elliptic_arc_absolute(5.0, 5.0, 30.0, true, false, 10.0, 10.0)?;
        w.path_elliptic_arc_relative(2.5, 2.5, 0.0, false, true, 1.0, 1.0)
    });
    assert_eq!(
        out,
        "path 'M0,0 C1,2 3,4 5,6 7,8 9,10 11,12 s1,1 2,2 Q1,1 2,0 T4,0 t2,0\n \
         A5,5 30 1 0 10,10 a2.5,2.5 0 0 1 1,1'\n"
    );
}

#[test]
fn each_path_starts_fresh() {
    let mut img = TargetImage::new(100, 100);
    let mut w = DrawingWand::new(&mut img);
    for _ in 0..2 {
        w.path_start().unwrap();
        w.path_move_to(PathMode::Absolute, 1.0, 1.0).unwrap();
        w.path_finish().unwrap();
    }
    assert_eq!(w.vector_graphics(), "path 'M1,1'\npath 'M1,1'\n");
    assert_eq!(w.path_state(), PathState::default());
}

#[test]
fn failed_write_keeps_the_compaction_state() {
    let mut img = TargetImage::new(100, 100);
    let settings = WandSettings {
        max_output_bytes: Some(12),
        ..WandSettings::default()
    };
    let mut w = DrawingWand::with_settings(&mut img, settings);
    w.path_start().unwrap();
    w.path_move_to_absolute(0.0, 0.0).unwrap();
    let before = w.path_state();
    let err = w.path_line_to_absolute(10.0, 0.0).unwrap_err();
    assert!(matches!(err, WandError::OutOfMemory));
    assert_eq!(w.path_state(), before);
    assert_eq!(before.operation(), PathOperation::MoveTo);
    assert_eq!(w.vector_graphics(), "path 'M0,0");
}

use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn push_clones_top_and_pop_restores() {
    let mut s = GraphicContextStack::new();
    s.current_mut().fill = Rgba8::rgb(255, 0, 0);
    s.push();
    assert_eq!(s.depth(), 2);
    assert_eq!(s.current().fill, Rgba8::rgb(255, 0, 0));

    s.current_mut().fill = Rgba8::rgb(0, 0, 255);
    assert_eq!(s.root().fill, Rgba8::rgb(255, 0, 0));

    let popped = s.pop().unwrap();
    assert_eq!(popped.fill, Rgba8::rgb(0, 0, 255));
    assert_eq!(s.current().fill, Rgba8::rgb(255, 0, 0));
    assert_eq!(s.depth(), 1);
}

#[test]
fn popping_root_fails_loudly() {
    let mut s = GraphicContextStack::new();
    s.push();
    s.pop().unwrap();
    let err = s.pop().unwrap_err();
    assert!(matches!(err, WandError::UnbalancedContextStack));
    assert_eq!(s.depth(), 1);
}

#[test]
fn reset_drops_everything_above_a_fresh_root() {
    let mut s = GraphicContextStack::new();
    s.current_mut().point_size = 30.0;
    s.push();
    s.push();
    s.reset();
    assert_eq!(s.depth(), 1);
    assert_eq!(s.current(), &GraphicContext::default());
}

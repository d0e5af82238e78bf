use super::*;

fn g4(v: f64) -> String {
    G4(v).to_string()
}

fn g6(v: f64) -> String {
    G6(v).to_string()
}

#[test]
fn presets_construct_in_const_context() {
    const HALF: G4 = G4(0.5);
    const THIRD: G6 = G6(1.0 / 3.0);
    assert_eq!(HALF, SigFig::<4>(0.5));
    assert_eq!(HALF.to_string(), "0.5");
    assert_eq!(THIRD.to_string(), "0.333333");
}

#[test]
fn integers_print_without_fraction() {
    assert_eq!(g4(0.0), "0");
    assert_eq!(g4(10.0), "10");
    assert_eq!(g4(-250.0), "-250");
    assert_eq!(g4(1000.0), "1000");
}

#[test]
fn fractions_are_trimmed_to_significant_digits() {
    assert_eq!(g4(0.5), "0.5");
    assert_eq!(g4(1.0 / 3.0), "0.3333");
    assert_eq!(g4(2.71828), "2.718");
    assert_eq!(g4(-2.5), "-2.5");
    assert_eq!(g6(std::f64::consts::FRAC_1_SQRT_2), "0.707107");
}

#[test]
fn switches_to_scientific_like_c() {
    assert_eq!(g4(123456.0), "1.235e+05");
    assert_eq!(g4(0.0001), "0.0001");
    assert_eq!(g4(0.00001), "1e-05");
    assert_eq!(g6(6.123233995736766e-17), "6.12323e-17");
    assert_eq!(g6(1234567.0), "1.23457e+06");
}

#[test]
fn special_values() {
    assert_eq!(g4(-0.0), "-0");
    assert_eq!(g4(f64::NAN), "nan");
    assert_eq!(g4(f64::INFINITY), "inf");
    assert_eq!(g4(f64::NEG_INFINITY), "-inf");
}

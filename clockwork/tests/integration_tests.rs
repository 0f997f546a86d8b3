//! Integration-level smoke tests for the `clockwork` facade crate.

use clockwork::*;

use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

#[test]
fn smoke_test_unit_conversion() {
    let deg = Degrees::new(180.0);
    let rad: Radians = deg.to();
    assert_abs_diff_eq!(rad.value(), PI, epsilon = 1e-12);

    let hours: HourAngles = Degrees::new(90.0).to();
    assert_abs_diff_eq!(hours.value(), 6.0, epsilon = 1e-12);

    let gon: Gradians = Turns::new(0.5).to();
    assert_abs_diff_eq!(gon.value(), 200.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_turn_constants() {
    assert_eq!(Degrees::FULL_TURN.value(), 360.0);
    assert_eq!(HourAngles::HALF_TURN.value(), 12.0);
    assert_abs_diff_eq!(Radians::QUARTER_TURN.value(), PI / 2.0, epsilon = 1e-15);
    assert_abs_diff_eq!(DaysOfYear::FULL_TURN.value(), TROPICAL_YEAR_DAYS, epsilon = 1e-9);
}

#[test]
fn smoke_test_display() {
    assert_eq!(Degrees::new(12.5).to_string(), "12.5 Deg");
    assert_eq!(HourAngles::new(3.0).to_string(), "3 Hms");
}

#[test]
fn smoke_test_typed_wrapping() {
    assert_eq!(Degrees::new(-180.0).wrap_signed().value(), 180.0);
    assert_eq!(Degrees::new(180.0).wrap_signed_lo().value(), -180.0);
    assert_eq!(HourAngles::new(-3.0).wrap_pos().value(), 21.0);
    assert_eq!(
        Degrees::new(10.0).abs_separation(Degrees::new(350.0)).value(),
        20.0
    );
}

#[test]
fn smoke_test_typed_sectors() {
    let heading = Degrees::new(5.0);
    assert!(heading.is_between(Degrees::new(350.0), Degrees::new(20.0)));
    assert!(!heading.is_between(Degrees::new(20.0), Degrees::new(350.0)));
    assert!(heading.is_within_minor_arc(Degrees::new(20.0), Degrees::new(350.0)));
}

#[test]
fn smoke_test_typed_statistics() {
    let hours = [
        HourAngles::new(23.0),
        HourAngles::new(0.5),
        HourAngles::new(1.5),
    ];
    let mean = stats::circular_mean(&hours, &MeanOptions::default()).unwrap();
    assert!(mean.value() > 0.0 && mean.value() < 1.0);
    assert!(stats::circular_var(&hours, false).unwrap() < 0.1);
}

#[test]
fn smoke_test_sieve() {
    let deg = Circle::DEGREES;
    assert_eq!(
        deg.sieve(&[0.0, 15.0, 180.0, -5.0], 350.0, 20.0),
        vec![true, true, false, true]
    );
    assert_eq!(
        deg.sieve_sectors(&[5.0], &[0.0, 90.0], &[10.0, 180.0]),
        Ok(vec![true, false])
    );
    assert_eq!(
        deg.sieve_sectors(&[5.0, 6.0, 7.0], &[0.0, 90.0], &[10.0, 180.0]),
        Err(CircularError::BroadcastMismatch {
            angles: 3,
            sectors: 2
        })
    );
}

#[test]
fn smoke_test_differences() {
    let deg = Circle::DEGREES;
    assert_eq!(deg.sub(10.0, 350.0, true), 20.0);
    assert_eq!(deg.sub(10.0, 350.0, false), 340.0);
    assert_eq!(deg.signed_sub(10.0, 350.0), 20.0);
    assert_eq!(deg.signed_sub(350.0, 10.0), -20.0);
    assert_eq!(angle_difference(0.0, 180.0), 180.0);
}

#[test]
fn smoke_test_config_drives_circle() {
    let config = ClockworkConfig::from_toml_str("[circle]\nunit = \"turn\"\n").unwrap();
    let circle = config.circle().unwrap();
    let mean = circle
        .mean(&[0.95, 0.05], &config.mean_options())
        .unwrap();
    assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-9);
}

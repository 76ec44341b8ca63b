//! Colebrook 마찰계수 반복 계산 회귀 테스트.
use approx::assert_relative_eq;
use friction_bp_toolbox::friction::{
    colebrook_update, friction_factors, solve_colebrook, ColebrookParams, FrictionError,
};
use proptest::prelude::*;

const ROUGHNESS: f64 = 0.000166;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.2e}, tol {tol})"
    );
}

#[test]
fn laminar_reference_point_converges() {
    let f = solve_colebrook(300.0, ROUGHNESS, &ColebrookParams::default()).expect("Re=300");
    assert!(f > 0.0);
    assert_close("f(300)", f, 0.100_441, 5e-6);
}

#[test]
fn reference_table_values() {
    let params = ColebrookParams::default();
    let cases = [
        (600.0, 0.075_736),
        (900.0, 0.065_104),
        (3000.0, 0.043_668),
        (6000.0, 0.035_704),
        (9000.0, 0.032_005),
    ];
    for (re, expected) in cases {
        let f = solve_colebrook(re, ROUGHNESS, &params).expect("converges");
        assert_close(&format!("f({re})"), f, expected, 5e-6);
    }
}

#[test]
fn result_is_a_fixed_point_within_tolerance() {
    let params = ColebrookParams::default();
    let f = solve_colebrook(1.0e5, ROUGHNESS, &params).unwrap();
    let next = colebrook_update(1.0e5, ROUGHNESS, f).unwrap();
    assert_relative_eq!(f, next, max_relative = 1e-4);
}

#[test]
fn smooth_pipe_is_supported() {
    let f = solve_colebrook(1.0e5, 0.0, &ColebrookParams::default()).unwrap();
    assert_close("smooth f(1e5)", f, 0.017_990, 5e-6);
}

#[test]
fn exhausted_budget_reports_no_result() {
    let params = ColebrookParams {
        max_iterations: 2,
        tolerance: 1e-15,
        ..ColebrookParams::default()
    };
    match solve_colebrook(300.0, ROUGHNESS, &params) {
        Err(FrictionError::NotConverged { iterations, .. }) => assert_eq!(iterations, 2),
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn zero_budget_never_converges() {
    let params = ColebrookParams {
        max_iterations: 0,
        ..ColebrookParams::default()
    };
    let err = solve_colebrook(3000.0, ROUGHNESS, &params).unwrap_err();
    assert!(matches!(err, FrictionError::NotConverged { iterations: 0, .. }));
}

#[test]
fn invalid_domain_is_reported_not_nan() {
    let params = ColebrookParams::default();
    // 음수 Re는 로그 인자를 음수로 만든다
    let err = solve_colebrook(-300.0, ROUGHNESS, &params).unwrap_err();
    assert!(matches!(err, FrictionError::Domain { .. }));
    // Re = 0 이면 2.51/0 이 무한대가 된다
    let err = solve_colebrook(0.0, ROUGHNESS, &params).unwrap_err();
    assert!(matches!(err, FrictionError::Domain { .. }));
    let bad_guess = ColebrookParams {
        initial_guess: 0.0,
        ..params
    };
    let err = solve_colebrook(3000.0, ROUGHNESS, &bad_guess).unwrap_err();
    assert_eq!(err.short_label(), "domain error");
}

#[test]
fn batch_keeps_input_order() {
    let re_list = [300.0, 600.0, 900.0, 3000.0, 6000.0, 9000.0];
    let table = friction_factors(&re_list, ROUGHNESS, &ColebrookParams::default());
    assert_eq!(table.len(), re_list.len());
    for (row, re) in table.rows().iter().zip(re_list) {
        assert_eq!(row.reynolds, re);
        let f = row.outcome.expect("all reference points converge");
        assert!(f > 0.0);
    }
    assert_eq!(table.converged().count(), re_list.len());
}

#[test]
fn batch_collapses_duplicates_at_first_position() {
    let table = friction_factors(
        &[3000.0, 600.0, 3000.0, 900.0],
        ROUGHNESS,
        &ColebrookParams::default(),
    );
    let order: Vec<f64> = table.rows().iter().map(|row| row.reynolds).collect();
    assert_eq!(order, vec![3000.0, 600.0, 900.0]);
    assert!(table.get(3000.0).is_some());
    assert!(table.get(1234.0).is_none());
}

#[test]
fn batch_keeps_failures_as_entries() {
    let table = friction_factors(&[-5.0, 3000.0], ROUGHNESS, &ColebrookParams::default());
    assert_eq!(table.len(), 2);
    assert!(table.get(-5.0).unwrap().is_err());
    assert!(table.get(3000.0).unwrap().is_ok());
    assert_eq!(table.converged().count(), 1);
}

proptest! {
    #[test]
    fn repeated_solves_are_bit_identical(re in 2.0e3_f64..1.0e8, eps in 0.0_f64..0.05) {
        let params = ColebrookParams::default();
        let first = solve_colebrook(re, eps, &params);
        let second = solve_colebrook(re, eps, &params);
        prop_assert_eq!(first.map(f64::to_bits), second.map(f64::to_bits));
    }

    #[test]
    fn turbulent_factors_are_positive(re in 4.0e3_f64..1.0e8, eps in 0.0_f64..0.05) {
        let f = solve_colebrook(re, eps, &ColebrookParams::default()).unwrap();
        prop_assert!(f > 0.0 && f < 0.2);
    }
}

//! End-to-end checks of the calculator's reference scenarios

use approx::{assert_abs_diff_eq, assert_relative_eq};
use mortgage_calc::export::{read_schedule, schedule_to_string};
use mortgage_calc::{
    annuity_payment, annuity_schedule, build_schedule, differentiated_schedule,
    max_principal_by_payment, needed_apr_for_payment, needed_years_for_payment, sum_schedule,
    LoanParams, PaymentType,
};

const LOANS: &[(f64, f64, f64)] = &[
    (4_800_000.0, 13.5, 25.0),
    (1_000_000.0, 0.0, 10.0),
    (350_000.0, 6.75, 30.0),
    (90_000.0, 24.0, 3.0),
    (12_500.0, 9.9, 0.5),
];

#[test]
fn example_annuity_loan() {
    let rows = annuity_schedule(4_800_000.0, 13.5, 25.0);

    assert_abs_diff_eq!(annuity_payment(4_800_000.0, 13.5, 25.0), 55_950.95, epsilon = 0.01);
    assert_eq!(rows.len(), 300);
    assert_eq!(rows.last().unwrap().balance, 0.0);
}

#[test]
fn example_differentiated_loan() {
    let rows = differentiated_schedule(4_800_000.0, 13.5, 25.0);
    let first = rows.first().unwrap();
    let last = rows.last().unwrap();

    assert_eq!(rows.len(), 300);
    assert!(first.payment > last.payment);
    assert_relative_eq!(first.principal, 16_000.0, max_relative = 1e-12);
    assert_relative_eq!(first.interest, 54_000.0, max_relative = 1e-12);
    assert_relative_eq!(first.payment, 70_000.0, max_relative = 1e-12);
}

#[test]
fn interest_free_loan() {
    let payment = annuity_payment(1_000_000.0, 0.0, 10.0);
    assert_relative_eq!(payment, 8_333.333_333_333_334, max_relative = 1e-15);

    let rows = annuity_schedule(1_000_000.0, 0.0, 10.0);
    assert!(rows.iter().all(|r| r.interest == 0.0));
}

#[test]
fn payment_below_interest_has_no_term() {
    assert_eq!(needed_years_for_payment(4_800_000.0, 13.5, 40_000.0), None);
    // the rate solver reports infeasibility the same way instead of NaN
    assert_eq!(needed_apr_for_payment(4_800_000.0, 25.0, 10_000.0), None);
}

#[test]
fn schedules_repay_principal() {
    for &(principal, apr, years) in LOANS {
        for payment_type in PaymentType::all() {
            let rows = build_schedule(&LoanParams::new(principal, apr, years, payment_type));
            let totals = sum_schedule(&rows);

            assert!(!rows.is_empty());
            assert_relative_eq!(totals.total_principal, principal, max_relative = 1e-3);
            assert_eq!(rows.last().unwrap().balance, 0.0);
            assert!(rows.len() as f64 <= (years * 12.0).round());
            for pair in rows.windows(2) {
                assert!(pair[1].balance <= pair[0].balance);
                assert_eq!(pair[1].month, pair[0].month + 1);
            }
        }
    }
}

#[test]
fn differentiated_payments_decline() {
    for &(principal, apr, years) in LOANS {
        let rows = differentiated_schedule(principal, apr, years);
        for pair in rows.windows(2) {
            assert!(pair[0].payment >= pair[1].payment);
        }
    }
}

#[test]
fn max_principal_inverts_annuity_payment() {
    for &(principal, apr, years) in LOANS {
        let payment = annuity_payment(principal, apr, years);
        assert_relative_eq!(
            max_principal_by_payment(payment, apr, years),
            principal,
            max_relative = 1e-9
        );
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let a = differentiated_schedule(777_777.0, 11.11, 22.0);
    let b = differentiated_schedule(777_777.0, 11.11, 22.0);
    assert_eq!(a, b);

    let x = needed_apr_for_payment(777_777.0, 22.0, 9_000.0);
    let y = needed_apr_for_payment(777_777.0, 22.0, 9_000.0);
    assert_eq!(x.map(f64::to_bits), y.map(f64::to_bits));
}

#[test]
fn export_round_trip() {
    let rows = differentiated_schedule(350_000.0, 6.75, 30.0);
    let text = schedule_to_string(&rows).unwrap();

    assert!(text.starts_with("month;payment;interest;principal;balance\n"));
    assert_eq!(read_schedule(text.as_bytes()).unwrap(), rows);
}

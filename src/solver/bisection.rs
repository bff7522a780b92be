//! Fixed-iteration bisection over a monotonic feasibility predicate

use log::trace;

/// Default number of halvings. 2^-70 of the starting interval is below f64 resolution
/// for any bracket the solvers use.
pub const DEFAULT_ITERATIONS: u32 = 70;

/// Narrow `[feasible, infeasible]` (in either order) for `iterations` steps and return
/// the feasible endpoint.
///
/// `is_feasible` must be monotonic over the interval: once it flips from true to false
/// moving from `feasible` toward `infeasible`, it stays false. The endpoints themselves
/// are not evaluated, so the caller is responsible for bracketing.
pub fn bisect<F>(mut feasible: f64, mut infeasible: f64, iterations: u32, mut is_feasible: F) -> f64
where
    F: FnMut(f64) -> bool,
{
    for step in 0..iterations {
        let mid = (feasible + infeasible) / 2.0;
        if is_feasible(mid) {
            feasible = mid;
        } else {
            infeasible = mid;
        }
        trace!("bisect step {}: feasible={} infeasible={}", step, feasible, infeasible);
    }
    feasible
}

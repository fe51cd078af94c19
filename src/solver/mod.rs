//! Newton-Raphson solvers with numerically estimated derivatives
//!
//! Two problems are solved, both from a caller-chosen starting point `x0`
//! and a differentiation step `d`:
//!
//! - [`solve_with_newton`]: find `x` with `f(x) = y0`, using a forward
//!   difference for `f'`.
//! - [`solve_diff_with_newton`]: find `x` with `f'(x) = dy0`, using a
//!   central difference for `f'` and a central second difference for `f''`.
//!
//! Iteration stops once two successive iterates are within `2d` of each
//! other. The plain functions carry no iteration cap: a function without a
//! root near `x0`, or one on which Newton's method oscillates, keeps them
//! looping. The `*_within` variants take a [`Budget`] and report
//! [`SunError::NoConvergence`](crate::SunError::NoConvergence) once it is
//! spent.

mod budget;

pub use budget::{Budget, IterationLimit, Unbounded};

/// Finds the solution to `f(x) = y0` using Newton's method
///
/// # Arguments
///
/// * `f` - function to solve
/// * `y0` - target value of the function
/// * `x0` - starting value
/// * `d` - step used to estimate the derivative
///
/// # Examples
///
/// ```rust
/// use sunpass::solver::solve_with_newton;
///
/// let x = solve_with_newton(|x| 3.0 * x + 2.0, 5.0, 0.0, 1e-5);
/// assert!((x - 1.0).abs() < 5e-6);
/// ```
pub fn solve_with_newton<F>(f: F, y0: f64, x0: f64, d: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    match solve_with_newton_within(f, y0, x0, d, &mut Unbounded) {
        Ok(x) => x,
        Err(never) => match never {},
    }
}

/// Finds the solution to `f'(x) = dy0` using Newton's method
///
/// # Arguments
///
/// * `f` - function whose derivative is solved
/// * `dy0` - target value of the derivative
/// * `x0` - starting value
/// * `d` - step used to estimate the first and second derivatives
pub fn solve_diff_with_newton<F>(f: F, dy0: f64, x0: f64, d: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    match solve_diff_with_newton_within(f, dy0, x0, d, &mut Unbounded) {
        Ok(x) => x,
        Err(never) => match never {},
    }
}

/// [`solve_with_newton`] charging one unit of `budget` per iteration
pub fn solve_with_newton_within<F, B>(
    f: F,
    y0: f64,
    x0: f64,
    d: f64,
    budget: &mut B,
) -> Result<f64, B::Error>
where
    F: Fn(f64) -> f64,
    B: Budget,
{
    iterate(x0, d, budget, |x| {
        let y = f(x);
        let dy = diff(y, f(x + d), d);
        x - (y - y0) / dy
    })
}

/// [`solve_diff_with_newton`] charging one unit of `budget` per iteration
pub fn solve_diff_with_newton_within<F, B>(
    f: F,
    dy0: f64,
    x0: f64,
    d: f64,
    budget: &mut B,
) -> Result<f64, B::Error>
where
    F: Fn(f64) -> f64,
    B: Budget,
{
    let d2 = d * d;
    iterate(x0, d, budget, |x| {
        let yp = f(x - d);
        let y = f(x);
        let yn = f(x + d);
        let dy = diff(yp, yn, 2.0 * d);
        let d2y = diff2(yp, y, yn, d2);
        x - (dy - dy0) / d2y
    })
}

/// Applies `step` until successive iterates are within `2d`
fn iterate<B, S>(x0: f64, d: f64, budget: &mut B, step: S) -> Result<f64, B::Error>
where
    B: Budget,
    S: Fn(f64) -> f64,
{
    let mut x = x0;
    loop {
        budget.spend()?;
        let next = step(x);
        // NaN compares false here, so a degenerate derivative ends the loop
        if (x - next).abs() > d * 2.0 {
            x = next;
        } else {
            return Ok(next);
        }
    }
}

fn diff(a: f64, b: f64, d: f64) -> f64 {
    (b - a) / d
}

fn diff2(yp: f64, y: f64, yn: f64, d2: f64) -> f64 {
    (yp - 2.0 * y + yn) / d2
}

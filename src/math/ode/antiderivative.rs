use thiserror::Error;

use crate::math::curve::hermitecubic::HermiteCubic;
use crate::math::ode::rungekutta::rk23;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AntiderivativeError {
    #[error("antiderivative not invertible")]
    NotInvertible,
}

/// antiderivative of a vectorised function as a piecewise-cubic interpolant
pub fn antideriv<F>(f: F, x0: f64, x1: f64, h: f64, c: f64, atol: f64, rtol: f64) -> HermiteCubic
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let knots = rk23(f, x0, x1, c, h, atol, rtol);
    HermiteCubic::new(knots.x, knots.y, knots.yp)
        .expect("integrator returned fewer than two knots")
}

/// antiderivative together with its inverse
///
/// The inverse exists when the integrand keeps a single sign over the whole
/// domain, making the antiderivative strictly monotonic. The inverse swaps
/// the knot axes and uses reciprocal derivatives, reversing the arrays when
/// the antiderivative decreases so the new abscissa axis is increasing.
pub fn antideriv_with_inverse<F>(
    f: F,
    x0: f64,
    x1: f64,
    h: f64,
    c: f64,
    atol: f64,
    rtol: f64,
) -> Result<(HermiteCubic, HermiteCubic), AntiderivativeError>
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let knots = rk23(f, x0, x1, c, h, atol, rtol);

    let increasing = knots.y.windows(2).all(|w| w[1] > w[0]);
    let decreasing = knots.y.windows(2).all(|w| w[1] < w[0]);

    let inverse = if increasing {
        let rp: Vec<f64> = knots.yp.iter().map(|v| 1.0 / v).collect();
        HermiteCubic::new(knots.y.clone(), knots.x.clone(), rp)
    } else if decreasing {
        let xr: Vec<f64> = knots.x.iter().rev().copied().collect();
        let yr: Vec<f64> = knots.y.iter().rev().copied().collect();
        let rp: Vec<f64> = knots.yp.iter().rev().map(|v| 1.0 / v).collect();
        HermiteCubic::new(yr, xr, rp)
    } else {
        return Err(AntiderivativeError::NotInvertible);
    }
    .expect("integrator returned fewer than two knots");

    let forward = HermiteCubic::new(knots.x, knots.y, knots.yp)
        .expect("integrator returned fewer than two knots");

    Ok((forward, inverse))
}

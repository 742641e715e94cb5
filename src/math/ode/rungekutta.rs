
// ─────────────────────────────────────────────
// Bogacki–Shampine 3(2) tableau
// ─────────────────────────────────────────────

const A: [f64; 4] = [0.0, 0.5, 0.75, 1.0];
const C: [f64; 4] = [2.0 / 9.0, 1.0 / 3.0, 4.0 / 9.0, 0.0];
const CS: [f64; 4] = [7.0 / 24.0, 0.25, 1.0 / 3.0, 0.125];
const SAFETY: f64 = 0.95;

// fraction of the integration span below which a step is no longer allowed
// to shrink, so the rejection loop always terminates
const MIN_STEP_FRACTION: f64 = 1e-14;

/// knots produced by the adaptive integrator, sufficient for exact
/// piecewise-cubic reconstruction of the antiderivative
pub struct KnotSequence {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub yp: Vec<f64>,
}

impl KnotSequence {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

fn dot(w: &[f64; 4], k: &[f64]) -> f64 {
    w.iter().zip(k).map(|(wi, ki)| wi * ki).sum()
}

/// adaptive Runge-Kutta integration of order 3(2)
///
/// The function `f` must be vectorised: called with a slice of abscissas it
/// returns one value per abscissa. The stored derivative at an accepted knot
/// is the stage derivative at the step start; the final knot's derivative is
/// evaluated directly at the endpoint. Interpolation relies on exactly this
/// convention.
pub fn rk23<F>(f: F, x0: f64, x1: f64, y0: f64, h: f64, atol: f64, rtol: f64) -> KnotSequence
where
    F: Fn(&[f64]) -> Vec<f64>,
{
    let mut knots = KnotSequence {
        x: Vec::new(),
        y: Vec::new(),
        yp: Vec::new(),
    };

    let h_min = MIN_STEP_FRACTION * (x1 - x0).abs();
    let mut h = h;
    let mut xn = x0;
    let mut yn = y0;

    while xn < x1 {
        if xn + h > x1 {
            h = x1 - xn;
        }
        let stages: Vec<f64> = A.iter().map(|a| xn + a * h).collect();
        let k = f(&stages);

        let xnp1 = xn + h;
        let ynp1 = yn + h * dot(&C, &k);
        let ysnp1 = yn + h * dot(&CS, &k);

        let d0 = (atol + rtol * yn.abs()) / 2.0;
        let d1 = (ynp1 - ysnp1).abs();

        if d0 >= d1 || h <= h_min {
            h = if d1 > 0.0 {
                SAFETY * h * (d0 / d1).powf(0.20)
            } else {
                2.0 * h
            };
            knots.x.push(xn);
            knots.y.push(yn);
            knots.yp.push(k[0]);
            xn = xnp1;
            // the embedded second-order estimate carries the accuracy
            yn = ysnp1;
        } else {
            h = SAFETY * h * (d0 / d1).powf(0.25);
        }
        // the growth/shrink update must not push the step back under the
        // floor, or forced acceptances stop advancing
        h = h.max(h_min);
    }

    knots.x.push(xn);
    knots.y.push(yn);
    knots.yp.push(f(&[xn])[0]);

    knots
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use crate::math::curve::hermitecubic::evaluate_cubic;

    #[test]
    fn covers_domain_endpoints() {
        let knots = rk23(|xs| xs.to_vec(), 0.0, 1.0, 0.0, 0.1, 1e-8, 1e-8);
        assert_eq!(knots.x[0], 0.0);
        assert_eq!(*knots.x.last().unwrap(), 1.0);
        assert_eq!(knots.x.len(), knots.y.len());
        assert_eq!(knots.x.len(), knots.yp.len());
    }

    #[test]
    fn integrates_identity() {
        // antiderivative of f(x) = x is x^2/2
        let knots = rk23(|xs| xs.to_vec(), 0.0, 1.0, 0.0, 0.1, 1e-8, 1e-8);
        assert_abs_diff_eq!(*knots.y.last().unwrap(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn integrates_cosine() {
        // antiderivative of cos is sin; check the interpolant between knots
        let knots = rk23(
            |xs| xs.iter().map(|v| v.cos()).collect(),
            0.0,
            2.0,
            0.0,
            0.05,
            1e-8,
            1e-8,
        );
        for i in 0..40 {
            let xi = 0.025 + 0.05 * i as f64;
            let v = evaluate_cubic(xi, &knots.x, &knots.y, &knots.yp);
            assert_abs_diff_eq!(v, xi.sin(), epsilon = 1e-5);
        }
    }

    #[test]
    fn terminates_across_discontinuity() {
        // a jump integrand keeps the local error estimate large near the
        // jump; the step floor has to carry the solution across instead of
        // letting the step shrink forever
        let jump = |xs: &[f64]| {
            xs.iter()
                .map(|&v| if v < 0.5 { 0.0 } else { 1e8 })
                .collect()
        };
        let knots = rk23(jump, 0.0, 1.0, 0.0, 0.1, 1e-12, 1e-12);
        assert_eq!(*knots.x.last().unwrap(), 1.0);
        assert_relative_eq!(*knots.y.last().unwrap(), 5e7, max_relative = 1e-6);
    }

    #[test]
    fn stage_derivative_stored_at_step_start() {
        let knots = rk23(
            |xs| xs.iter().map(|v| v.exp()).collect(),
            0.0,
            1.0,
            1.0,
            0.1,
            1e-8,
            1e-8,
        );
        for (x, yp) in knots.x.iter().zip(&knots.yp) {
            assert_relative_eq!(*yp, x.exp(), max_relative = 1e-12);
        }
    }
}

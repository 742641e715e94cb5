use crate::math::curve::curve::Curve;

// ─────────────────────────────────────────────
// Segment evaluation
// ─────────────────────────────────────────────
//
// Hermite cubic on [x[i0], x[i0+1]] with the derivative values scaled by the
// segment width, written in Horner form over t = (xi - x[i0]) / dx:
//   a = 2*f0 - 2*f1 + fp0 + fp1
//   b = -3*f0 + 3*f1 - 2*fp0 - fp1
//   c = fp0
//   d = f0

fn segment_value(xi: f64, i0: usize, x: &[f64], y: &[f64], yp: &[f64]) -> f64 {
    let i1 = i0 + 1;
    let dx = x[i1] - x[i0];
    let t = (xi - x[i0]) / dx;

    let f0 = y[i0];
    let f1 = y[i1];
    let fp0 = dx * yp[i0];
    let fp1 = dx * yp[i1];

    let a = 2.0 * f0 - 2.0 * f1 + fp0 + fp1;
    let b = -3.0 * f0 + 3.0 * f1 - 2.0 * fp0 - fp1;
    let c = fp0;
    let d = f0;

    ((a * t + b) * t + c) * t + d
}

fn segment_derivative(xi: f64, i0: usize, x: &[f64], y: &[f64], yp: &[f64]) -> f64 {
    let i1 = i0 + 1;
    let dx = x[i1] - x[i0];
    let t = (xi - x[i0]) / dx;

    let f0 = y[i0];
    let f1 = y[i1];
    let fp0 = dx * yp[i0];
    let fp1 = dx * yp[i1];

    let a = 2.0 * f0 - 2.0 * f1 + fp0 + fp1;
    let b = -3.0 * f0 + 3.0 * f1 - 2.0 * fp0 - fp1;
    let c = fp0;

    ((3.0 * a * t + 2.0 * b) * t + c) / dx
}

fn find_segment(xi: f64, x: &[f64]) -> usize {
    // first knot strictly greater than xi, clamped to the end segments so
    // queries at the last knot fall into the final segment
    let i1 = x.partition_point(|&v| v <= xi);
    i1.clamp(1, x.len() - 1) - 1
}

/// cubic interpolation given values and derivatives at the bracketing knots
pub fn evaluate_cubic(xi: f64, x: &[f64], y: &[f64], yp: &[f64]) -> f64 {
    segment_value(xi, find_segment(xi, x), x, y, yp)
}

// ─────────────────────────────────────────────
// HermiteCubic
// ─────────────────────────────────────────────

#[derive(Debug)]
pub struct HermiteCubic {
    x: Vec<f64>,
    y: Vec<f64>,
    yp: Vec<f64>,
}

impl HermiteCubic {
    pub fn new(x: Vec<f64>, y: Vec<f64>, yp: Vec<f64>) -> Option<HermiteCubic> {
        if x.len() < 2 || x.len() != y.len() || x.len() != yp.len() {
            return None;
        }
        Some(HermiteCubic { x, y, yp })
    }

    pub fn knots(&self) -> (&[f64], &[f64], &[f64]) {
        (&self.x, &self.y, &self.yp)
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        *self.x.last().unwrap()
    }

    pub fn values(&self, xi: &[f64]) -> Vec<f64> {
        xi.iter().map(|&v| self.value(v)).collect()
    }
}

impl Curve for HermiteCubic {
    fn value(&self, xi: f64) -> f64 {
        segment_value(xi, find_segment(xi, &self.x), &self.x, &self.y, &self.yp)
    }

    fn derivative(&self, xi: f64) -> f64 {
        segment_derivative(xi, find_segment(xi, &self.x), &self.x, &self.y, &self.yp)
    }
}

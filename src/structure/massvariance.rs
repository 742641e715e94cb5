use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayD, ArrayView1, ArrayViewD};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use serde::{Deserialize, Serialize};

use crate::structure::transformerror::TransformError;
use crate::structure::window::Window;

// low-ringing behaviour is unspecified for very short grids
const MIN_GRID_POINTS: usize = 4;

// tolerances for recognising a logarithmic grid and a real Nyquist coefficient
const GRID_ATOL: f64 = 1e-8;
const GRID_RTOL: f64 = 1e-5;
const NYQUIST_IM_TOL: f64 = 1e-8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sigma2Options {
    pub q: f64,
    pub kr: f64,
    pub window: Window,
    pub krgood: bool,
    pub deriv: bool,
}

impl Default for Sigma2Options {
    fn default() -> Sigma2Options {
        Sigma2Options {
            q: 0.0,
            kr: 1.0,
            window: Window::Tophat,
            krgood: true,
            deriv: false,
        }
    }
}

#[derive(Debug)]
pub struct MassVariance {
    pub r: Array1<f64>,
    pub sigma2: ArrayD<f64>,
    pub dsigma2_dlnr: Option<ArrayD<f64>>,
}

// inverse real FFT from the half spectrum, rebuilding the conjugate-symmetric
// upper coefficients and normalising by 1/n (rustfft leaves transforms
// unnormalised)
fn irfft(cm: &[Complex64], n: usize, fft: &dyn Fft<f64>) -> Vec<f64> {
    let m = cm.len() - 1;
    let mut full = vec![Complex64::new(0.0, 0.0); n];
    full[..=m].copy_from_slice(cm);
    for j in (m + 1)..n {
        full[j] = cm[n - j].conj();
    }
    fft.process(&mut full);
    full.iter().map(|c| c.re / n as f64).collect()
}

/// mass variance from the matter power spectrum
///
/// FFTLog-style integral transform of a power spectrum sampled on a
/// logarithmic wavenumber grid (Hamilton 2000). Leading axes of `pk` are
/// independent spectra; the last axis must match `k`. Returns the radius
/// grid, the mass variance, and optionally its derivative with respect to
/// ln(r).
pub fn sigma2_r(
    k: ArrayView1<f64>,
    pk: ArrayViewD<f64>,
    options: &Sigma2Options,
) -> Result<MassVariance, TransformError> {
    let n = k.len();
    if n < MIN_GRID_POINTS {
        return Err(TransformError::GridTooSmall {
            minimum: MIN_GRID_POINTS,
            got: n,
        });
    }
    let last = pk.shape()[pk.ndim() - 1];
    if last != n {
        return Err(TransformError::ShapeMismatch { pk: last, k: n });
    }

    let q = options.q;
    let window = options.window;
    let mut lnkr = options.kr.ln();

    // log-space grid parameters
    let lnk1 = k[0].ln();
    let lnkn = k[n - 1].ln();
    let lnkc = (lnk1 + lnkn) / 2.0;
    let dlnk = (lnkn - lnk1) / (n - 1) as f64;
    let jc = (n - 1) as f64 / 2.0;

    for (j, &kj) in k.iter().enumerate() {
        let expected = (lnkc + (j as f64 - jc) * dlnk).exp();
        if (kj - expected).abs() > GRID_ATOL + GRID_RTOL * expected.abs() {
            return Err(TransformError::NotLogarithmicGrid);
        }
    }

    window.check_bias(q)?;

    // shift kr so the phase at the Nyquist frequency aligns with a multiple
    // of pi, keeping the boundary term real (low-ringing condition)
    if options.krgood {
        let y = PI / dlnk;
        let u = Complex64::new(0.0, -y * lnkr).exp() * window.spectral(Complex64::new(q, y));
        let a = u.arg() / PI;
        lnkr += dlnk * (a - a.round());
    }

    // transform coefficients u_m at y_m = 2*pi*m/(n*dlnk)
    let m = n / 2;
    let frequency = |j: usize| 2.0 * PI * j as f64 / (n as f64 * dlnk);
    let mut u: Vec<Complex64> = (0..=m)
        .map(|j| {
            let y = frequency(j);
            Complex64::new(0.0, -y * lnkr).exp() * window.spectral(Complex64::new(q, y))
        })
        .collect();

    if options.krgood && u[m].im.abs() > NYQUIST_IM_TOL {
        return Err(TransformError::LowRingingUnsatisfiable);
    }
    // a valid real-valued inverse transform needs a real Nyquist component
    if n % 2 == 0 {
        u[m].im = 0.0;
    }

    // output grid, reverse-ordered relative to k, and the prefactor
    let r = Array1::from_shape_fn(n, |i| lnkr.exp() / k[n - 1 - i]);
    let norm: Vec<f64> = r
        .iter()
        .map(|&ri| 1.0 / (2.0 * PI * PI * ri.powf(1.0 + q)))
        .collect();
    let weight: Vec<f64> = k.iter().map(|&kj| kj.powf(2.0 - q)).collect();

    let mut planner = FftPlanner::new();
    let forward = planner.plan_fft_forward(n);
    let inverse = planner.plan_fft_inverse(n);

    let shape = pk.raw_dim();
    let batch = pk.len() / n;
    let flat = pk
        .to_owned()
        .into_shape_with_order((batch, n))
        .expect("pk collapses to a row-per-spectrum matrix");

    let mut s2 = Array2::<f64>::zeros((batch, n));
    let mut ds2 = options.deriv.then(|| Array2::<f64>::zeros((batch, n)));

    let mut buf = vec![Complex64::new(0.0, 0.0); n];
    for b in 0..batch {
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = Complex64::new(flat[[b, i]] * weight[i], 0.0);
        }
        forward.process(&mut buf);

        let mut cm: Vec<Complex64> = buf[..=m].iter().zip(&u).map(|(c, ui)| c * ui).collect();

        let s = irfft(&cm, n, inverse.as_ref());
        for i in 0..n {
            s2[[b, i]] = s[n - 1 - i] * norm[i];
        }

        if let Some(d) = ds2.as_mut() {
            for (j, c) in cm.iter_mut().enumerate() {
                *c *= -Complex64::new(1.0 + q, frequency(j));
            }
            let sd = irfft(&cm, n, inverse.as_ref());
            for i in 0..n {
                d[[b, i]] = sd[n - 1 - i] * norm[i];
            }
        }
    }

    Ok(MassVariance {
        r,
        sigma2: s2
            .into_shape_with_order(shape.clone())
            .expect("output keeps the input shape"),
        dsigma2_dlnr: ds2.map(|d| {
            d.into_shape_with_order(shape)
                .expect("output keeps the input shape")
        }),
    })
}

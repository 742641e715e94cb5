use std::error::Error;

use ndarray::Array1;

use cosmonum::structure::massvariance::{sigma2_r, Sigma2Options};

fn main() -> Result<(), Box<dyn Error>> {
    // mock power spectrum with a realistic shape on a logarithmic grid
    let n = 40;
    let dlnk = (1e2_f64.ln() - 1e-4_f64.ln()) / (n - 1) as f64;
    let k = Array1::from_shape_fn(n, |j| (1e-4_f64.ln() + j as f64 * dlnk).exp());
    let pk = k.mapv(|v| 4e6 * v / (1.0 + 25.0 * v).powf(3.5));

    let options = Sigma2Options {
        q: 0.8,
        deriv: true,
        ..Default::default()
    };
    let out = sigma2_r(k.view(), pk.view().into_dyn(), &options)?;
    let ds2 = out.dsigma2_dlnr.unwrap();

    println!("{:>12} {:>14} {:>14}", "r", "sigma2", "dsigma2/dlnr");
    for i in (0..n).step_by(4) {
        println!(
            "{:>12.4e} {:>14.6e} {:>14.6e}",
            out.r[i],
            out.sigma2[[i]],
            ds2[[i]]
        );
    }

    Ok(())
}

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::math::special::loggamma::loggamma;
use crate::structure::transformerror::TransformError;

const SRPI: f64 = 1.7724538509055159;

/// smoothing window for the mass variance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    Tophat,
    Gaussian,
}

impl Window {
    pub fn name(&self) -> &'static str {
        match self {
            Window::Tophat => "tophat",
            Window::Gaussian => "gaussian",
        }
    }

    /// validity interval of the bias exponent for this window
    pub fn check_bias(&self, q: f64) -> Result<(), TransformError> {
        let valid = match self {
            Window::Tophat => -1.0 < q && q < 3.0,
            Window::Gaussian => q > -1.0,
        };
        if valid {
            Ok(())
        } else {
            Err(TransformError::BiasOutOfRange {
                window: self.name(),
                required: match self {
                    Window::Tophat => "-1 < q < 3",
                    Window::Gaussian => "q > -1",
                },
                q,
            })
        }
    }

    /// spectral kernel U(x) = integral of t^x w^2(t) dt over (0, inf)
    ///
    /// Evaluated through log-gamma for stability on complex arguments.
    pub fn spectral(&self, x: Complex64) -> Complex64 {
        match self {
            Window::Tophat => {
                let dlg = loggamma((1.0 + x) / 2.0) - loggamma((4.0 - x) / 2.0);
                let s = 4.0 - x;
                9.0 * SRPI * dlg.exp() / (s * s - 1.0)
            }
            Window::Gaussian => loggamma((x + 1.0) / 2.0).exp() / 2.0,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Window {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Window, TransformError> {
        match s {
            "tophat" => Ok(Window::Tophat),
            "gaussian" => Ok(Window::Gaussian),
            _ => Err(TransformError::UnknownWindow(s.to_owned())),
        }
    }
}

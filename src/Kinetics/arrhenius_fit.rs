//! Least-squares line through an Arrhenius plot.
//!
//! ln k = ln A - Ea/(R*T) is linear in 1/T, so fitting y = intercept + slope*x
//! with x = 1/T gives Ea = -slope*R and A = exp(intercept).
use crate::Kinetics::arrhenius::R;
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::series::ArrheniusSeries;
use log::info;
use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrheniusFit {
    /// d(ln k)/d(1/T), K
    pub slope: f64,
    /// ln A
    pub intercept: f64,
    /// -slope*R, J/mol
    pub activation_energy: f64,
    pub pre_exponential: f64,
    pub r_squared: f64,
}

/// Fits (1/T, ln k) pairs. Needs at least two distinct abscissas and finite data.
pub fn fit_arrhenius(points: &[(f64, f64)]) -> Result<ArrheniusFit, KineticsError> {
    let n = points.len();
    if n < 2 {
        return Err(KineticsError::Fit(format!(
            "at least 2 points are needed, got {}",
            n
        )));
    }
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(KineticsError::Fit("non-finite point in data".to_string()));
    }
    let x_mean = points.iter().map(|p| p.0).sum::<f64>() / n as f64;
    if points.iter().all(|p| (p.0 - x_mean).abs() <= f64::EPSILON * x_mean.abs()) {
        return Err(KineticsError::Fit(
            "all points share the same temperature".to_string(),
        ));
    }
    // design matrix [1, x]
    let X = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { points[i].0 });
    let y = DVector::from_iterator(n, points.iter().map(|p| p.1));
    let svd = X.clone().svd(true, true);
    let beta = svd
        .solve(&y, 1e-14)
        .map_err(|e| KineticsError::Fit(e.to_string()))?;
    let intercept = beta[0];
    let slope = beta[1];

    let residuals = &y - &X * &beta;
    let ss_res = residuals.norm_squared();
    let y_mean = y.mean();
    let ss_tot = y.iter().map(|v| (v - y_mean).powi(2)).sum::<f64>();
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

    Ok(ArrheniusFit {
        slope,
        intercept,
        activation_energy: -slope * R,
        pre_exponential: intercept.exp(),
        r_squared,
    })
}

impl ArrheniusSeries {
    /// Fit one line of the plot. The series stores 1000/T, so it is rescaled to 1/T.
    pub fn fit(&self, catalyst: bool) -> Result<ArrheniusFit, KineticsError> {
        let points: Vec<(f64, f64)> = self
            .0
            .iter()
            .map(|p| {
                let ln_k = if catalyst {
                    p.ln_k_with_catalyst
                } else {
                    p.ln_k_no_catalyst
                };
                (p.inverse_temperature / 1000.0, ln_k)
            })
            .collect();
        let fit = fit_arrhenius(&points)?;
        info!(
            "Arrhenius fit (catalyst = {}): Ea = {:.1} J/mol, A = {:.3e}, R² = {:.6}",
            catalyst, fit.activation_energy, fit.pre_exponential, fit.r_squared
        );
        Ok(fit)
    }
}

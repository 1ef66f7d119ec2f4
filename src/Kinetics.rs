//! # Reaction kinetics explorer engine
//!
//! How the rate of a model reaction responds to temperature, concentration,
//! reaction order and a catalyst.
//!
//! | Symbol | Value | Units |
//! |--------|-------|-------|
//! | `A` | 1e13 | s⁻¹ (first order), M⁻¹s⁻¹ (second order) |
//! | `Ea` | 50000 without catalyst, 30000 with | J/mol |
//! | `R` | 8.314 | J/(mol·K) |
//!
//! k = A·exp(-Ea/(R·T)); rate = k[A] (first order) or k[A][B] (second order).
//!
//! # Examples
//! ```
//! use KiRate::Kinetics::arrhenius::{ReactionOrder, ReactionParameters};
//! use KiRate::Kinetics::series::SeriesSet;
//! let params = ReactionParameters::new(310.0, 1.0, 0.5, true, ReactionOrder::Second);
//! let k = params.rate_constant();
//! assert!(k > 0.0);
//! let series = SeriesSet::generate(&params);
//! assert_eq!(series.temperature.0.len(), 21);
//! assert_eq!(series.concentration.0.len(), 30);
//! assert_eq!(series.arrhenius.0.len(), 11);
//! ```

/// constants, rate constant, rate law, half-life, symbolic k(T)
#[allow(non_snake_case)]
pub mod arrhenius;
/// least-squares activation energy from an Arrhenius plot
#[allow(non_snake_case)]
pub mod arrhenius_fit;
/// parameter snapshot that regenerates the series on every change
#[allow(non_snake_case)]
pub mod explorer;
pub mod kinetics_errors;
/// temperature, concentration and Arrhenius series
#[allow(non_snake_case)]
pub mod series;

mod explorer_tests;

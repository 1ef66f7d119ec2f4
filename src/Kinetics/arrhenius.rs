use crate::Kinetics::kinetics_errors::KineticsError;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// pre-exponential factor, s⁻¹ or M⁻¹s⁻¹ depending on the order
pub const PRE_EXPONENTIAL: f64 = 1e13;
/// activation energy of the uncatalysed path, J/mol
pub const EA_BASE: f64 = 50000.0;
/// activation energy of the catalysed path, J/mol
pub const EA_CATALYST: f64 = 30000.0;
/// gas constant, J/(mol·K)
pub const R: f64 = 8.314;
#[allow(non_upper_case_globals)]
const Rsym: Expr = Expr::Const(R);

/// Kelvin offset used for the °C axis of the temperature series
pub const KELVIN_OFFSET: f64 = 273.0;

/// Rate law shape: first order depends on [A] only, second order on [A][B]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReactionOrder {
    First,
    #[default]
    Second,
}

impl ReactionOrder {
    /// units of the rate constant for this order
    pub fn rate_constant_units(&self) -> &'static str {
        match self {
            ReactionOrder::First => "s⁻¹",
            ReactionOrder::Second => "M⁻¹s⁻¹",
        }
    }
    pub fn rate_law(&self) -> &'static str {
        match self {
            ReactionOrder::First => "Rate = k[A]",
            ReactionOrder::Second => "Rate = k[A][B]",
        }
    }
}

impl fmt::Display for ReactionOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReactionOrder::First => write!(f, "First Order ({})", self.rate_law()),
            ReactionOrder::Second => write!(f, "Second Order ({})", self.rate_law()),
        }
    }
}

impl FromStr for ReactionOrder {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "first" => Ok(ReactionOrder::First),
            "2" | "second" => Ok(ReactionOrder::Second),
            other => Err(format!("Unknown reaction order: {}", other)),
        }
    }
}

/// activation energy for the chosen path
pub fn activation_energy(catalyst: bool) -> f64 {
    if catalyst { EA_CATALYST } else { EA_BASE }
}

/// Arrhenius rate constant k = A*exp(-Ea/(R*T)).
///
/// Temp must be positive; the function does not check it and returns a
/// non-finite (or degenerate) value otherwise. Use [`checked_rate_constant`]
/// when the temperature comes from an unbounded source.
pub fn rate_constant(Temp: f64, catalyst: bool) -> f64 {
    let Ea = activation_energy(catalyst);
    PRE_EXPONENTIAL * f64::exp(-Ea / (R * Temp))
}

/// Same as [`rate_constant`] but rejects T <= 0 and non-finite temperatures.
pub fn checked_rate_constant(Temp: f64, catalyst: bool) -> Result<f64, KineticsError> {
    if !Temp.is_finite() || Temp <= 0.0 {
        return Err(KineticsError::invalid("temperature", Temp));
    }
    Ok(rate_constant(Temp, catalyst))
}

/// Reaction rate for the given rate law.
/// For first order `C_B` is accepted and ignored: rate = k[A].
pub fn reaction_rate(Temp: f64, C_A: f64, C_B: f64, catalyst: bool, order: ReactionOrder) -> f64 {
    let k = rate_constant(Temp, catalyst);
    match order {
        ReactionOrder::First => k * C_A,
        ReactionOrder::Second => k * C_A * C_B,
    }
}

/// Half-life from the rate constant. Closed form exists only for first order
/// (ln2/k); second-order half-life depends on [A]₀ and is not computed.
pub fn half_life(k: f64, order: ReactionOrder) -> Option<f64> {
    match order {
        ReactionOrder::First => Some(std::f64::consts::LN_2 / k),
        ReactionOrder::Second => None,
    }
}

/// symbolic k(T) in the variable "T"
pub fn rate_constant_expr(catalyst: bool) -> Expr {
    let T = Expr::Var("T".to_owned());
    let A = Expr::Const(PRE_EXPONENTIAL);
    let E = Expr::Const(activation_energy(catalyst));
    A * (-(E / (Rsym * T))).exp()
}

/// Snapshot of everything the engine needs to produce rates and series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionParameters {
    /// K
    pub temperature: f64,
    /// M
    pub concentration_a: f64,
    /// M
    pub concentration_b: f64,
    pub catalyst: bool,
    pub order: ReactionOrder,
}

impl Default for ReactionParameters {
    fn default() -> Self {
        Self {
            temperature: 298.0,
            concentration_a: 1.0,
            concentration_b: 1.0,
            catalyst: false,
            order: ReactionOrder::Second,
        }
    }
}

impl ReactionParameters {
    pub fn new(
        temperature: f64,
        concentration_a: f64,
        concentration_b: f64,
        catalyst: bool,
        order: ReactionOrder,
    ) -> Self {
        Self {
            temperature,
            concentration_a,
            concentration_b,
            catalyst,
            order,
        }
    }

    /// Physical sanity check: T > 0, concentrations >= 0, everything finite.
    pub fn validate(&self) -> Result<(), KineticsError> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(KineticsError::invalid("temperature", self.temperature));
        }
        for (name, value) in [
            ("concentration_a", self.concentration_a),
            ("concentration_b", self.concentration_b),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(KineticsError::invalid(name, value));
            }
        }
        Ok(())
    }

    pub fn rate_constant(&self) -> f64 {
        rate_constant(self.temperature, self.catalyst)
    }

    pub fn reaction_rate(&self) -> f64 {
        reaction_rate(
            self.temperature,
            self.concentration_a,
            self.concentration_b,
            self.catalyst,
            self.order,
        )
    }

    pub fn half_life(&self) -> Option<f64> {
        half_life(self.rate_constant(), self.order)
    }
}

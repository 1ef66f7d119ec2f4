//! # Explorer state
//!
//! Holds the current parameter snapshot on behalf of a front end (terminal
//! menu, GUI) and keeps the three plotted series in sync with it. Every
//! accepted change replaces the snapshot and regenerates all series from
//! scratch; a rejected change leaves both untouched.
use crate::Kinetics::arrhenius::{ReactionOrder, ReactionParameters};
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::series::{SeriesSet, SweepConfig};
use crate::settings::ExplorerConfig;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Inclusive slider bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn check(&self, name: &str, value: f64) -> Result<f64, KineticsError> {
        if !value.is_finite() {
            return Err(KineticsError::invalid(name, value));
        }
        if value < self.min || value > self.max {
            return Err(KineticsError::OutOfRange {
                name: name.to_string(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    /// Finite, ordered limits; `min` at least `floor`.
    pub fn validate(&self, name: &str, floor: f64) -> Result<(), KineticsError> {
        if !self.min.is_finite() || self.min < floor {
            return Err(KineticsError::invalid(&format!("{}.min", name), self.min));
        }
        if !self.max.is_finite() || self.max < self.min {
            return Err(KineticsError::invalid(&format!("{}.max", name), self.max));
        }
        Ok(())
    }
}

/// Ranges the front end lets the user choose from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    /// K
    pub temperature: Bound,
    /// M, shared by [A] and [B]
    pub concentration: Bound,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            temperature: Bound::new(273.0, 373.0),
            concentration: Bound::new(0.1, 3.0),
        }
    }
}

impl ParameterBounds {
    pub fn validate(&self) -> Result<(), KineticsError> {
        self.temperature
            .validate("bounds.temperature", f64::MIN_POSITIVE)?;
        self.concentration.validate("bounds.concentration", 0.0)?;
        Ok(())
    }

    pub fn check(&self, params: &ReactionParameters) -> Result<(), KineticsError> {
        params.validate()?;
        self.temperature.check("temperature", params.temperature)?;
        self.concentration
            .check("concentration_a", params.concentration_a)?;
        self.concentration
            .check("concentration_b", params.concentration_b)?;
        Ok(())
    }
}

/// Scalars shown next to the plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionsSummary {
    pub temperature: f64,
    pub rate_constant: f64,
    pub rate: f64,
    /// only for first order
    pub half_life: Option<f64>,
    pub order: ReactionOrder,
}

impl ConditionsSummary {
    pub fn from_params(params: &ReactionParameters) -> Self {
        Self {
            temperature: params.temperature,
            rate_constant: params.rate_constant(),
            rate: params.reaction_rate(),
            half_life: params.half_life(),
            order: params.order,
        }
    }

    pub fn rate_constant_display(&self) -> String {
        format!(
            "{:.3e} {}",
            self.rate_constant,
            self.order.rate_constant_units()
        )
    }

    pub fn rate_display(&self) -> String {
        format!("{:.3e} M/s", self.rate)
    }

    pub fn half_life_display(&self) -> String {
        match self.half_life {
            Some(t) => format!("{:.2} s", t),
            None => "Depends on [A]₀".to_string(),
        }
    }

    pub fn temperature_display(&self) -> String {
        format!(
            "{} K ({:.0}°C)",
            self.temperature,
            self.temperature - crate::Kinetics::arrhenius::KELVIN_OFFSET
        )
    }
}

#[derive(Debug, Clone)]
pub struct KineticsExplorer {
    params: ReactionParameters,
    series: SeriesSet,
    bounds: ParameterBounds,
    sweeps: SweepConfig,
    /// number of times the series were (re)built
    generation: u64,
}

impl KineticsExplorer {
    pub fn new(config: &ExplorerConfig) -> Result<Self, KineticsError> {
        config.bounds.validate()?;
        config.sweeps.validate()?;
        config.bounds.check(&config.initial)?;
        let mut explorer = Self {
            params: config.initial,
            series: SeriesSet::default(),
            bounds: config.bounds,
            sweeps: config.sweeps,
            generation: 0,
        };
        explorer.regenerate();
        info!("explorer started with {:?}", explorer.params);
        Ok(explorer)
    }

    pub fn params(&self) -> &ReactionParameters {
        &self.params
    }

    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    pub fn bounds(&self) -> &ParameterBounds {
        &self.bounds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn summary(&self) -> ConditionsSummary {
        ConditionsSummary::from_params(&self.params)
    }

    pub fn set_temperature(&mut self, Temp: f64) -> Result<(), KineticsError> {
        let Temp = self.bounds.temperature.check("temperature", Temp)?;
        self.update(|p| p.temperature = Temp);
        Ok(())
    }

    pub fn set_concentration_a(&mut self, C_A: f64) -> Result<(), KineticsError> {
        let C_A = self.bounds.concentration.check("concentration_a", C_A)?;
        self.update(|p| p.concentration_a = C_A);
        Ok(())
    }

    pub fn set_concentration_b(&mut self, C_B: f64) -> Result<(), KineticsError> {
        let C_B = self.bounds.concentration.check("concentration_b", C_B)?;
        self.update(|p| p.concentration_b = C_B);
        Ok(())
    }

    pub fn set_catalyst(&mut self, catalyst: bool) {
        self.update(|p| p.catalyst = catalyst);
    }

    pub fn toggle_catalyst(&mut self) -> bool {
        let catalyst = !self.params.catalyst;
        self.set_catalyst(catalyst);
        catalyst
    }

    pub fn set_order(&mut self, order: ReactionOrder) {
        self.update(|p| p.order = order);
    }

    /// Replace the whole snapshot; the latest accepted one wins.
    pub fn apply(&mut self, params: ReactionParameters) -> Result<(), KineticsError> {
        self.bounds.check(&params)?;
        self.update(|p| *p = params);
        Ok(())
    }

    fn update(&mut self, change: impl FnOnce(&mut ReactionParameters)) {
        change(&mut self.params);
        debug!("parameters changed: {:?}", self.params);
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.series = SeriesSet::generate_with(&self.params, &self.sweeps);
        self.generation += 1;
    }
}

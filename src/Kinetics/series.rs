//! # Series generator
//!
//! Three sweeps over the kinetics model, each holding every parameter of the
//! snapshot fixed except the swept one:
//!
//! | Series | Swept | Range | Points | Values |
//! |--------|-------|-------|--------|--------|
//! | temperature | T | 273..=373 K, step 5 | 21 | rate without / with catalyst, x in °C |
//! | concentration | [A] | 0.1..=3.0 M, step 0.1 | 30 | rate at current T, [B], catalyst, order |
//! | Arrhenius | T | 273..=373 K, step 10 | 11 | ln k without / with catalyst, x = 1000/T |
//!
//! Sweeps are integer-indexed: the point count is `round((stop-start)/step)+1`
//! and the i-th value is `start + i*step`, so repeated float addition never
//! drops or adds an end point.
//!
//! Every call returns freshly owned vectors; nothing is cached or patched.
use crate::Kinetics::arrhenius::{KELVIN_OFFSET, ReactionParameters, rate_constant, reaction_rate};
use crate::Kinetics::kinetics_errors::KineticsError;
use enum_dispatch::enum_dispatch;
use log::debug;
use serde::{Deserialize, Serialize};

/// Inclusive range sampled by integer step index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

pub const TEMPERATURE_SWEEP: SweepRange = SweepRange::new(273.0, 373.0, 5.0);
pub const CONCENTRATION_SWEEP: SweepRange = SweepRange::new(0.1, 3.0, 0.1);
pub const ARRHENIUS_SWEEP: SweepRange = SweepRange::new(273.0, 373.0, 10.0);

/// Upper limit on the points of one sweep read from a configuration file.
pub const MAX_SWEEP_POINTS: usize = 100_000;

impl SweepRange {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// number of samples; 0 for a non-positive step, an inverted range or
    /// a range with more than [`MAX_SWEEP_POINTS`] samples
    pub fn len(&self) -> usize {
        self.point_count().unwrap_or(0)
    }

    fn point_count(&self) -> Option<usize> {
        if !(self.step > 0.0) || !self.start.is_finite() || !self.stop.is_finite() {
            return None;
        }
        if self.stop < self.start {
            return None;
        }
        let steps = ((self.stop - self.start) / self.step).round();
        if !steps.is_finite() || steps >= MAX_SWEEP_POINTS as f64 {
            return None;
        }
        (steps as usize).checked_add(1)
    }

    /// Rejects ranges that cannot be sampled. `positive_start` is set for
    /// temperature sweeps, where the Arrhenius factor needs T > 0.
    pub fn check(&self, name: &str, positive_start: bool) -> Result<(), KineticsError> {
        let field = |f: &str| format!("{}.{}", name, f);
        for (f, value) in [("start", self.start), ("stop", self.stop), ("step", self.step)] {
            if !value.is_finite() {
                return Err(KineticsError::invalid(&field(f), value));
            }
        }
        if self.step <= 0.0 {
            return Err(KineticsError::invalid(&field("step"), self.step));
        }
        if self.start < 0.0 || (positive_start && self.start == 0.0) {
            return Err(KineticsError::invalid(&field("start"), self.start));
        }
        if self.stop < self.start {
            return Err(KineticsError::invalid(&field("stop"), self.stop));
        }
        if self.point_count().is_none() {
            return Err(KineticsError::invalid(&field("step"), self.step));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn value_at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    pub fn values(self) -> impl Iterator<Item = f64> {
        (0..self.len()).map(move |i| self.value_at(i))
    }
}

/// Evaluate `point` at every value of the range.
fn sample<P>(range: SweepRange, point: impl Fn(f64) -> P) -> Vec<P> {
    range.values().map(point).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePoint {
    /// T - 273
    pub temperature_celsius: f64,
    pub no_catalyst: f64,
    pub with_catalyst: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationPoint {
    pub concentration: f64,
    /// concentration to one decimal place
    pub label: String,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusPoint {
    /// 1000/T
    pub inverse_temperature: f64,
    /// 1000/T to three decimals
    pub label: String,
    pub ln_k_no_catalyst: f64,
    pub ln_k_with_catalyst: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TemperatureSeries(pub Vec<TemperaturePoint>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConcentrationSeries(pub Vec<ConcentrationPoint>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArrheniusSeries(pub Vec<ArrheniusPoint>);

/// Rate vs temperature for both catalyst states at the snapshot's
/// concentrations and order. The snapshot temperature is not used.
pub fn temperature_series(params: &ReactionParameters, range: SweepRange) -> TemperatureSeries {
    let points = sample(range, |Temp| {
        let rate = |catalyst| {
            reaction_rate(
                Temp,
                params.concentration_a,
                params.concentration_b,
                catalyst,
                params.order,
            )
        };
        TemperaturePoint {
            temperature_celsius: Temp - KELVIN_OFFSET,
            no_catalyst: rate(false),
            with_catalyst: rate(true),
        }
    });
    TemperatureSeries(points)
}

/// Rate vs [A] at the snapshot's temperature, [B], catalyst flag and order.
pub fn concentration_series(
    params: &ReactionParameters,
    range: SweepRange,
) -> ConcentrationSeries {
    let points = sample(range, |C_A| ConcentrationPoint {
        concentration: C_A,
        label: format!("{:.1}", C_A),
        rate: reaction_rate(
            params.temperature,
            C_A,
            params.concentration_b,
            params.catalyst,
            params.order,
        ),
    });
    ConcentrationSeries(points)
}

/// ln k vs 1000/T for both catalyst states. Independent of the snapshot.
pub fn arrhenius_series(range: SweepRange) -> ArrheniusSeries {
    let points = sample(range, |Temp| {
        let inverse_temperature = 1000.0 / Temp;
        ArrheniusPoint {
            inverse_temperature,
            label: format!("{:.3}", inverse_temperature),
            ln_k_no_catalyst: rate_constant(Temp, false).ln(),
            ln_k_with_catalyst: rate_constant(Temp, true).ln(),
        }
    });
    ArrheniusSeries(points)
}

/// Sweep ranges of the three series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub temperature: SweepRange,
    pub concentration: SweepRange,
    pub arrhenius: SweepRange,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE_SWEEP,
            concentration: CONCENTRATION_SWEEP,
            arrhenius: ARRHENIUS_SWEEP,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), KineticsError> {
        self.temperature.check("sweeps.temperature", true)?;
        self.concentration.check("sweeps.concentration", false)?;
        self.arrhenius.check("sweeps.arrhenius", true)?;
        Ok(())
    }
}

/// The three plotted series, always regenerated together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesSet {
    pub temperature: TemperatureSeries,
    pub concentration: ConcentrationSeries,
    pub arrhenius: ArrheniusSeries,
}

impl SeriesSet {
    pub fn generate(params: &ReactionParameters) -> Self {
        Self::generate_with(params, &SweepConfig::default())
    }

    pub fn generate_with(params: &ReactionParameters, sweeps: &SweepConfig) -> Self {
        let set = Self {
            temperature: temperature_series(params, sweeps.temperature),
            concentration: concentration_series(params, sweeps.concentration),
            arrhenius: arrhenius_series(sweeps.arrhenius),
        };
        debug!(
            "series regenerated: {} temperature, {} concentration, {} Arrhenius points",
            set.temperature.len(),
            set.concentration.len(),
            set.arrhenius.len()
        );
        set
    }

    /// all three series behind the common table interface
    pub fn tables(&self) -> Vec<AnySeries> {
        vec![
            self.temperature.clone().into(),
            self.concentration.clone().into(),
            self.arrhenius.clone().into(),
        ]
    }
}

/////////////////////////////TABULAR VIEW////////////////////////////////
/// What a consumer (table printer, chart) needs from any series.
#[enum_dispatch]
pub trait SeriesTable {
    fn title(&self) -> &'static str;
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(SeriesTable)]
pub enum AnySeries {
    Temperature(TemperatureSeries),
    Concentration(ConcentrationSeries),
    Arrhenius(ArrheniusSeries),
}

impl SeriesTable for TemperatureSeries {
    fn title(&self) -> &'static str {
        "Rate vs Temperature"
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["T, °C", "No Catalyst, M/s", "With Catalyst, M/s"]
    }
    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|p| {
                vec![
                    format!("{:.0}", p.temperature_celsius),
                    format!("{:.2e}", p.no_catalyst),
                    format!("{:.2e}", p.with_catalyst),
                ]
            })
            .collect()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl SeriesTable for ConcentrationSeries {
    fn title(&self) -> &'static str {
        "Rate vs [A] Concentration"
    }
    fn headers(&self) -> Vec<&'static str> {
        vec!["[A], M", "Rate, M/s"]
    }
    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|p| vec![p.label.clone(), format!("{:.2e}", p.rate)])
            .collect()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl SeriesTable for ArrheniusSeries {
    fn title(&self) -> &'static str {
        "Arrhenius Plot"
    }
    fn headers(&self) -> Vec<&'static str> {
        vec![
            "1000/T, K⁻¹",
            "ln k (Ea = 50 kJ/mol)",
            "ln k (Ea = 30 kJ/mol)",
        ]
    }
    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .iter()
            .map(|p| {
                vec![
                    p.label.clone(),
                    format!("{:.4}", p.ln_k_no_catalyst),
                    format!("{:.4}", p.ln_k_with_catalyst),
                ]
            })
            .collect()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

use thiserror::Error;

/// Errors reported by the checked parts of the kinetics engine, the explorer
/// state and the configuration/export helpers.
///
/// The plain formulas (`rate_constant`, `reaction_rate`) never return these:
/// they are total and simply produce non-finite numbers for T <= 0.
#[derive(Debug, Error)]
pub enum KineticsError {
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: String, value: f64 },
    #[error("Parameter {name} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("Arrhenius fit failed: {0}")]
    Fit(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl KineticsError {
    pub fn invalid(name: &str, value: f64) -> Self {
        KineticsError::InvalidParameter {
            name: name.to_string(),
            value,
        }
    }
}

use crate::{vector::Vector, Result, VectorError};
use serde::{Deserialize, Serialize};

/// Largest per-coordinate absolute difference at which two vectors still
/// compare equal with `==`.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Comparison and formatting settings.
///
/// ```json
/// { "tolerance": 0.001, "display_precision": 3 }
/// ```
///
/// Both fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    pub tolerance: f64,
    pub display_precision: Option<usize>,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            display_precision: None,
        }
    }
}

impl VectorConfig {
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        let config = Self {
            tolerance,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: VectorConfig =
            serde_json::from_str(json).map_err(|e| VectorError::Config(e.to_string()))?;
        config.validate()?;
        log::debug!("loaded vector config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(VectorError::InvalidArgument(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    pub fn equals(&self, a: &Vector, b: &Vector) -> bool {
        a.approx_eq(b, self.tolerance)
    }

    pub fn format(&self, vector: &Vector) -> String {
        vector.render(self.display_precision)
    }
}

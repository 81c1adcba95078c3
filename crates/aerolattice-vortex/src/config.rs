//! Vortex configuration.
//!
//! Parameters that control how bound vortices regularize their kernel and
//! step through time.

use aerolattice_math::CoreModel;
use aerolattice_types::constants::DEFAULT_CORE_SIZE;
use aerolattice_types::{LatticeError, LatticeResult};
use serde::{Deserialize, Serialize};

use crate::temporal::TimeAnalysisType;

/// Configuration shared by the bound vortices of one lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VortexConfig {
    /// Core radius for the regularized kernel (reference-length units).
    pub core_size: f64,

    /// Finite-core velocity profile.
    pub core_model: CoreModel,

    /// Time-step size for time-accurate runs.
    pub time_step: f64,

    /// How a time-accurate run is driven.
    pub time_analysis: TimeAnalysisType,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            core_size: DEFAULT_CORE_SIZE,
            core_model: CoreModel::default(),
            time_step: 1.0e-2,
            time_analysis: TimeAnalysisType::default(),
        }
    }
}

impl VortexConfig {
    /// Creates a config for a periodic unsteady run (rotors, flapping).
    pub fn periodic(time_step: f64) -> Self {
        Self {
            time_step,
            time_analysis: TimeAnalysisType::Periodic,
            ..Default::default()
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> LatticeResult<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| LatticeError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> LatticeResult<String> {
        toml::to_string(self).map_err(|e| LatticeError::Serialization(e.to_string()))
    }

    /// Rejects non-positive or non-finite core radius and time step.
    pub fn validate(&self) -> LatticeResult<()> {
        if !(self.core_size.is_finite() && self.core_size > 0.0) {
            return Err(LatticeError::InvalidConfig(format!(
                "core_size must be positive, got {}",
                self.core_size
            )));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(LatticeError::InvalidConfig(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}

//! Temporal mode of a bound vortex.
//!
//! ```text
//! Steady ──begin──▶ TimeAccurate(0) ──advance──▶ TimeAccurate(1) ──▶ …
//! ```
//!
//! There is no way back to `Steady`; the run length is up to the driver.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeMode {
    #[default]
    Steady,
    TimeAccurate {
        step: u32,
    },
}

impl TimeMode {
    #[inline]
    pub fn is_time_accurate(self) -> bool {
        matches!(self, TimeMode::TimeAccurate { .. })
    }

    /// Current step index, `None` when steady.
    #[inline]
    pub fn current_step(self) -> Option<u32> {
        match self {
            TimeMode::Steady => None,
            TimeMode::TimeAccurate { step } => Some(step),
        }
    }

    /// Number of starting-vortex slots a bound vortex retains in this mode.
    #[inline]
    pub fn retained_slots(self) -> usize {
        match self {
            TimeMode::Steady => 1,
            TimeMode::TimeAccurate { step } => step as usize + 1,
        }
    }
}

/// How an unsteady run is driven.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeAnalysisType {
    /// Body started impulsively from rest; wake grows from nothing.
    #[default]
    ImpulsiveStart,
    /// Periodic motion (rotors, flapping, harmonic pitch/heave).
    Periodic,
}

//! Bound vortex: the lift-carrying filament(s) of one spanwise lattice element.
//!
//! A bound vortex is wired between two trailing vortices and holds an
//! append-only list of straight segments ("starting vortices"), one per
//! retained time step, each with its own circulation slot. Steady runs keep
//! exactly one segment, the bound filament itself.
//!
//! ## Placement
//!
//! Slot `k` is the `k`-th segment shed, so the newest slot is last. On every
//! geometry update the newest slot spans the trailing vortices' starting
//! points and slot `k` spans wake station `len - 1 - k`, i.e. older
//! starting vortices ride further downstream with the wake. If the wake has
//! fewer stations than slots, the oldest slots stack at the last station;
//! pruning is the driver's call.
//!
//! ## Circulation
//!
//! The circulation solve writes [`gamma_mut`](BoundVortex::gamma_mut) /
//! [`set_gamma`](BoundVortex::set_gamma); [`update_gamma`](BoundVortex::update_gamma)
//! copies those values into the segments, which is what the induced-velocity
//! evaluation reads.

use aerolattice_math::{CoreModel, DVec3};
use aerolattice_types::constants::DEFAULT_CORE_SIZE;
use aerolattice_types::{LatticeError, LatticeResult};
use serde::{Deserialize, Serialize};

use crate::config::VortexConfig;
use crate::edge::VortexEdge;
use crate::temporal::{TimeAnalysisType, TimeMode};
use crate::trail::TrailingVortex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundVortex {
    // ─── Temporal state ───
    time_mode: TimeMode,
    time_analysis: TimeAnalysisType,
    time_step: f64,

    // ─── Starting vortices ───
    segments: Vec<VortexEdge>,
    gammas: Vec<f64>,

    // ─── Kernel ───
    core_size: f64,
    core_model: CoreModel,
}

impl Default for BoundVortex {
    fn default() -> Self {
        Self::new()
    }
}

fn starting_points(
    trail1: &TrailingVortex,
    trail2: &TrailingVortex,
) -> LatticeResult<(DVec3, DVec3)> {
    let p1 = trail1.starting_point().ok_or_else(|| {
        LatticeError::ContractViolation("first trailing vortex has no starting point".into())
    })?;
    let p2 = trail2.starting_point().ok_or_else(|| {
        LatticeError::ContractViolation("second trailing vortex has no starting point".into())
    })?;
    Ok((p1, p2))
}

impl BoundVortex {
    /// An unwired, steady bound vortex with the default core.
    pub fn new() -> Self {
        let config = VortexConfig::default();
        Self {
            time_mode: TimeMode::Steady,
            time_analysis: config.time_analysis,
            time_step: config.time_step,
            segments: Vec::new(),
            gammas: Vec::new(),
            core_size: DEFAULT_CORE_SIZE,
            core_model: config.core_model,
        }
    }

    /// An unwired, steady bound vortex using `config`'s kernel and timing.
    pub fn with_config(config: &VortexConfig) -> LatticeResult<Self> {
        config.validate()?;
        Ok(Self {
            time_analysis: config.time_analysis,
            time_step: config.time_step,
            core_size: config.core_size,
            core_model: config.core_model,
            ..Self::new()
        })
    }

    // ─── Wiring ───

    /// Wires this vortex between two trailing vortices and allocates one
    /// circulation slot per retained starting vortex, all zeroed.
    ///
    /// Fails with [`LatticeError::ContractViolation`] if either trailing
    /// vortex has no starting point.
    pub fn setup(&mut self, trail1: &TrailingVortex, trail2: &TrailingVortex) -> LatticeResult<()> {
        let (p1, p2) = starting_points(trail1, trail2)?;
        let slots = self.time_mode.retained_slots();

        self.segments = vec![VortexEdge::new(p1, p2, 0.0); slots];
        self.gammas = vec![0.0; slots];
        self.place_segments(trail1, trail2);

        tracing::debug!(slots, span = (p2 - p1).length(), "bound vortex wired");
        Ok(())
    }

    #[inline]
    pub fn is_wired(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Re-derives segment endpoints from trailing vortices that have moved.
    /// Circulation values are untouched.
    pub fn update_geometry_location(
        &mut self,
        trail1: &TrailingVortex,
        trail2: &TrailingVortex,
    ) -> LatticeResult<()> {
        if !self.is_wired() {
            return Err(LatticeError::ContractViolation(
                "geometry update on an unwired bound vortex".into(),
            ));
        }
        starting_points(trail1, trail2)?;
        self.place_segments(trail1, trail2);
        Ok(())
    }

    fn place_segments(&mut self, trail1: &TrailingVortex, trail2: &TrailingVortex) {
        let stations = trail1.number_of_points().min(trail2.number_of_points());
        let newest = self.segments.len() - 1;
        for (k, seg) in self.segments.iter_mut().enumerate() {
            let station = (newest - k).min(stations - 1);
            seg.start = trail1.point(station);
            seg.end = trail2.point(station);
        }
    }

    // ─── Circulation ───

    /// Copies the solved circulation slots into the filament segments.
    pub fn update_gamma(&mut self) {
        for (seg, &gamma) in self.segments.iter_mut().zip(&self.gammas) {
            seg.gamma = gamma;
        }
    }

    /// Number of retained starting vortices (equals the number of slots).
    #[inline]
    pub fn number_of_starting_vortices(&self) -> usize {
        self.gammas.len()
    }

    /// Circulation slot `k`, in shed order (0 is oldest).
    #[inline]
    pub fn gamma(&self, k: usize) -> f64 {
        self.gammas[k]
    }

    #[inline]
    pub fn gamma_mut(&mut self, k: usize) -> &mut f64 {
        &mut self.gammas[k]
    }

    #[inline]
    pub fn set_gamma(&mut self, k: usize, gamma: f64) {
        self.gammas[k] = gamma;
    }

    /// Slot for the segment shed this step, the one the next solve fills.
    pub fn current_gamma_mut(&mut self) -> Option<&mut f64> {
        self.gammas.last_mut()
    }

    pub fn gammas(&self) -> &[f64] {
        &self.gammas
    }

    pub fn segments(&self) -> &[VortexEdge] {
        &self.segments
    }

    // ─── Induced velocity ───

    /// Velocity induced at `point` by every retained segment, using this
    /// vortex's own core radius.
    pub fn induced_velocity(&self, point: DVec3) -> DVec3 {
        self.induced_velocity_with_core(point, self.core_size)
    }

    /// Same as [`induced_velocity`](Self::induced_velocity) with a
    /// caller-supplied core radius.
    pub fn induced_velocity_with_core(&self, point: DVec3, core: f64) -> DVec3 {
        self.segments
            .iter()
            .map(|seg| seg.induced_velocity(point, core, self.core_model))
            .sum()
    }

    // ─── Kernel settings ───

    #[inline]
    pub fn core_size(&self) -> f64 {
        self.core_size
    }

    /// Sets the core radius; it must be positive and finite.
    pub fn set_core_size(&mut self, core: f64) -> LatticeResult<()> {
        if !(core.is_finite() && core > 0.0) {
            return Err(LatticeError::InvalidConfig(format!(
                "core_size must be positive, got {core}"
            )));
        }
        self.core_size = core;
        Ok(())
    }

    #[inline]
    pub fn core_model(&self) -> CoreModel {
        self.core_model
    }

    pub fn set_core_model(&mut self, model: CoreModel) {
        self.core_model = model;
    }

    // ─── Temporal state ───

    #[inline]
    pub fn time_mode(&self) -> TimeMode {
        self.time_mode
    }

    #[inline]
    pub fn is_time_accurate(&self) -> bool {
        self.time_mode.is_time_accurate()
    }

    #[inline]
    pub fn current_time_step(&self) -> Option<u32> {
        self.time_mode.current_step()
    }

    #[inline]
    pub fn time_analysis_type(&self) -> TimeAnalysisType {
        self.time_analysis
    }

    #[inline]
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Switches `Steady → TimeAccurate(0)`. Allowed once per run.
    pub fn begin_time_accurate(
        &mut self,
        time_step: f64,
        analysis: TimeAnalysisType,
    ) -> LatticeResult<()> {
        if self.is_time_accurate() {
            return Err(LatticeError::ContractViolation(
                "bound vortex is already time accurate".into(),
            ));
        }
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(LatticeError::InvalidConfig(format!(
                "time_step must be positive, got {time_step}"
            )));
        }
        self.time_mode = TimeMode::TimeAccurate { step: 0 };
        self.time_step = time_step;
        self.time_analysis = analysis;
        tracing::debug!(time_step, ?analysis, "bound vortex entered time-accurate mode");
        Ok(())
    }

    /// Advances `TimeAccurate(n) → TimeAccurate(n + 1)` and appends a new
    /// zero-strength starting vortex at the newest position. Earlier slots
    /// keep their circulation. Returns the new step index.
    pub fn advance_time_step(&mut self) -> LatticeResult<u32> {
        let step = match self.time_mode {
            TimeMode::Steady => {
                return Err(LatticeError::ContractViolation(
                    "time advance on a steady bound vortex".into(),
                ))
            }
            TimeMode::TimeAccurate { step } => step + 1,
        };
        let newest = match self.segments.last() {
            Some(seg) => *seg,
            None => {
                return Err(LatticeError::ContractViolation(
                    "time advance on an unwired bound vortex".into(),
                ))
            }
        };

        self.segments.push(VortexEdge { gamma: 0.0, ..newest });
        self.gammas.push(0.0);
        self.time_mode = TimeMode::TimeAccurate { step };

        tracing::debug!(step, retained = self.gammas.len(), "bound vortex advanced");
        Ok(step)
    }
}

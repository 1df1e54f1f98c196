use crate::foundation::error::{MorphError, MorphResult};

/// Geometry tunables. Defaults are the reference constants; every field may be
/// overridden from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Value domain shared by `value_a` / `value_b` scales.
    pub value_domain: (f64, f64),
    pub grid_columns: u32,
    pub histogram_bins: u32,
    /// Coarser than `histogram_bins`.
    pub violin_bins: u32,
    /// Inner and outer padding of the category band axis, as a fraction of a step.
    pub band_padding: f64,
    /// Extra ring radius for `value_a` at the top of the domain.
    pub radial_extra: f64,
    /// Stack spacing multipliers, in point radii.
    pub bar_spacing: f64,
    pub stack_spacing: f64,
    pub violin_spacing: f64,
    pub beeswarm: SimulationConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            value_domain: (0.0, 100.0),
            grid_columns: 10,
            histogram_bins: 20,
            violin_bins: 10,
            band_padding: 0.2,
            radial_extra: 40.0,
            bar_spacing: 2.2,
            stack_spacing: 2.0,
            violin_spacing: 1.8,
            beeswarm: SimulationConfig::default(),
        }
    }
}

/// Force relaxation tunables for the beeswarm layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed tick count; the result is defined as the state after this many ticks.
    pub iterations: u32,
    pub x_strength: f64,
    pub y_strength: f64,
    /// Added to the point radius to get the collision radius.
    pub collide_padding: f64,
    /// Overlap-resolution sweeps per tick.
    pub collide_passes: u32,
    pub velocity_decay: f64,
    pub alpha_min: f64,
    /// Ticks over which alpha would decay from 1 to `alpha_min`.
    pub alpha_decay_ticks: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: 120,
            x_strength: 1.0,
            y_strength: 0.1,
            collide_padding: 1.0,
            collide_passes: 3,
            velocity_decay: 0.4,
            alpha_min: 0.001,
            alpha_decay_ticks: 300,
        }
    }
}

impl SimulationConfig {
    /// Per-tick multiplicative alpha decay.
    pub fn alpha_decay(&self) -> f64 {
        let ticks = f64::from(self.alpha_decay_ticks.max(1));
        1.0 - self.alpha_min.powf(1.0 / ticks)
    }

    pub fn validate(&self) -> MorphResult<()> {
        for (name, value) in [
            ("x_strength", self.x_strength),
            ("y_strength", self.y_strength),
            ("collide_padding", self.collide_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MorphError::config(format!(
                    "beeswarm.{name} must be finite and >= 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.velocity_decay) {
            return Err(MorphError::config("beeswarm.velocity_decay must be in [0, 1]"));
        }
        if !(self.alpha_min > 0.0 && self.alpha_min < 1.0) {
            return Err(MorphError::config("beeswarm.alpha_min must be in (0, 1)"));
        }
        Ok(())
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> MorphResult<()> {
        let (d0, d1) = self.value_domain;
        if !d0.is_finite() || !d1.is_finite() || d0 >= d1 {
            return Err(MorphError::config(
                "value_domain must be finite with min < max",
            ));
        }
        for (name, value) in [
            ("grid_columns", self.grid_columns),
            ("histogram_bins", self.histogram_bins),
            ("violin_bins", self.violin_bins),
        ] {
            if value == 0 {
                return Err(MorphError::config(format!("{name} must be > 0")));
            }
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(MorphError::config("band_padding must be in [0, 1)"));
        }
        for (name, value) in [
            ("radial_extra", self.radial_extra),
            ("bar_spacing", self.bar_spacing),
            ("stack_spacing", self.stack_spacing),
            ("violin_spacing", self.violin_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MorphError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        self.beeswarm.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;

use crate::{
    color::palette::{Rgba8, default_palette},
    foundation::error::{MorphError, MorphResult},
};

/// Smallest radius layouts will use; non-positive radii are clamped up to it.
pub const MIN_POINT_RADIUS: f64 = 0.5;

/// Visual parameters. The radius drives spacing in BAR, DOTPLOT, BEESWARM and
/// VIOLIN; the palette only feeds color assignment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleParams {
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<Rgba8>,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            point_radius: default_point_radius(),
            palette: default_palette(),
        }
    }
}

fn default_point_radius() -> f64 {
    5.0
}

impl StyleParams {
    pub fn with_radius(radius: f64) -> Self {
        Self {
            point_radius: radius,
            ..Self::default()
        }
    }

    /// Radius used for geometry, clamped to [`MIN_POINT_RADIUS`]. Pure; safe
    /// to call per frame.
    pub fn geometry_radius(&self) -> f64 {
        if self.radius_in_range() {
            self.point_radius
        } else {
            MIN_POINT_RADIUS
        }
    }

    pub fn radius_in_range(&self) -> bool {
        self.point_radius.is_finite() && self.point_radius >= MIN_POINT_RADIUS
    }

    pub fn validate(&self) -> MorphResult<()> {
        if self.palette.is_empty() {
            return Err(MorphError::config("style palette must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/style.rs"]
mod tests;

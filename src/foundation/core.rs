use crate::foundation::error::{MorphError, MorphResult};

pub use kurbo::{Point, Vec2};

/// Padding in logical pixels, used as the chart margin around the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Left edge.
    #[serde(default)]
    pub left: f64,
    /// Right edge.
    #[serde(default)]
    pub right: f64,
    /// Top edge.
    #[serde(default)]
    pub top: f64,
    /// Bottom edge.
    #[serde(default)]
    pub bottom: f64,
}

/// Logical drawing surface. Layouts place points in the inner (post-margin) area,
/// with the origin at the inner top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub margin: Edges,
}

impl Canvas {
    /// Canvas without margins; inner size equals outer size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Edges::default(),
        }
    }

    pub fn with_margin(self, margin: Edges) -> Self {
        Self { margin, ..self }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    pub fn inner_center(&self) -> Point {
        Point::new(self.inner_width() * 0.5, self.inner_height() * 0.5)
    }

    /// Clamp a position into `[0, inner_width] x [0, inner_height]`.
    pub fn clamp_inner(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0.0, self.inner_width()),
            p.y.clamp(0.0, self.inner_height()),
        )
    }

    pub fn validate(&self) -> MorphResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(MorphError::validation("canvas width/height must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(MorphError::validation("canvas width/height must be > 0"));
        }
        for (name, value) in [
            ("left", self.margin.left),
            ("right", self.margin.right),
            ("top", self.margin.top),
            ("bottom", self.margin.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MorphError::validation(format!(
                    "canvas margin.{name} must be finite and >= 0",
                )));
            }
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(MorphError::validation(
                "canvas margins leave no inner plot area",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

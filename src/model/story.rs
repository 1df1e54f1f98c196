use std::collections::BTreeSet;

use crate::{
    animation::ease::Ease,
    foundation::core::Canvas,
    foundation::error::{MorphError, MorphResult},
    layout::{config::LayoutConfig, kind::LayoutKind},
    model::point::{DataPoint, validate_points},
    model::style::StyleParams,
};

/// Horizontal anchoring of a step's narrative text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// One stage of the narrative, bound to a layout kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    pub id: String,
    pub layout: LayoutKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub text_anchor: TextAnchor,
}

impl Step {
    pub fn new(id: impl Into<String>, layout: LayoutKind, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            layout,
            text: text.into(),
            text_anchor: TextAnchor::default(),
        }
    }
}

/// A complete story document: canvas, style, tunables, steps and data.
///
/// This is a pure data model that round-trips through JSON; see
/// [`crate::MorphSession`] for driving it from a scroll offset.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Story {
    pub canvas: Canvas,
    #[serde(default)]
    pub style: StyleParams,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub ease: Ease,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub points: Vec<DataPoint>,
}

impl Story {
    pub fn from_json(s: &str) -> MorphResult<Self> {
        let story: Self = serde_json::from_str(s)?;
        story.validate()?;
        Ok(story)
    }

    pub fn validate(&self) -> MorphResult<()> {
        self.canvas.validate()?;
        self.style.validate()?;
        self.layout.validate()?;
        if self.steps.is_empty() {
            return Err(MorphError::validation("story must have at least one step"));
        }
        let mut seen = BTreeSet::<&str>::new();
        for step in &self.steps {
            if step.id.trim().is_empty() {
                return Err(MorphError::validation("step id must be non-empty"));
            }
            if !seen.insert(step.id.as_str()) {
                return Err(MorphError::validation(format!(
                    "duplicate step id '{}'",
                    step.id
                )));
            }
        }
        validate_points(&self.points)
    }

    /// The pair of steps a transition at `index` runs between: `(steps[i], steps[i+1])`,
    /// or the last step twice once `index` reaches the end.
    pub fn step_pair(&self, index: usize) -> Option<(&Step, &Step)> {
        let last = self.steps.len().checked_sub(1)?;
        let from = index.min(last);
        let to = (from + 1).min(last);
        Some((&self.steps[from], &self.steps[to]))
    }

    /// Layout kinds used by at least one step, in first-use order.
    pub fn layout_kinds(&self) -> Vec<LayoutKind> {
        let mut out = Vec::new();
        for step in &self.steps {
            if !out.contains(&step.layout) {
                out.push(step.layout);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/story.rs"]
mod tests;

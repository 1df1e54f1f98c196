use std::collections::BTreeMap;
use std::sync::Arc;

use crate::{
    animation::blend::{Overlay, transition_frame},
    animation::scroll::{ScrollPosition, map_scroll},
    cache::layout_cache::LayoutCache,
    color::palette::{Rgba8, assign_colors},
    foundation::error::{MorphError, MorphResult},
    layout::{calculator::LayoutCalculator, kind::LayoutKind, positions::PositionMap},
    model::point::{DataPoint, missing_value_count, validate_points},
    model::story::Story,
    model::style::StyleParams,
};

/// Everything a renderer needs for one progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MorphFrame {
    pub step_index: usize,
    pub progress: f64,
    pub positions: PositionMap,
    pub colors: BTreeMap<String, Rgba8>,
    pub overlay: Overlay,
    /// Narrative text of `overlay.active_step`.
    pub text: String,
    /// Points whose values were soft-failed to `0`.
    pub warnings: usize,
}

/// Drives a [`Story`] from scroll input.
///
/// Layouts are computed once per `(kind, dataset, geometry style)` and reused
/// from a [`LayoutCache`]; each progress update only blends two cached maps.
#[derive(Debug)]
pub struct MorphSession {
    story: Story,
    calc: LayoutCalculator,
    cache: LayoutCache,
    colors: BTreeMap<String, Rgba8>,
    warnings: usize,
}

impl MorphSession {
    pub fn new(story: Story) -> MorphResult<Self> {
        story.validate()?;
        let calc = LayoutCalculator::new(story.canvas, story.layout.clone())?;
        let colors = category_colors(&story.points, &story.style)?;
        let warnings = missing_value_count(&story.points);
        Ok(Self {
            story,
            calc,
            cache: LayoutCache::default(),
            colors,
            warnings,
        })
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn colors(&self) -> &BTreeMap<String, Rgba8> {
        &self.colors
    }

    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    /// Replace the dataset. Cached layouts for the old dataset stop matching.
    pub fn set_points(&mut self, points: Vec<DataPoint>) -> MorphResult<()> {
        validate_points(&points)?;
        self.colors = category_colors(&points, &self.story.style)?;
        self.warnings = missing_value_count(&points);
        self.story.points = points;
        Ok(())
    }

    /// Replace style parameters. A palette-only change keeps every cached layout valid.
    pub fn set_style(&mut self, style: StyleParams) -> MorphResult<()> {
        style.validate()?;
        self.colors = category_colors(&self.story.points, &style)?;
        self.story.style = style;
        Ok(())
    }

    pub fn layout(&mut self, kind: LayoutKind) -> MorphResult<Arc<PositionMap>> {
        self.cache
            .get_or_compute(&self.calc, kind, &self.story.points, &self.story.style)
    }

    pub fn frame_at_offset(&mut self, raw_offset: f64, extent: f64) -> MorphResult<MorphFrame> {
        let ScrollPosition {
            step_index,
            progress,
        } = map_scroll(raw_offset, extent, self.story.steps.len());
        self.frame_at(step_index, progress)
    }

    #[tracing::instrument(skip(self))]
    pub fn frame_at(&mut self, step_index: usize, progress: f64) -> MorphResult<MorphFrame> {
        let (from, to) = self
            .story
            .step_pair(step_index)
            .map(|(a, b)| (a.layout, b.layout))
            .ok_or_else(|| MorphError::validation("story has no steps"))?;

        let start = self.layout(from)?;
        let end = self.layout(to)?;
        let step_count = self.story.steps.len();
        let step_index = step_index.min(step_count - 1);
        let frame = transition_frame(
            &start,
            &end,
            step_index,
            step_count,
            progress,
            self.story.ease,
        );

        let text = self.story.steps[frame.overlay.active_step].text.clone();
        Ok(MorphFrame {
            step_index,
            progress,
            positions: frame.positions,
            colors: self.colors.clone(),
            overlay: frame.overlay,
            text,
            warnings: self.warnings,
        })
    }
}

fn category_colors(
    points: &[DataPoint],
    style: &StyleParams,
) -> MorphResult<BTreeMap<String, Rgba8>> {
    assign_colors(points.iter().map(|p| p.category.as_str()), &style.palette)
}

#[cfg(test)]
#[path = "../../tests/unit/session/morph_session.rs"]
mod tests;

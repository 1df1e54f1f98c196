/// Where a scroll offset lands in the step sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScrollPosition {
    /// Index of the current step; the transition runs toward `step_index + 1`.
    pub step_index: usize,
    /// Local progress in `[0, 1]` between the current and the next step.
    pub progress: f64,
}

/// Map a raw offset to `(step_index, progress)`.
///
/// `extent` is the scroll distance covering all `step_count - 1` segments.
/// The step index never exceeds `step_count - 2`, so the final boundary
/// reports progress `1` on the last segment instead of `0` on a segment that
/// does not exist. Fewer than two steps, or a non-positive extent, map to the
/// origin.
pub fn map_scroll(raw_offset: f64, extent: f64, step_count: usize) -> ScrollPosition {
    if step_count <= 1 || !extent.is_finite() || extent <= 0.0 {
        return ScrollPosition::default();
    }
    let global = raw_offset / extent;
    let global = if global.is_nan() {
        0.0
    } else {
        global.clamp(0.0, 1.0)
    };
    let segments = (step_count - 1) as f64;
    let scaled = global * segments;
    let floor = scaled.floor();
    if floor >= segments {
        return ScrollPosition {
            step_index: step_count - 2,
            progress: 1.0,
        };
    }
    ScrollPosition {
        step_index: (floor as usize).min(step_count - 2),
        progress: scaled - floor,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scroll.rs"]
mod tests;

use crate::{
    animation::ease::Ease,
    foundation::core::Point,
    layout::positions::PositionMap,
};

/// Narrative overlay state derived from transition progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Overlay {
    /// Step whose text is shown: the current step before the midpoint, the next one from it on.
    pub active_step: usize,
    /// Text opacity in `[0, 1]`; fully transparent at the midpoint.
    pub opacity: f64,
}

/// Blended positions plus the overlay state for the same progress value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TransitionFrame {
    pub positions: PositionMap,
    pub overlay: Overlay,
}

/// Interpolate every id in the union of `start` and `end`.
///
/// Ids present in both maps move along a straight line by `ease(progress)`;
/// ids present in only one map hold that position. `progress` is clamped to
/// `[0, 1]`, and the endpoints reproduce `start` / `end` exactly.
pub fn blend(start: &PositionMap, end: &PositionMap, progress: f64, ease: Ease) -> PositionMap {
    let t = ease.apply(progress);
    let moved = start.iter().map(|(id, a)| {
        let p = match end.get(id) {
            Some(b) => lerp_point(a, b, t),
            None => a,
        };
        (id.to_owned(), p)
    });
    let entering = end
        .iter()
        .filter(|(id, _)| !start.contains(id))
        .map(|(id, b)| (id.to_owned(), b));
    moved.chain(entering).collect()
}

/// Cross-fade opacity for narrative text: `min(|progress - 0.5| * 3, 1)`.
///
/// Symmetric around 0.5 up to the float rounding of `0.5 ± d` itself.
pub fn overlay_opacity(progress: f64) -> f64 {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    ((p - 0.5).abs() * 3.0).min(1.0)
}

pub fn overlay(step_index: usize, step_count: usize, progress: f64) -> Overlay {
    let last = step_count.saturating_sub(1);
    let active_step = if progress >= 0.5 {
        (step_index + 1).min(last)
    } else {
        step_index.min(last)
    };
    Overlay {
        active_step,
        opacity: overlay_opacity(progress),
    }
}

/// Blend the pair of step layouts and derive the overlay in one call.
pub fn transition_frame(
    start: &PositionMap,
    end: &PositionMap,
    step_index: usize,
    step_count: usize,
    progress: f64,
    ease: Ease,
) -> TransitionFrame {
    TransitionFrame {
        positions: blend(start, end, progress, ease),
        overlay: overlay(step_index, step_count, progress),
    }
}

// Weighted form: exact at t = 0 and t = 1.
fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    let s = 1.0 - t;
    Point::new(a.x * s + b.x * t, a.y * s + b.y * t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/blend.rs"]
mod tests;

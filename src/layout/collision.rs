//! Fixed-tick force relaxation used by the beeswarm layout.
//!
//! All mutable simulation state (positions, velocities, alpha) lives in a local
//! arena created per call and dropped on return, so [`relax`] behaves as a pure
//! function of its inputs. There is no randomness: coincident nodes are split
//! along a direction derived from their indices.

use kurbo::Size;

use crate::{
    foundation::core::{Point, Vec2},
    layout::config::SimulationConfig,
};

const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
const COINCIDENT_EPS2: f64 = 1e-12;

#[derive(Clone, Copy, Debug)]
struct Node {
    pos: Point,
    vel: Vec2,
    target_x: f64,
}

/// Relax `initial` positions for exactly `config.iterations` ticks.
///
/// Each tick pulls every node toward `target_x(index)` and `center_y`,
/// integrates velocities, then pushes overlapping pairs apart until their
/// centers are `2 * collide_radius` apart. With `bounds`, nodes are kept in
/// `[0, width] x [0, height]` after every tick.
#[tracing::instrument(skip(initial, target_x, config), fields(nodes = initial.len()))]
pub fn relax<F>(
    initial: &[Point],
    target_x: F,
    center_y: f64,
    collide_radius: f64,
    config: &SimulationConfig,
    bounds: Option<Size>,
) -> Vec<Point>
where
    F: Fn(usize) -> f64,
{
    let center_y = if center_y.is_finite() { center_y } else { 0.0 };
    let min_dist = if collide_radius.is_finite() && collide_radius > 0.0 {
        collide_radius * 2.0
    } else {
        0.0
    };

    let mut nodes: Vec<Node> = initial
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let tx = target_x(idx);
            let tx = if tx.is_finite() {
                tx
            } else if p.x.is_finite() {
                p.x
            } else {
                0.0
            };
            let pos = if p.x.is_finite() && p.y.is_finite() {
                *p
            } else {
                Point::new(tx, center_y)
            };
            Node {
                pos,
                vel: Vec2::ZERO,
                target_x: tx,
            }
        })
        .collect();

    let alpha_decay = config.alpha_decay();
    let keep = 1.0 - config.velocity_decay.clamp(0.0, 1.0);
    let mut alpha = 1.0f64;

    for _ in 0..config.iterations {
        alpha *= 1.0 - alpha_decay;

        for n in &mut nodes {
            n.vel.x += (n.target_x - n.pos.x) * config.x_strength * alpha;
            n.vel.y += (center_y - n.pos.y) * config.y_strength * alpha;
            n.vel *= keep;
            n.pos += n.vel;
        }

        if min_dist > 0.0 {
            for _ in 0..config.collide_passes {
                resolve_overlaps(&mut nodes, min_dist);
            }
        }

        for n in &mut nodes {
            if !n.pos.x.is_finite() || !n.pos.y.is_finite() {
                n.pos = Point::new(n.target_x, center_y);
                n.vel = Vec2::ZERO;
            }
            if let Some(size) = bounds {
                n.pos.x = n.pos.x.clamp(0.0, size.width.max(0.0));
                n.pos.y = n.pos.y.clamp(0.0, size.height.max(0.0));
            }
        }
    }

    nodes.into_iter().map(|n| n.pos).collect()
}

/// One Gauss-Seidel sweep over all pairs; each overlapping pair is displaced
/// symmetrically along the line between centers by half the overlap.
fn resolve_overlaps(nodes: &mut [Node], min_dist: f64) {
    let min_dist2 = min_dist * min_dist;
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let delta = nodes[j].pos - nodes[i].pos;
            let d2 = delta.hypot2();
            if d2 >= min_dist2 {
                continue;
            }
            let shift = if d2 < COINCIDENT_EPS2 {
                let angle = GOLDEN_ANGLE * ((i * 31 + j) as f64);
                Vec2::new(angle.cos(), angle.sin()) * (min_dist * 0.5)
            } else {
                let d = d2.sqrt();
                delta * ((min_dist - d) / d * 0.5)
            };
            nodes[i].pos -= shift;
            nodes[j].pos += shift;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/collision.rs"]
mod tests;

//! storymorph is a deterministic layout and morph engine for scroll-driven
//! data stories.
//!
//! A fixed set of identified points is placed under one of eight chart
//! layouts, and positions are blended between the layouts of adjacent
//! narrative steps as the reader scrolls.
//!
//! # Pipeline overview
//!
//! 1. **Map**: raw scroll offset -> `(step_index, progress)` ([`map_scroll`])
//! 2. **Lay out**: `(LayoutKind, points, style) -> PositionMap` ([`LayoutCalculator`]),
//!    memoized by [`LayoutCache`]
//! 3. **Blend**: two position maps + eased progress -> one map plus overlay
//!    state ([`blend`], [`transition_frame`])
//! 4. **Color**: category -> palette color ([`assign_colors`])
//!
//! [`MorphSession`] wires the four stages together for a [`Story`].
//!
//! Every stage is a pure function of its inputs: no IO, no clocks, no
//! randomness. The beeswarm force relaxation runs a fixed number of ticks and
//! returns bit-identical results for identical inputs.
#![forbid(unsafe_code)]

mod animation;
mod cache;
mod color;
mod foundation;
mod layout;
mod model;
mod session;

pub use animation::blend::{
    Overlay, TransitionFrame, blend, overlay, overlay_opacity, transition_frame,
};
pub use animation::ease::Ease;
pub use animation::scroll::{ScrollPosition, map_scroll};
pub use cache::fingerprint::{LayoutFingerprint, fingerprint_layout};
pub use cache::layout_cache::LayoutCache;
pub use color::palette::{Rgba8, TABLEAU10, assign_colors, default_palette};
pub use foundation::core::{Canvas, Edges, Point, Vec2};
pub use foundation::error::{MorphError, MorphResult};
pub use foundation::math::{BandScale, LinearScale};
pub use layout::binning::{Bin, bin};
pub use layout::calculator::LayoutCalculator;
pub use layout::collision::relax;
pub use layout::config::{LayoutConfig, SimulationConfig};
pub use layout::kind::LayoutKind;
pub use layout::positions::PositionMap;
pub use model::point::{DataPoint, Scalar, categories, missing_value_count, validate_points};
pub use model::story::{Step, Story, TextAnchor};
pub use model::style::{MIN_POINT_RADIUS, StyleParams};
pub use session::morph_session::{MorphFrame, MorphSession};

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::Size;

use crate::{
    foundation::core::{Canvas, Point},
    foundation::error::MorphResult,
    foundation::math::{BandScale, LinearScale},
    layout::{binning, collision, config::LayoutConfig, kind::LayoutKind, positions::PositionMap},
    model::point::{DataPoint, categories, missing_value_count, validate_points},
    model::style::{MIN_POINT_RADIUS, StyleParams},
};

const STAGGER_RATIO: f64 = 0.618_033_988_749_895;

/// Stateless mapping from `(kind, points, style)` to a [`PositionMap`] on a
/// fixed canvas.
///
/// Every call builds its output from scratch; the same inputs always give
/// bit-identical positions, including for [`LayoutKind::Beeswarm`].
///
/// Kinds other than RADIAL and BAR are clamped to the inner canvas as a last
/// step. Grid rows past the bottom edge and histogram or dot plot stacks past
/// the top edge therefore collapse onto the same edge coordinate; every id is
/// still present.
#[derive(Clone, Debug)]
pub struct LayoutCalculator {
    canvas: Canvas,
    config: LayoutConfig,
}

impl LayoutCalculator {
    pub fn new(canvas: Canvas, config: LayoutConfig) -> MorphResult<Self> {
        canvas.validate()?;
        config.validate()?;
        Ok(Self { canvas, config })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[tracing::instrument(skip(self, points, style), fields(points = points.len()))]
    pub fn compute(
        &self,
        kind: LayoutKind,
        points: &[DataPoint],
        style: &StyleParams,
    ) -> MorphResult<PositionMap> {
        validate_points(points)?;
        if points.is_empty() {
            return Ok(PositionMap::default());
        }

        let missing = missing_value_count(points);
        if missing > 0 {
            tracing::warn!(missing, "points with missing values are laid out at 0");
        }

        if !style.radius_in_range() {
            tracing::warn!(
                radius = style.point_radius,
                clamped = MIN_POINT_RADIUS,
                "point radius out of range, clamping"
            );
        }
        let r = style.geometry_radius();
        let placed = match kind {
            LayoutKind::Grid => self.grid(points),
            LayoutKind::Scatter => self.scatter(points),
            LayoutKind::Bar => self.bar(points, r),
            LayoutKind::Radial => self.radial(points),
            LayoutKind::Histogram => self.histogram(points, r),
            LayoutKind::DotPlot => self.dot_plot(points, r),
            LayoutKind::Beeswarm => self.beeswarm(points, r),
            LayoutKind::Violin => self.violin(points, r),
        };
        debug_assert_eq!(placed.len(), points.len());

        Ok(points
            .iter()
            .zip(placed)
            .map(|(p, pos)| {
                let pos = if kind.allows_overflow() {
                    pos
                } else {
                    self.canvas.clamp_inner(pos)
                };
                (p.id.clone(), pos)
            })
            .collect())
    }

    fn width(&self) -> f64 {
        self.canvas.inner_width()
    }

    fn height(&self) -> f64 {
        self.canvas.inner_height()
    }

    fn x_scale(&self) -> LinearScale {
        LinearScale::new(self.config.value_domain, (0.0, self.width())).clamped()
    }

    fn y_scale(&self) -> LinearScale {
        LinearScale::new(self.config.value_domain, (self.height(), 0.0)).clamped()
    }

    /// Bottom-up stack slot `k` for points of radius `r` spaced `spacing * r` apart.
    fn stack_y(&self, k: usize, r: f64, spacing: f64) -> f64 {
        self.height() - r - (k as f64) * spacing * r
    }

    fn grid(&self, points: &[DataPoint]) -> Vec<Point> {
        let cols = usize::try_from(self.config.grid_columns.max(1)).unwrap_or(1);
        let cell = self.width() / cols as f64;
        (0..points.len())
            .map(|idx| {
                let row = idx / cols;
                let col = idx % cols;
                Point::new(
                    (col as f64) * cell + cell * 0.5,
                    (row as f64) * cell + cell * 0.5,
                )
            })
            .collect()
    }

    fn scatter(&self, points: &[DataPoint]) -> Vec<Point> {
        let xs = self.x_scale();
        let ys = self.y_scale();
        points
            .iter()
            .map(|p| Point::new(xs.map(p.a()), ys.map(p.b())))
            .collect()
    }

    fn bar(&self, points: &[DataPoint], r: f64) -> Vec<Point> {
        let cats = categories(points);
        let band = BandScale::new(cats.len(), (0.0, self.width()), self.config.band_padding);
        let mut stacked = vec![0usize; cats.len()];
        points
            .iter()
            .map(|p| {
                let band_idx = band_index(&cats, &p.category);
                let k = stacked[band_idx];
                stacked[band_idx] += 1;
                Point::new(
                    band.band_center(band_idx),
                    self.stack_y(k, r, self.config.bar_spacing),
                )
            })
            .collect()
    }

    fn radial(&self, points: &[DataPoint]) -> Vec<Point> {
        let center = self.canvas.inner_center();
        let base = self.width().min(self.height()) / 2.5;
        let extra = LinearScale::new(self.config.value_domain, (0.0, self.config.radial_extra))
            .clamped();
        let n = points.len() as f64;
        points
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                let angle = TAU * (idx as f64) / n - FRAC_PI_2;
                let radius = base + extra.map(p.a());
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect()
    }

    fn histogram(&self, points: &[DataPoint], r: f64) -> Vec<Point> {
        let xs = self.x_scale();
        let order: Vec<usize> = (0..points.len()).collect();
        let bins = binning::bin(
            &order,
            |&i| points[i].a(),
            self.config.value_domain,
            self.config.histogram_bins as usize,
        );
        let mut out = vec![Point::ZERO; points.len()];
        for b in &bins {
            let x = xs.map(b.midpoint());
            for (k, &&i) in b.members.iter().enumerate() {
                out[i] = Point::new(x, self.stack_y(k, r, self.config.stack_spacing));
            }
        }
        out
    }

    fn dot_plot(&self, points: &[DataPoint], r: f64) -> Vec<Point> {
        let xs = self.x_scale();
        let cell = 2.0 * r;
        let mut stacked = BTreeMap::<i64, usize>::new();
        points
            .iter()
            .map(|p| {
                let bucket = (xs.map(p.a()) / cell).floor() as i64;
                let k = stacked.entry(bucket).or_default();
                let y = self.stack_y(*k, r, self.config.stack_spacing);
                *k += 1;
                Point::new((bucket as f64) * cell + r, y)
            })
            .collect()
    }

    fn beeswarm(&self, points: &[DataPoint], r: f64) -> Vec<Point> {
        let xs = self.x_scale();
        let center_y = self.height() * 0.5;
        let collide_radius = r + self.config.beeswarm.collide_padding;
        let targets: Vec<f64> = points.iter().map(|p| xs.map(p.a())).collect();
        // Start on the center line with a small index-based stagger so that
        // neighbours do not begin exactly collinear.
        let start: Vec<Point> = targets
            .iter()
            .enumerate()
            .map(|(idx, &x)| {
                let stagger = ((idx as f64) * STAGGER_RATIO).fract() - 0.5;
                Point::new(x, center_y + stagger * collide_radius)
            })
            .collect();
        collision::relax(
            &start,
            |idx| targets[idx],
            center_y,
            collide_radius,
            &self.config.beeswarm,
            Some(Size::new(self.width(), self.height())),
        )
    }

    fn violin(&self, points: &[DataPoint], r: f64) -> Vec<Point> {
        let cats = categories(points);
        let band = BandScale::new(cats.len(), (0.0, self.width()), self.config.band_padding);
        let ys = self.y_scale();

        let mut by_category = vec![Vec::<usize>::new(); cats.len()];
        for (idx, p) in points.iter().enumerate() {
            by_category[band_index(&cats, &p.category)].push(idx);
        }

        let mut out = vec![Point::ZERO; points.len()];
        for (band_idx, members) in by_category.iter().enumerate() {
            let center_x = band.band_center(band_idx);
            let bins = binning::bin(
                members,
                |&i| points[i].a(),
                self.config.value_domain,
                self.config.violin_bins as usize,
            );
            for b in &bins {
                let y = ys.map(b.midpoint());
                for (k, &&i) in b.members.iter().enumerate() {
                    let side = if k % 2 == 0 { 1.0 } else { -1.0 };
                    let rank = (k + 2) / 2;
                    let offset = side * (rank as f64) * self.config.violin_spacing * r;
                    out[i] = Point::new(center_x + offset, y);
                }
            }
        }
        out
    }
}

fn band_index(sorted: &[String], category: &str) -> usize {
    sorted
        .binary_search_by(|c| c.as_str().cmp(category))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/calculator.rs"]
mod tests;

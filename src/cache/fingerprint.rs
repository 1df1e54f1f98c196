use crate::{
    foundation::core::Canvas,
    foundation::math::Fnv1a64,
    layout::{config::LayoutConfig, kind::LayoutKind},
    model::point::DataPoint,
    model::style::StyleParams,
};

/// 128-bit key over everything that affects a layout's geometry: kind, canvas,
/// effective radius, layout tunables and, per point in order, id, category and
/// values. Labels, extra fields and the palette are not part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub fn fingerprint_layout(
    kind: LayoutKind,
    points: &[DataPoint],
    style: &StyleParams,
    canvas: &Canvas,
    config: &LayoutConfig,
) -> LayoutFingerprint {
    let mut h = PairHasher::new();

    h.write_u8(kind.tag());
    for v in [
        canvas.width,
        canvas.height,
        canvas.margin.left,
        canvas.margin.right,
        canvas.margin.top,
        canvas.margin.bottom,
    ] {
        h.write_f64(v);
    }
    h.write_f64(style.geometry_radius());
    write_config(&mut h, config);

    h.write_u64(points.len() as u64);
    for p in points {
        h.write_str(&p.id);
        h.write_str(&p.category);
        h.write_opt_f64(p.value_a);
        h.write_opt_f64(p.value_b);
    }

    h.finish()
}

fn write_config(h: &mut PairHasher, config: &LayoutConfig) {
    h.write_f64(config.value_domain.0);
    h.write_f64(config.value_domain.1);
    for v in [config.grid_columns, config.histogram_bins, config.violin_bins] {
        h.write_u64(u64::from(v));
    }
    for v in [
        config.band_padding,
        config.radial_extra,
        config.bar_spacing,
        config.stack_spacing,
        config.violin_spacing,
    ] {
        h.write_f64(v);
    }
    let sim = &config.beeswarm;
    h.write_u64(u64::from(sim.iterations));
    h.write_u64(u64::from(sim.collide_passes));
    h.write_u64(u64::from(sim.alpha_decay_ticks));
    for v in [
        sim.x_strength,
        sim.y_strength,
        sim.collide_padding,
        sim.velocity_decay,
        sim.alpha_min,
    ] {
        h.write_f64(v);
    }
}

struct PairHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl PairHasher {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn write_u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn write_u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_opt_f64(&mut self, v: Option<f64>) {
        match v {
            Some(x) => {
                self.write_u8(1);
                self.write_f64(x);
            }
            None => self.write_u8(0),
        }
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.a.write_bytes(s.as_bytes());
        self.b.write_bytes(s.as_bytes());
    }

    fn finish(self) -> LayoutFingerprint {
        LayoutFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/fingerprint.rs"]
mod tests;

//! Equal-width binning over a bounded value domain.
//!
//! Bins are closed on their upper bound: a value equal to a threshold lands in
//! the bin below it, and the first bin also includes the domain minimum.
//! Values outside the domain are clamped into the first/last bin so that no
//! member is ever dropped. Empty bins are kept, which keeps bin indices stable.

#[derive(Clone, Debug, PartialEq)]
pub struct Bin<'a, T> {
    pub lower: f64,
    pub upper: f64,
    pub members: Vec<&'a T>,
}

impl<T> Bin<'_, T> {
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) * 0.5
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Split `domain` into `count` equal bins (at least one) and distribute `items`
/// in encounter order.
pub fn bin<'a, T, F>(items: &'a [T], value: F, domain: (f64, f64), count: usize) -> Vec<Bin<'a, T>>
where
    F: Fn(&T) -> f64,
{
    let count = count.max(1);
    let (d0, d1) = domain;
    let span = d1 - d0;
    let degenerate = !span.is_finite() || span <= 0.0;

    let mut bins: Vec<Bin<'a, T>> = (0..count)
        .map(|k| {
            if degenerate {
                return Bin {
                    lower: d0,
                    upper: d0,
                    members: Vec::new(),
                };
            }
            let lower = d0 + span * (k as f64) / (count as f64);
            let upper = if k + 1 == count {
                d1
            } else {
                d0 + span * ((k + 1) as f64) / (count as f64)
            };
            Bin {
                lower,
                upper,
                members: Vec::new(),
            }
        })
        .collect();

    if degenerate {
        bins[0].members.extend(items.iter());
        return bins;
    }

    let uppers: Vec<f64> = bins.iter().map(|b| b.upper).collect();
    for item in items {
        let v = value(item);
        let idx = uppers.partition_point(|&u| u < v).min(count - 1);
        bins[idx].members.push(item);
    }
    bins
}

#[cfg(test)]
#[path = "../../tests/unit/layout/binning.rs"]
mod tests;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::{
    cache::fingerprint::{LayoutFingerprint, fingerprint_layout},
    foundation::error::MorphResult,
    layout::{calculator::LayoutCalculator, kind::LayoutKind, positions::PositionMap},
    model::point::DataPoint,
    model::style::StyleParams,
};

/// Memoizes [`LayoutCalculator::compute`] results keyed by
/// [`LayoutFingerprint`], so progress updates only pay for a blend.
///
/// Oldest entries are evicted first once `capacity` is reached.
#[derive(Debug)]
pub struct LayoutCache {
    entries: HashMap<LayoutFingerprint, Arc<PositionMap>>,
    order: VecDeque<LayoutFingerprint>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::with_capacity(32)
    }
}

impl LayoutCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get_or_compute(
        &mut self,
        calc: &LayoutCalculator,
        kind: LayoutKind,
        points: &[DataPoint],
        style: &StyleParams,
    ) -> MorphResult<Arc<PositionMap>> {
        let key = fingerprint_layout(kind, points, style, calc.canvas(), calc.config());
        if let Some(hit) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(%kind, "layout cache hit");
            return Ok(Arc::clone(hit));
        }

        self.misses += 1;
        tracing::debug!(%kind, "layout cache miss");
        let map = Arc::new(calc.compute(kind, points, style)?);

        while self.entries.len() >= self.capacity {
            match self.order.pop_front() {
                Some(old) => {
                    self.entries.remove(&old);
                }
                None => break,
            }
        }
        self.entries.insert(key, Arc::clone(&map));
        self.order.push_back(key);
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/layout_cache.rs"]
mod tests;

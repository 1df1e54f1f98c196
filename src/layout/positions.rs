use std::collections::BTreeMap;

use crate::foundation::core::Point;

/// Immutable snapshot of point id -> position for one layout of one dataset.
///
/// Keys iterate in id order, which keeps serialized output and fingerprints
/// stable.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PositionMap {
    positions: BTreeMap<String, Point>,
}

impl PositionMap {
    pub fn get(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.positions.iter().map(|(id, p)| (id.as_str(), *p))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.positions.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Point)> for PositionMap {
    fn from_iter<I: IntoIterator<Item = (String, Point)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/positions.rs"]
mod tests;

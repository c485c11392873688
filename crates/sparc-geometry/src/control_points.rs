//! Mutable, authoring-side control point sequence.
//!
//! Every node is stored as a (pre-handle, point, post-handle) triple in one
//! flat buffer: node `i` occupies `3i`, `3i + 1` and `3i + 2`. Kernels other
//! than Bezier only read the points. Each mutation takes a fresh
//! [`Generation`], which is how cached snapshots notice they are stale.
//!
//! Out-of-range indices are clamped to the nearest valid index.

use serde::{Deserialize, Serialize};
use sparc_core::traits::BoundingBox;
use sparc_core::{Generation, SparcError};
use sparc_math::CurveVector;

use crate::kernel::bezier::NODE_STRIDE;
use crate::spline_type::SplineType;

/// Fraction of the way toward a neighbour at which an automatic handle sits.
pub const AUTO_HANDLE_FRACTION: f64 = 1.0 / 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "RawControlPoints<V>",
    into = "RawControlPoints<V>",
    bound(
        serialize = "V: CurveVector + Serialize",
        deserialize = "V: CurveVector + Deserialize<'de>"
    )
)]
pub struct ControlPoints<V> {
    nodes: Vec<V>,
    generation: Generation,
}

/// Serialized form: the flat triple buffer, checked on the way in.
#[derive(Serialize, Deserialize)]
struct RawControlPoints<V> {
    nodes: Vec<V>,
}

impl<V: CurveVector> TryFrom<RawControlPoints<V>> for ControlPoints<V> {
    type Error = SparcError;

    fn try_from(raw: RawControlPoints<V>) -> Result<Self, Self::Error> {
        if raw.nodes.len() % NODE_STRIDE != 0 {
            return Err(SparcError::Geometry(format!(
                "Control point buffer holds {} entries, not a multiple of {NODE_STRIDE}",
                raw.nodes.len()
            )));
        }
        Ok(Self {
            nodes: raw.nodes,
            generation: Generation::next(),
        })
    }
}

impl<V> From<ControlPoints<V>> for RawControlPoints<V> {
    fn from(points: ControlPoints<V>) -> Self {
        Self {
            nodes: points.nodes,
        }
    }
}

impl<V: CurveVector> ControlPoints<V> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: Generation::next(),
        }
    }

    /// Build a sequence by appending each position with automatic handles.
    pub fn from_positions(positions: impl IntoIterator<Item = V>) -> Self {
        let mut points = Self::new();
        for position in positions {
            points.push(position);
        }
        points
    }

    pub fn len(&self) -> usize {
        self.nodes.len() / NODE_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Stamp of the current state; changes on every mutation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn position(&self, index: usize) -> Option<V> {
        self.nodes.get(NODE_STRIDE * index + 1).copied()
    }

    pub fn positions(&self) -> impl Iterator<Item = V> + '_ {
        self.nodes.iter().skip(1).step_by(NODE_STRIDE).copied()
    }

    /// `(pre, post)` handles of node `index`.
    pub fn handles(&self, index: usize) -> Option<(V, V)> {
        let base = NODE_STRIDE * index;
        Some((*self.nodes.get(base)?, *self.nodes.get(base + 2)?))
    }

    /// The flat (pre-handle, point, post-handle) backing buffer.
    pub fn as_flat(&self) -> &[V] {
        &self.nodes
    }

    /// Points in the layout expected by `spline_type`.
    pub fn to_layout(&self, spline_type: SplineType) -> Vec<V> {
        match spline_type {
            SplineType::Bezier => self.nodes.clone(),
            _ => self.positions().collect(),
        }
    }

    /// Append a node after the current last node.
    pub fn push(&mut self, position: V) {
        self.insert(self.len(), position);
    }

    /// Insert a node at `index` (clamped to `0..=len`), returning the index used.
    ///
    /// The new node's handles point one third of the way toward its
    /// neighbours. A neighbour whose inward handle is still collapsed onto
    /// its point gets that handle aimed at the new node.
    pub fn insert(&mut self, index: usize, position: V) -> usize {
        let count = self.len();
        let index = if index > count {
            log::warn!("Insert index {index} out of range, clamped to {count}");
            count
        } else {
            index
        };

        let mut pre = position;
        let mut post = position;

        if let Some(prev) = index.checked_sub(1) {
            let point = self.nodes[NODE_STRIDE * prev + 1];
            pre = position.lerp(point, AUTO_HANDLE_FRACTION);
            let prev_post = &mut self.nodes[NODE_STRIDE * prev + 2];
            if *prev_post == point {
                *prev_post = point.lerp(position, AUTO_HANDLE_FRACTION);
            }
        }
        if index < count {
            let point = self.nodes[NODE_STRIDE * index + 1];
            post = position.lerp(point, AUTO_HANDLE_FRACTION);
            let next_pre = &mut self.nodes[NODE_STRIDE * index];
            if *next_pre == point {
                *next_pre = point.lerp(position, AUTO_HANDLE_FRACTION);
            }
        }

        let at = NODE_STRIDE * index;
        self.nodes.splice(at..at, [pre, position, post]);
        self.touch();
        index
    }

    /// Remove the node at `index` (clamped), returning its position.
    ///
    /// When the first or last node is removed, the outward handle of the node
    /// that takes its place collapses onto its point. The other end is left
    /// alone.
    pub fn remove(&mut self, index: usize) -> Option<V> {
        let index = self.clamp_existing(index, "Remove")?;
        let was_last = index + 1 == self.len();

        let at = NODE_STRIDE * index;
        let removed: Vec<V> = self.nodes.drain(at..at + NODE_STRIDE).collect();
        if index == 0 {
            self.collapse_first_handle();
        }
        if was_last {
            self.collapse_last_handle();
        }
        self.touch();
        Some(removed[1])
    }

    /// Move node `index` (clamped) to `position`, carrying its handles along.
    /// Returns the index used, or `None` when the sequence is empty.
    pub fn update(&mut self, index: usize, position: V) -> Option<usize> {
        let index = self.clamp_existing(index, "Update")?;
        let base = NODE_STRIDE * index;
        let delta = position - self.nodes[base + 1];
        self.nodes[base] = self.nodes[base] + delta;
        self.nodes[base + 1] = position;
        self.nodes[base + 2] = self.nodes[base + 2] + delta;
        self.touch();
        Some(index)
    }

    /// Set both handles of node `index` (clamped).
    pub fn set_handles(&mut self, index: usize, pre: V, post: V) -> Option<usize> {
        let index = self.clamp_existing(index, "Set handles")?;
        let base = NODE_STRIDE * index;
        self.nodes[base] = pre;
        self.nodes[base + 2] = post;
        self.touch();
        Some(index)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.touch();
    }

    fn clamp_existing(&self, index: usize, op: &str) -> Option<usize> {
        let last = self.len().checked_sub(1)?;
        if index > last {
            log::warn!("{op} index {index} out of range, clamped to {last}");
            Some(last)
        } else {
            Some(index)
        }
    }

    fn collapse_first_handle(&mut self) {
        if self.nodes.len() < NODE_STRIDE {
            return;
        }
        self.nodes[0] = self.nodes[1];
    }

    fn collapse_last_handle(&mut self) {
        let len = self.nodes.len();
        if len < NODE_STRIDE {
            return;
        }
        self.nodes[len - 1] = self.nodes[len - 2];
    }

    fn touch(&mut self) {
        self.generation = Generation::next();
    }
}

impl<V: CurveVector> Default for ControlPoints<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CurveVector> PartialEq for ControlPoints<V> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<V: CurveVector> BoundingBox for ControlPoints<V> {
    type Point = V;

    fn bounding_box(&self) -> Option<(V, V)> {
        let mut positions = self.positions();
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparc_math::{DVec2, DVec3};

    fn dvec2(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    fn line3() -> ControlPoints<DVec2> {
        ControlPoints::from_positions([dvec2(0.0, 0.0), dvec2(3.0, 0.0), dvec2(6.0, 0.0)])
    }

    #[test]
    fn test_flat_layout() {
        let points = line3();
        assert_eq!(points.len(), 3);
        assert_eq!(points.as_flat().len(), 9);
        assert_eq!(points.as_flat()[4], dvec2(3.0, 0.0));
        let collected: Vec<_> = points.positions().collect();
        assert_eq!(collected, vec![dvec2(0.0, 0.0), dvec2(3.0, 0.0), dvec2(6.0, 0.0)]);
    }

    #[test]
    fn test_auto_handles_point_inward_only_at_ends() {
        let points = line3();
        let (pre0, post0) = points.handles(0).unwrap();
        assert_eq!(pre0, dvec2(0.0, 0.0));
        assert!((post0 - dvec2(1.0, 0.0)).length() < 1e-12);

        let (pre1, post1) = points.handles(1).unwrap();
        assert!((pre1 - dvec2(2.0, 0.0)).length() < 1e-12);
        assert!((post1 - dvec2(4.0, 0.0)).length() < 1e-12);

        let (pre2, post2) = points.handles(2).unwrap();
        assert!((pre2 - dvec2(5.0, 0.0)).length() < 1e-12);
        assert_eq!(post2, dvec2(6.0, 0.0));
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut points = line3();
        let used = points.insert(99, dvec2(9.0, 0.0));
        assert_eq!(used, 3);
        assert_eq!(points.position(3), Some(dvec2(9.0, 0.0)));
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut points = line3();
        points.insert(1, dvec2(1.5, 1.0));
        let collected: Vec<_> = points.positions().collect();
        assert_eq!(collected[1], dvec2(1.5, 1.0));
        assert_eq!(collected[2], dvec2(3.0, 0.0));
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_remove_clamps_and_collapses_outer_handles() {
        let mut points = line3();
        assert_eq!(points.remove(42), Some(dvec2(6.0, 0.0)));
        let (_, post) = points.handles(1).unwrap();
        assert_eq!(post, dvec2(3.0, 0.0));

        assert_eq!(points.remove(0), Some(dvec2(0.0, 0.0)));
        let (pre, _) = points.handles(0).unwrap();
        assert_eq!(pre, dvec2(3.0, 0.0));
    }

    #[test]
    fn test_remove_first_keeps_last_handles() {
        let mut points = line3();
        points.set_handles(2, dvec2(5.0, 1.0), dvec2(8.0, 2.0));
        points.remove(0);
        assert_eq!(points.handles(1), Some((dvec2(5.0, 1.0), dvec2(8.0, 2.0))));
        let (pre, _) = points.handles(0).unwrap();
        assert_eq!(pre, dvec2(3.0, 0.0));
    }

    #[test]
    fn test_remove_last_keeps_first_handles() {
        let mut points = line3();
        points.set_handles(0, dvec2(-2.0, 1.0), dvec2(1.0, 1.0));
        points.remove(2);
        assert_eq!(points.handles(0), Some((dvec2(-2.0, 1.0), dvec2(1.0, 1.0))));
        let (_, post) = points.handles(1).unwrap();
        assert_eq!(post, dvec2(3.0, 0.0));
    }

    #[test]
    fn test_remove_with_partial_triple_does_not_panic() {
        let mut points = ControlPoints {
            nodes: vec![DVec2::ZERO, DVec2::ZERO, DVec2::ZERO, DVec2::ONE],
            generation: Generation::next(),
        };
        assert_eq!(points.remove(0), Some(DVec2::ZERO));
        assert_eq!(points.as_flat(), &[DVec2::ONE]);
    }

    #[test]
    fn test_json_round_trip() {
        let points = line3();
        let json = serde_json::to_string(&points).unwrap();
        let back: ControlPoints<DVec2> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, points);
        assert_eq!(back.len(), 3);
        assert_ne!(back.generation(), points.generation());
    }

    #[test]
    fn test_json_rejects_partial_triples() {
        let result =
            serde_json::from_str::<ControlPoints<DVec2>>(r#"{"nodes":[[0,0],[0,0],[0,0],[1,1]]}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not a multiple of 3"), "{err}");
    }

    #[test]
    fn test_remove_from_empty() {
        let mut points: ControlPoints<DVec3> = ControlPoints::new();
        assert_eq!(points.remove(0), None);
        assert_eq!(points.update(0, DVec3::ONE), None);
    }

    #[test]
    fn test_update_moves_handles_rigidly() {
        let mut points = line3();
        let (pre, post) = points.handles(1).unwrap();
        points.update(1, dvec2(3.0, 2.0));
        let (new_pre, new_post) = points.handles(1).unwrap();
        assert_eq!(new_pre - pre, dvec2(0.0, 2.0));
        assert_eq!(new_post - post, dvec2(0.0, 2.0));
    }

    #[test]
    fn test_every_mutation_changes_generation() {
        let mut points = line3();
        let g0 = points.generation();
        points.update(0, dvec2(0.0, 1.0));
        let g1 = points.generation();
        assert_ne!(g0, g1);
        points.set_handles(0, dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        assert_ne!(g1, points.generation());
    }

    #[test]
    fn test_bounding_box() {
        let points = ControlPoints::from_positions([
            DVec3::new(1.0, -2.0, 0.0),
            DVec3::new(-1.0, 5.0, 3.0),
        ]);
        let (min, max) = points.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(max, DVec3::new(1.0, 5.0, 3.0));
        assert!(ControlPoints::<DVec3>::new().bounding_box().is_none());
    }

    #[test]
    fn test_layout_for_kernels() {
        let points = line3();
        assert_eq!(points.to_layout(SplineType::Bezier).len(), 9);
        assert_eq!(points.to_layout(SplineType::CatmullRom).len(), 3);
    }
}

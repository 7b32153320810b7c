//! Immutable k-d tree index over a hotspot reference set.
//!
//! The index is a balanced binary spatial partition built by recursive
//! median split on alternating axes. It is constructed once from the full
//! reference set and never mutated afterwards, so shared references to it
//! may be searched concurrently without coordination.

use std::cmp::Ordering;

use geo::Point;

use crate::spatial::squared_distance;
use crate::types::Hotspot;

/// Split axis of a tree node, fixed at construction time.
///
/// Stored per node rather than recomputed during search so the two always
/// agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axis for a given recursion depth: alternates x, y starting at x.
    fn from_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Axis::X } else { Axis::Y }
    }

    /// The point's coordinate along this axis.
    fn coord(self, point: &Point) -> f64 {
        match self {
            Axis::X => point.x(),
            Axis::Y => point.y(),
        }
    }
}

#[derive(Debug, PartialEq)]
struct Node {
    hotspot: Hotspot,
    axis: Axis,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Branch-and-bound nearest-neighbor descent.
    ///
    /// The running best is replaced only on a strict improvement in squared
    /// distance, so at equal distance the first candidate found (root, then
    /// near subtree, then far subtree) wins.
    fn nearest<'a>(&'a self, target: &Point, best: Option<&'a Hotspot>) -> &'a Hotspot {
        let best = match best {
            Some(current)
                if squared_distance(target, &self.hotspot.location)
                    < squared_distance(target, &current.location) =>
            {
                &self.hotspot
            }
            Some(current) => current,
            None => &self.hotspot,
        };

        // Signed offset from the splitting hyperplane; target on the left
        // side descends left first.
        let delta = self.axis.coord(target) - self.axis.coord(&self.hotspot.location);
        let (near, far) = if delta < 0.0 {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        };

        let mut best = match near {
            Some(child) => child.nearest(target, Some(best)),
            None => best,
        };

        // The far side can only hold a closer point if the hyperplane itself
        // is strictly closer than the current best.
        if delta * delta < squared_distance(target, &best.location) {
            if let Some(child) = far {
                best = child.nearest(target, Some(best));
            }
        }

        best
    }
}

/// An immutable balanced k-d tree over a set of [`Hotspot`]s.
///
/// Built once with [`HotspotIndex::build`]; supports nearest-neighbor lookup
/// with [`HotspotIndex::find_nearest`]. There is no mutation API.
///
/// # Examples
///
/// ```rust
/// use nearspot::{Hotspot, HotspotIndex, Point};
///
/// let index = HotspotIndex::build(vec![
///     Hotspot::new("H1", "Cafe", "food", 0.0, 0.0),
///     Hotspot::new("H2", "Park", "leisure", 10.0, 10.0),
/// ]);
///
/// let nearest = index.find_nearest(&Point::new(1.0, 1.0)).unwrap();
/// assert_eq!(nearest.id, "H1");
/// ```
#[derive(Debug, Default)]
pub struct HotspotIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl HotspotIndex {
    /// Build an index from a reference set by recursive median split.
    ///
    /// Each level sorts its slice by the level's axis (stable, so repeated
    /// builds on identical input produce structurally identical trees, even
    /// under duplicate coordinates) and takes the element at `len / 2` as the
    /// node. An empty input yields an empty index, which is valid and simply
    /// answers every search with `None`.
    pub fn build(hotspots: Vec<Hotspot>) -> Self {
        let len = hotspots.len();
        Self {
            root: build_subtree(hotspots, 0),
            len,
        }
    }

    /// Number of hotspots in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no hotspots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the indexed hotspot closest to `target` in Euclidean distance.
    ///
    /// Returns `None` only when the index is empty. At equal squared
    /// distance the earlier-visited candidate is retained.
    ///
    /// Read-only; repeated calls with the same target always return the same
    /// hotspot, and independent searches may run concurrently on a shared
    /// index.
    pub fn find_nearest(&self, target: &Point) -> Option<&Hotspot> {
        self.root.as_deref().map(|node| node.nearest(target, None))
    }
}

fn build_subtree(mut hotspots: Vec<Hotspot>, depth: usize) -> Option<Box<Node>> {
    if hotspots.is_empty() {
        return None;
    }

    let axis = Axis::from_depth(depth);
    hotspots.sort_by(|a, b| {
        axis.coord(&a.location)
            .partial_cmp(&axis.coord(&b.location))
            .unwrap_or(Ordering::Equal)
    });

    let median = hotspots.len() / 2;
    let right = build_subtree(hotspots.split_off(median + 1), depth + 1);
    let hotspot = hotspots.pop()?;
    let left = build_subtree(hotspots, depth + 1);

    Some(Box::new(Node {
        hotspot,
        axis,
        left,
        right,
    }))
}

//! Union and intersection of two rings.
//!
//! The overlay works in four steps:
//!
//! 1. Both rings are oriented counterclockwise and moved close to the origin of coordinates, so that the arithmetic
//!    does not lose precision on large projected coordinates.
//! 2. Every segment of each ring is split at all the points where it touches or crosses the other ring. Split points
//!    are computed once per segment pair and shared by both rings, so the two rings end up with exactly the same nodes.
//! 3. Each piece is classified as lying inside or outside the other ring (by its midpoint), or as shared with the other
//!    ring. Pieces forming the boundary of the result are kept: outside pieces for union, inside pieces for
//!    intersection, and shared pieces going in the same direction for both.
//! 4. Kept pieces are linked into closed rings. Counterclockwise rings are outer boundaries, clockwise ones are holes.

use crate::cartesian::{Point2d, Rect, Segment, Winding};
use crate::error::GeometryError;
use crate::ring::{point_key, tolerance_for, PointLocation, Ring};
use ahash::{HashMap, HashMapExt, HashSet};
use nalgebra::Vector2;

type Edge = (Point2d, Point2d);
type EdgeKey = ((u64, u64), (u64, u64));

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Operation {
    Union,
    Intersection,
}

/// Union of two overlapping rings.
///
/// Returns the outer boundary of the union. If the union has holes (e.g. a horseshoe closed by a bar), they are
/// dropped.
///
/// The operands must overlap: if their union consists of more than one piece (including the case of rings touching
/// at a single point), [`GeometryError::DisjointOperands`] is returned.
pub fn ring_union(
    a: impl IntoIterator<Item = Point2d>,
    b: impl IntoIterator<Item = Point2d>,
) -> Result<Ring, GeometryError> {
    let (mut outer, holes) = overlay(Ring::new(a)?, Ring::new(b)?, Operation::Union)?;
    if !holes.is_empty() {
        log::debug!(
            "Union produced {} hole(s), only the outer boundary is kept",
            holes.len()
        );
    }

    match outer.len() {
        0 => Err(GeometryError::Topology(
            "union produced no outer ring".to_string(),
        )),
        1 => Ok(outer.remove(0).oriented(Winding::Clockwise)),
        _ => Err(GeometryError::DisjointOperands),
    }
}

/// Intersection of two rings.
///
/// Returns `None` if the rings do not overlap, including the case when they only touch each other along an edge or at
/// a point. If the intersection consists of several separate pieces (possible for concave rings),
/// [`GeometryError::MultipleComponents`] is returned.
pub fn ring_intersection(
    a: impl IntoIterator<Item = Point2d>,
    b: impl IntoIterator<Item = Point2d>,
) -> Result<Option<Ring>, GeometryError> {
    let (mut outer, _) = overlay(Ring::new(a)?, Ring::new(b)?, Operation::Intersection)?;
    match outer.len() {
        0 => Ok(None),
        1 => Ok(Some(outer.remove(0).oriented(Winding::Clockwise))),
        count => Err(GeometryError::MultipleComponents { count }),
    }
}

/// Returns outer rings and holes of the result of the operation.
fn overlay(
    a: Ring,
    b: Ring,
    operation: Operation,
) -> Result<(Vec<Ring>, Vec<Ring>), GeometryError> {
    let bounds = a.bounding_rect().merge(b.bounding_rect());
    let tolerance = tolerance_for(&bounds);
    let origin = bounds.min_corner().coords;

    let a = a.oriented(Winding::CounterClockwise).translate(-origin);
    let b = snap_to(
        &b.oriented(Winding::CounterClockwise).translate(-origin),
        &a,
        tolerance,
    )?;

    let (a_edges, b_edges) = split_edges(&a, &b, tolerance);
    let a_keys: HashSet<EdgeKey> = a_edges.iter().map(edge_key).collect();
    let b_keys: HashSet<EdgeKey> = b_edges.iter().map(edge_key).collect();

    let keep_side = |location: PointLocation| match operation {
        Operation::Union => location == PointLocation::Outside,
        Operation::Intersection => location == PointLocation::Inside,
    };

    let mut kept = Vec::with_capacity(a_edges.len() + b_edges.len());
    for edge in a_edges {
        let keep = if b_keys.contains(&edge_key(&edge)) {
            true
        } else if b_keys.contains(&edge_key(&(edge.1, edge.0))) {
            false
        } else {
            keep_side(side_of(&edge, &b, tolerance))
        };

        if keep {
            kept.push(edge);
        }
    }

    for edge in b_edges {
        if a_keys.contains(&edge_key(&edge)) || a_keys.contains(&edge_key(&(edge.1, edge.0))) {
            continue;
        }

        if keep_side(side_of(&edge, &a, tolerance)) {
            kept.push(edge);
        }
    }

    let mut outer = vec![];
    let mut holes = vec![];
    for ring in link(&kept)? {
        let extent = ring.bounding_rect().extent();
        let area = ring.area_signed();
        if area.abs() <= tolerance * extent {
            log::debug!("Dropping sliver ring with area {area}");
            continue;
        }

        let ring = ring.translate(origin);
        if area > 0.0 {
            outer.push(ring);
        } else {
            holes.push(ring);
        }
    }

    Ok((outer, holes))
}

/// Replaces vertices of `ring` that are closer than `tolerance` to a vertex of `target` with that vertex.
fn snap_to(ring: &Ring, target: &Ring, tolerance: f64) -> Result<Ring, GeometryError> {
    let tolerance_sq = tolerance * tolerance;
    let points = ring.points().iter().map(|p| {
        target
            .points()
            .iter()
            .find(|t| (**t - *p).norm_squared() <= tolerance_sq)
            .copied()
            .unwrap_or(*p)
    });

    Ring::new(points)
}

fn split_edges(a: &Ring, b: &Ring, tolerance: f64) -> (Vec<Edge>, Vec<Edge>) {
    let mut a_splits = initial_splits(a);
    let mut b_splits = initial_splits(b);
    let b_rects: Vec<Rect> = b.iter_segments().map(|s| segment_rect(&s)).collect();

    for (i, a_segment) in a.iter_segments().enumerate() {
        let a_rect = segment_rect(&a_segment);
        for (j, b_segment) in b.iter_segments().enumerate() {
            if !a_rect.intersects(&b_rects[j], tolerance) {
                continue;
            }

            for hit in a_segment.hits(&b_segment, tolerance) {
                a_splits[i].push((hit.t_self, hit.point));
                b_splits[j].push((hit.t_other, hit.point));
            }
        }
    }

    (pieces(a_splits), pieces(b_splits))
}

fn initial_splits(ring: &Ring) -> Vec<Vec<(f64, Point2d)>> {
    ring.iter_segments()
        .map(|Segment(start, end)| vec![(0.0, *start), (1.0, *end)])
        .collect()
}

fn segment_rect(segment: &Segment<Point2d>) -> Rect {
    Rect::new(
        segment.0.x.min(segment.1.x),
        segment.0.y.min(segment.1.y),
        segment.0.x.max(segment.1.x),
        segment.0.y.max(segment.1.y),
    )
}

/// Converts split points of each segment into the pieces between them.
fn pieces(splits: Vec<Vec<(f64, Point2d)>>) -> Vec<Edge> {
    let mut edges = vec![];
    for mut segment_splits in splits {
        segment_splits.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut prev: Option<Point2d> = None;
        for (_, point) in segment_splits {
            if let Some(p) = prev.filter(|p| *p != point) {
                edges.push((p, point));
            }
            prev = Some(point);
        }
    }

    edges
}

fn edge_key(edge: &Edge) -> EdgeKey {
    (point_key(&edge.0), point_key(&edge.1))
}

/// Location of a piece relative to the other ring. Never returns [`PointLocation::Boundary`].
fn side_of(edge: &Edge, ring: &Ring, tolerance: f64) -> PointLocation {
    let mid = Point2d::from((edge.0.coords + edge.1.coords) / 2.0);
    match ring.locate(&mid, tolerance) {
        PointLocation::Boundary if ring.winding_number(&mid) != 0 => PointLocation::Inside,
        PointLocation::Boundary => PointLocation::Outside,
        location => location,
    }
}

/// Links edges into closed rings.
///
/// When a node has several unused outgoing edges, the leftmost turn is taken. For counterclockwise boundaries this
/// keeps the faces touching at a single point separate.
fn link(edges: &[Edge]) -> Result<Vec<Ring>, GeometryError> {
    let mut outgoing: HashMap<(u64, u64), Vec<usize>> = HashMap::new();
    for (i, edge) in edges.iter().enumerate() {
        outgoing.entry(point_key(&edge.0)).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut rings = vec![];

    for start in 0..edges.len() {
        if used[start] {
            continue;
        }
        used[start] = true;

        let (first, mut current) = edges[start];
        let mut prev = first;
        let mut points = vec![first];

        while current != first {
            if points.len() > edges.len() {
                return Err(GeometryError::Topology(
                    "edge chain does not close".to_string(),
                ));
            }
            points.push(current);

            let incoming = current - prev;
            let next = outgoing
                .get(&point_key(&current))
                .and_then(|candidates| leftmost(candidates, edges, &used, incoming))
                .ok_or_else(|| {
                    GeometryError::Topology(format!(
                        "no outgoing edge at ({}, {})",
                        current.x, current.y
                    ))
                })?;

            used[next] = true;
            prev = current;
            current = edges[next].1;
        }

        if points.len() >= 3 {
            rings.push(Ring::from_raw(points));
        }
    }

    Ok(rings)
}

fn leftmost(
    candidates: &[usize],
    edges: &[Edge],
    used: &[bool],
    incoming: Vector2<f64>,
) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .filter(|&i| !used[i])
        .map(|i| {
            let out = edges[i].1 - edges[i].0;
            let turn = (incoming.x * out.y - incoming.y * out.x).atan2(incoming.dot(&out));
            (i, turn)
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

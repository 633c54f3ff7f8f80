//! Ordering an unordered set of boundary edges into a closed polygon.

use log::trace;

use std::collections::{ BTreeSet, HashSet, VecDeque };

use crate::error::{ Error, Result };

use super::Outline;
use super::vertex::{ Edge, Vertex };

/// Connect the given edges into a single closed polygon.
///
/// Starting with an arbitrary edge, the polygon is grown at either end
/// by an edge sharing an end point with it, until an edge connects
/// both ends. The scan for the next edge follows the ordering of
/// `Edge`, so the result is deterministic for a given input.
///
/// Fails with `Error::DisjointBoundary` unless the edges form exactly
/// one simple, closed loop.
pub fn stitch<I>(edges: I) -> Result<Outline>
where I: IntoIterator<Item=Edge> {
    let mut remaining = edges.into_iter().collect::<BTreeSet<_>>();
    let (a, b) = remaining.pop_first()
        .ok_or_else(|| Error::DisjointBoundary("no edges to connect".into()))?
        .endpoints();
    let mut polygon = VecDeque::with_capacity(remaining.len() + 1);
    polygon.push_back(a);
    polygon.push_back(b);
    let mut visited = HashSet::with_capacity(remaining.len() + 1);
    visited.insert(a);
    visited.insert(b);
    let mut closed = false;
    while !remaining.is_empty() {
        if closed {
            return Err(Error::DisjointBoundary(format!(
                "outline closed with {} edges left over", remaining.len())))
        }
        let (head, tail) = ends(&polygon);
        let edge = remaining.iter()
            .find(|e| e.contains(head) || e.contains(tail))
            .copied()
            .ok_or_else(|| Error::DisjointBoundary(format!(
                "none of {} remaining edges connect to the outline", remaining.len())))?;
        remaining.remove(&edge);
        if let Some(v) = edge.other(head) {
            if v == tail {
                trace!("closing outline of {} points", polygon.len());
                closed = true;
                continue
            }
            extend(&mut visited, v)?;
            polygon.push_front(v);
        } else if let Some(v) = edge.other(tail) {
            extend(&mut visited, v)?;
            polygon.push_back(v);
        }
    }
    if !closed {
        return Err(Error::DisjointBoundary(format!(
            "outline of {} points does not close", polygon.len())))
    }
    Ok(Outline::new(polygon.into_iter().collect()))
}

fn ends(polygon: &VecDeque<Vertex>) -> (Vertex, Vertex) {
    // The polygon always holds at least the two points of the first edge.
    (polygon[0], polygon[polygon.len() - 1])
}

fn extend(visited: &mut HashSet<Vertex>, v: Vertex) -> Result<()> {
    if !visited.insert(v) {
        return Err(Error::DisjointBoundary(
            format!("outline touches itself at ({}, {})", v.x(), v.y())))
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Point;
    use crate::outline::vertex::Precision;

    fn v(x: f64, y: f64) -> Vertex {
        Precision::EXACT.round(Point::new(x, y))
    }

    fn ring(points: &[Vertex]) -> Vec<Edge> {
        (0 .. points.len())
            .filter_map(|i| Edge::new(points[i], points[(i + 1) % points.len()]))
            .collect()
    }

    fn assert_traces(outline: &Outline, edges: &[Edge]) {
        assert_eq!(outline.len(), edges.len());
        let traced = outline.edges().collect::<BTreeSet<_>>();
        assert_eq!(traced, edges.iter().copied().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_square() {
        let square = [v(0., 0.), v(1., 0.), v(1., 1.), v(0., 1.)];
        let edges = ring(&square);
        assert_traces(&stitch(edges.iter().copied().rev()).unwrap(), &edges);
    }

    #[test]
    fn test_deterministic() {
        let pts = (0..12).map(|i| {
            let a = (i as f64 * 30.).to_radians();
            v(a.cos(), a.sin())
        }).collect::<Vec<_>>();
        let edges = ring(&pts);
        let o1 = stitch(edges.iter().copied()).unwrap();
        let o2 = stitch(edges.iter().copied().rev()).unwrap();
        assert_eq!(o1, o2);
        assert_traces(&o1, &edges);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(stitch(Vec::new()), Err(Error::DisjointBoundary(_))));
    }

    #[test]
    fn test_open_path() {
        let edges = vec![
            Edge::new(v(0., 0.), v(1., 0.)).unwrap(),
            Edge::new(v(1., 0.), v(1., 1.)).unwrap(),
        ];
        assert!(matches!(stitch(edges), Err(Error::DisjointBoundary(_))));
    }

    #[test]
    fn test_two_loops() {
        let mut edges = ring(&[v(0., 0.), v(1., 0.), v(0., 1.)]);
        edges.extend(ring(&[v(5., 5.), v(6., 5.), v(5., 6.)]));
        assert!(matches!(stitch(edges), Err(Error::DisjointBoundary(_))));
    }

    #[test]
    fn test_figure_eight() {
        // Two triangles sharing the vertex (0,0).
        let mut edges = ring(&[v(0., 0.), v(1., 0.), v(1., 1.)]);
        edges.extend(ring(&[v(0., 0.), v(-1., 0.), v(-1., -1.)]));
        assert!(matches!(stitch(edges), Err(Error::DisjointBoundary(_))));
    }
}

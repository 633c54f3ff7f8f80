//! Extraction of the exterior edges of a group of tiles.

use std::collections::{ BTreeSet, HashSet };

use crate::error::{ Error, Result };
use crate::geo::Schema;
use crate::grid::{ Side, Tile };

use super::vertex::{ Edge, Precision };

/// The exterior edges of a group of tiles, in no particular order.
pub type BoundaryEdges = BTreeSet<Edge>;

/// Collect the edges of the given tiles that face a tile outside of
/// the group. Duplicate tiles are ignored.
///
/// Fails with `Error::InvalidArgument` for a tile on the border of the
/// coordinate range, whose neighbours cannot be addressed.
///
/// The end points of the edges are rounded to the given precision so
/// that the corners shared by adjacent tiles coincide.
pub fn boundary_edges<I>(tiles: I, schema: &Schema, precision: Precision)
    -> Result<BoundaryEdges>
where I: IntoIterator<Item=Tile> {
    let members = tiles.into_iter().collect::<HashSet<_>>();
    let mut edges = BTreeSet::new();
    for tile in &members {
        let origin = tile.to_point(schema);
        for side in Side::all() {
            let neighbour = tile.neighbour(side).ok_or_else(|| Error::InvalidArgument(
                format!("tile {} has no neighbour to the {:?}", tile, side)))?;
            if members.contains(&neighbour) {
                continue
            }
            let (p, q) = schema.edge(origin, side.index())?;
            let edge = Edge::new(precision.round(p), precision.round(q))
                .ok_or_else(|| Error::InvalidArgument(format!(
                    "precision 1e-{} is too coarse for radius {}",
                    precision.digits(), schema.radius())))?;
            edges.insert(edge);
        }
    }
    Ok(edges)
}

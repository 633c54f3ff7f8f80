//! Outlines of groups of map tiles ("bases"), i.e. the closed polygons
//! around the exterior edges of their hexagons.
//!
//! An outline is computed in two steps:
//!
//!   1. [`boundary_edges`] collects the edges of all tiles in a group
//!      that face a tile outside of the group.
//!   2. [`stitch`] orders these edges into a single closed polygon.
//!
//! [`Outliner`] runs both steps for every base of a continent.
//!
//! [`boundary_edges`]: boundary/fn.boundary_edges.html
//! [`stitch`]: stitch/fn.stitch.html
//! [`Outliner`]: struct.Outliner.html
pub mod boundary;
pub mod stitch;
pub mod vertex;

pub use self::boundary::*;
pub use self::stitch::*;
pub use self::vertex::*;

use log::{ debug, warn };
use serde::{ Deserialize, Serialize };

use std::collections::{ BTreeMap, HashSet };

use crate::error::Result;
use crate::geo::{ Bounds, Schema };
use crate::grid::Tile;

/// The identifier of a base, i.e. a group of tiles on a continent.
pub type BaseId = u32;

/// An ordered sequence of points forming a closed polygon. The first
/// point is not repeated at the end.
///
/// Serializes as an array of `[x, y]` pairs.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    points: Vec<Vertex>,
}

impl Outline {
    pub(crate) fn new(points: Vec<Vertex>) -> Outline {
        Outline { points }
    }

    pub fn points(&self) -> &[Vertex] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the sides of the polygon, ending with the side
    /// from the last point back to the first.
    pub fn edges(&self) -> impl Iterator<Item=Edge> + '_ {
        let n = self.points.len();
        (0 .. n).filter_map(move |i| Edge::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// The bounding rectangle of the outline, i.e. its offset from
    /// the map origin together with its size.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.points.iter().map(|p| (p.x(), p.y())))
    }
}

/// Parameters for computing outlines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// The radius of a hexagon in map units (e.g. pixels).
    pub radius: f64,
    /// The precision that corner points are rounded to.
    pub precision: Precision,
}

impl Default for OutlineConfig {
    fn default() -> OutlineConfig {
        OutlineConfig {
            radius: 1.0,
            precision: Precision::DISPLAY,
        }
    }
}

/// Computes the outlines of groups of tiles.
#[derive(Clone, Debug)]
pub struct Outliner {
    schema: Schema,
    precision: Precision,
}

impl Outliner {
    pub fn new(config: &OutlineConfig) -> Result<Outliner> {
        Ok(Outliner {
            schema: Schema::new(config.radius)?,
            precision: config.precision,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// The exterior edges of a single group of tiles.
    pub fn boundary<I>(&self, tiles: I) -> Result<BoundaryEdges>
    where I: IntoIterator<Item=Tile> {
        boundary_edges(tiles, &self.schema, self.precision)
    }

    /// The outline of a single group of tiles.
    pub fn outline<I>(&self, tiles: I) -> Result<Outline>
    where I: IntoIterator<Item=Tile> {
        stitch(self.boundary(tiles)?)
    }

    /// The outlines of all bases in the given `(base, tile)` records.
    ///
    /// Each base is outlined independently. A base whose outline cannot
    /// be computed is reported with its error, without affecting the
    /// outlines of other bases.
    pub fn outlines<I>(&self, records: I) -> BTreeMap<BaseId, Result<Outline>>
    where I: IntoIterator<Item=(BaseId, Tile)> {
        let mut bases: BTreeMap<BaseId, HashSet<Tile>> = BTreeMap::new();
        for (base, tile) in records {
            bases.entry(base).or_default().insert(tile);
        }
        bases.into_iter().map(|(base, tiles)| {
            let num_tiles = tiles.len();
            let outline = self.outline(tiles);
            match &outline {
                Ok(o) => debug!("Outlined base {} ({} tiles) with {} points",
                                base, num_tiles, o.len()),
                Err(e) => warn!("Failed to outline base {} ({} tiles): {}",
                                base, num_tiles, e),
            }
            (base, outline)
        }).collect()
    }
}

/// Compute the outlines of all bases in the given `(base, tile)`
/// records for hexagons of the given radius, rounding to
/// `Precision::DISPLAY`.
///
/// Fails only if the radius is invalid; failures of individual
/// bases are reported per base.
pub fn compute_outlines<I>(records: I, radius: f64) -> Result<BTreeMap<BaseId, Result<Outline>>>
where I: IntoIterator<Item=(BaseId, Tile)> {
    let config = OutlineConfig { radius, ..OutlineConfig::default() };
    Ok(Outliner::new(&config)?.outlines(records))
}

//! Map tiles addressed in a skewed, axial coordinate system.
pub mod side;

pub use self::side::*;

use serde::{ Deserialize, Serialize };

use std::cmp::{ max, min };
use std::fmt;

use crate::error::Result;
use crate::geo::{ Point, Schema };

/// The coordinates of a hexagonal map tile.
///
/// The basis is not orthogonal: `u` points to the right (like `x`)
/// while `v` points up and to the right at an angle of 60 degrees.
/// This is the flavour of [Axial Coordinates] used by the map data,
/// with the second axis mirrored.
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub struct Tile {
    pub u: i32,
    pub v: i32
}

impl Tile {
    pub fn new(u: i32, v: i32) -> Tile {
        Tile { u, v }
    }

    /// The adjacent tile across the given side, or `None` if it lies
    /// outside of the coordinate range.
    pub fn neighbour(&self, side: Side) -> Option<Tile> {
        let (du, dv) = side.offset();
        Some(Tile::new(self.u.checked_add(du)?, self.v.checked_add(dv)?))
    }

    /// Iterate over the adjacent tiles together with the side
    /// they are adjacent across.
    pub fn neighbours(&self) -> impl Iterator<Item=(Side, Tile)> + '_ {
        Side::all().filter_map(move |s| self.neighbour(s).map(|n| (s, n)))
    }

    /// The number of steps between two tiles.
    pub fn distance(&self, other: Tile) -> u64 {
        let du = self.u as i64 - other.u as i64;
        let dv = self.v as i64 - other.v as i64;
        (du.abs() + dv.abs() + (du + dv).abs()) as u64 / 2
    }

    /// The tiles within the given distance, including `self`.
    /// Tiles outside of the coordinate range are skipped.
    pub fn range(&self, r: u16) -> impl Iterator<Item=Tile> + Clone {
        let center = *self;
        let n = r as i32;
        (-n ..= n).flat_map(move |du| {
            let dv_start = max(-n, -du - n);
            let dv_end   = min( n, -du + n);
            (dv_start ..= dv_end).filter_map(move |dv| {
                Some(Tile::new(center.u.checked_add(du)?, center.v.checked_add(dv)?))
            })
        })
    }

    /// The number of tiles within the given distance.
    pub fn num_in_range(r: u16) -> usize {
        3 * (r as usize) * (r as usize + 1) + 1
    }

    /// The cartesian position of the tile's center.
    pub fn to_point(&self, schema: &Schema) -> Point {
        let (width, height) = schema.size();
        let x = width * (self.u as f64 + self.v as f64 * 0.5);
        let y = self.v as f64 * height * 0.75;
        Point::new(x, y)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.u, self.v)
    }
}

impl From<(i32, i32)> for Tile {
    fn from((u, v): (i32, i32)) -> Tile {
        Tile::new(u, v)
    }
}

/// The cartesian position of the center of a tile for hexagons
/// of the given radius.
pub fn tile_to_point(tile: Tile, radius: f64) -> Result<Point> {
    Schema::new(radius).map(|s| tile.to_point(&s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use std::collections::HashSet;

    impl Arbitrary for Tile {
        fn arbitrary<G: Gen>(g: &mut G) -> Tile {
            Tile::new(i16::arbitrary(g) as i32, i16::arbitrary(g) as i32)
        }
    }

    impl Arbitrary for Side {
        fn arbitrary<G: Gen>(g: &mut G) -> Side {
            ALL_SIDES[usize::arbitrary(g) % 6]
        }
    }

    const EPS: f64 = 1e-12;

    fn close(p: Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < EPS && (p.y - y).abs() < EPS
    }

    #[test]
    fn test_tile_to_point() {
        let s3 = f64::sqrt(3.);
        assert_eq!(tile_to_point(Tile::new(0, 0), 1.).unwrap(), Point::new(0., 0.));
        assert!(close(tile_to_point(Tile::new(1, 0), 1.).unwrap(), s3, 0.));
        assert!(close(tile_to_point(Tile::new(0, 1), 1.).unwrap(), s3 / 2., 1.5));
        assert!(close(tile_to_point(Tile::new(1, 1), 1.).unwrap(), s3 * 1.5, 1.5));
        assert!(tile_to_point(Tile::new(0, 0), 0.).is_err());
    }

    #[test]
    fn test_neighbours_at_center_distance() {
        let schema = Schema::new(3.).unwrap();
        let t = Tile::new(2, -1);
        let c = t.to_point(&schema);
        for (_, n) in t.neighbours() {
            let d = nalgebra::distance(&c, &n.to_point(&schema));
            assert!((d - schema.width()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_range() {
        for r in 0..5 {
            let tiles = Tile::new(3, 7).range(r).collect::<HashSet<_>>();
            assert_eq!(tiles.len(), Tile::num_in_range(r));
            assert!(tiles.iter().all(|t| t.distance(Tile::new(3, 7)) <= r as u64));
        }
    }

    #[test]
    fn test_coordinate_range_limits() {
        let t = Tile::new(i32::MAX, i32::MIN);
        assert_eq!(t.neighbour(Side::Right), None);
        assert_eq!(t.neighbour(Side::LowerLeft), None);
        assert_eq!(t.neighbour(Side::Left), Some(Tile::new(i32::MAX - 1, i32::MIN)));
        assert_eq!(t.neighbours().count(), 3);
        assert_eq!(t.range(1).count(), 4);
        assert_eq!(Tile::new(i32::MIN, 0).distance(Tile::new(i32::MAX, 0)), u32::MAX as u64);
    }

    #[test]
    fn prop_neighbour_opposite_identity() {
        fn prop(t: Tile, s: Side) -> bool {
            t.neighbour(s).and_then(|n| n.neighbour(s.opposite())) == Some(t)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_neighbour_distance() {
        fn prop(t: Tile, s: Side) -> bool {
            t.neighbour(s).map(|n| t.distance(n)) == Some(1)
        }
        quickcheck(prop as fn(_,_) -> _);
    }
}

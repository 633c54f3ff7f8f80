//! Geometry of regular, pointy-top hexagons in a 2d cartesian
//! coordinate system.

use nalgebra::geometry::Point2;

use crate::error::{ Error, Result };

/// A point in the cartesian plane.
pub type Point = Point2<f64>;

/// The angle (in degrees) between two adjacent corners of a
/// regular hexagon, as seen from its center.
pub const ANGLE_DEGREES: f64 = 60.0;

/// The angle (in degrees) of corner 0 w.r.t. the x-axis.
/// Pointy-top hexagons are rotated by half a corner angle.
pub const CORNER_OFFSET_DEGREES: f64 = 30.0;

/// A schematic for a regular, pointy-top hexagon of a fixed radius.
///
/// Corners are numbered counterclockwise, starting with corner 0
/// at the top right. Edge `i` runs from corner `i - 1` (corner 5 for
/// edge 0) to corner `i`, i.e. edge 0 is the right-hand edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Schema {
    radius: f64,
    width: f64,
    height: f64,
}

impl Schema {
    /// Create a schema for hexagons with the given radius, i.e. the
    /// distance from the center to any of the corners.
    pub fn new(radius: f64) -> Result<Schema> {
        if !(radius > 0.0) {
            return Err(Error::InvalidArgument(
                format!("radius must be greater than zero, got {}", radius)))
        }
        Ok(Schema {
            radius,
            width: f64::sqrt(3.0) * radius,
            height: 2.0 * radius,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The `(width, height)` of a hexagon.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// The position of a corner of the hexagon centered at `origin`.
    pub fn corner(&self, origin: Point, i: usize) -> Result<Point> {
        if i > 5 {
            return Err(Error::InvalidArgument(
                format!("corner index must be between 0 and 5, got {}", i)))
        }
        Ok(self.corner_unchecked(origin, i))
    }

    /// The end points of an edge of the hexagon centered at `origin`.
    pub fn edge(&self, origin: Point, i: usize) -> Result<(Point, Point)> {
        if i > 5 {
            return Err(Error::InvalidArgument(
                format!("edge index must be between 0 and 5, got {}", i)))
        }
        let start = if i == 0 { 5 } else { i - 1 };
        Ok((self.corner_unchecked(origin, start), self.corner_unchecked(origin, i)))
    }

    pub fn corners(&self, origin: Point) -> [Point; 6] {
        [ self.corner_unchecked(origin, 0)
        , self.corner_unchecked(origin, 1)
        , self.corner_unchecked(origin, 2)
        , self.corner_unchecked(origin, 3)
        , self.corner_unchecked(origin, 4)
        , self.corner_unchecked(origin, 5)
        ]
    }

    fn corner_unchecked(&self, origin: Point, i: usize) -> Point {
        let angle_rad = (ANGLE_DEGREES * i as f64 + CORNER_OFFSET_DEGREES).to_radians();
        let x = origin.x + self.radius * angle_rad.cos();
        let y = origin.y + self.radius * angle_rad.sin();
        Point::new(x, y)
    }
}

/// The position of corner `i` of the hexagon with the given radius
/// centered at `origin`.
pub fn hex_corner(origin: Point, radius: f64, i: usize) -> Result<Point> {
    Schema::new(radius)?.corner(origin, i)
}

/// The end points of edge `i` of the hexagon with the given radius
/// centered at `origin`.
pub fn hex_edge(origin: Point, radius: f64, i: usize) -> Result<(Point, Point)> {
    Schema::new(radius)?.edge(origin, i)
}

/// The `(width, height)` of a hexagon with the given radius.
pub fn hex_size(radius: f64) -> Result<(f64, f64)> {
    Schema::new(radius).map(|s| s.size())
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64
}

impl Bounds {
    /// The smallest rectangle enclosing all of the given points,
    /// or `None` if there are none.
    pub fn enclosing<I>(points: I) -> Option<Bounds>
    where I: IntoIterator<Item=(f64, f64)> {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let (min_x, min_y, max_x, max_y) = iter.fold((x0, y0, x0, y0),
            |(min_x, min_y, max_x, max_y), (x, y)|
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)));
        Some(Bounds {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y
        })
    }
}

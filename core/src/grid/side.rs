//! The sides of a hexagonal tile, i.e. the directions to its
//! adjacent neighbours.

/// Displacements `(u, v)` to the neighbouring tile across each side,
/// indexed by `Side`.
pub const SIDE_OFFSETS: [(i32, i32); 6] =
    [ ( 1, 0), ( 0, 1), (-1, 1)
    , (-1, 0), ( 0, -1), ( 1, -1)
    ];

/// The sides of a pointy-top hexagon, numbered like its edges,
/// i.e. counterclockwise starting with the right-hand side.
#[derive(PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
#[derive(FromPrimitive, Debug)]
pub enum Side {
    Right      = 0,
    UpperRight = 1,
    UpperLeft  = 2,
    Left       = 3,
    LowerLeft  = 4,
    LowerRight = 5
}

pub const ALL_SIDES: [Side; 6] =
    [ Side::Right, Side::UpperRight, Side::UpperLeft
    , Side::Left, Side::LowerLeft, Side::LowerRight
    ];

impl Side {
    pub fn all() -> impl ExactSizeIterator<Item=Side> + Clone {
        ALL_SIDES.iter().copied()
    }

    /// The edge index of this side, see `geo::Schema::edge`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn offset(self) -> (i32, i32) {
        SIDE_OFFSETS[self.index()]
    }

    pub fn opposite(self) -> Side {
        ALL_SIDES[(self.index() + 3) % 6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn test_index_roundtrip() {
        for (i, s) in Side::all().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Side::from_usize(i), Some(s));
        }
        assert_eq!(Side::from_usize(6), None);
    }

    #[test]
    fn test_opposite_offsets_cancel() {
        for s in Side::all() {
            let (u1, v1) = s.offset();
            let (u2, v2) = s.opposite().offset();
            assert_eq!((u1 + u2, v1 + v2), (0, 0));
            assert_eq!(s.opposite().opposite(), s);
        }
    }
}

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterates the up-to-8 Moore neighbors of `center` that fall inside
/// `bounds`, in a fixed order.
pub fn moore_neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS.iter().filter_map(move |&(dx, dy)| {
        let x = center.0.checked_add_signed(dx)?;
        let y = center.1.checked_add_signed(dy)?;
        (x < bounds.0 && y < bounds.1).then_some((x, y))
    })
}

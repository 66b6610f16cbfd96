//! Precomputed neighbour squares and rays, indexed by square index.
//!
//! Knight and king jumps are symmetric, so the same table answers both
//! "where can a knight on X go" and "where could a knight reaching X come
//! from". Rays run outward from the square, nearest square first.

use once_cell::sync::Lazy;

use super::Square;

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// (file, rank) steps; the first four are orthogonal, the rest diagonal.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),   // N
    (0, -1),  // S
    (1, 0),   // E
    (-1, 0),  // W
    (1, 1),   // NE
    (-1, 1),  // NW
    (1, -1),  // SE
    (-1, -1), // SW
];

pub(crate) const ORTHOGONAL: [usize; 4] = [0, 1, 2, 3];
pub(crate) const DIAGONAL: [usize; 4] = [4, 5, 6, 7];
pub(crate) const ALL_LINES: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

fn jumps(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(df, dr)| sq.offset(df, dr))
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_JUMPS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| jumps(&KNIGHT_DELTAS));

pub(crate) static KING_STEPS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| jumps(&DIRECTIONS));

static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    Square::all()
        .map(|sq| {
            DIRECTIONS.map(|(df, dr)| {
                let mut ray = Vec::with_capacity(7);
                let mut current = sq;
                while let Some(next) = current.offset(df, dr) {
                    ray.push(next);
                    current = next;
                }
                ray
            })
        })
        .collect()
});

/// Squares reachable from `sq` in direction `dir`, nearest first.
#[inline]
pub(crate) fn ray(sq: Square, dir: usize) -> &'static [Square] {
    &RAYS[sq.index()][dir]
}

#[inline]
pub(crate) fn knight_jumps(sq: Square) -> &'static [Square] {
    &KNIGHT_JUMPS[sq.index()]
}

#[inline]
pub(crate) fn king_steps(sq: Square) -> &'static [Square] {
    &KING_STEPS[sq.index()]
}

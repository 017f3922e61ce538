//! Damm quasigroup operation tables, keyed by alphabet size.
//!
//! Each table is a Latin square with zeros only on the main diagonal and is
//! totally anti-symmetric: `(c * x) * y == (c * y) * x` only when `x == y`.
//! The last property is what makes adjacent transpositions detectable.
//!
//! Two implementations accept each other's check symbols only if they use
//! identical tables. A different quasigroup of the same order still validates
//! its own output, so a mismatch is silent.
use crate::error::{DammError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The published order-10 Damm table
#[rustfmt::skip]
const DIGIT_CELLS: [u8; 100] = [
    0, 3, 1, 7, 5, 9, 8, 6, 4, 2,
    7, 0, 9, 2, 1, 5, 4, 8, 6, 3,
    4, 2, 0, 6, 8, 7, 1, 3, 5, 9,
    1, 7, 5, 0, 9, 8, 3, 4, 2, 6,
    6, 1, 2, 3, 0, 4, 5, 9, 7, 8,
    3, 6, 7, 4, 2, 0, 9, 5, 8, 1,
    5, 8, 6, 9, 7, 2, 0, 1, 3, 4,
    8, 9, 4, 5, 3, 6, 2, 0, 1, 7,
    9, 4, 3, 8, 6, 1, 7, 2, 0, 5,
    2, 5, 8, 1, 4, 3, 6, 7, 9, 0,
];

/// Order-16 table: `x * y = 2 * (x ^ y)` in GF(16) reduced by x^4 + x + 1
#[rustfmt::skip]
const HEX_CELLS: [u8; 256] = [
     0,  2,  4,  6,  8, 10, 12, 14,  3,  1,  7,  5, 11,  9, 15, 13,
     2,  0,  6,  4, 10,  8, 14, 12,  1,  3,  5,  7,  9, 11, 13, 15,
     4,  6,  0,  2, 12, 14,  8, 10,  7,  5,  3,  1, 15, 13, 11,  9,
     6,  4,  2,  0, 14, 12, 10,  8,  5,  7,  1,  3, 13, 15,  9, 11,
     8, 10, 12, 14,  0,  2,  4,  6, 11,  9, 15, 13,  3,  1,  7,  5,
    10,  8, 14, 12,  2,  0,  6,  4,  9, 11, 13, 15,  1,  3,  5,  7,
    12, 14,  8, 10,  4,  6,  0,  2, 15, 13, 11,  9,  7,  5,  3,  1,
    14, 12, 10,  8,  6,  4,  2,  0, 13, 15,  9, 11,  5,  7,  1,  3,
     3,  1,  7,  5, 11,  9, 15, 13,  0,  2,  4,  6,  8, 10, 12, 14,
     1,  3,  5,  7,  9, 11, 13, 15,  2,  0,  6,  4, 10,  8, 14, 12,
     7,  5,  3,  1, 15, 13, 11,  9,  4,  6,  0,  2, 12, 14,  8, 10,
     5,  7,  1,  3, 13, 15,  9, 11,  6,  4,  2,  0, 14, 12, 10,  8,
    11,  9, 15, 13,  3,  1,  7,  5,  8, 10, 12, 14,  0,  2,  4,  6,
     9, 11, 13, 15,  1,  3,  5,  7, 10,  8, 14, 12,  2,  0,  6,  4,
    15, 13, 11,  9,  7,  5,  3,  1, 12, 14,  8, 10,  4,  6,  0,  2,
    13, 15,  9, 11,  5,  7,  1,  3, 14, 12, 10,  8,  6,  4,  2,  0,
];

/// Order-10 table used by decimal digit alphabets
pub static DIGIT_TABLE: QuasigroupTable = QuasigroupTable {
    order: 10,
    cells: &DIGIT_CELLS,
};

/// Order-16 table used by hexadecimal alphabets
pub static HEX_TABLE: QuasigroupTable = QuasigroupTable {
    order: 16,
    cells: &HEX_CELLS,
};

static REGISTRY: Lazy<HashMap<u8, &'static QuasigroupTable>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(2);
    for table in [&DIGIT_TABLE, &HEX_TABLE] {
        map.insert(table.order, table);
    }
    map
});

/// Immutable square operation table, stored row-major
#[derive(Debug, PartialEq, Eq)]
pub struct QuasigroupTable {
    order: u8,
    cells: &'static [u8],
}

impl QuasigroupTable {
    /// Number of rows (and columns)
    pub fn order(&self) -> u8 {
        self.order
    }

    /// Next state for `(state, index)`, or `None` if either is out of range
    #[inline]
    pub fn get(&self, state: u8, index: u8) -> Option<u8> {
        if state >= self.order || index >= self.order {
            return None;
        }
        let n = usize::from(self.order);
        self.cells
            .get(usize::from(state) * n + usize::from(index))
            .copied()
    }

    /// One row of the table
    pub fn row(&self, state: u8) -> Option<&'static [u8]> {
        if state >= self.order {
            return None;
        }
        let n = usize::from(self.order);
        let start = usize::from(state) * n;
        self.cells.get(start..start + n)
    }

    /// Every row and every column is a permutation of `0..order`
    pub fn is_latin_square(&self) -> bool {
        let n = usize::from(self.order);
        if self.cells.len() != n * n {
            return false;
        }
        for i in 0..n {
            let mut row_seen = vec![false; n];
            let mut col_seen = vec![false; n];
            for j in 0..n {
                for (seen, value) in [
                    (&mut row_seen, self.cells[i * n + j]),
                    (&mut col_seen, self.cells[j * n + i]),
                ] {
                    let value = usize::from(value);
                    if value >= n || seen[value] {
                        return false;
                    }
                    seen[value] = true;
                }
            }
        }
        true
    }

    /// Zero appears exactly on the main diagonal
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.order).all(|i| {
            (0..self.order).all(|j| self.get(i, j).map_or(false, |v| (v == 0) == (i == j)))
        })
    }

    /// `(c * x) * y != (c * y) * x` for every `c` and every `x != y`
    pub fn is_totally_anti_symmetric(&self) -> bool {
        let op = |a: u8, b: u8| self.get(a, b);
        for c in 0..self.order {
            for x in 0..self.order {
                for y in (x + 1)..self.order {
                    let forward = op(c, x).and_then(|s| op(s, y));
                    let swapped = op(c, y).and_then(|s| op(s, x));
                    match (forward, swapped) {
                        (Some(a), Some(b)) if a != b => {}
                        _ => return false,
                    }
                }
            }
        }
        true
    }
}

/// Resolve the table registered for an alphabet size
pub fn lookup(size: u8) -> Result<&'static QuasigroupTable> {
    REGISTRY
        .get(&size)
        .copied()
        .ok_or(DammError::UnsupportedAlphabetSize(size))
}

/// Registered table orders in ascending order
pub fn registered_orders() -> Vec<u8> {
    let mut orders: Vec<u8> = REGISTRY.keys().copied().collect();
    orders.sort_unstable();
    orders
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered_sizes() {
        assert_eq!(lookup(10).unwrap().order(), 10);
        assert_eq!(lookup(16).unwrap().order(), 16);
    }

    #[test]
    fn test_lookup_unsupported_size() {
        for size in [0, 1, 7, 9, 11, 15, 17, 255] {
            assert_eq!(lookup(size), Err(DammError::UnsupportedAlphabetSize(size)));
        }
    }

    #[test]
    fn test_registered_orders() {
        assert_eq!(registered_orders(), vec![10, 16]);
    }

    #[test]
    fn test_tables_are_latin_squares() {
        assert!(DIGIT_TABLE.is_latin_square());
        assert!(HEX_TABLE.is_latin_square());
    }

    #[test]
    fn test_tables_have_zero_diagonal() {
        assert!(DIGIT_TABLE.has_zero_diagonal());
        assert!(HEX_TABLE.has_zero_diagonal());
    }

    #[test]
    fn test_tables_are_totally_anti_symmetric() {
        assert!(DIGIT_TABLE.is_totally_anti_symmetric());
        assert!(HEX_TABLE.is_totally_anti_symmetric());
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(DIGIT_TABLE.get(10, 0), None);
        assert_eq!(DIGIT_TABLE.get(0, 10), None);
        assert_eq!(HEX_TABLE.get(15, 15), Some(0));
        assert_eq!(HEX_TABLE.get(16, 0), None);
    }

    #[test]
    fn test_row() {
        assert_eq!(DIGIT_TABLE.row(0).unwrap(), &[0, 3, 1, 7, 5, 9, 8, 6, 4, 2]);
        assert_eq!(DIGIT_TABLE.row(9).unwrap(), &[2, 5, 8, 1, 4, 3, 6, 7, 9, 0]);
        assert!(HEX_TABLE.row(16).is_none());
    }

    #[test]
    fn test_hex_table_matches_field_construction() {
        fn double(x: u8) -> u8 {
            let shifted = x << 1;
            if shifted & 0x10 != 0 {
                shifted ^ 0b1_0011
            } else {
                shifted
            }
        }
        for x in 0..16u8 {
            for y in 0..16u8 {
                assert_eq!(HEX_TABLE.get(x, y), Some(double(x ^ y)));
            }
        }
    }

    #[test]
    fn test_broken_table_fails_checks() {
        static CELLS: [u8; 9] = [0, 1, 2, 1, 0, 2, 2, 1, 0];
        let table = QuasigroupTable { order: 3, cells: &CELLS };
        assert!(!table.is_latin_square());

        static SYMMETRIC: [u8; 4] = [0, 1, 1, 0];
        let table = QuasigroupTable { order: 2, cells: &SYMMETRIC };
        assert!(table.is_latin_square());
        assert!(table.has_zero_diagonal());
        assert!(!table.is_totally_anti_symmetric());
    }
}

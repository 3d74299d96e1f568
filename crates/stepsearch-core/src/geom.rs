//! Lattice geometry: [`Point`] and [`Range`].
//!
//! `x` is the column and `y` is the row, so a maze cell at (row, col) is
//! `Point::new(col, row)`.

use std::fmt;

/// A cell on the lattice. Columns grow right, rows grow down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point for the cell at `row`, `col`.
    #[inline]
    pub const fn cell(row: i32, col: i32) -> Self {
        Self { x: col, y: row }
    }

    /// The four cardinal neighbours in up, down, left, right order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let Self { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
            Self::new(x + 1, y),
        ]
    }

    /// Length of the shortest axis-aligned walk to `other`, ignoring walls.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The cells of a `rows × cols` lattice: columns `min.x..max.x`, rows
/// `min.y..max.y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Lattice anchored at the origin. Negative sizes give an empty range.
    #[inline]
    pub fn lattice(rows: i32, cols: i32) -> Self {
        Self {
            min: Point::new(0, 0),
            max: Point::new(cols.max(0), rows.max(0)),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Whether `p` lies on the outermost ring of cells.
    #[inline]
    pub fn on_border(self, p: Point) -> bool {
        self.contains(p)
            && (p.x == self.min.x
                || p.y == self.min.y
                || p.x == self.max.x - 1
                || p.y == self.max.y - 1)
    }

    /// Row-major slot of `p` in a flat per-cell buffer, or `None` outside
    /// the range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            let (col, row) = ((p.x - self.min.x) as usize, (p.y - self.min.y) as usize);
            row * self.width() as usize + col
        })
    }

    /// Every cell, row by row.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: self.min,
        }
    }
}

/// Row-major iterator over the cells of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.next.y >= self.range.max.y {
            return None;
        }
        let p = self.next;
        self.next.x += 1;
        if self.next.x == self.range.max.x {
            self.next = Point::new(self.range.min.x, self.next.y + 1);
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_is_column_then_row() {
        assert_eq!(Point::cell(3, 7), Point::new(7, 3));
        assert_eq!(Point::new(1, 2).manhattan(Point::new(3, 4)), 4);
    }

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let n = Point::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Point::new(5, 4),
                Point::new(5, 6),
                Point::new(4, 5),
                Point::new(6, 5),
            ]
        );
    }

    #[test]
    fn lattice_is_rows_by_cols() {
        let r = Range::lattice(4, 6);
        assert_eq!(r.width(), 6);
        assert_eq!(r.height(), 4);
        assert_eq!(r.len(), 24);
        assert!(r.contains(Point::cell(3, 5)));
        assert!(!r.contains(Point::cell(4, 0)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert!(Range::lattice(0, 5).is_empty());
        assert_eq!(Range::lattice(-2, 5).len(), 0);
    }

    #[test]
    fn iteration_is_row_major_and_matches_index() {
        let r = Range::lattice(2, 3);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[1], Point::cell(0, 1));
        assert_eq!(pts[3], Point::cell(1, 0));
        for (i, p) in pts.into_iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
        }
        assert_eq!(r.index(Point::cell(2, 0)), None);
        assert_eq!(Range::lattice(0, 3).iter().count(), 0);
    }

    #[test]
    fn border_ring() {
        let r = Range::lattice(3, 3);
        assert_eq!(r.iter().filter(|&p| r.on_border(p)).count(), 8);
        assert!(!r.on_border(Point::new(1, 1)));
        assert!(!r.on_border(Point::new(3, 0)));
    }
}

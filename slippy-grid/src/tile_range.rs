//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile ranges

use crate::tile::Tile;

/// Inclusive rectangle of tile indices at one zoom level.
///
/// The range is a plain value. Every call of `iter()` starts a new pass over
/// the tiles, nothing is materialized.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileRange {
    pub minx: i64,
    pub maxx: i64,
    pub miny: i64,
    pub maxy: i64,
    pub z: u8,
}

impl TileRange {
    pub fn new(minx: i64, maxx: i64, miny: i64, maxy: i64, z: u8) -> TileRange {
        TileRange {
            minx,
            maxx,
            miny,
            maxy,
            z,
        }
    }

    /// Number of tiles (saturating at `u64::MAX`)
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let width = (i128::from(self.maxx) - i128::from(self.minx) + 1) as u128;
        let height = (i128::from(self.maxy) - i128::from(self.miny) + 1) as u128;
        width
            .checked_mul(height)
            .map_or(u64::MAX, |n| if n > u64::MAX as u128 { u64::MAX } else { n as u64 })
    }

    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx || self.miny > self.maxy
    }

    pub fn contains(&self, tile: &Tile) -> bool {
        tile.z == self.z
            && (self.minx..=self.maxx).contains(&tile.x)
            && (self.miny..=self.maxy).contains(&tile.y)
    }

    pub fn iter(&self) -> TileRangeIter {
        TileRangeIter {
            range: *self,
            x: self.minx,
            y: self.miny,
            remaining: self.len(),
        }
    }
}

impl IntoIterator for TileRange {
    type Item = Tile;
    type IntoIter = TileRangeIter;

    fn into_iter(self) -> TileRangeIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a TileRange {
    type Item = Tile;
    type IntoIter = TileRangeIter;

    fn into_iter(self) -> TileRangeIter {
        self.iter()
    }
}

/// Column-by-column iterator over a `TileRange`
#[derive(Clone, Debug)]
pub struct TileRangeIter {
    range: TileRange,
    x: i64,
    y: i64,
    remaining: u64,
}

impl Iterator for TileRangeIter {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.remaining == 0 {
            return None;
        }
        let current = Tile::new(self.x, self.y, self.range.z);
        self.remaining -= 1;
        if self.y < self.range.maxy {
            self.y += 1;
        } else if self.x < self.range.maxx {
            self.x += 1;
            self.y = self.range.miny;
        } else {
            self.remaining = 0;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining > usize::MAX as u64 {
            (usize::MAX, None)
        } else {
            (self.remaining as usize, Some(self.remaining as usize))
        }
    }
}

#[test]
fn test_range_iter() {
    let range = TileRange::new(1, 2, 5, 7, 3);
    assert_eq!(range.len(), 6);
    let tiles = range.iter().collect::<Vec<_>>();
    assert_eq!(
        tiles,
        vec![
            Tile::new(1, 5, 3),
            Tile::new(1, 6, 3),
            Tile::new(1, 7, 3),
            Tile::new(2, 5, 3),
            Tile::new(2, 6, 3),
            Tile::new(2, 7, 3),
        ]
    );
    assert_eq!(range.iter().size_hint(), (6, Some(6)));

    // restartable
    let again = range.into_iter().collect::<Vec<_>>();
    assert_eq!(tiles, again);

    let single = TileRange::new(0, 0, 0, 0, 0);
    assert_eq!(single.iter().collect::<Vec<_>>(), vec![Tile::new(0, 0, 0)]);
}

#[test]
fn test_empty_range() {
    let range = TileRange::new(3, 2, 0, 0, 1);
    assert!(range.is_empty());
    assert_eq!(range.len(), 0);
    assert_eq!(range.iter().next(), None);

    let range = TileRange::new(0, 0, 1, 0, 1);
    assert_eq!(range.iter().count(), 0);
}

#[test]
fn test_range_contains() {
    let range = TileRange::new(-1, 1, -1, 1, 4);
    assert!(range.contains(&Tile::new(-1, 1, 4)));
    assert!(range.contains(&Tile::new(0, 0, 4)));
    assert!(!range.contains(&Tile::new(0, 0, 5)));
    assert!(!range.contains(&Tile::new(2, 0, 4)));
}

#[test]
fn test_huge_range() {
    let range = TileRange::new(i64::MIN, i64::MAX, 0, 1, 30);
    assert_eq!(range.len(), u64::MAX);
    let first = range.iter().take(3).collect::<Vec<_>>();
    assert_eq!(
        first,
        vec![
            Tile::new(i64::MIN, 0, 30),
            Tile::new(i64::MIN, 1, 30),
            Tile::new(i64::MIN + 1, 0, 30),
        ]
    );
}

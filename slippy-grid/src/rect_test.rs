//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::point::Point;
use crate::rect::Rect;
use crate::tile::Tile;
use std::collections::HashSet;
use std::ops::RangeInclusive;

fn tile_set(xs: RangeInclusive<i64>, ys: RangeInclusive<i64>, z: u8) -> HashSet<Tile> {
    let mut tiles = HashSet::new();
    for x in xs {
        for y in ys.clone() {
            tiles.insert(Tile::new(x, y, z));
        }
    }
    tiles
}

#[test]
fn test_get_tiles() {
    // 2x3 tiles around Stockholm
    let expected = tile_set(562..=563, 300..=302, 10);

    let rect = Rect::new(59.45, 17.75, 59.1, 18.1);
    let tiles = rect.get_tiles(10);
    assert_eq!(tiles.len(), 6);
    assert_eq!(tiles.iter().collect::<HashSet<_>>(), expected);

    // Swapped corners
    let swapped = [
        Rect::new(59.1, 17.75, 59.45, 18.1),
        Rect::new(59.45, 18.1, 59.1, 17.75),
        Rect::new(59.1, 18.1, 59.45, 17.75),
    ];
    for rect in swapped.iter() {
        let tiles: Vec<Tile> = rect.get_tiles(10).into_iter().collect();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles.into_iter().collect::<HashSet<_>>(), expected);
    }
}

#[test]
fn test_get_tiles_single() {
    let p = Point::new(59.3293, 18.0686);
    let rect = Rect::new(p.lat, p.lng, p.lat, p.lng);
    let tiles: Vec<Tile> = rect.get_tiles(10).iter().collect();
    assert_eq!(tiles, vec![Tile::new(563, 301, 10)]);

    let world = Rect::new(85.0, -180.0, -85.0, 179.999);
    assert_eq!(world.get_tiles(0).iter().collect::<Vec<_>>(), vec![Tile::new(0, 0, 0)]);
    assert_eq!(world.get_tiles(3).len(), 64);
}

#[test]
fn test_tile_rect_covers_itself() {
    // Shared borders may add adjacent tiles, but never more than the direct neighbours
    let tile = Tile::new(563, 301, 10);
    let tiles = tile.to_rect().get_tiles(10);
    assert!(tiles.contains(&tile));
    assert!(tiles.iter().all(|t| tile.add_neighbours(1).contains(&t)));
}

#[test]
fn test_tile_count_grows_with_zoom() {
    // Sweden
    let rect = Rect::new(69.06, 10.96, 55.34, 24.17);
    let counts: Vec<u64> = (8..12).map(|z| rect.get_tiles(z).len()).collect();
    for pair in counts.windows(2) {
        assert!(pair[1] > pair[0] * 3);
    }
}

#[test]
fn test_ring() {
    let rect = Rect::new(2.0, 1.0, -2.0, 3.0);
    assert_eq!(
        rect.ring(),
        [(1.0, -2.0), (3.0, -2.0), (3.0, 2.0), (1.0, 2.0), (1.0, -2.0)]
    );
    assert_eq!(rect.top_left(), Point::new(2.0, 1.0));
    assert_eq!(rect.bottom_right(), Point::new(-2.0, 3.0));
}

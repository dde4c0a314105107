//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use crate::point::{Point, MAX_LAT};
use crate::rect::Rect;
use crate::tile::Tile;

#[test]
fn test_to_tile() {
    let stockholm = Point::new(59.3293, 18.0686);
    assert_eq!(stockholm.to_tile(10), Tile::new(563, 301, 10));
    assert_eq!(stockholm.to_tile(0), Tile::new(0, 0, 0));

    // New York City
    let nyc = Point::new(40.7128, -74.0060);
    assert_eq!(nyc.to_tile(16), Tile::new(19295, 24640, 16));

    // Sydney
    let sydney = Point::new(-33.8688, 151.2093);
    assert_eq!(sydney.to_tile(5), Tile::new(29, 19, 5));
}

#[test]
fn test_tile_borders() {
    // Tile borders belong to the tile with the higher index
    assert_eq!(Point::new(0.0, 0.0).to_tile(1), Tile::new(1, 1, 1));
    assert_eq!(Point::new(0.0, -180.0).to_tile(3), Tile::new(0, 4, 3));
    assert_eq!(Point::new(MAX_LAT, 0.0).to_tile(2), Tile::new(2, 0, 2));
}

#[test]
fn test_roundtrip_containment() {
    let points = [
        Point::new(59.3293, 18.0686),
        Point::new(57.7089, 11.9746),
        Point::new(40.7128, -74.0060),
        Point::new(-33.8688, 151.2093),
        Point::new(-54.8019, -68.3030),
        Point::new(0.1, 0.1),
    ];
    for p in points.iter() {
        for zoom in 0..=18 {
            let rect = p.to_tile(zoom).to_rect();
            assert!(p.within(&rect), "{:?} not within {:?} at zoom {}", p, rect, zoom);
        }
    }
}

#[test]
fn test_tile_position() {
    let (x, y) = Point::new(59.3293, 18.0686).tile_position(10);
    assert!((x - 563.3951).abs() < 1e-4);
    assert!(y > 301.0 && y < 302.0);
}

#[test]
fn test_pole_singularity() {
    // Beyond the poles the projection is undefined
    let (_, y) = Point::new(95.0, 0.0).tile_position(4);
    assert!(y.is_nan());
    let (_, y) = Point::new(-90.0, 0.0).tile_position(4);
    assert!(!y.is_finite());

    // No panic, indices saturate
    assert_eq!(Point::new(95.0, 0.0).to_tile(4), Tile::new(8, 0, 4));
    assert_eq!(Point::new(-90.0, 0.0).to_tile(4).y, i64::MAX);
    // North pole projects far north of the grid
    assert!(Point::new(90.0, 0.0).to_tile(4).y < 0);
}

#[test]
fn test_try_to_tile() {
    assert_eq!(
        Point::new(59.3293, 18.0686).try_to_tile(10),
        Ok(Tile::new(563, 301, 10))
    );
    assert_eq!(
        Point::new(90.0, 0.0).try_to_tile(4),
        Err(GridError::InvalidLatitude(90.0))
    );
    assert_eq!(
        Point::new(-85.1, 0.0).try_to_tile(4),
        Err(GridError::InvalidLatitude(-85.1))
    );
    assert!(Point::new(std::f64::NAN, 0.0).try_to_tile(4).is_err());
    assert_eq!(
        Point::new(10.0, 180.5).try_to_tile(4),
        Err(GridError::InvalidLongitude(180.5))
    );
    assert_eq!(
        format!("{}", GridError::InvalidLongitude(180.5)),
        "Invalid longitude: 180.5 (must be between -180 and 180)"
    );
}

#[test]
fn test_within() {
    let rect = Rect::new(60.0, 10.0, 55.0, 20.0);
    assert!(Point::new(59.3293, 18.0686).within(&rect));
    // inclusive borders
    assert!(Point::new(60.0, 10.0).within(&rect));
    assert!(Point::new(55.0, 20.0).within(&rect));
    assert!(!Point::new(60.0001, 15.0).within(&rect));
    assert!(!Point::new(57.0, 9.9999).within(&rect));
    assert!(!Point::new(57.0, 20.0001).within(&rect));

    // no antimeridian wrapping
    let rect = Rect::new(10.0, 170.0, -10.0, -170.0);
    assert!(!Point::new(0.0, 175.0).within(&rect));
}

#[test]
fn test_distance() {
    let stockholm = Point::new(59.33, 18.07);
    let gothenburg = Point::new(57.71, 11.97);
    let d = stockholm.distance(&gothenburg);
    assert!((d - 397.0).abs() < 397.0 * 0.001, "distance {}", d);
    assert!((d - gothenburg.distance(&stockholm)).abs() < 1e-9);

    assert_eq!(stockholm.distance(&stockholm), 0.0);

    let london = Point::new(51.5074, -0.1278);
    let paris = Point::new(48.8566, 2.3522);
    assert!((london.distance(&paris) - 343.556).abs() < 0.01);

    // half circumference
    let d = Point::new(0.0, 0.0).distance(&Point::new(0.0, 180.0));
    assert!((d - std::f64::consts::PI * 6371.0).abs() < 1e-6);
}

#[test]
fn test_triangle_inequality() {
    let a = Point::new(52.5200, 13.4050);
    let b = Point::new(48.1351, 11.5820);
    let c = Point::new(50.1109, 8.6821);
    assert!(a.distance(&b) <= a.distance(&c) + c.distance(&b));
    assert!((a.distance(&b) - 504.415).abs() < 0.01);
}

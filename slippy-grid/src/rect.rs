//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geographic rectangles

use crate::point::Point;
use crate::tile_range::TileRange;
use std::cmp;

/// Geographic bounding box in degrees.
///
/// `top`/`bottom` are latitudes, `left`/`right` longitudes. Corner order is not
/// validated.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Rect {
        Rect {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.top, self.left)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.bottom, self.right)
    }

    /// All tiles at `zoom` covering the rectangle.
    ///
    /// The range is evaluated lazily; check `len()` before iterating a large
    /// area at high zoom levels.
    pub fn get_tiles(&self, zoom: u8) -> TileRange {
        let t1 = self.top_left().to_tile(zoom);
        let t2 = self.bottom_right().to_tile(zoom);
        TileRange::new(
            cmp::min(t1.x, t2.x),
            cmp::max(t1.x, t2.x),
            cmp::min(t1.y, t2.y),
            cmp::max(t1.y, t2.y),
            zoom,
        )
    }

    /// Closed polygon ring of `(lng, lat)` vertices, counter-clockwise from bottom left
    pub fn ring(&self) -> [(f64, f64); 5] {
        [
            (self.left, self.bottom),
            (self.right, self.bottom),
            (self.right, self.top),
            (self.left, self.top),
            (self.left, self.bottom),
        ]
    }
}

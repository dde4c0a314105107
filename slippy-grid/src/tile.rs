//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Slippy map tiles

use crate::error::GridError;
use crate::rect::Rect;
use crate::tile_range::TileRange;
use std::cmp::Ordering;
use std::f64::consts;
use std::fmt;
use std::str::FromStr;

/// Namespace of tile cache keys. Changing the version invalidates all cached entries.
pub const CACHE_KEY_PREFIX: &str = "search:v4:tiles";

/// Tile index in XYZ adressing scheme (y = 0 at north).
///
/// Indices are signed and not clamped to `[0, 2^z)`: neighbours of edge
/// tiles are ordinary tiles outside of the grid.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
    pub z: u8,
}

impl Tile {
    pub fn new(x: i64, y: i64, z: u8) -> Tile {
        Tile { x, y, z }
    }

    /// Number of tiles per axis at this zoom level
    fn tiles_per_axis(&self) -> f64 {
        f64::from(self.z).exp2()
    }

    fn lng_of_column(&self, x: f64) -> f64 {
        x / self.tiles_per_axis() * 360.0 - 180.0
    }

    fn lat_of_row(&self, y: f64) -> f64 {
        let n = consts::PI - 2.0 * consts::PI * y / self.tiles_per_axis();
        n.sinh().atan().to_degrees()
    }

    /// Geographic extent of the tile
    pub fn to_rect(&self) -> Rect {
        Rect {
            top: self.lat_of_row(self.y as f64),
            left: self.lng_of_column(self.x as f64),
            bottom: self.lat_of_row(self.y as f64 + 1.0),
            right: self.lng_of_column(self.x as f64 + 1.0),
        }
    }

    /// Square neighbourhood of `(2 * radius + 1)²` tiles centered on this tile.
    ///
    /// Includes the tile itself. Indices beyond the grid border are kept,
    /// only the `i64` limits cut the neighbourhood.
    pub fn add_neighbours(&self, radius: u32) -> TileRange {
        let r = i64::from(radius);
        TileRange::new(
            self.x.saturating_sub(r),
            self.x.saturating_add(r),
            self.y.saturating_sub(r),
            self.y.saturating_add(r),
            self.z,
        )
    }

    /// Key of this tile in downstream caches
    pub fn cache_key(&self) -> String {
        format!("{}:{}:{}-{}", CACHE_KEY_PREFIX, self.z, self.x, self.y)
    }

    /// Feature id `x_y_z`
    pub fn feature_id(&self) -> String {
        format!("{}_{}_{}", self.x, self.y, self.z)
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Tile) -> Ordering {
        (self.z, self.x, self.y).cmp(&(other.z, other.x, other.y))
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Tile) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

impl FromStr for Tile {
    type Err = GridError;

    /// Parse tile from `z/x/y`
    fn from_str(s: &str) -> Result<Tile, GridError> {
        let invalid = || GridError::InvalidTile(s.to_string());
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let z = parts[0].parse::<u8>().map_err(|_| invalid())?;
        let x = parts[1].parse::<i64>().map_err(|_| invalid())?;
        let y = parts[2].parse::<i64>().map_err(|_| invalid())?;
        Ok(Tile::new(x, y, z))
    }
}

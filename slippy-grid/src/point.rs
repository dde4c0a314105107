//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geographic coordinates

use crate::error::GridError;
use crate::rect::Rect;
use crate::tile::Tile;
use std::f64::consts;

/// Web Mercator latitude limit (atan(sinh(π)) in degrees)
pub const MAX_LAT: f64 = 85.0511287798066;
pub const MIN_LAT: f64 = -MAX_LAT;
pub const MAX_LNG: f64 = 180.0;
pub const MIN_LNG: f64 = -180.0;

/// Mean earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate in degrees (WGS84)
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Point {
        Point { lat, lng }
    }

    /// Fractional tile coordinates `(x, y)` at `zoom`.
    ///
    /// Latitudes outside of the Web Mercator range are not guarded against.
    /// Beyond the poles `y` is not finite.
    pub fn tile_position(&self, zoom: u8) -> (f64, f64) {
        let n = f64::from(zoom).exp2();
        let lat_rad = self.lat.to_radians();
        let x = (self.lng + 180.0) / 360.0 * n;
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / consts::PI) / 2.0 * n;
        (x, y)
    }

    /// Tile containing this point at `zoom`.
    ///
    /// Tile indices are truncated, so a point on a tile border belongs to the
    /// tile with the higher index. Out-of-domain input is not rejected: the
    /// cast saturates non-finite positions (NaN maps to 0).
    pub fn to_tile(&self, zoom: u8) -> Tile {
        let (x, y) = self.tile_position(zoom);
        Tile::new(x as i64, y as i64, zoom)
    }

    /// Like [`Point::to_tile`], but rejects coordinates outside of the Web Mercator domain.
    pub fn try_to_tile(&self, zoom: u8) -> Result<Tile, GridError> {
        if !(MIN_LAT..=MAX_LAT).contains(&self.lat) {
            return Err(GridError::InvalidLatitude(self.lat));
        }
        if !(MIN_LNG..=MAX_LNG).contains(&self.lng) {
            return Err(GridError::InvalidLongitude(self.lng));
        }
        Ok(self.to_tile(zoom))
    }

    /// Inclusive containment test, without antimeridian wrapping
    pub fn within(&self, rect: &Rect) -> bool {
        rect.top >= self.lat
            && self.lat >= rect.bottom
            && rect.left <= self.lng
            && self.lng <= rect.right
    }

    /// Haversine great-circle distance in kilometers
    pub fn distance(&self, other: &Point) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}
